use super::*;

fn filled() -> SignupForm {
    SignupForm {
        username: " ann ".to_owned(),
        password: "pw".to_owned(),
        email: "ann@example.com".to_owned(),
        gender: "female".to_owned(),
        your_name: "Ann".to_owned(),
        family_name: "Lee".to_owned(),
        address: "1 Main St".to_owned(),
        birthdate: "1990-01-02".to_owned(),
        country: "NZ".to_owned(),
        user_type: Some(Role::Landowner),
    }
}

#[test]
fn form_maps_onto_request_field_names() {
    let req = filled().to_request();
    assert_eq!(req.username, "ann");
    assert_eq!(req.given_name, "Ann");
    assert_eq!(req.family_name, "Lee");
    assert_eq!(req.user_type, "LANDOWNER");
    assert_eq!(req.birthdate, "1990-01-02");
}

#[test]
fn missing_user_type_sends_empty_string() {
    let form = SignupForm { user_type: None, ..filled() };
    assert_eq!(form.to_request().user_type, "");
}

#[test]
fn failure_message_prefers_server_text() {
    let err = ApiError::Status { status: 400, message: "Password too short".to_owned() };
    assert_eq!(signup_failure_message(&err), "Password too short");
}

#[test]
fn failure_message_falls_back_to_existing_user() {
    let err = ApiError::Status { status: 409, message: String::new() };
    assert_eq!(signup_failure_message(&err), "User already exists");
}

#[test]
fn success_message_appends_server_text() {
    assert_eq!(signup_success_message(""), "Signup successful");
    assert_eq!(signup_success_message("check email"), "Signup successful: check email");
}

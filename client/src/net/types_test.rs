use super::*;

#[test]
fn signin_response_extracts_access_token() {
    let resp: SigninResponse =
        serde_json::from_str(r#"{"AuthenticationResult":{"AccessToken":"tok","ExpiresIn":3600}}"#).unwrap();
    assert_eq!(resp.authentication_result.access_token, "tok");
}

#[test]
fn user_profile_attribute_lookup() {
    let profile: UserProfile = serde_json::from_str(
        r#"{"Username":"ann","UserAttributes":[{"Name":"email","Value":"a@b.c"},{"Name":"custom:userType","Value":"LANDOWNER"}]}"#,
    )
    .unwrap();
    assert_eq!(profile.username.as_deref(), Some("ann"));
    assert_eq!(profile.attribute(USER_TYPE_ATTRIBUTE), Some("LANDOWNER"));
    assert_eq!(profile.attribute("custom:country"), None);
}

#[test]
fn user_profile_without_attributes_has_none() {
    let profile: UserProfile = serde_json::from_str("{}").unwrap();
    assert_eq!(profile.attribute("email"), None);
}

#[test]
fn signup_request_uses_camel_case_keys() {
    let req = SignupRequest {
        given_name: "Ann".to_owned(),
        family_name: "Lee".to_owned(),
        user_type: "SCOUT".to_owned(),
        ..SignupRequest::default()
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["givenName"], "Ann");
    assert_eq!(value["familyName"], "Lee");
    assert_eq!(value["userType"], "SCOUT");
}

#[test]
fn products_envelope_accepts_both_keys() {
    let a: ProductsEnvelope = serde_json::from_str(r#"{"products":[{"id":1,"name":"A"}]}"#).unwrap();
    let b: ProductsEnvelope = serde_json::from_str(r#"{"product":[{"id":2,"name":"B"}]}"#).unwrap();
    assert_eq!(a.products[0].id, 1);
    assert_eq!(b.products[0].name, "B");
}

#[test]
fn products_envelope_null_or_missing_is_empty() {
    let a: ProductsEnvelope = serde_json::from_str(r#"{"products":null}"#).unwrap();
    let b: ProductsEnvelope = serde_json::from_str("{}").unwrap();
    assert!(a.products.is_empty());
    assert!(b.products.is_empty());
}

#[test]
fn product_numbers_decode_from_strings() {
    let p: Product =
        serde_json::from_str(r#"{"id":"7","price":"1200.50","collected_amount":300,"max_persons":""}"#).unwrap();
    assert_eq!(p.id, 7);
    assert_eq!(p.price, Some(1200.5));
    assert_eq!(p.collected_amount, Some(300.0));
    assert_eq!(p.max_persons, None);
}

#[test]
fn product_rejects_non_numeric_id() {
    assert!(serde_json::from_str::<Product>(r#"{"id":"abc"}"#).is_err());
}

#[test]
fn product_text_and_location_matching() {
    let p = Product {
        name: "Lake House".to_owned(),
        description: "Quiet retreat".to_owned(),
        location_type: Some("Rural".to_owned()),
        ..Product::default()
    };
    assert!(p.matches_text("lake"));
    assert!(p.matches_text("QUIET"));
    assert!(!p.matches_text("city"));
    assert!(p.matches_location("rur"));
    assert!(!Product::default().matches_location("rur"));
}

#[test]
fn property_draft_encodes_lists_as_json_and_numbers_as_text() {
    let draft = PropertyDraft {
        name: "Farm".to_owned(),
        price: 2500.0,
        max_persons: 4,
        desired_amenities: vec!["Pool".to_owned(), "Gym".to_owned()],
        ..PropertyDraft::default()
    };
    let fields = draft.to_form_fields();
    let get = |k: &str| fields.iter().find(|(key, _)| key == k).map(|(_, v)| v.as_str());
    assert_eq!(get("name"), Some("Farm"));
    assert_eq!(get("price"), Some("2500"));
    assert_eq!(get("max_persons"), Some("4"));
    assert_eq!(get("desired_amenities"), Some(r#"["Pool","Gym"]"#));
    assert_eq!(get("type"), Some(""));
}

#[test]
fn request_status_round_trips_lowercase() {
    assert_eq!(serde_json::to_value(RequestStatus::Accepted).unwrap(), "accepted");
    let s: RequestStatus = serde_json::from_str(r#""rejected""#).unwrap();
    assert_eq!(s, RequestStatus::Rejected);
    let unknown: RequestStatus = serde_json::from_str(r#""archived""#).unwrap();
    assert_eq!(unknown, RequestStatus::Unknown);
}

#[test]
fn contact_request_decodes_landowner_shape() {
    let req: ContactRequest = serde_json::from_str(
        r#"{"id":3,"message":"hi","status":"pending","created_at":"2024-01-01","owner":{"first_name":"Bo","email":"bo@x.y"}}"#,
    )
    .unwrap();
    assert_eq!(req.status, RequestStatus::Pending);
    assert_eq!(req.owner.unwrap().display_name(), "Bo");
    assert!(req.recipient.is_none());
}

#[test]
fn person_display_name_joins_parts() {
    let p = Person { first_name: Some("Ann".to_owned()), last_name: Some("Lee".to_owned()), email: None };
    assert_eq!(p.display_name(), "Ann Lee");
}

#[test]
fn amenities_envelope_decodes() {
    let env: AmenitiesEnvelope =
        serde_json::from_str(r#"{"amenities":[{"id":1,"name":"Pool","image_url":null}]}"#).unwrap();
    assert_eq!(env.amenities.len(), 1);
    assert_eq!(env.amenities[0].name, "Pool");
}

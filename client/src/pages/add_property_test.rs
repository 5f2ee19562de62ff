use super::*;

#[test]
fn numbers_parse_and_fall_back_to_zero() {
    let form = PropertyForm {
        name: " Villa ".to_owned(),
        price: "2500.5".to_owned(),
        collected_amount: "abc".to_owned(),
        min_persons: "3".to_owned(),
        max_persons: "-1".to_owned(),
        ..PropertyForm::default()
    };
    let draft = form.to_draft();
    assert_eq!(draft.name, "Villa");
    assert_eq!(draft.price, 2500.5);
    assert_eq!(draft.collected_amount, 0.0);
    assert_eq!(draft.min_persons, 3);
    assert_eq!(draft.max_persons, 0);
}

#[test]
fn toggle_amenity_adds_then_removes() {
    let mut form = PropertyForm::default();
    form.toggle_amenity("Pool");
    form.toggle_amenity("Gym");
    assert_eq!(form.desired_amenities, vec!["Pool", "Gym"]);
    form.toggle_amenity("Pool");
    assert_eq!(form.desired_amenities, vec!["Gym"]);
}

#[test]
fn selected_amenities_reach_the_draft() {
    let mut form = PropertyForm::default();
    form.toggle_amenity("Parking");
    let fields = form.to_draft().to_form_fields();
    let amenities = fields.iter().find(|(k, _)| k == "desired_amenities").map(|(_, v)| v.as_str());
    assert_eq!(amenities, Some(r#"["Parking"]"#));
}

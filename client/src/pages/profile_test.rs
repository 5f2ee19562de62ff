use super::*;
use crate::net::types::UserAttribute;

fn profile(attrs: &[(&str, &str)]) -> UserProfile {
    UserProfile {
        username: Some("ann".to_owned()),
        user_attributes: Some(
            attrs
                .iter()
                .map(|(n, v)| UserAttribute { name: (*n).to_owned(), value: (*v).to_owned() })
                .collect(),
        ),
    }
}

#[test]
fn missing_and_blank_attributes_show_na() {
    let p = profile(&[("email", "ann@x.io"), ("gender", "")]);
    assert_eq!(attribute_or_na(&p, "email"), "ann@x.io");
    assert_eq!(attribute_or_na(&p, "gender"), "N/A");
    assert_eq!(attribute_or_na(&p, "address"), "N/A");
}

#[test]
fn country_row_reads_custom_attribute() {
    let p = profile(&[("custom:country", "NZ"), ("country", "ignored")]);
    let rows = profile_rows(&p);
    assert_eq!(rows.last(), Some(&("Country", "NZ".to_owned())));
    assert_eq!(rows.len(), 7);
}

#[test]
fn profile_without_attribute_list() {
    let p = UserProfile { username: None, user_attributes: None };
    assert!(profile_rows(&p).iter().all(|(_, v)| v == "N/A"));
}

use super::*;

fn request(id: i64, status: RequestStatus) -> ContactRequest {
    ContactRequest {
        id,
        message: "hello".to_owned(),
        status,
        created_at: None,
        recipient: None,
        owner: None,
        product: None,
    }
}

#[test]
fn feed_follows_role() {
    assert_eq!(RequestFeed::for_role(Some(Role::Landowner)), Some(RequestFeed::Incoming));
    assert_eq!(RequestFeed::for_role(Some(Role::Investor)), Some(RequestFeed::Sent));
    assert_eq!(RequestFeed::for_role(Some(Role::Scout)), None);
    assert_eq!(RequestFeed::for_role(None), None);
}

#[test]
fn truncate_message_leaves_short_text() {
    assert_eq!(truncate_message("short", 100), "short");
    assert_eq!(truncate_message(&"a".repeat(100), 100), "a".repeat(100));
}

#[test]
fn truncate_message_cuts_on_char_boundaries() {
    let long = "é".repeat(120);
    assert_eq!(truncate_message(&long, 100), format!("{}...", "é".repeat(100)));
}

#[test]
fn tally_counts_each_status() {
    let list = vec![
        request(1, RequestStatus::Pending),
        request(2, RequestStatus::Pending),
        request(3, RequestStatus::Accepted),
        request(4, RequestStatus::Rejected),
        request(5, RequestStatus::Unknown),
    ];
    assert_eq!(
        RequestCounts::tally(&list),
        RequestCounts { total: 5, pending: 2, accepted: 1, rejected: 1 }
    );
}

#[test]
fn person_label_variants() {
    let full = Person {
        first_name: Some("Ann".to_owned()),
        last_name: None,
        email: Some("ann@x.io".to_owned()),
    };
    assert_eq!(person_label(Some(&full)), "Ann (ann@x.io)");
    let email_only = Person { first_name: None, last_name: None, email: Some("b@x.io".to_owned()) };
    assert_eq!(person_label(Some(&email_only)), "b@x.io");
    assert_eq!(person_label(None), "N/A");
}

use futures::executor::block_on;

use super::*;
use crate::net::http::{Body, Method};
use crate::net::testing::{API, client};

#[test]
fn list_amenities_unwraps_envelope() {
    let (client, transport, _) = client();
    transport.respond(200, r#"{"amenities":[{"id":1,"name":"Pool"},{"id":2,"name":"Gym"}]}"#);
    let list = block_on(client.list_amenities()).unwrap();
    assert_eq!(list.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(), vec!["Pool", "Gym"]);
    assert_eq!(transport.last().url, format!("{API}/landowner/all/amenities"));
}

#[test]
fn add_amenity_sends_name_as_form_field() {
    let (client, transport, _) = client();
    block_on(client.add_amenity("Sauna")).unwrap();
    let sent = transport.last();
    assert_eq!(sent.url, format!("{API}/landowner/add-amenities"));
    assert_eq!(sent.body, Body::Multipart(vec![("name".to_owned(), "Sauna".to_owned())]));
}

#[test]
fn delete_amenity_targets_id() {
    let (client, transport, _) = client();
    block_on(client.delete_amenity(3)).unwrap();
    let sent = transport.last();
    assert_eq!(sent.method, Method::Delete);
    assert_eq!(sent.url, format!("{API}/landowner/delete/amenities/3"));
}

#[test]
fn failed_delete_reports_status() {
    let (client, transport, _) = client();
    transport.respond(404, r#"{"error":"not found"}"#);
    let err = block_on(client.delete_amenity(3)).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 404, message: "not found".to_owned() });
}

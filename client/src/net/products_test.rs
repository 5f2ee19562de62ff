use futures::executor::block_on;

use super::*;
use crate::net::http::Body;
use crate::net::testing::{API, AUTH, client};
use crate::state::session::{Role, Session};

#[test]
fn list_products_uses_order_specific_endpoint() {
    let (client, transport, _) = client();
    transport
        .respond(200, r#"{"products":[{"id":1,"name":"A"}]}"#)
        .respond(200, r#"{"product":[{"id":2,"name":"B"}]}"#)
        .respond(200, r#"{"product":[{"id":3,"name":"C"}]}"#);

    let all = block_on(client.list_products(PriceOrder::Unsorted)).unwrap();
    let asc = block_on(client.list_products(PriceOrder::Ascending)).unwrap();
    let desc = block_on(client.list_products(PriceOrder::Descending)).unwrap();

    assert_eq!((all[0].id, asc[0].id, desc[0].id), (1, 2, 3));
    let urls: Vec<_> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            format!("{API}/product/list"),
            format!("{API}/product/min-to-max-price"),
            format!("{API}/product/max-to-min-price"),
        ]
    );
}

#[test]
fn price_filter_posts_range() {
    let (client, transport, _) = client();
    transport.respond(200, r#"{"product":[]}"#);
    let found = block_on(client.filter_by_price(100.0, 250.5)).unwrap();
    assert!(found.is_empty());
    let sent = transport.last();
    assert_eq!(sent.url, format!("{API}/product/price-range"));
    assert_eq!(sent.body, Body::Json(r#"{"min_price":100.0,"max_price":250.5}"#.to_owned()));
}

#[test]
fn amenity_filter_posts_desired_amenities() {
    let (client, transport, _) = client();
    transport.respond(200, r#"{"products":[{"id":9}]}"#);
    let found = block_on(client.filter_by_amenity("Pool")).unwrap();
    assert_eq!(found[0].id, 9);
    assert_eq!(transport.last().body, Body::Json(r#"{"desired_amenities":"Pool"}"#.to_owned()));
}

#[test]
fn product_details_come_from_auth_base() {
    let (client, transport, _) = client();
    transport.respond(
        200,
        r#"{"product":{"id":5,"name":"Barn"},"product_owner_information":{"first_name":"Bo","email":"bo@x.y"}}"#,
    );
    let details = block_on(client.product_details(5)).unwrap();
    assert_eq!(details.product.name, "Barn");
    assert_eq!(details.product_owner_information.unwrap().email.as_deref(), Some("bo@x.y"));
    assert_eq!(transport.last().url, format!("{AUTH}/mp/product/details/5"));
}

#[test]
fn add_product_sends_multipart_fields_with_bearer() {
    let (client, transport, _) = client();
    client.session().set("abc", Role::Landowner);
    let draft = PropertyDraft { name: "Farm".to_owned(), ..PropertyDraft::default() };

    block_on(client.add_product(&draft)).unwrap();

    let sent = transport.last();
    assert_eq!(sent.url, format!("{API}/product/add"));
    assert_eq!(sent.header("Authorization"), Some("Bearer abc"));
    match sent.body {
        Body::Multipart(fields) => assert!(fields.contains(&("name".to_owned(), "Farm".to_owned()))),
        other => panic!("expected multipart body, got {other:?}"),
    }
}

#[test]
fn delete_product_uses_delete_method() {
    let (client, transport, _) = client();
    block_on(client.delete_product(12)).unwrap();
    let sent = transport.last();
    assert_eq!(sent.method, Method::Delete);
    assert_eq!(sent.url, format!("{API}/product/delete/12"));
}

#[test]
fn contact_owner_posts_message() {
    let (client, transport, _) = client();
    let msg = ContactOwner { message: "hi".to_owned(), recipient_email: "bo@x.y".to_owned(), product_id: 5 };
    block_on(client.contact_owner(&msg)).unwrap();
    assert_eq!(
        transport.last().body,
        Body::Json(r#"{"message":"hi","recipient_email":"bo@x.y","product_id":5}"#.to_owned())
    );
}

#[test]
fn request_feeds_unwrap_envelope() {
    let (client, transport, _) = client();
    transport
        .respond(200, r#"{"requests":[{"id":1,"message":"m","status":"pending"}]}"#)
        .respond(200, r#"{"requests":[]}"#);
    let investor = block_on(client.contact_requests()).unwrap();
    let landowner = block_on(client.landowner_requests()).unwrap();
    assert_eq!(investor.len(), 1);
    assert!(landowner.is_empty());
    let urls: Vec<_> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls[0], format!("{API}/product/contact-requests"));
    assert_eq!(urls[1], format!("{API}/product/landowner/to/all-requests"));
}

#[test]
fn status_change_posts_lowercase_status() {
    let (client, transport, _) = client();
    block_on(client.update_request_status(4, RequestStatus::Accepted)).unwrap();
    assert_eq!(transport.last().body, Body::Json(r#"{"id":4,"status":"accepted"}"#.to_owned()));
}

#[test]
fn expired_session_on_landowner_feed_forces_logout() {
    let (client, transport, expiry) = client();
    client.session().set("abc", Role::Landowner);
    transport.respond(401, "");

    let result = block_on(client.landowner_requests());

    assert_eq!(result, Err(ApiError::SessionExpired));
    assert_eq!(client.session().get(), Session::default());
    assert_eq!(expiry.actions.lock().unwrap().len(), 1);
}

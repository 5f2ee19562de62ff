use futures::executor::block_on;

use super::*;
use crate::net::testing::{API, RecordingTransport, client};
use crate::state::session::{Role, Session};
use crate::util::storage::{KeyValueStore, MemoryStorage};

// =============================================================
// Bearer attachment
// =============================================================

#[test]
fn anonymous_request_has_no_authorization_header() {
    let (client, transport, _) = client();
    block_on(client.execute(Method::Get, ApiBase::Api, "/product/list", Body::Empty)).unwrap();
    let sent = transport.last();
    assert_eq!(sent.header("authorization"), None);
    assert_eq!(sent.url, format!("{API}/product/list"));
}

#[test]
fn stored_token_is_sent_as_bearer() {
    let (client, transport, _) = client();
    client.session().set("abc", Role::Investor);
    block_on(client.execute(Method::Get, ApiBase::Api, "/product/list", Body::Empty)).unwrap();
    assert_eq!(transport.last().header("Authorization"), Some("Bearer abc"));
}

#[test]
fn token_is_read_per_request() {
    let (client, transport, _) = client();
    client.session().set("first", Role::Scout);
    block_on(client.execute(Method::Get, ApiBase::Api, "/a", Body::Empty)).unwrap();
    client.session().set("second", Role::Scout);
    block_on(client.execute(Method::Get, ApiBase::Api, "/b", Body::Empty)).unwrap();
    let sent = transport.requests();
    assert_eq!(sent[0].header("Authorization"), Some("Bearer first"));
    assert_eq!(sent[1].header("Authorization"), Some("Bearer second"));
}

#[test]
fn json_body_sets_content_type() {
    let (client, transport, _) = client();
    let _: serde_json::Value = block_on(client.send_json(
        Method::Post,
        ApiBase::Api,
        "/product/price-range",
        &serde_json::json!({ "min_price": 1 }),
    ))
    .unwrap();
    let sent = transport.last();
    assert_eq!(sent.header("content-type"), Some("application/json"));
    assert_eq!(sent.body, Body::Json(r#"{"min_price":1}"#.to_owned()));
}

#[test]
fn multipart_body_leaves_content_type_to_the_browser() {
    let (client, transport, _) = client();
    let _: serde_json::Value = block_on(client.send_multipart(
        ApiBase::Api,
        "/landowner/add-amenities",
        vec![("name".to_owned(), "Pool".to_owned())],
    ))
    .unwrap();
    assert_eq!(transport.last().header("content-type"), None);
}

// =============================================================
// 401 handling
// =============================================================

#[test]
fn unauthorized_with_session_expires_it() {
    let (client, transport, expiry) = client();
    client.session().set("abc", Role::Landowner);
    transport.respond(401, r#"{"error":"expired"}"#);

    let result = block_on(client.execute(Method::Get, ApiBase::Api, "/product/landowner/to/all-requests", Body::Empty));

    assert_eq!(result, Err(ApiError::SessionExpired));
    assert_eq!(client.session().get(), Session::default());
    let actions = expiry.actions.lock().unwrap().clone();
    assert_eq!(actions, vec![SESSION_EXPIRY]);
    assert_eq!(actions[0].redirect_to, "/login");
    assert_eq!(actions[0].delay_ms, 1_000);
    assert_eq!(actions[0].notice, "Session expired. Redirecting to login...");
}

#[test]
fn unauthorized_without_session_still_forces_logout() {
    let (client, transport, expiry) = client();
    transport.respond(401, "");
    let result = block_on(client.execute(Method::Get, ApiBase::Api, "/product/list", Body::Empty));
    assert_eq!(result, Err(ApiError::SessionExpired));
    assert_eq!(transport.last().header("Authorization"), None);
    assert_eq!(*expiry.actions.lock().unwrap(), vec![SESSION_EXPIRY]);
    assert_eq!(client.session().get(), Session::default());
}

#[test]
fn unauthorized_clears_a_role_left_without_token() {
    let (client, transport, expiry) = client();
    client.session().storage().set("userType", "LANDOWNER").unwrap();
    transport.respond(401, "");
    let result = block_on(client.execute(Method::Post, ApiBase::Auth, "/auth/signin", Body::Empty));
    assert_eq!(result, Err(ApiError::SessionExpired));
    assert_eq!(client.session().storage().get("userType"), Ok(None));
    assert_eq!(expiry.actions.lock().unwrap().len(), 1);
}

#[test]
fn other_failures_leave_session_intact() {
    let (client, transport, expiry) = client();
    client.session().set("abc", Role::Investor);
    transport.respond(403, r#"{"message":"forbidden"}"#).respond(500, "boom");

    let first = block_on(client.execute(Method::Get, ApiBase::Api, "/x", Body::Empty));
    let second = block_on(client.execute(Method::Get, ApiBase::Api, "/y", Body::Empty));

    assert_eq!(first, Err(ApiError::Status { status: 403, message: "forbidden".to_owned() }));
    assert_eq!(second, Err(ApiError::Status { status: 500, message: "boom".to_owned() }));
    assert!(client.session().get().is_authenticated());
    assert!(expiry.actions.lock().unwrap().is_empty());
}

#[test]
fn transport_failure_propagates_unchanged() {
    let (client, transport, _) = client();
    client.session().set("abc", Role::Investor);
    transport.fail(ApiError::Network("offline".to_owned()));
    let result = block_on(client.execute(Method::Get, ApiBase::Api, "/x", Body::Empty));
    assert_eq!(result, Err(ApiError::Network("offline".to_owned())));
    assert!(client.session().get().is_authenticated());
}

#[test]
fn offline_transport_is_unavailable() {
    let client = ApiClient::new(ApiConfig::default(), OfflineTransport, MemoryStorage::new());
    let result = block_on(client.execute(Method::Get, ApiBase::Api, "/x", Body::Empty));
    assert_eq!(result, Err(ApiError::Unavailable));
}

// =============================================================
// Response helpers
// =============================================================

#[test]
fn empty_body_decodes_as_null() {
    let resp = HttpResponse { status: 204, body: String::new() };
    assert_eq!(resp.json::<Option<u32>>(), Ok(None));
}

#[test]
fn error_message_prefers_error_then_message_field() {
    assert_eq!(error_message(r#"{"error":"User already exists"}"#), "User already exists");
    assert_eq!(error_message(r#"{"message":"nope"}"#), "nope");
    assert_eq!(error_message(" plain text "), "plain text");
}

#[test]
fn recording_transport_defaults_to_ok() {
    let transport = RecordingTransport::default();
    let resp = block_on(transport.send(HttpRequest {
        method: Method::Get,
        url: "u".to_owned(),
        headers: Vec::new(),
        body: Body::Empty,
    }))
    .unwrap();
    assert!(resp.is_success());
}

//! Test doubles for the request layer.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::config::ApiConfig;
use super::error::ApiError;
use super::http::{ApiClient, ExpiryAction, HttpRequest, HttpResponse, SessionExpiredHandler, Transport};
use crate::util::storage::MemoryStorage;

/// Records every request and replays queued responses (200 `{}` when empty).
#[derive(Clone, Debug, Default)]
pub struct RecordingTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    replies: Arc<Mutex<VecDeque<Result<HttpResponse, ApiError>>>>,
}

impl RecordingTransport {
    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, err: ApiError) -> &Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse { status: 200, body: "{}".to_owned() }))
    }
}

/// Counts forced logouts.
#[derive(Debug, Default)]
pub struct RecordingExpiry {
    pub actions: Mutex<Vec<ExpiryAction>>,
}

impl SessionExpiredHandler for RecordingExpiry {
    fn session_expired(&self, action: &ExpiryAction) {
        self.actions.lock().unwrap().push(*action);
    }
}

pub type TestClient = ApiClient<RecordingTransport, MemoryStorage>;

pub const API: &str = "https://api.test";
pub const AUTH: &str = "https://auth.test";

/// Client over fresh fakes, plus handles to inspect them.
pub fn client() -> (TestClient, RecordingTransport, Arc<RecordingExpiry>) {
    let transport = RecordingTransport::default();
    let expiry = Arc::new(RecordingExpiry::default());
    let client = ApiClient::new(ApiConfig::new(API, AUTH), transport.clone(), MemoryStorage::new())
        .with_expiry_handler(expiry.clone());
    (client, transport, expiry)
}

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use md5::{Digest, Md5};
use transferto_client::{HttpClient, Result};

pub const LOGIN: &str = "fake-login";
pub const TOKEN: &str = "fake-token";
pub const SUCCESS_BODY: &str = "error_code=0\r\nerror_txt=success";

/// A request seen by [`MockHttpClient`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub query: HashMap<String, String>,
}

impl RecordedRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

#[derive(Default)]
struct MockState {
    responses: VecDeque<Result<String>>,
    requests: Vec<RecordedRequest>,
}

/// In-memory transport: records every GET and answers from a queue, falling
/// back to [`SUCCESS_BODY`] once the queue is empty.
#[derive(Clone, Default)]
pub struct MockHttpClient {
    state: Arc<Mutex<MockState>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying(body: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.push_response(body);
        mock
    }

    pub fn push_response(&self, body: impl Into<String>) {
        self.state
            .lock()
            .expect("mock state poisoned")
            .responses
            .push_back(Ok(body.into()));
    }

    pub fn push_error(&self, error: transferto_client::Error) {
        self.state
            .lock()
            .expect("mock state poisoned")
            .responses
            .push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().expect("mock state poisoned").requests.clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("no request was sent through the mock")
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, query_params: &[(&str, String)]) -> Result<String> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.requests.push(RecordedRequest {
            url: url.to_string(),
            query: query_params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Ok(SUCCESS_BODY.to_string()))
    }
}

/// Independent md5 of `login ++ token ++ key`.
pub fn expected_signature(login: &str, token: &str, key: &str) -> String {
    hex::encode(Md5::digest(format!("{}{}{}", login, token, key)))
}

//! Scripted transport for driving view-models without a browser.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use retreat_admin::services::{ApiRequest, ApiResponse, Method, Transport};
use retreat_admin::{ApiClient, ApiError};
use serde_json::Value;

#[derive(Default)]
struct Script {
    requests: Vec<ApiRequest>,
    replies: VecDeque<Result<ApiResponse, ApiError>>,
    before_reply: Option<Rc<dyn Fn()>>,
}

/// Records every request and answers from a queue of canned replies.
/// Clones share the same script.
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Rc<RefCell<Script>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client(&self) -> ApiClient<MockTransport> {
        ApiClient::new(self.clone())
    }

    pub fn respond_json(&self, status: u16, body: Value) -> &Self {
        self.respond(Ok(ApiResponse::new(status, body.to_string())))
    }

    pub fn respond_empty(&self, status: u16) -> &Self {
        self.respond(Ok(ApiResponse::new(status, "")))
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.respond(Err(error))
    }

    fn respond(&self, reply: Result<ApiResponse, ApiError>) -> &Self {
        self.script.borrow_mut().replies.push_back(reply);
        self
    }

    /// Runs while a request is "in flight", after it was recorded
    pub fn before_reply(&self, hook: impl Fn() + 'static) {
        self.script.borrow_mut().before_reply = Some(Rc::new(hook));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.script.borrow().requests.clone()
    }

    pub fn calls(&self) -> Vec<(Method, String)> {
        self.script
            .borrow()
            .requests
            .iter()
            .map(|r| (r.method, r.path.clone()))
            .collect()
    }

    pub fn pending_replies(&self) -> usize {
        self.script.borrow().replies.len()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let hook = {
            let mut script = self.script.borrow_mut();
            script.requests.push(request.clone());
            script.before_reply.clone()
        };
        if let Some(hook) = hook {
            hook();
        }

        self.script
            .borrow_mut()
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network(format!("no reply scripted for {} {}", request.method, request.path))))
    }
}

pub fn call(method: Method, path: &str) -> (Method, String) {
    (method, path.to_string())
}

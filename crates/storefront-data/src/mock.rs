//! Canned-response transport for tests and offline demos.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::{FetchError, Method, RequestBuilder, Response, Transport};

#[derive(Debug, Clone)]
enum Canned {
    Respond(Response),
    Fail(FetchError),
}

/// A request seen by [`StaticTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    /// Path and query, without scheme and host.
    pub path: String,
    /// JSON body, if the request carried one.
    pub body: Option<serde_json::Value>,
}

/// Transport answering from a fixed table keyed by method and path.
///
/// Unknown routes answer `404`. Responses can be held back with
/// [`StaticTransport::hold`] to simulate a slow network.
///
/// # Example
///
/// ```rust
/// use storefront_data::mock::StaticTransport;
/// use storefront_data::Method;
///
/// let transport = StaticTransport::new()
///     .respond_json(Method::Get, "/category", serde_json::json!([]));
/// ```
#[derive(Debug)]
pub struct StaticTransport {
    routes: Mutex<HashMap<(Method, String), Canned>>,
    requests: Mutex<Vec<RecordedRequest>>,
    gate: watch::Sender<bool>,
}

impl Default for StaticTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticTransport {
    /// Create a transport with no routes.
    pub fn new() -> Self {
        let (gate, _) = watch::channel(true);
        Self {
            routes: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            gate,
        }
    }

    /// Answer `path` with `200 OK` and a JSON body.
    pub fn respond_json(self, method: Method, path: &str, value: serde_json::Value) -> Self {
        self.route(method, path, Canned::Respond(Response::json_ok(&value)))
    }

    /// Answer `path` with an arbitrary status and body.
    pub fn respond_status(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        let response = Response::new(status, HashMap::new(), body.as_bytes().to_vec());
        self.route(method, path, Canned::Respond(response))
    }

    /// Fail requests to `path` before any response.
    pub fn fail(self, method: Method, path: &str, error: FetchError) -> Self {
        self.route(method, path, Canned::Fail(error))
    }

    fn route(self, method: Method, path: &str, canned: Canned) -> Self {
        self.routes.lock().insert((method, path.to_string()), canned);
        self
    }

    /// Hold every response until [`StaticTransport::release`].
    pub fn hold(&self) {
        self.gate.send_replace(false);
    }

    /// Let held responses through.
    pub fn release(&self) {
        self.gate.send_replace(true);
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests received for `path`.
    pub fn request_count(&self, path: &str) -> usize {
        self.requests.lock().iter().filter(|r| r.path == path).count()
    }
}

/// Strip scheme and host, keeping path and query.
fn path_of(url: &str) -> String {
    let rest = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => return url.to_string(),
    };
    match rest.find('/') {
        Some(idx) => rest[idx..].to_string(),
        None => "/".to_string(),
    }
}

#[async_trait]
impl Transport for StaticTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let path = path_of(request.url());
        let body = request
            .body_bytes()
            .and_then(|bytes| serde_json::from_slice(bytes).ok());
        self.requests.lock().push(RecordedRequest {
            method: request.method(),
            path: path.clone(),
            body,
        });

        let mut gate = self.gate.subscribe();
        gate.wait_for(|open| *open)
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let canned = self.routes.lock().get(&(request.method(), path)).cloned();
        match canned {
            Some(Canned::Respond(response)) => Ok(response),
            Some(Canned::Fail(error)) => Err(error),
            None => Ok(Response::new(404, HashMap::new(), b"Not Found".to_vec())),
        }
    }
}

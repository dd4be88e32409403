// ============================================================================
// API CLIENT - HTTP only, no screen logic
// ============================================================================
// Every screen goes through this type. A non-2xx status is an error; there
// is no retry, no backoff and no circuit breaking.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::services::http_transport::HttpTransport;
use crate::services::transport::{ApiRequest, ApiResponse, Method, MultipartForm, RequestBody, Transport};

pub struct ApiClient<T = HttpTransport> {
    transport: Rc<T>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
        }
    }
}

impl ApiClient<HttpTransport> {
    /// Client for the browser, configured from the build environment
    pub fn browser() -> Self {
        Self::new(HttpTransport::new(ApiConfig::from_build_env()))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Rc::new(transport),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET a path and decode the JSON response
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.dispatch(ApiRequest::new(Method::Get, path, RequestBody::Empty)).await?;
        decode(&response)
    }

    /// Send a JSON body and decode the JSON response
    pub async fn send_json<B, R>(&self, method: Method, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send_body(method, path, RequestBody::Json(value)).await
    }

    /// Send a multipart body and decode the JSON response
    pub async fn send_multipart<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: MultipartForm,
    ) -> Result<R, ApiError> {
        self.send_body(method, path, RequestBody::Multipart(form)).await
    }

    pub async fn send_body<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<R, ApiError> {
        let response = self.dispatch(ApiRequest::new(method, path, body)).await?;
        decode(&response)
    }

    /// DELETE a path; the response body is ignored
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.dispatch(ApiRequest::new(Method::Delete, path, RequestBody::Empty))
            .await
            .map(|_| ())
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = request.method;
        let path = request.path.clone();

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("❌ [API] {} {} failed: {}", method, path, e);
            e
        })?;

        if !response.is_success() {
            log::error!("❌ [API] {} {} -> HTTP {}", method, path, response.status);
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }

        log::debug!("✅ [API] {} {} -> HTTP {}", method, path, response.status);
        Ok(response)
    }
}

/// Empty bodies (204, bare 201) decode as JSON `null`
fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    let body = response.body.trim();
    let body = if body.is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(ApiError::from)
}

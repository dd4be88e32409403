// ============================================================================
// HTTP TRANSPORT - Browser fetch via gloo-net
// ============================================================================
// JSON content type by default. Multipart bodies go out as a FormData object
// so the browser writes the multipart content type and boundary itself.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{AbortController, Blob, BlobPropertyBag, FormData};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::services::transport::{
    ApiRequest, ApiResponse, FilePart, Method, MultipartForm, Part, RequestBody, Transport,
};

/// Preconfigured request sender: fixed base URL and overall timeout
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: ApiConfig,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn builder(&self, method: Method, url: &str) -> RequestBuilder {
        match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(ApiConfig::from_build_env())
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.config.url_for(&request.path);
        log::debug!("🌐 [API] {} {}", request.method, url);

        let controller = AbortController::new().map_err(js_error(ApiError::Encode))?;
        let signal = controller.signal();
        let timed_out = Rc::new(Cell::new(false));

        // Dropping the handle clears the timer once the response is in
        let _timeout = {
            let timed_out = timed_out.clone();
            Timeout::new(self.config.timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let builder = self
            .builder(request.method, &url)
            .abort_signal(Some(&signal));

        let built = match request.body {
            RequestBody::Empty => builder.header("Content-Type", "application/json").build(),
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.body(to_form_data(&form)?),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let response = match built.send().await {
            Ok(response) => response,
            Err(_) if timed_out.get() => return Err(ApiError::Timeout(self.config.timeout_ms)),
            Err(e) => return Err(ApiError::Network(e.to_string())),
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse::new(status, body))
    }
}

fn to_form_data(form: &MultipartForm) -> Result<FormData, ApiError> {
    let data = FormData::new().map_err(js_error(ApiError::Encode))?;
    for (name, part) in form.parts() {
        match part {
            Part::Text(value) => data.append_with_str(name, value),
            Part::File(file) => {
                let blob = to_blob(file)?;
                data.append_with_blob_and_filename(name, &blob, &file.file_name)
            }
        }
        .map_err(js_error(ApiError::Encode))?;
    }
    Ok(data)
}

fn to_blob(file: &FilePart) -> Result<Blob, ApiError> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&file.content_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error(ApiError::Encode))
}

fn js_error(kind: fn(String) -> ApiError) -> impl Fn(JsValue) -> ApiError {
    move |value| kind(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

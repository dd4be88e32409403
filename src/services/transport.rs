// ============================================================================
// TRANSPORT - Request/response types and the sending seam
// ============================================================================
// `HttpTransport` sends through the browser; tests script their own.
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file picked in a form, held in memory until it is sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePart {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    File(FilePart),
}

/// Ordered multipart body; the same name may appear more than once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<(String, Part)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_text(name, value);
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: FilePart) -> Self {
        self.push_file(name, file);
        self
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push((name.into(), Part::Text(value.into())));
    }

    pub fn push_file(&mut self, name: impl Into<String>, file: FilePart) {
        self.parts.push((name.into(), Part::File(file)));
    }

    pub fn parts(&self) -> &[(String, Part)] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// First text value sent under `name`
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(key, part)| match part {
            Part::Text(value) if key == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn files(&self, name: &str) -> Vec<&FilePart> {
        self.parts
            .iter()
            .filter_map(|(key, part)| match part {
                Part::File(file) if key == name => Some(file),
                _ => None,
            })
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parts.iter().any(|(key, _)| key == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Endpoint path, relative to the configured base URL
    pub path: String,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method,
            path: path.into(),
            body,
        }
    }

    pub fn json_body(&self) -> Option<&serde_json::Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn multipart_body(&self) -> Option<&MultipartForm> {
        match &self.body {
            RequestBody::Multipart(form) => Some(form),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and resolves once the whole response body is read.
///
/// Implementations never retry. Futures are not `Send`: in the browser
/// everything runs on the single UI thread.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipart_keeps_repeated_names_in_order() {
        let form = MultipartForm::new()
            .text("form_data", "12")
            .file("images", FilePart::new("a.jpg", "image/jpeg", vec![1]))
            .file("images", FilePart::new("b.jpg", "image/jpeg", vec![2]));

        assert_eq!(form.text_value("form_data"), Some("12"));
        let names: Vec<_> = form.files("images").iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg"]);
        assert!(!form.contains("resort"));
    }

    #[test]
    fn only_2xx_counts_as_success() {
        assert!(ApiResponse::new(201, "{}").is_success());
        assert!(ApiResponse::new(204, "").is_success());
        assert!(!ApiResponse::new(400, "bad").is_success());
        assert!(!ApiResponse::new(500, "").is_success());
    }
}

// ============================================================================
// SERVICES - HTTP plumbing only
// ============================================================================

pub mod api_client;
pub mod endpoints;
pub mod http_transport;
pub mod transport;

pub use api_client::ApiClient;
pub use http_transport::HttpTransport;
pub use transport::{ApiRequest, ApiResponse, FilePart, Method, MultipartForm, Part, RequestBody, Transport};

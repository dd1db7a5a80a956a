pub mod manifest_request;
pub mod manifest_response;

pub use manifest_request::ManifestRequest;
pub use manifest_response::ManifestResponse;

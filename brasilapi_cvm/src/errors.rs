//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request URL could not be built from the configured base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The request never produced a readable response (DNS, refused
    /// connection, timeout, or a broken body stream).
    #[error("Transport failure: {0}")]
    Transport(String),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

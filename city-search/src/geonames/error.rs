//! GeoNames client error types.

/// Errors that can occur when querying the GeoNames search API.
#[derive(Debug, thiserror::Error)]
pub enum GeoNamesError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response carried an explicit `status` error object
    #[error("service error: {message}")]
    Service { message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

use thiserror::Error;

/// Errors raised while interpreting a forecast payload.
///
/// Unknown weather codes are not errors; see [`crate::codes::describe`].
#[derive(Debug, Error)]
pub enum ReportError {
    /// A required key or array element is absent (or `null`) in the payload.
    #[error("Missing field in forecast payload: {0}")]
    MissingField(String),

    /// An argument outside the accepted domain, e.g. an azimuth of 360°.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A time string that is neither `YYYY-MM-DDTHH:MM[:SS]` nor RFC 3339.
    #[error("Invalid timestamp in {field}: '{value}'")]
    InvalidTimestamp { field: String, value: String },

    /// The payload text is not valid JSON for a forecast response.
    #[error("Failed to parse forecast JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

use serde_json::Value;

/// Message shown when a 2xx body is neither a record list nor an error object.
pub const UNEXPECTED_RESPONSE: &str = "Unexpected response from server";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("API URL is not defined")]
    Config,

    /// Network failure or non-2xx status. Carries the per-operation message only.
    #[error("{0}")]
    Transport(String),

    /// A 2xx body of the form `{"error": "..."}`.
    #[error("{0}")]
    Backend(String),

    #[error("{}", UNEXPECTED_RESPONSE)]
    UnexpectedShape,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Returns the message of a `{"error": "..."}` body.
pub fn backend_error(value: &Value) -> Option<String> {
    value.get("error")?.as_str().map(ToString::to_string)
}

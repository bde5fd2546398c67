use anyhow::Context as _;
use thiserror::Error;

/// Structural failure of an incoming dataset. Per-field problems never end up here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidDatasetError {
    #[error("dataset must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("dataset has no `races` field")]
    MissingRaces,
    #[error("`races` must be a sequence, got {0}")]
    RacesNotSequence(&'static str),
    #[error("backend rejected the request: {0}")]
    BackendRejected(String),
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to export errors
pub fn export_context(path: &str) -> String {
    format!("Failed to write export to: {}", path)
}

/// Wrap result with fetch context
pub fn with_fetch_context<T, E>(result: Result<T, E>, url: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(fetch_context(url))
}

/// Human-readable name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

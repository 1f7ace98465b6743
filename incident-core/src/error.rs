use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid stored JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown {field} value: {value}")]
    UnknownValue { field: &'static str, value: String },
}

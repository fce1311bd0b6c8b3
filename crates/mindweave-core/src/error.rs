use thiserror::Error;

/// Errors raised while building layout configuration.
///
/// Layout itself never fails; only an unusable palette or metric is rejected
/// up front.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Palette must contain at least one color")]
    EmptyPalette,

    #[error("Invalid layout setting '{field}': {value} (must be finite and non-negative)")]
    InvalidConfig { field: &'static str, value: f64 },

    #[error("Invalid layout config JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        LayoutError::Json(err.to_string())
    }
}

use thiserror::Error;

/// Errors raised while loading viewport configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewportError {
    #[error("Invalid viewport setting '{field}': {value} (must be finite and {requirement})")]
    InvalidConfig {
        field: &'static str,
        value: f64,
        requirement: &'static str,
    },

    #[error("Zoom range is empty: minZoom {min} > maxZoom {max}")]
    EmptyZoomRange { min: f64, max: f64 },

    #[error("Invalid viewport config JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ViewportError {
    fn from(err: serde_json::Error) -> Self {
        ViewportError::Json(err.to_string())
    }
}

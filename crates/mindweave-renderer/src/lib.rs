//! # Mindweave Renderer
//!
//! Interactive pan/zoom viewport and render-frame construction for the
//! mind-map canvas.
//!
//! The drawing surface itself lives in the host. This crate turns a computed
//! layout plus the current viewport state into JSON-serializable boxes,
//! edge curves, and a screen transform that the host draws as-is.

pub mod error;
pub mod picker;
pub mod render_data;
pub mod viewport;

pub use error::ViewportError;
pub use picker::NodePicker;
pub use render_data::{RenderEdge, RenderFrame, RenderNode};
pub use viewport::{ScreenTransform, ViewportConfig, ViewportController, ViewportState};

//! # Mindweave Core
//!
//! Mind-map data model, deterministic tree layout, content-space geometry,
//! and spatial indexing for hit testing and culling.
//!
//! The layout engine is a pure projection: a flat, parent-referencing node
//! list goes in, positioned and colored boxes come out. Nothing here holds
//! state between calls.

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod node;
pub mod palette;
pub mod spatial;
pub mod tree;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use geometry::{BBox, Point};
pub use layout::{compute_layout, compute_layout_with, content_bounds};
pub use node::{LayoutNode, MindMapNode};
pub use palette::Palette;
pub use spatial::SpatialIndex;
pub use tree::MindMapTree;

//! # Mindweave I/O
//!
//! Input boundary for the mind-map engine: the mind-map record stored with a
//! study session and the JSON node blob it carries.
//!
//! Malformed blobs never surface as errors to the view. The recovering
//! loaders log a warning and yield an empty node list, which the view shows
//! as its "no mind map yet" state.

pub mod map_data;
pub mod record;

pub use map_data::{load_nodes, parse_map_data, MapDataError};
pub use record::MindMapRecord;

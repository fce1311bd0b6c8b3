//! Parsing of the mind-map node blob.
//!
//! Two shapes are accepted: a bare array of nodes, or an object whose
//! `nodes` field is that array. Array entries that do not decode as a node
//! are skipped individually.

use serde_json::Value;
use thiserror::Error;

use mindweave_core::node::MindMapNode;

#[derive(Error, Debug)]
pub enum MapDataError {
    #[error("Map data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected map data shape: {0}")]
    UnexpectedShape(&'static str),
}

/// Strictly parse a map-data blob into nodes.
pub fn parse_map_data(blob: &str) -> Result<Vec<MindMapNode>, MapDataError> {
    let value: Value = serde_json::from_str(blob)?;
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut fields) => match fields.remove("nodes") {
            Some(Value::Array(entries)) => entries,
            Some(_) => return Err(MapDataError::UnexpectedShape("`nodes` is not an array")),
            None => return Err(MapDataError::UnexpectedShape("object without `nodes`")),
        },
        _ => return Err(MapDataError::UnexpectedShape("neither an array nor an object")),
    };

    let total = entries.len();
    let nodes: Vec<MindMapNode> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value(entry) {
            Ok(node) => Some(node),
            Err(e) => {
                log::warn!("Skipping map data entry {}: {}", i, e);
                None
            }
        })
        .collect();

    log::debug!("Parsed {} of {} map data entries", nodes.len(), total);
    Ok(nodes)
}

/// Parse a map-data blob, recovering from any failure as an empty list.
pub fn load_nodes(blob: &str) -> Vec<MindMapNode> {
    parse_map_data(blob).unwrap_or_else(|e| {
        log::warn!("Treating map data as empty: {}", e);
        Vec::new()
    })
}

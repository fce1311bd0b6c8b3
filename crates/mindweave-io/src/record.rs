use serde::{Deserialize, Serialize};

use mindweave_core::node::MindMapNode;

use crate::map_data::load_nodes;

/// A mind map as stored with a study session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapRecord {
    pub id: String,
    pub session_id: String,
    /// JSON node blob, see [`crate::map_data`].
    #[serde(default)]
    pub map_data: String,
}

impl MindMapRecord {
    pub fn new(id: &str, session_id: &str, map_data: &str) -> Self {
        Self {
            id: id.to_string(),
            session_id: session_id.to_string(),
            map_data: map_data.to_string(),
        }
    }

    /// Nodes carried by this record; empty when the blob is missing or
    /// malformed.
    pub fn nodes(&self) -> Vec<MindMapNode> {
        if self.map_data.trim().is_empty() {
            return Vec::new();
        }
        load_nodes(&self.map_data)
    }

    /// Nodes of the map a session displays: its first record, if any.
    pub fn session_nodes(records: &[MindMapRecord]) -> Vec<MindMapNode> {
        records.first().map(Self::nodes).unwrap_or_default()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_format() {
        let record = MindMapRecord::from_json(
            r#"{"id":"m1","sessionId":"s1","mapData":"[{\"id\":\"a\",\"label\":\"Root\"}]"}"#,
        )
        .unwrap();
        assert_eq!(record.session_id, "s1");
        assert_eq!(record.nodes(), vec![MindMapNode::root("a", "Root")]);

        let json = record.to_json().unwrap();
        assert!(json.contains("\"mapData\""));
        assert_eq!(MindMapRecord::from_json(&json).unwrap(), record);
    }

    #[test]
    fn test_missing_map_data() {
        let record = MindMapRecord::from_json(r#"{"id":"m1","sessionId":"s1"}"#).unwrap();
        assert!(record.nodes().is_empty());
    }

    #[test]
    fn test_session_uses_first_record() {
        let records = vec![
            MindMapRecord::new("m1", "s1", r#"{"nodes":[{"id":"x","label":"First"}]}"#),
            MindMapRecord::new("m2", "s1", r#"[{"id":"y","label":"Second"}]"#),
        ];
        let nodes = MindMapRecord::session_nodes(&records);
        assert_eq!(nodes, vec![MindMapNode::root("x", "First")]);
        assert!(MindMapRecord::session_nodes(&[]).is_empty());
    }
}

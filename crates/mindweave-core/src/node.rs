use serde::{Deserialize, Serialize};

use crate::geometry::{BBox, Point};

/// A mind-map node as supplied by the content store.
///
/// Nodes arrive as a flat list. A missing, null, or empty `parentId` marks a
/// root candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapNode {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl MindMapNode {
    pub fn new(id: &str, label: &str, parent_id: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            parent_id: parent_id.map(str::to_string),
        }
    }

    pub fn root(id: &str, label: &str) -> Self {
        Self::new(id, label, None)
    }

    pub fn child(id: &str, label: &str, parent_id: &str) -> Self {
        Self::new(id, label, Some(parent_id))
    }

    /// The parent id, with empty strings treated as absent.
    pub fn parent(&self) -> Option<&str> {
        self.parent_id.as_deref().filter(|p| !p.is_empty())
    }

    pub fn is_root_candidate(&self) -> bool {
        self.parent().is_none()
    }
}

/// A positioned node in content space. Derived from a [`MindMapNode`] by the
/// layout engine and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode {
    pub id: String,
    pub label: String,
    pub parent_id: Option<String>,
    /// Top-left corner.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Distance from the root (root = 0).
    pub depth: usize,
    pub color: String,
}

impl LayoutNode {
    pub fn bbox(&self) -> BBox {
        BBox::from_origin_size(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Midpoint of the left edge, where an incoming edge attaches.
    pub fn left_anchor(&self) -> Point {
        Point::new(self.x, self.y + self.height / 2.0)
    }

    /// Midpoint of the right edge, where outgoing edges leave.
    pub fn right_anchor(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height / 2.0)
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_parent_is_root_candidate() {
        let node = MindMapNode::new("a", "A", Some(""));
        assert!(node.is_root_candidate());
        assert!(node.parent().is_none());
        assert_eq!(MindMapNode::child("b", "B", "a").parent(), Some("a"));
    }

    #[test]
    fn test_node_wire_names() {
        let node: MindMapNode =
            serde_json::from_str(r#"{"id":"b","label":"Child","parentId":"a"}"#).unwrap();
        assert_eq!(node, MindMapNode::child("b", "Child", "a"));

        let orphan: MindMapNode = serde_json::from_str(r#"{"id":"r"}"#).unwrap();
        assert_eq!(orphan.label, "");
        assert!(orphan.parent_id.is_none());
    }

    #[test]
    fn test_layout_node_anchors() {
        let node = LayoutNode {
            id: "a".into(),
            label: "Root".into(),
            parent_id: None,
            x: -80.0,
            y: -22.0,
            width: 160.0,
            height: 44.0,
            depth: 0,
            color: "red".into(),
        };
        assert_eq!(node.left_anchor(), Point::new(-80.0, 0.0));
        assert_eq!(node.right_anchor(), Point::new(80.0, 0.0));
        assert_eq!(node.center(), Point::new(0.0, 0.0));
        assert!(node.is_root());
    }
}

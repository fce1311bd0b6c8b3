use mindweave_core::geometry::{BBox, Point};
use mindweave_core::layout::content_bounds;
use mindweave_core::node::LayoutNode;
use mindweave_core::spatial::SpatialIndex;

use crate::render_data::CONTENT_MARGIN;
use crate::viewport::ViewportController;

/// Screen-space queries over a computed layout.
///
/// Built once per layout; queries take the current viewport so pan and zoom
/// changes need no rebuild.
pub struct NodePicker<'a> {
    layout: &'a [LayoutNode],
    index: SpatialIndex,
    bounds: Option<BBox>,
}

impl<'a> NodePicker<'a> {
    pub fn new(layout: &'a [LayoutNode]) -> Self {
        Self {
            layout,
            index: SpatialIndex::from_layout(layout),
            bounds: content_bounds(layout, CONTENT_MARGIN),
        }
    }

    /// The node drawn under a screen point, if any. Later nodes are drawn on
    /// top, so the last hit wins.
    pub fn node_at(
        &self,
        viewport: &ViewportController,
        screen_x: f64,
        screen_y: f64,
    ) -> Option<&'a LayoutNode> {
        let point = viewport
            .transform(self.bounds.as_ref())
            .screen_to_content(&Point::new(screen_x, screen_y));
        let hit = self.index.query_point(&point).into_iter().max()?;
        let layout = self.layout;
        Some(&layout[hit])
    }

    /// Nodes intersecting the visible part of content space, in layout order.
    pub fn visible_nodes(&self, viewport: &ViewportController) -> Vec<&'a LayoutNode> {
        let region = viewport.visible_region(self.bounds.as_ref());
        let layout = self.layout;
        self.index
            .query_region(&region)
            .into_iter()
            .map(|i| &layout[i])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindweave_core::layout::compute_layout;
    use mindweave_core::node::MindMapNode;

    fn layout() -> Vec<LayoutNode> {
        compute_layout(&[
            MindMapNode::root("a", "Root"),
            MindMapNode::child("b", "Child1", "a"),
            MindMapNode::child("c", "Child2", "a"),
        ])
    }

    #[test]
    fn test_node_at_screen_point() {
        let layout = layout();
        let picker = NodePicker::new(&layout);
        let viewport = ViewportController::new();

        // Content center (150, 0) sits at the viewport center (400, 250),
        // so the root center (0, 0) is at (250, 250).
        assert_eq!(picker.node_at(&viewport, 250.0, 250.0).unwrap().id, "a");
        // Child "c" is centered at (320, 32) in content space.
        assert_eq!(picker.node_at(&viewport, 570.0, 282.0).unwrap().id, "c");
        assert!(picker.node_at(&viewport, 10.0, 10.0).is_none());
    }

    #[test]
    fn test_node_at_follows_pan() {
        let layout = layout();
        let picker = NodePicker::new(&layout);
        let mut viewport = ViewportController::new();
        viewport.drag_start(0.0, 0.0);
        viewport.drag_move(100.0, 0.0);
        viewport.drag_end();
        assert!(picker.node_at(&viewport, 250.0, 250.0).is_none());
        assert_eq!(picker.node_at(&viewport, 350.0, 250.0).unwrap().id, "a");
    }

    #[test]
    fn test_visible_nodes_culls() {
        let layout = layout();
        let picker = NodePicker::new(&layout);
        let mut viewport = ViewportController::new();
        assert_eq!(picker.visible_nodes(&viewport).len(), 3);

        // Pan the content far to the left; only the child column stays.
        viewport.drag_start(0.0, 0.0);
        viewport.drag_move(-520.0, 0.0);
        let ids: Vec<&str> = picker
            .visible_nodes(&viewport)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "c"]);
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use mindweave_core::config::DEFAULT_BOUNDS_MARGIN;
use mindweave_core::geometry::{BBox, Point};
use mindweave_core::layout::content_bounds;
use mindweave_core::node::LayoutNode;

use crate::viewport::{ScreenTransform, ViewportController, ViewportState};

/// Padding around the content bounding box, in content units.
pub const CONTENT_MARGIN: f64 = DEFAULT_BOUNDS_MARGIN;

/// Labels longer than this are truncated for display.
pub const MAX_LABEL_CHARS: usize = 22;
/// Characters kept when a label is truncated.
pub const TRUNCATED_LABEL_CHARS: usize = 20;

const ROOT_CORNER_RADIUS: f64 = 14.0;
const CORNER_RADIUS: f64 = 8.0;
const EDGE_OPACITY: f64 = 0.7;

/// A node box ready for drawing, in content coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderNode {
    pub id: String,
    /// Label as displayed (possibly truncated).
    pub label: String,
    pub full_label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub depth: usize,
    pub color: String,
    pub corner_radius: f64,
    pub opacity: f64,
    pub font_size: f64,
    pub font_weight: u16,
    /// Inset outline drawn on the root box.
    pub highlight_ring: bool,
}

impl RenderNode {
    pub fn from_layout(node: &LayoutNode) -> Self {
        let root = node.is_root();
        Self {
            id: node.id.clone(),
            label: display_label(&node.label),
            full_label: node.label.clone(),
            x: node.x,
            y: node.y,
            width: node.width,
            height: node.height,
            depth: node.depth,
            color: node.color.clone(),
            corner_radius: if root { ROOT_CORNER_RADIUS } else { CORNER_RADIUS },
            opacity: if root { 1.0 } else { 0.85 },
            font_size: if root { 14.0 } else { 12.0 },
            font_weight: if root { 700 } else { 500 },
            highlight_ring: root,
        }
    }
}

/// A parent-to-child connector: a cubic Bézier from the parent's right edge
/// to the child's left edge, both control points on the horizontal midpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderEdge {
    pub parent_id: String,
    pub child_id: String,
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl RenderEdge {
    pub fn between(parent: &LayoutNode, child: &LayoutNode) -> Self {
        let start = parent.right_anchor();
        let end = child.left_anchor();
        let mid_x = (start.x + end.x) / 2.0;
        Self {
            parent_id: parent.id.clone(),
            child_id: child.id.clone(),
            start,
            control1: Point::new(mid_x, start.y),
            control2: Point::new(mid_x, end.y),
            end,
            stroke_width: if child.depth == 1 { 2.0 } else { 1.5 },
            opacity: EDGE_OPACITY,
        }
    }

    /// SVG path data.
    pub fn path_data(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y
        )
    }
}

/// Complete render frame data sent to the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFrame {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
    pub transform: ScreenTransform,
    pub svg_transform: String,
    pub viewport: ViewportState,
    pub width: f64,
    pub height: f64,
    pub zoom_percent: u32,
    /// Margin-padded extent of all nodes; `None` when there is nothing to draw.
    pub content_bounds: Option<BBox>,
}

impl RenderFrame {
    /// Frame for the "no mind map yet" state.
    pub fn empty(viewport: &ViewportController) -> Self {
        Self::build(&[], viewport)
    }

    pub fn build(layout: &[LayoutNode], viewport: &ViewportController) -> Self {
        Self::build_with_margin(layout, viewport, CONTENT_MARGIN)
    }

    pub fn build_with_margin(
        layout: &[LayoutNode],
        viewport: &ViewportController,
        margin: f64,
    ) -> Self {
        let bounds = content_bounds(layout, margin);
        let transform = viewport.transform(bounds.as_ref());
        let (width, height) = viewport.size();

        // First occurrence wins: with duplicated ids, the copy placed first
        // is the one the tree walk attached the children to.
        let mut by_id: HashMap<&str, &LayoutNode> = HashMap::with_capacity(layout.len());
        for node in layout {
            by_id.entry(node.id.as_str()).or_insert(node);
        }

        let edges: Vec<RenderEdge> = layout
            .iter()
            .filter(|n| !n.is_root())
            .filter_map(|child| {
                let parent = by_id.get(child.parent_id.as_deref()?)?;
                Some(RenderEdge::between(parent, child))
            })
            .collect();

        let nodes: Vec<RenderNode> = layout.iter().map(RenderNode::from_layout).collect();

        log::debug!(
            "Render frame: {} nodes, {} edges, zoom {}%",
            nodes.len(),
            edges.len(),
            viewport.zoom_percent()
        );

        Self {
            nodes,
            edges,
            svg_transform: transform.to_svg(),
            transform,
            viewport: *viewport.state(),
            width,
            height,
            zoom_percent: viewport.zoom_percent(),
            content_bounds: bounds,
        }
    }

    /// True when the host should show the empty state instead of a canvas.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Shorten long labels to fit inside a box.
pub fn display_label(label: &str) -> String {
    if label.chars().count() > MAX_LABEL_CHARS {
        let kept: String = label.chars().take(TRUNCATED_LABEL_CHARS).collect();
        format!("{kept}…")
    } else {
        label.to_string()
    }
}

//! Deterministic left-to-right tree layout.
//!
//! Two passes over a [`MindMapTree`]: subtree heights bottom-up, then
//! positions top-down. The root is centered on the content-space origin and
//! each level sits a fixed advance to the right of its parent. A parent is
//! vertically centered on the span of its children's subtrees.

use crate::config::LayoutConfig;
use crate::geometry::BBox;
use crate::node::{LayoutNode, MindMapNode};
use crate::tree::MindMapTree;

/// Lay out `nodes` with the default configuration.
pub fn compute_layout(nodes: &[MindMapNode]) -> Vec<LayoutNode> {
    compute_layout_with(nodes, &LayoutConfig::default())
}

/// Lay out `nodes` in pre-order (parents before children, siblings in input
/// order). Nodes unreachable from the root are left out.
///
/// `config` must pass [`LayoutConfig::validate`]; a non-finite or negative
/// metric yields non-finite coordinates. [`LayoutConfig::from_json`]
/// validates on load.
pub fn compute_layout_with(nodes: &[MindMapNode], config: &LayoutConfig) -> Vec<LayoutNode> {
    debug_assert!(
        config.validate().is_ok(),
        "invalid layout config: {:?}",
        config.validate()
    );

    let Some(tree) = MindMapTree::build(nodes) else {
        return Vec::new();
    };

    let heights = subtree_heights(&tree, nodes.len(), config);
    let centers = place(&tree, nodes.len(), &heights, config);

    let layout: Vec<LayoutNode> = tree
        .preorder()
        .iter()
        .map(|&i| {
            let node = &nodes[i];
            let depth = tree.depth(i);
            let (cx, cy) = centers[i];
            let width = config.node_width(&node.label, depth);
            LayoutNode {
                id: node.id.clone(),
                label: node.label.clone(),
                parent_id: node.parent_id.clone(),
                x: cx - width / 2.0,
                y: cy - config.node_height / 2.0,
                width,
                height: config.node_height,
                depth,
                color: config.palette.color_for_depth(depth).to_string(),
            }
        })
        .collect();

    log::debug!(
        "Laid out {} of {} nodes ({} unreachable, {} cyclic links skipped)",
        layout.len(),
        nodes.len(),
        tree.unreachable_count(nodes.len()),
        tree.skipped_links()
    );

    layout
}

/// Vertical space needed by each reachable node and its descendants.
fn subtree_heights(tree: &MindMapTree, total: usize, config: &LayoutConfig) -> Vec<f64> {
    let mut heights = vec![config.node_height; total];
    // Reverse pre-order visits every child before its parent.
    for &i in tree.preorder().iter().rev() {
        let children = tree.children(i);
        if children.is_empty() {
            continue;
        }
        let stacked: f64 = children.iter().map(|&c| heights[c]).sum();
        let gaps = (children.len() - 1) as f64 * config.vertical_gap;
        heights[i] = config.node_height.max(stacked + gaps);
    }
    heights
}

/// Center point of each reachable node.
fn place(
    tree: &MindMapTree,
    total: usize,
    heights: &[f64],
    config: &LayoutConfig,
) -> Vec<(f64, f64)> {
    let mut centers = vec![(0.0, 0.0); total];
    for &i in tree.preorder() {
        let (x, center_y) = centers[i];
        let child_x = x + config.level_advance(tree.depth(i));
        let mut cursor = center_y - heights[i] / 2.0;
        for &c in tree.children(i) {
            centers[c] = (child_x, cursor + heights[c] / 2.0);
            cursor += heights[c] + config.vertical_gap;
        }
    }
    centers
}

/// Extent of all node boxes grown by `margin` on every side.
pub fn content_bounds(nodes: &[LayoutNode], margin: f64) -> Option<BBox> {
    nodes
        .iter()
        .map(LayoutNode::bbox)
        .reduce(|acc, bb| acc.union(&bb))
        .map(|bb| bb.expand(margin))
}

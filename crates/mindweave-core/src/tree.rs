use std::collections::HashMap;

use crate::node::MindMapNode;

/// The rooted tree reachable from a node list's root, indexed by position in
/// the input slice.
///
/// Built once in O(n) from an id index. Nodes are claimed the first time
/// they are reached, so any parent link that would revisit a claimed node
/// (a cycle, or a duplicated id) is skipped rather than followed. Nodes the
/// walk never reaches are not part of the tree.
#[derive(Debug, Clone)]
pub struct MindMapTree {
    root: usize,
    /// Tree children per input index, in input order.
    children: Vec<Vec<usize>>,
    depth: Vec<usize>,
    /// Reachable input indices in pre-order.
    preorder: Vec<usize>,
    skipped_links: usize,
}

impl MindMapTree {
    /// Returns `None` for an empty node list.
    pub fn build(nodes: &[MindMapNode]) -> Option<Self> {
        if nodes.is_empty() {
            return None;
        }

        let root = nodes
            .iter()
            .position(MindMapNode::is_root_candidate)
            .unwrap_or(0);

        let mut by_parent: HashMap<&str, Vec<usize>> = HashMap::new();
        for (i, node) in nodes.iter().enumerate() {
            if let Some(parent) = node.parent() {
                by_parent.entry(parent).or_default().push(i);
            }
        }

        let mut children = vec![Vec::new(); nodes.len()];
        let mut depth = vec![0; nodes.len()];
        let mut claimed = vec![false; nodes.len()];
        let mut preorder = Vec::with_capacity(nodes.len());
        let mut skipped_links = 0;

        claimed[root] = true;
        let mut stack = vec![root];
        while let Some(i) = stack.pop() {
            preorder.push(i);
            let candidates = by_parent
                .get(nodes[i].id.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            for &c in candidates {
                if claimed[c] {
                    skipped_links += 1;
                    continue;
                }
                claimed[c] = true;
                depth[c] = depth[i] + 1;
                children[i].push(c);
            }
            // Reverse so the first child is expanded next.
            stack.extend(children[i].iter().rev());
        }

        Some(Self {
            root,
            children,
            depth,
            preorder,
            skipped_links,
        })
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn children(&self, index: usize) -> &[usize] {
        &self.children[index]
    }

    pub fn depth(&self, index: usize) -> usize {
        self.depth[index]
    }

    /// Reachable nodes, parents before children, siblings in input order.
    pub fn preorder(&self) -> &[usize] {
        &self.preorder
    }

    /// Number of reachable nodes.
    pub fn len(&self) -> usize {
        self.preorder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preorder.is_empty()
    }

    /// Parent links that pointed back at an already placed node.
    pub fn skipped_links(&self) -> usize {
        self.skipped_links
    }

    /// Input nodes not reachable from the root.
    pub fn unreachable_count(&self, total: usize) -> usize {
        total.saturating_sub(self.preorder.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(nodes: &[MindMapNode], indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| nodes[i].id.clone()).collect()
    }

    #[test]
    fn test_empty_list_has_no_tree() {
        assert!(MindMapTree::build(&[]).is_none());
    }

    #[test]
    fn test_root_is_first_parentless_node() {
        let nodes = vec![
            MindMapNode::child("b", "B", "a"),
            MindMapNode::root("a", "A"),
            MindMapNode::root("z", "Z"),
        ];
        let tree = MindMapTree::build(&nodes).unwrap();
        assert_eq!(tree.root(), 1);
        assert_eq!(ids(&nodes, tree.preorder()), vec!["a", "b"]);
    }

    #[test]
    fn test_fallback_root_when_every_node_has_parent() {
        let nodes = vec![
            MindMapNode::child("a", "A", "missing"),
            MindMapNode::child("b", "B", "a"),
        ];
        let tree = MindMapTree::build(&nodes).unwrap();
        assert_eq!(tree.root(), 0);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.depth(1), 1);
    }

    #[test]
    fn test_preorder_keeps_sibling_order() {
        let nodes = vec![
            MindMapNode::root("r", "R"),
            MindMapNode::child("a", "A", "r"),
            MindMapNode::child("b", "B", "r"),
            MindMapNode::child("a1", "A1", "a"),
            MindMapNode::child("b1", "B1", "b"),
            MindMapNode::child("a2", "A2", "a"),
        ];
        let tree = MindMapTree::build(&nodes).unwrap();
        assert_eq!(
            ids(&nodes, tree.preorder()),
            vec!["r", "a", "a1", "a2", "b", "b1"]
        );
        assert_eq!(ids(&nodes, tree.children(0)), vec!["a", "b"]);
        assert_eq!(tree.depth(5), 2);
    }

    #[test]
    fn test_cycle_terminates() {
        let nodes = vec![
            MindMapNode::child("a", "A", "b"),
            MindMapNode::child("b", "B", "a"),
        ];
        let tree = MindMapTree::build(&nodes).unwrap();
        assert_eq!(ids(&nodes, tree.preorder()), vec!["a", "b"]);
        assert_eq!(tree.skipped_links(), 1);
    }

    #[test]
    fn test_disconnected_component_unreachable() {
        let nodes = vec![
            MindMapNode::root("r", "R"),
            MindMapNode::child("x", "X", "y"),
            MindMapNode::child("y", "Y", "x"),
        ];
        let tree = MindMapTree::build(&nodes).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.unreachable_count(nodes.len()), 2);
    }
}

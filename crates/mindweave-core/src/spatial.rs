use rstar::{RTree, RTreeObject, AABB};

use crate::geometry::{BBox, Point};
use crate::node::LayoutNode;

/// An entry in the R-tree spatial index, referencing a laid-out node by its
/// position in the layout list.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    /// Index into the layout node list.
    pub node_index: usize,
    /// Box of the node in content space.
    pub bbox: BBox,
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bbox.min.x, self.bbox.min.y],
            [self.bbox.max.x, self.bbox.max.y],
        )
    }
}

/// Spatial index over node boxes for pointer hit testing and viewport culling.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    /// Bulk-load the index from a computed layout.
    pub fn from_layout(nodes: &[LayoutNode]) -> Self {
        let entries = nodes
            .iter()
            .enumerate()
            .map(|(node_index, node)| SpatialEntry {
                node_index,
                bbox: node.bbox(),
            })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Find the indices of all nodes whose box contains the given point,
    /// in ascending order.
    pub fn query_point(&self, point: &Point) -> Vec<usize> {
        let mut hits: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&AABB::from_point([point.x, point.y]))
            .map(|e| e.node_index)
            .collect();
        hits.sort_unstable();
        hits
    }

    /// Find the indices of all nodes intersecting the given content-space
    /// rectangle, in ascending order.
    pub fn query_region(&self, region: &BBox) -> Vec<usize> {
        let envelope = AABB::from_corners(
            [region.min.x, region.min.y],
            [region.max.x, region.max.y],
        );
        let mut hits: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|e| e.node_index)
            .collect();
        hits.sort_unstable();
        hits
    }

    /// Number of entries in the index.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

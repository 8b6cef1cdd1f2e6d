//! Traversal queries: the two constant-setup, linear-in-degree walks the
//! winged-edge table is built to support — half-edges around a node in
//! clockwise order, and half-edges bounding a face in clockwise order.
//!
//! Both are plain pointer-chases over the rotational maps in [`crate::wed`];
//! an unknown node or face yields an empty result rather than an error, per
//! the query-time failure semantics.

use std::hash::Hash;

use crate::ids::{FaceId, HalfEdgeId};
use crate::wed::WingedEdge;

impl<N: Clone + Eq + Hash> WingedEdge<N> {
    /// Half-edges incident to `node` in clockwise order, starting from
    /// `node_edge[node]`. Empty if `node` is unknown or isolated.
    pub fn enum_links_node(&self, node: &N) -> Vec<HalfEdgeId> {
        let Some(n) = self.node_id(node) else {
            return Vec::new();
        };
        let Some(start) = self.node_edge_slot(n) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        let mut current = start;
        loop {
            out.push(current);
            let he = self.half_edge(current);
            current = if he.start == n { he.start_c } else { he.end_c };
            if current == start || out.len() > self.num_half_edges() {
                break;
            }
        }
        out
    }

    /// Half-edges bounding `face` in clockwise order, starting from
    /// `region_edge[face]`. Empty if `face` is unknown.
    pub fn enum_edges_region(&self, face: FaceId) -> Vec<HalfEdgeId> {
        let Some(start) = self.region_edge_slot(face) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        let mut current = start;
        loop {
            out.push(current);
            let he = self.half_edge(current);
            current = if he.right_polygon == Some(face) {
                he.end_cc
            } else {
                he.start_cc
            };
            if current == start || out.len() > self.num_half_edges() {
                break;
            }
        }
        out
    }
}

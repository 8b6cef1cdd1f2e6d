//! The winged-edge arena: flat `Vec`-backed storage for nodes, half-edges,
//! and faces, addressed by the index types in [`crate::ids`].
//!
//! Every directed half-edge carries the eleven winged-edge pointers as
//! plain fields rather than as separate maps keyed by `(node, node)` pairs —
//! `start_node`/`end_node` are `start`/`end`, `right_polygon`/`left_polygon`
//! are `Option<FaceId>` (unset until the face builder or exterior stitcher
//! assigns them), and the four rotational pointers are set to a
//! self-reference placeholder at allocation time, mirroring how a fresh
//! half-edge has no `next`/`prev` until the caller wires the cycle up.

use ahash::AHashMap;
use std::hash::Hash;

use crate::ids::{FaceId, HalfEdgeId, NodeId};

#[derive(Clone, Debug)]
pub struct HalfEdge {
    pub start: NodeId,
    pub end: NodeId,
    pub twin: HalfEdgeId,
    pub right_polygon: Option<FaceId>,
    pub left_polygon: Option<FaceId>,
    pub start_c: HalfEdgeId,
    pub start_cc: HalfEdgeId,
    pub end_c: HalfEdgeId,
    pub end_cc: HalfEdgeId,
}

/// A winged-edge planar subdivision over externally supplied node ids `N`.
///
/// Built once via [`crate::build::build`] and read-only thereafter.
#[derive(Clone, Debug)]
pub struct WingedEdge<N> {
    pub(crate) node_ids: Vec<N>,
    pub(crate) node_coords: Vec<(f64, f64)>,
    pub(crate) node_index: AHashMap<N, NodeId>,
    pub(crate) node_edge: Vec<Option<HalfEdgeId>>,

    pub(crate) half_edges: Vec<HalfEdge>,
    pub(crate) edge_index: AHashMap<(NodeId, NodeId), HalfEdgeId>,

    pub(crate) num_bounded_faces: usize,
    pub(crate) exterior_face: FaceId,
    pub(crate) region_edge: Vec<Option<HalfEdgeId>>,
}

impl<N: Clone + Eq + Hash> WingedEdge<N> {
    pub(crate) fn empty() -> Self {
        Self {
            node_ids: Vec::new(),
            node_coords: Vec::new(),
            node_index: AHashMap::new(),
            node_edge: Vec::new(),
            half_edges: Vec::new(),
            edge_index: AHashMap::new(),
            num_bounded_faces: 0,
            exterior_face: FaceId(0),
            region_edge: Vec::new(),
        }
    }

    /// Intern an external node id, assigning it a dense `NodeId` the first
    /// time it is seen. Re-inserting the same id is a no-op and returns the
    /// existing `NodeId`.
    pub(crate) fn intern_node(&mut self, id: N, coords: (f64, f64)) -> NodeId {
        if let Some(&existing) = self.node_index.get(&id) {
            return existing;
        }
        let node_id = NodeId(self.node_ids.len());
        self.node_ids.push(id.clone());
        self.node_coords.push(coords);
        self.node_edge.push(None);
        self.node_index.insert(id, node_id);
        node_id
    }

    /// Allocate a twin pair of half-edges `u -> v` and `v -> u`. Rotational
    /// pointers are set to a self-reference placeholder; callers fix them up
    /// once the relevant cycle is known. Returns `(uv, vu)`.
    pub(crate) fn push_edge_pair(&mut self, u: NodeId, v: NodeId) -> (HalfEdgeId, HalfEdgeId) {
        let uv = HalfEdgeId(self.half_edges.len());
        let vu = HalfEdgeId(self.half_edges.len() + 1);

        self.half_edges.push(HalfEdge {
            start: u,
            end: v,
            twin: vu,
            right_polygon: None,
            left_polygon: None,
            start_c: uv,
            start_cc: uv,
            end_c: uv,
            end_cc: uv,
        });
        self.half_edges.push(HalfEdge {
            start: v,
            end: u,
            twin: uv,
            right_polygon: None,
            left_polygon: None,
            start_c: vu,
            start_cc: vu,
            end_c: vu,
            end_cc: vu,
        });

        self.edge_index.insert((u, v), uv);
        self.edge_index.insert((v, u), vu);

        (uv, vu)
    }

    pub(crate) fn half_edge_between(&self, u: NodeId, v: NodeId) -> Option<HalfEdgeId> {
        self.edge_index.get(&(u, v)).copied()
    }

    // -----------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------

    pub fn half_edge(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.half_edges[id.0]
    }

    pub(crate) fn half_edge_mut(&mut self, id: HalfEdgeId) -> &mut HalfEdge {
        &mut self.half_edges[id.0]
    }

    pub fn num_nodes(&self) -> usize {
        self.node_ids.len()
    }

    pub fn num_half_edges(&self) -> usize {
        self.half_edges.len()
    }

    /// Number of bounded (finite) faces; the exterior face is not counted.
    pub fn num_bounded_faces(&self) -> usize {
        self.num_bounded_faces
    }

    /// The sentinel face id denoting the unbounded exterior.
    pub fn exterior_face(&self) -> FaceId {
        self.exterior_face
    }

    pub fn is_exterior(&self, face: FaceId) -> bool {
        face == self.exterior_face
    }

    /// The external id a node was constructed with.
    pub fn node_external_id(&self, node: NodeId) -> Option<&N> {
        self.node_ids.get(node.0)
    }

    /// Look up the internal `NodeId` for an external node id.
    pub fn node_id(&self, external: &N) -> Option<NodeId> {
        self.node_index.get(external).copied()
    }

    pub fn node_coords(&self, node: NodeId) -> Option<(f64, f64)> {
        self.node_coords.get(node.0).copied()
    }

    pub(crate) fn node_edge_slot(&self, node: NodeId) -> Option<HalfEdgeId> {
        self.node_edge.get(node.0).copied().flatten()
    }

    pub(crate) fn set_node_edge(&mut self, node: NodeId, he: HalfEdgeId) {
        let slot = &mut self.node_edge[node.0];
        if slot.is_none() {
            *slot = Some(he);
        }
    }

    pub(crate) fn region_edge_slot(&self, face: FaceId) -> Option<HalfEdgeId> {
        self.region_edge.get(face.0).copied().flatten()
    }

    pub(crate) fn set_region_edge(&mut self, face: FaceId, he: HalfEdgeId) {
        if face.0 >= self.region_edge.len() {
            self.region_edge.resize(face.0 + 1, None);
        }
        self.region_edge[face.0] = Some(he);
    }
}

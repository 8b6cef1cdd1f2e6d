//! A winged-edge planar subdivision built from an embedded planar graph.
//!
//! Given a set of 2D nodes and a set of non-crossing undirected edges
//! between them, [`WingedEdge::build`] computes, for every directed
//! half-edge, the incident left/right faces and the four rotational
//! neighbors (clockwise/counter-clockwise around each endpoint). The result
//! supports constant-setup traversal of all half-edges around a node
//! ([`WingedEdge::enum_links_node`]) or bounding a face
//! ([`WingedEdge::enum_edges_region`]), both in clockwise order.
//!
//! Construction runs five stages in sequence: normalize the input edge list,
//! extract a minimum cycle basis plus dangling filaments (after Eberly),
//! assign face pointers to each bounded cycle, stitch the unbounded
//! exterior face from the leftover boundary, and splice the filaments back
//! into the rotational structure. See `DESIGN.md` for how each stage maps
//! onto a source module.

mod adjacency;
mod build;
mod error;
mod exterior;
mod extract;
mod faces;
mod filament;
mod geomutil;
mod ids;
mod normalize;
mod query;
mod wed;

pub use adjacency::{AdjacencyMatrix, EdgeAdjacency};
pub use error::WedError;
pub use ids::{FaceId, HalfEdgeId, NodeId};
pub use wed::{HalfEdge, WingedEdge};

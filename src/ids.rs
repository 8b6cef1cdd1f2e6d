//! Dense arena index types used throughout the winged-edge structure.
//!
//! Every node, half-edge, and face is addressed by one of these newtypes
//! rather than by pointer; `HalfEdgeId`s are allocated in consecutive twin
//! pairs, so `HalfEdgeId(i).0 ^ 1 == twin.0` holds for every half-edge, though
//! the twin is still stored explicitly rather than computed on access.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub usize);

impl fmt::Display for HalfEdgeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HalfEdgeId({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FaceId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(NodeId(3).to_string(), "NodeId(3)");
        assert_eq!(HalfEdgeId(7).to_string(), "HalfEdgeId(7)");
        assert_eq!(FaceId(0).to_string(), "FaceId(0)");
    }

    #[test]
    fn ordered_by_index() {
        assert!(NodeId(0) < NodeId(1));
        assert!(HalfEdgeId(4) < HalfEdgeId(5));
        assert!(FaceId(0) < FaceId(1));
    }
}

//! Graph Normalizer: canonicalize caller-supplied edges into a fully
//! doubled, self-loop-free directed edge set over interned `NodeId`s.

use ahash::AHashSet;
use std::hash::Hash;

use crate::error::WedError;
use crate::ids::NodeId;
use crate::wed::WingedEdge;

/// Validate and double `edges` against the nodes already interned in `wed`.
///
/// Every edge endpoint must already be a known node (checked via
/// [`WingedEdge::node_id`]); an unknown endpoint is `InvalidInput`.
/// Self-loops are silently dropped. The result contains both directions of
/// every surviving undirected edge, with no duplicates.
pub(crate) fn normalize_edges<N: Clone + Eq + Hash>(
    wed: &WingedEdge<N>,
    edges: impl IntoIterator<Item = (N, N)>,
) -> Result<Vec<(NodeId, NodeId)>, WedError> {
    let mut pairs = Vec::new();
    for (a, b) in edges {
        let u = wed
            .node_id(&a)
            .ok_or_else(|| WedError::InvalidInput("edge references a node id not present in the coordinate map".into()))?;
        let v = wed
            .node_id(&b)
            .ok_or_else(|| WedError::InvalidInput("edge references a node id not present in the coordinate map".into()))?;
        if u == v {
            continue;
        }
        pairs.push((u, v));
    }

    let seen: AHashSet<(NodeId, NodeId)> = pairs.iter().copied().collect();
    let already_doubled = pairs
        .iter()
        .filter(|&&(u, v)| seen.contains(&(v, u)))
        .count();

    let mut doubled: AHashSet<(NodeId, NodeId)> = AHashSet::new();
    if already_doubled < pairs.len() / 2 {
        for &(u, v) in &pairs {
            doubled.insert((u, v));
            doubled.insert((v, u));
        }
    } else {
        for &(u, v) in &pairs {
            doubled.insert((u, v));
        }
    }

    Ok(doubled.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wed::WingedEdge;

    fn triangle() -> WingedEdge<u32> {
        let mut wed = WingedEdge::empty();
        wed.intern_node(0, (0.0, 0.0));
        wed.intern_node(1, (1.0, 0.0));
        wed.intern_node(2, (0.0, 1.0));
        wed
    }

    #[test]
    fn single_direction_edges_get_doubled() {
        let wed = triangle();
        let out = normalize_edges(&wed, [(0u32, 1u32), (1, 2), (2, 0)]).unwrap();
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn already_doubled_edges_stay_doubled_without_duplication() {
        let wed = triangle();
        let out = normalize_edges(
            &wed,
            [(0u32, 1u32), (1, 0), (1, 2), (2, 1), (2, 0), (0, 2)],
        )
        .unwrap();
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn self_loops_are_dropped() {
        let wed = triangle();
        let out = normalize_edges(&wed, [(0u32, 1u32), (1, 1), (1, 0)]).unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn unknown_node_is_invalid_input() {
        let wed = triangle();
        let err = normalize_edges(&wed, [(0u32, 99u32)]).unwrap_err();
        assert!(matches!(err, WedError::InvalidInput(_)));
    }
}

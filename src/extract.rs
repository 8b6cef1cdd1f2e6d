//! Eberly minimum-cycle-basis extraction: decomposes a planar graph into
//! bounded cycles, dangling filaments, and isolated vertices.
//!
//! This mutates a scratch adjacency copy of the normalized edge set (never
//! the arena itself) and produces node-sequence results that the face
//! builder, exterior stitcher, and filament inserter consume in turn.

use ahash::AHashSet;

use crate::error::WedError;
use crate::geomutil::{cross, sub, Point};
use crate::ids::NodeId;

pub(crate) struct ExtractResult {
    /// CCW node cycles, each closed (first node repeated at the end).
    pub regions: Vec<Vec<NodeId>>,
    /// Node paths; both endpoints included.
    pub filaments: Vec<Vec<NodeId>>,
    pub isolated: Vec<NodeId>,
}

pub(crate) fn extract(
    coords: &[Point],
    node_count: usize,
    edges: &[(NodeId, NodeId)],
) -> Result<ExtractResult, WedError> {
    for &(u, v) in edges {
        if coords[u.0] == coords[v.0] {
            return Err(WedError::DegenerateGeometry(
                "two distinct nodes share identical coordinates".into(),
            ));
        }
    }

    let mut adj: Vec<Vec<NodeId>> = vec![Vec::new(); node_count];
    for &(u, v) in edges {
        adj[u.0].push(v);
    }
    for neighbors in &mut adj {
        neighbors.sort();
    }

    let mut queued = vec![true; node_count];
    let mut cycle_edge: AHashSet<(NodeId, NodeId)> = AHashSet::new();
    let mut regions = Vec::new();
    let mut filaments = Vec::new();
    let mut isolated = Vec::new();

    while let Some(v0) = find_start(coords, &queued) {
        let degree = adj[v0.0].len();
        if degree == 0 {
            isolated.push(v0);
            queued[v0.0] = false;
        } else if degree == 1 {
            let v1 = adj[v0.0][0];
            peel(&mut adj, &mut queued, &mut cycle_edge, &mut filaments, v0, v1);
        } else {
            extract_primitive(
                coords,
                &mut adj,
                &mut queued,
                &mut cycle_edge,
                &mut regions,
                &mut filaments,
                v0,
            )?;
        }
    }

    Ok(ExtractResult {
        regions,
        filaments,
        isolated,
    })
}

fn find_start(coords: &[Point], queued: &[bool]) -> Option<NodeId> {
    queued
        .iter()
        .enumerate()
        .filter(|&(_, &q)| q)
        .map(|(i, _)| NodeId(i))
        .min_by(|&a, &b| {
            let (ax, ay) = coords[a.0];
            let (bx, by) = coords[b.0];
            ax.partial_cmp(&bx)
                .unwrap()
                .then(ay.partial_cmp(&by).unwrap())
                .then(a.0.cmp(&b.0))
        })
}

fn remove_edge(adj: &mut [Vec<NodeId>], u: NodeId, v: NodeId) {
    if let Some(pos) = adj[u.0].iter().position(|&x| x == v) {
        adj[u.0].remove(pos);
    }
    if let Some(pos) = adj[v.0].iter().position(|&x| x == u) {
        adj[v.0].remove(pos);
    }
}

/// The clockwise-most neighbor of `v0`, using the fixed reference direction
/// `(0, -1)` in place of an incoming direction (there is no predecessor at
/// the very start of a primitive extraction).
fn clockwise_most(coords: &[Point], candidates: &[NodeId], v0: NodeId) -> Option<NodeId> {
    let d_curr: Point = (0.0, -1.0);
    let c = coords[v0.0];

    let mut best: Option<NodeId> = None;
    let mut d_best: Point = (0.0, 0.0);
    let mut convex = true;

    for &a in candidates {
        let e_a = sub(coords[a.0], c);
        if best.is_none() {
            best = Some(a);
            d_best = e_a;
            convex = cross(d_best, d_curr) <= 0.0;
            continue;
        }
        let better = if convex {
            cross(d_curr, e_a) < 0.0 || cross(d_best, e_a) < 0.0
        } else {
            cross(d_curr, e_a) < 0.0 && cross(d_best, e_a) < 0.0
        };
        if better {
            best = Some(a);
            d_best = e_a;
            convex = cross(d_best, d_curr) <= 0.0;
        }
    }
    best
}

/// The counter-clockwise-most neighbor of `v_curr`, excluding `v_prev`
/// (no backtracking).
fn counterclockwise_most(
    coords: &[Point],
    candidates: &[NodeId],
    v_curr: NodeId,
    v_prev: NodeId,
) -> Option<NodeId> {
    let c = coords[v_curr.0];
    let d_curr = sub(c, coords[v_prev.0]);

    let mut best: Option<NodeId> = None;
    let mut d_best: Point = (0.0, 0.0);
    let mut convex = true;

    for &a in candidates {
        if a == v_prev {
            continue;
        }
        let e_a = sub(coords[a.0], c);
        if best.is_none() {
            best = Some(a);
            d_best = e_a;
            convex = cross(d_best, d_curr) <= 0.0;
            continue;
        }
        let better = if convex {
            cross(d_curr, e_a) > 0.0 && cross(d_best, e_a) > 0.0
        } else {
            cross(d_curr, e_a) > 0.0 || cross(d_best, e_a) > 0.0
        };
        if better {
            best = Some(a);
            d_best = e_a;
            convex = cross(d_best, d_curr) <= 0.0;
        }
    }
    best
}

#[allow(clippy::too_many_arguments)]
fn extract_primitive(
    coords: &[Point],
    adj: &mut [Vec<NodeId>],
    queued: &mut [bool],
    cycle_edge: &mut AHashSet<(NodeId, NodeId)>,
    regions: &mut Vec<Vec<NodeId>>,
    filaments: &mut Vec<Vec<NodeId>>,
    v0: NodeId,
) -> Result<(), WedError> {
    let v1 = clockwise_most(coords, &adj[v0.0], v0).ok_or_else(|| {
        WedError::NonPlanarOrSelfIntersecting(
            "no clockwise-most neighbor at a node with degree >= 2".into(),
        )
    })?;

    let mut sequence = vec![v0];
    let mut visited: Vec<NodeId> = Vec::new();
    let mut v_prev = v0;
    let mut v_curr: Option<NodeId> = Some(v1);

    loop {
        match v_curr {
            None => break,
            Some(c) if c == v0 || visited.contains(&c) => break,
            Some(c) => {
                sequence.push(c);
                visited.push(c);
                let candidates = adj[c.0].clone();
                let next = counterclockwise_most(coords, &candidates, c, v_prev);
                v_prev = c;
                v_curr = next;
            }
        }
    }

    match v_curr {
        None => {
            // Dead end reached away from v0: a filament, not necessarily
            // starting at v0.
            let nbr = adj[v_prev.0][0];
            peel(adj, queued, cycle_edge, filaments, v_prev, nbr);
        }
        Some(c) if c == v0 => {
            sequence.push(v0);
            regions.push(sequence.clone());
            remove_edge(adj, v0, v1);
            queued[v0.0] = false;

            if adj[v0.0].len() == 1 {
                let nbr = adj[v0.0][0];
                cycle_edge.insert((v0, nbr));
                cycle_edge.insert((nbr, v0));
                peel(adj, queued, cycle_edge, filaments, v0, nbr);
            }
            if adj[v1.0].len() == 1 {
                let nbr = adj[v1.0][0];
                cycle_edge.insert((v1, nbr));
                cycle_edge.insert((nbr, v1));
                peel(adj, queued, cycle_edge, filaments, v1, nbr);
            }

            let closed = &sequence[..sequence.len() - 1];
            for w in closed.windows(2) {
                cycle_edge.insert((w[0], w[1]));
                cycle_edge.insert((w[1], w[0]));
            }
        }
        Some(_) => {
            // v_curr revisited a node seen earlier in this walk (but not
            // v0): walk forward from v0 itself along the degree-2 chain
            // until a branch point, then extract the filament there.
            let mut cur = v0;
            let mut prev = v1;
            while adj[cur.0].len() == 2 {
                let next = if adj[cur.0][0] != prev {
                    adj[cur.0][0]
                } else {
                    adj[cur.0][1]
                };
                prev = cur;
                cur = next;
            }
            peel(adj, queued, cycle_edge, filaments, cur, prev);
        }
    }

    Ok(())
}

fn peel(
    adj: &mut [Vec<NodeId>],
    queued: &mut [bool],
    cycle_edge: &mut AHashSet<(NodeId, NodeId)>,
    filaments: &mut Vec<Vec<NodeId>>,
    mut v0: NodeId,
    mut v1: NodeId,
) {
    let iscycle = cycle_edge.contains(&(v0, v1));

    if iscycle {
        if adj[v0.0].len() >= 3 {
            remove_edge(adj, v0, v1);
            v0 = v1;
            if adj[v0.0].len() == 1 {
                v1 = adj[v0.0][0];
            }
        }
        while adj[v0.0].len() == 1 {
            v1 = adj[v0.0][0];
            if cycle_edge.contains(&(v0, v1)) {
                remove_edge(adj, v0, v1);
                queued[v0.0] = false;
                v0 = v1;
            } else {
                break;
            }
        }
        if adj[v0.0].is_empty() {
            queued[v0.0] = false;
        }
    } else {
        let mut primitive = Vec::new();
        if adj[v0.0].len() >= 3 {
            primitive.push(v0);
            remove_edge(adj, v0, v1);
            v0 = v1;
            if adj[v0.0].len() == 1 {
                v1 = adj[v0.0][0];
            }
        }
        while adj[v0.0].len() == 1 {
            primitive.push(v0);
            let next = adj[v0.0][0];
            remove_edge(adj, v0, next);
            queued[v0.0] = false;
            v0 = next;
        }
        primitive.push(v0);
        if adj[v0.0].is_empty() {
            queued[v0.0] = false;
        }
        filaments.push(primitive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mkedges(pairs: &[(usize, usize)]) -> Vec<(NodeId, NodeId)> {
        let mut v = Vec::new();
        for &(a, b) in pairs {
            v.push((NodeId(a), NodeId(b)));
            v.push((NodeId(b), NodeId(a)));
        }
        v
    }

    #[test]
    fn single_triangle_is_one_region() {
        let coords = vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
        let edges = mkedges(&[(0, 1), (1, 2), (2, 0)]);
        let result = extract(&coords, 3, &edges).unwrap();
        assert_eq!(result.regions.len(), 1);
        assert!(result.filaments.is_empty());
        assert!(result.isolated.is_empty());
    }

    #[test]
    fn isolated_vertex_alone() {
        let coords = vec![(0.0, 0.0)];
        let result = extract(&coords, 1, &[]).unwrap();
        assert_eq!(result.isolated, vec![NodeId(0)]);
    }

    #[test]
    fn duplicate_coordinates_are_degenerate() {
        let coords = vec![(0.0, 0.0), (0.0, 0.0)];
        let edges = mkedges(&[(0, 1)]);
        let err = extract(&coords, 2, &edges).unwrap_err();
        assert!(matches!(err, WedError::DegenerateGeometry(_)));
    }

    #[test]
    fn two_triangles_sharing_an_edge_is_two_regions() {
        let coords = vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)];
        let edges = mkedges(&[(0, 1), (1, 2), (2, 0), (1, 3), (3, 2)]);
        let result = extract(&coords, 4, &edges).unwrap();
        assert_eq!(result.regions.len(), 2);
    }

    /// The 28-vertex Eberly reference graph: 7 bounded cycles, 3 filaments,
    /// one unused isolated node id (0).
    #[test]
    fn eberly_reference_graph_yields_seven_regions_and_three_filaments() {
        let vertices: [(f64, f64); 28] = [
            (1.0, 8.0), (1.0, 7.0), (4.0, 7.0), (0.0, 4.0), (5.0, 4.0), (3.0, 5.0),
            (2.0, 4.5), (6.5, 9.0), (6.2, 5.0), (5.5, 3.0), (7.0, 3.0), (7.5, 7.25),
            (8.0, 4.0), (11.5, 7.25), (9.0, 1.0), (11.0, 3.0), (12.0, 2.0), (12.0, 5.0),
            (13.5, 6.0), (14.0, 7.25), (16.0, 4.0), (18.0, 8.5), (16.0, 1.0), (21.0, 1.0),
            (21.0, 4.0), (18.0, 3.5), (17.0, 2.0), (19.0, 2.0),
        ];
        let raw_edges: &[(usize, usize)] = &[
            (1, 2), (1, 3), (2, 1), (2, 4), (2, 7), (3, 1), (3, 4), (4, 2), (4, 3), (4, 5),
            (5, 4), (5, 6), (6, 5), (7, 2), (7, 11), (8, 9), (8, 10), (9, 8), (9, 10),
            (10, 8), (10, 9), (11, 7), (11, 12), (11, 13), (12, 11), (12, 13), (12, 20),
            (13, 11), (13, 12), (13, 18), (14, 15), (15, 14), (15, 16), (16, 15), (18, 13),
            (18, 19), (19, 18), (19, 20), (19, 21), (20, 12), (20, 19), (20, 21), (20, 22),
            (20, 24), (21, 19), (21, 20), (22, 20), (22, 23), (23, 22), (23, 24), (24, 20),
            (24, 23), (25, 26), (25, 27), (26, 25), (26, 27), (27, 25), (27, 26),
        ];
        let edges: Vec<(NodeId, NodeId)> = raw_edges
            .iter()
            .map(|&(a, b)| (NodeId(a), NodeId(b)))
            .collect();

        let result = extract(&vertices, 28, &edges).unwrap();

        assert_eq!(result.regions.len(), 7);
        assert_eq!(result.filaments.len(), 3);

        let filament_sets: AHashSet<Vec<usize>> = result
            .filaments
            .iter()
            .map(|f| {
                let mut v: Vec<usize> = f.iter().map(|n| n.0).collect();
                v.sort();
                v
            })
            .collect();
        for expected in [vec![4, 5, 6], vec![2, 7, 11], vec![14, 15, 16]] {
            assert!(filament_sets.contains(&expected), "missing filament {expected:?}");
        }

        let region_sets: AHashSet<Vec<usize>> = result
            .regions
            .iter()
            .map(|r| {
                let mut v: Vec<usize> = r[..r.len() - 1].iter().map(|n| n.0).collect();
                v.sort();
                v
            })
            .collect();
        for expected in [
            vec![1, 2, 3, 4],
            vec![8, 9, 10],
            vec![11, 12, 13],
            vec![12, 13, 18, 19, 20],
            vec![19, 20, 21],
            vec![20, 22, 23, 24],
            vec![25, 26, 27],
        ] {
            assert!(region_sets.contains(&expected), "missing region {expected:?}");
        }
    }
}

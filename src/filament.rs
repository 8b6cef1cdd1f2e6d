//! Filament Inserter: wires the interior rotational pointers of each
//! dangling chain, splices chain endpoints that touch a minimum cycle into
//! that node's rotation, and propagates face ids onto filament half-edges
//! that lie inside a bounded face (or, by default, the exterior).
//!
//! Interior filament nodes have degree 2 and are never incident to any
//! cycle, so their rotation is wired directly from the chain order. Endpoint
//! nodes may additionally be incidence nodes (members of one or more
//! extracted cycles); those get spliced into the existing node rotation by
//! polar-sorting the filament direction against the node's current links.

use std::hash::Hash;

use ahash::AHashSet;

use crate::geomutil::{ccw_angle_from, point_in_polygon, sub, Point};
use crate::ids::{FaceId, HalfEdgeId, NodeId};
use crate::wed::WingedEdge;

pub(crate) fn insert_filaments<N: Clone + Eq + Hash>(
    wed: &mut WingedEdge<N>,
    regions: &[Vec<NodeId>],
    filaments: &[Vec<NodeId>],
) {
    let mut on_cycle: AHashSet<NodeId> = AHashSet::new();
    for region in regions {
        on_cycle.extend(region.iter().copied());
    }

    for filament in filaments {
        insert_one(wed, regions, &on_cycle, filament);
    }
}

fn insert_one<N: Clone + Eq + Hash>(
    wed: &mut WingedEdge<N>,
    regions: &[Vec<NodeId>],
    on_cycle: &AHashSet<NodeId>,
    filament: &[NodeId],
) {
    let k = filament.len();
    debug_assert!(k >= 2, "a filament must have at least two nodes");

    // 1. Interior pointers: wire each interior node's straight pass-through.
    for i in 1..k - 1 {
        let edge_in = wed
            .half_edge_between(filament[i - 1], filament[i])
            .expect("filament edge must already be in the arena");
        let edge_out = wed
            .half_edge_between(filament[i], filament[i + 1])
            .expect("filament edge must already be in the arena");
        let twin_in = wed.half_edge(edge_in).twin;
        let twin_out = wed.half_edge(edge_out).twin;

        {
            let he = wed.half_edge_mut(edge_in);
            he.end_c = edge_out;
            he.end_cc = edge_out;
        }
        {
            let he = wed.half_edge_mut(edge_out);
            he.start_c = edge_in;
            he.start_cc = edge_in;
        }
        wed.half_edge_mut(twin_out).end_cc = twin_in;

        wed.set_node_edge(filament[i], edge_in);
    }

    let first_edge = wed
        .half_edge_between(filament[0], filament[1])
        .expect("filament edge must already be in the arena");
    wed.set_node_edge(filament[0], first_edge);
    let last_edge = wed
        .half_edge_between(filament[k - 1], filament[k - 2])
        .expect("filament edge must already be in the arena");
    wed.set_node_edge(filament[k - 1], last_edge);

    // Leaf-tip wraps: the outward edge at either end of the chain turns
    // around into its own twin once no further interior edge follows, so a
    // region walk reaching a filament tip reverses direction instead of
    // running off the self-reference placeholder.
    let first_edge_twin = wed.half_edge(first_edge).twin;
    wed.half_edge_mut(first_edge_twin).end_cc = first_edge;
    let last_edge_twin = wed.half_edge(last_edge).twin;
    wed.half_edge_mut(last_edge_twin).end_cc = last_edge;

    // 2/3. Splice each incidence endpoint into the existing node rotation.
    if on_cycle.contains(&filament[0]) {
        splice_at(wed, filament[0], filament[1]);
    }
    if on_cycle.contains(&filament[k - 1]) {
        splice_at(wed, filament[k - 1], filament[k - 2]);
    }

    // 4. Face propagation: default every filament edge to the exterior, then
    // override with whichever bounded cycle (if any) actually contains it.
    let exterior = wed.exterior_face();
    assign_filament_face(wed, filament, exterior);

    for &idx in &[0usize, k - 1] {
        let p = filament[idx];
        if !on_cycle.contains(&p) {
            continue;
        }
        let neighbor_idx = if idx == 0 { 1 } else { k - 2 };
        let rep = wed.node_coords(filament[neighbor_idx]).unwrap();

        for (ri, region) in regions.iter().enumerate() {
            if !region.contains(&p) {
                continue;
            }
            let poly: Vec<Point> = region[..region.len() - 1]
                .iter()
                .map(|&n| wed.node_coords(n).unwrap())
                .collect();
            if point_in_polygon(&poly, rep) {
                assign_filament_face(wed, filament, FaceId(ri));
            }
        }
    }
}

fn assign_filament_face<N: Clone + Eq + Hash>(
    wed: &mut WingedEdge<N>,
    filament: &[NodeId],
    face: FaceId,
) {
    for w in filament.windows(2) {
        let e = wed.half_edge_between(w[0], w[1]).unwrap();
        let t = wed.half_edge(e).twin;
        wed.half_edge_mut(e).right_polygon = Some(face);
        wed.half_edge_mut(e).left_polygon = Some(face);
        wed.half_edge_mut(t).right_polygon = Some(face);
        wed.half_edge_mut(t).left_polygon = Some(face);
    }
}

/// Half-edges incident to `p` (starting or ending there), in the node's
/// current clockwise rotation, starting from `node_edge[p]`.
fn links_around<N: Clone + Eq + Hash>(wed: &WingedEdge<N>, p: NodeId) -> Vec<HalfEdgeId> {
    let Some(start) = wed.node_edge_slot(p) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    let mut current = start;
    loop {
        out.push(current);
        let he = wed.half_edge(current);
        current = if he.start == p { he.start_c } else { he.end_c };
        if current == start || out.len() > wed.num_half_edges() {
            break;
        }
    }
    out
}

/// Splice filament half-edge `(p, q)` (and its twin) into `p`'s existing
/// rotation, straddled between the CCW-closest and CW-closest existing
/// links relative to the direction `p -> q`.
fn splice_at<N: Clone + Eq + Hash>(wed: &mut WingedEdge<N>, p: NodeId, q: NodeId) {
    let existing = links_around(wed, p);

    // Orient every existing incident half-edge as entering p, deduping the
    // two directions of each neighbor edge down to one entry.
    let mut entering: Vec<HalfEdgeId> = existing
        .iter()
        .map(|&he_id| {
            let he = wed.half_edge(he_id);
            if he.end == p {
                he_id
            } else {
                he.twin
            }
        })
        .collect();
    entering.sort_by_key(|he| he.0);
    entering.dedup();

    if entering.len() < 2 {
        // Degenerate: isolated incidence node with too few links to
        // straddle. Interior pointers are already recorded; skip splicing.
        return;
    }

    let p_coord = wed.node_coords(p).unwrap();
    let q_dir = sub(wed.node_coords(q).unwrap(), p_coord);

    let mut e_ccw = entering[0];
    let mut e_cw = entering[0];
    let mut angle_ccw = f64::INFINITY;
    let mut angle_cw = f64::NEG_INFINITY;
    for &he_id in &entering {
        let other = wed.half_edge(he_id).start;
        let dir = sub(wed.node_coords(other).unwrap(), p_coord);
        let angle = ccw_angle_from(q_dir, dir);
        if angle < angle_ccw {
            angle_ccw = angle;
            e_ccw = he_id;
        }
        if angle > angle_cw {
            angle_cw = angle;
            e_cw = he_id;
        }
    }

    let pq = wed
        .half_edge_between(p, q)
        .expect("filament edge must already be in the arena");
    let qp = wed.half_edge(pq).twin;
    let twin_e_cw = wed.half_edge(e_cw).twin;
    let twin_e_ccw = wed.half_edge(e_ccw).twin;

    wed.half_edge_mut(qp).end_c = twin_e_cw;
    wed.half_edge_mut(qp).end_cc = twin_e_ccw;
    wed.half_edge_mut(pq).start_c = e_cw;
    wed.half_edge_mut(pq).start_cc = e_ccw;
    wed.half_edge_mut(pq).end_cc = qp;
    wed.half_edge_mut(e_cw).end_cc = pq;
    wed.half_edge_mut(twin_e_cw).start_cc = pq;
    wed.half_edge_mut(twin_e_ccw).start_c = pq;
    wed.half_edge_mut(e_ccw).end_c = pq;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faces::build_face;
    use crate::ids::FaceId;

    fn square_with_face() -> WingedEdge<u32> {
        let mut wed = WingedEdge::empty();
        let a = wed.intern_node(0, (0.0, 0.0));
        let b = wed.intern_node(1, (1.0, 0.0));
        let c = wed.intern_node(2, (1.0, 1.0));
        let d = wed.intern_node(3, (0.0, 1.0));
        wed.push_edge_pair(a, b);
        wed.push_edge_pair(b, c);
        wed.push_edge_pair(c, d);
        wed.push_edge_pair(d, a);
        let region = vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3), NodeId(0)];
        build_face(&mut wed, &region, FaceId(0));
        wed.num_bounded_faces = 1;
        wed.exterior_face = FaceId(1);
        wed
    }

    #[test]
    fn interior_filament_splices_without_panicking_and_gets_square_face() {
        let mut wed = square_with_face();
        // Filament hangs off node 1 (square corner b) into the interior.
        let tail = wed.intern_node(4, (0.5, 0.5));
        wed.push_edge_pair(NodeId(1), tail);

        let regions = vec![vec![
            NodeId(0),
            NodeId(1),
            NodeId(2),
            NodeId(3),
            NodeId(0),
        ]];
        let filaments = vec![vec![NodeId(1), tail]];
        insert_filaments(&mut wed, &regions, &filaments);

        let e = wed.half_edge_between(NodeId(1), tail).unwrap();
        assert_eq!(wed.half_edge(e).right_polygon, Some(FaceId(0)));
        assert_eq!(wed.half_edge(e).left_polygon, Some(FaceId(0)));

        // The spliced outward edge must turn around into its twin, not loop
        // back onto itself, so a region walk can turn around at the tip.
        let twin = wed.half_edge(e).twin;
        assert_eq!(wed.half_edge(e).end_cc, twin);
    }

    #[test]
    fn multi_node_filament_wraps_both_leaf_tips_into_their_twins() {
        let mut wed = WingedEdge::empty();
        let a = wed.intern_node(0, (0.0, 0.0));
        let b = wed.intern_node(1, (1.0, 0.0));
        let c = wed.intern_node(2, (2.0, 0.0));
        wed.push_edge_pair(a, b);
        wed.push_edge_pair(b, c);

        let filaments = vec![vec![a, b, c]];
        insert_filaments(&mut wed, &[], &filaments);

        let ab = wed.half_edge_between(a, b).unwrap();
        let ba = wed.half_edge_between(b, a).unwrap();
        let bc = wed.half_edge_between(b, c).unwrap();
        let cb = wed.half_edge_between(c, b).unwrap();

        // Interior node b routes a boundary walk straight through, from
        // either arm to the other.
        assert_eq!(wed.half_edge(ab).end_cc, bc);
        assert_eq!(wed.half_edge(cb).end_cc, ba);

        // Neither a nor c is on any cycle, so both leaf tips fall back to
        // the "turn around into the twin" default rather than self-looping.
        assert_eq!(wed.half_edge(ba).end_cc, ab);
        assert_eq!(wed.half_edge(bc).end_cc, cb);
    }

    #[test]
    fn exterior_filament_gets_exterior_face_by_default() {
        let mut wed = square_with_face();
        let tail = wed.intern_node(4, (5.0, 5.0));
        wed.push_edge_pair(NodeId(1), tail);

        let regions = vec![vec![
            NodeId(0),
            NodeId(1),
            NodeId(2),
            NodeId(3),
            NodeId(0),
        ]];
        let filaments = vec![vec![NodeId(1), tail]];
        insert_filaments(&mut wed, &regions, &filaments);

        let e = wed.half_edge_between(NodeId(1), tail).unwrap();
        assert_eq!(wed.half_edge(e).right_polygon, Some(FaceId(1)));
        assert_eq!(wed.half_edge(e).left_polygon, Some(FaceId(1)));
    }

    #[test]
    fn degenerate_isolated_filament_skips_splice_but_keeps_interior_pointers() {
        let mut wed = WingedEdge::empty();
        let a = wed.intern_node(0, (0.0, 0.0));
        let b = wed.intern_node(1, (1.0, 0.0));
        wed.push_edge_pair(a, b);

        let filaments = vec![vec![NodeId(0), NodeId(1)]];
        insert_filaments(&mut wed, &[], &filaments);

        let e = wed.half_edge_between(a, b).unwrap();
        // Never spliced into anything: rotation stays self-referencing.
        assert_eq!(wed.half_edge(e).start_c, e);
        assert_eq!(wed.half_edge(e).right_polygon, Some(wed.exterior_face()));
    }
}

//! External-Face Stitcher: assigns the exterior sentinel face to every
//! still-unset boundary side, then threads the rotational pointers around
//! each exterior chain.
//!
//! A half-edge with `right_polygon` set (it bounds some extracted cycle) but
//! `left_polygon` unset faces the unbounded exterior on its left. Once every
//! such half-edge has the exterior sentinel installed, they are walked into
//! chains: starting from an arbitrary one, repeatedly continue to the
//! remaining candidate leaving the current edge's endpoint with the largest
//! counter-clockwise turn relative to the incoming direction. A planar graph
//! may have more than one such chain (e.g. two disjoint cycles each bound
//! their own exterior boundary); each gets its own closed rotation.

use std::hash::Hash;

use crate::geomutil::{ccw_angle_from, sub};
use crate::ids::HalfEdgeId;
use crate::wed::WingedEdge;

pub(crate) fn stitch_exterior<N: Clone + Eq + Hash>(wed: &mut WingedEdge<N>) {
    let exterior = wed.exterior_face();

    let mut pending: Vec<HalfEdgeId> = (0..wed.num_half_edges())
        .map(HalfEdgeId)
        .filter(|&he| {
            let h = wed.half_edge(he);
            h.right_polygon.is_some() && h.left_polygon.is_none()
        })
        .collect();

    for &he in &pending {
        wed.half_edge_mut(he).left_polygon = Some(exterior);
        let twin = wed.half_edge(he).twin;
        wed.half_edge_mut(twin).right_polygon = Some(exterior);
    }

    while let Some(start) = pending.pop() {
        let mut chain = vec![start];
        let mut current = start;

        loop {
            let tail = wed.half_edge(current).end;
            let candidates: Vec<HalfEdgeId> = pending
                .iter()
                .copied()
                .filter(|&e| wed.half_edge(e).start == tail)
                .collect();
            if candidates.is_empty() {
                break;
            }

            let head = wed.half_edge(current).start;
            let tail_coords = wed.node_coords(tail).unwrap();
            let incoming_reversed = sub(wed.node_coords(head).unwrap(), tail_coords);

            let best = candidates
                .into_iter()
                .max_by(|&a, &b| {
                    let dir = |e: HalfEdgeId| {
                        sub(wed.node_coords(wed.half_edge(e).end).unwrap(), tail_coords)
                    };
                    let angle_a = ccw_angle_from(incoming_reversed, dir(a));
                    let angle_b = ccw_angle_from(incoming_reversed, dir(b));
                    angle_a.partial_cmp(&angle_b).unwrap()
                })
                .unwrap();

            pending.retain(|&e| e != best);
            chain.push(best);
            current = best;
        }

        let k = chain.len();
        for i in 0..k {
            let edge = chain[i];
            let prev_edge = chain[(i + k - 1) % k];
            let next_edge = chain[(i + 1) % k];
            let he = wed.half_edge_mut(edge);
            he.start_cc = prev_edge;
            he.end_c = next_edge;
        }
    }
}

//! Face Pointer Builder: assigns `right_polygon`/`left_polygon` and the
//! `start_c`/`end_cc` rotational pointers along each bounded cycle returned
//! by the extractor.
//!
//! A region from the extractor is a closed CCW walk `[v0, v1, ..., vk-1, v0]`.
//! Walking it in reverse gives the CW boundary of the bounded face; each
//! directed edge of that walk is the face's `right_polygon` side, and its
//! twin picks up the face as `left_polygon`. The rotational pointers
//! `start_c`/`end_cc` come directly from the walk's own ordering: the edge
//! entering a node and the edge leaving it are adjacent in the node's
//! rotation, since the walk never crosses itself.

use std::hash::Hash;

use crate::ids::FaceId;
use crate::wed::WingedEdge;

/// Install the face pointers for one bounded region. `region` is the
/// extractor's closed CCW node walk (first node repeated at the end).
/// `face` is the id this region is assigned.
pub(crate) fn build_face<N: Clone + Eq + Hash>(
    wed: &mut WingedEdge<N>,
    region: &[crate::ids::NodeId],
    face: FaceId,
) {
    debug_assert!(region.len() >= 4, "a closed cycle needs at least 3 distinct nodes");
    debug_assert_eq!(region.first(), region.last());

    // Drop the repeated closing node and reverse CCW -> CW.
    let mut cw: Vec<_> = region[..region.len() - 1].to_vec();
    cw.reverse();
    let k = cw.len();

    // `r[i]` indexes into `cw` with wraparound, for i in -1..=k.
    let at = |i: isize| -> crate::ids::NodeId { cw[i.rem_euclid(k as isize) as usize] };

    let mut last_edge = None;
    for i in 0..k {
        let idx = i as isize;
        let edge_start = at(idx);
        let edge_end = at(idx + 1);
        let edge = wed
            .half_edge_between(edge_start, edge_end)
            .expect("cycle edge must already exist in the arena");
        let twin = wed.half_edge(edge).twin;

        wed.set_node_edge(edge_start, edge);

        let prev_node = at(idx - 1);
        let next_node = at(idx + 2);
        let start_c = wed
            .half_edge_between(prev_node, edge_start)
            .expect("cycle edge must already exist in the arena");
        let end_cc = wed
            .half_edge_between(edge_end, next_node)
            .expect("cycle edge must already exist in the arena");

        {
            let he = wed.half_edge_mut(edge);
            he.right_polygon = Some(face);
            he.start_c = start_c;
            he.end_cc = end_cc;
        }
        {
            let he = wed.half_edge_mut(twin);
            he.left_polygon = Some(face);
            he.start_cc = end_cc;
            he.end_c = start_c;
        }

        last_edge = Some(edge);
    }

    wed.set_region_edge(face, last_edge.expect("region has at least one edge"));
}

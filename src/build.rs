//! Orchestration: wires the Normalizer, Extractor, Face Pointer Builder,
//! External-Face Stitcher, and Filament Inserter into the single fallible
//! entry point `WingedEdge::build`.

use std::hash::Hash;

use ahash::AHashSet;

use crate::error::WedError;
use crate::exterior::stitch_exterior;
use crate::extract::extract;
use crate::faces::build_face;
use crate::filament::insert_filaments;
use crate::ids::{FaceId, NodeId};
use crate::normalize::normalize_edges;
use crate::wed::WingedEdge;

impl<N: Clone + Eq + Hash + Ord> WingedEdge<N> {
    /// Build a winged-edge planar subdivision from a node coordinate map and
    /// an edge list. Consumes both; the caller's own collections survive
    /// since they are passed by value into this function's iterators, not
    /// mutated in place.
    ///
    /// Construction is all-or-nothing: any [`WedError`] discards the
    /// partial structure.
    pub fn build(
        nodes: impl IntoIterator<Item = (N, (f64, f64))>,
        edges: impl IntoIterator<Item = (N, N)>,
    ) -> Result<Self, WedError> {
        let mut wed = WingedEdge::empty();
        for (id, coords) in nodes {
            wed.intern_node(id, coords);
        }

        let doubled = normalize_edges(&wed, edges)?;

        let mut seen: AHashSet<(NodeId, NodeId)> = AHashSet::new();
        for &(u, v) in &doubled {
            let key = if u.0 <= v.0 { (u, v) } else { (v, u) };
            if seen.insert(key) {
                wed.push_edge_pair(u, v);
            }
        }

        let coords = wed.node_coords.clone();
        let node_count = wed.num_nodes();
        let extracted = extract(&coords, node_count, &doubled)?;

        wed.num_bounded_faces = extracted.regions.len();
        for (i, region) in extracted.regions.iter().enumerate() {
            build_face(&mut wed, region, FaceId(i));
        }

        wed.exterior_face = FaceId(wed.num_bounded_faces);
        stitch_exterior(&mut wed);

        insert_filaments(&mut wed, &extracted.regions, &extracted.filaments);

        Ok(wed)
    }
}

//! Small geometric primitives shared by the extractor, the exterior
//! stitcher, and the filament inserter. Point-in-polygon containment is
//! delegated to `geo`; everything else here is plain 2D vector arithmetic.

use geo::{Contains, Coord, LineString, Polygon};

pub type Point = (f64, f64);

pub fn sub(a: Point, b: Point) -> Point {
    (a.0 - b.0, a.1 - b.1)
}

/// `u.x * v.y - u.y * v.x`. Positive when `v` is counter-clockwise from `u`.
pub fn cross(u: Point, v: Point) -> f64 {
    u.0 * v.1 - u.1 * v.0
}

/// Signed angle of `v` measured counter-clockwise from `from`, normalized to
/// `[0, 2*PI)`. Used to pick the "largest CCW angle" candidate when tracing
/// exterior boundary chains.
pub fn ccw_angle_from(from: Point, v: Point) -> f64 {
    let base = from.1.atan2(from.0);
    let theta = v.1.atan2(v.0);
    let mut delta = theta - base;
    let two_pi = std::f64::consts::TAU;
    delta = delta.rem_euclid(two_pi);
    if delta < 0.0 {
        delta += two_pi;
    }
    delta
}

pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    let d = sub(a, b);
    (d.0 * d.0 + d.1 * d.1).sqrt()
}

/// Whether `point` lies inside the polygon traced by `ring` (a closed or
/// open sequence of boundary coordinates, CW or CCW).
pub fn point_in_polygon(ring: &[Point], point: Point) -> bool {
    let coords: Vec<Coord<f64>> = ring.iter().map(|&(x, y)| Coord { x, y }).collect();
    let polygon = Polygon::new(LineString::from(coords), vec![]);
    polygon.contains(&Coord { x: point.0, y: point.1 })
}

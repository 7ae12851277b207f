//! Recursive Minkowski subdivision of a single segment.
//!
//! Every level replaces a segment `p1 -> p2` with eight sub-segments built
//! from the quarter vector `q = (p2 - p1) / 4` and the perpendicular offset
//! `n = rotate(p2 - p1, -90°) / 4`:
//!
//! ```text
//!   A = p1 + q      D = A + n      F = B + n
//!   B = p1 + 2q     E = D + q      G = F + q
//!   C = p1 + 3q
//!
//!   p1 -> A -> D -> E -> B -> F -> G -> C -> p2
//! ```
//!
//! A side generated at depth `d` has exactly `8^d` points. The far endpoint
//! `p2` is never emitted; it is the first point of whatever follows.

use crate::{
    types::{Depth, Point2},
    vector2::Vector2Ext,
};

/// Number of sub-segments a segment is replaced with per level.
pub const BRANCHING: usize = 8;

/// Rotation applied to the segment vector to get the motif's offset.
///
/// With counter-clockwise corners this pushes the bumps outward.
pub const PERPENDICULAR_DEG: f64 = -90.0;

/// Returns `8^depth`, or `None` if it does not fit in `usize`.
pub fn side_point_count(depth: Depth) -> Option<usize> {
    BRANCHING.checked_pow(depth)
}

/// Generates the points of one fractal side from `p1` towards `p2`.
///
/// The result starts at `p1` and excludes `p2`.
///
/// ### Panics
/// Panics if `8^depth` overflows `usize`; callers bound the depth first
/// (see [`crate::island::MAX_SUPPORTED_DEPTH`]).
pub fn generate_side(p1: Point2, p2: Point2, depth: Depth) -> Vec<Point2> {
    let len = side_point_count(depth).unwrap_or_else(|| panic!("depth {depth} overflows usize"));
    let mut out = Vec::with_capacity(len);
    push_side(p1, p2, depth, &mut out);
    out
}

/// Appends the points of the side `p1 -> p2` at `depth` to `out`.
pub(crate) fn push_side(p1: Point2, p2: Point2, depth: Depth, out: &mut Vec<Point2>) {
    if depth == 0 {
        out.push(p1);
        return;
    }

    let v = p2 - p1;
    let quarter = v * 0.25;
    let perp = v.rotate_deg(PERPENDICULAR_DEG) * 0.25;

    let a = p1 + quarter;
    let b = a + quarter;
    let c = b + quarter;

    let d = a + perp;
    let e = d + quarter;
    let f = b + perp;
    let g = f + quarter;

    for (start, end) in [
        (p1, a),
        (a, d),
        (d, e),
        (e, b),
        (b, f),
        (f, g),
        (g, c),
        (c, p2),
    ] {
        push_side(start, end, depth - 1, out);
    }
}

//! Assembly of the closed Minkowski island from four fractal sides.

use crate::{
    curve::{self, BRANCHING},
    error::IslandError,
    types::{Depth, Point2},
};

/// Deepest level accepted by [`Island::new`].
///
/// Point count grows as `4 * 8^depth`; at this depth an island already holds
/// about 16.7M points (268 MB as interleaved `f64`). Anything deeper is not
/// practical to generate or draw.
pub const MAX_SUPPORTED_DEPTH: Depth = 8;

/// Returns `4 * 8^depth`, or `None` on overflow.
pub fn island_point_count(depth: Depth) -> Option<usize> {
    curve::side_point_count(depth)?.checked_mul(4)
}

/// Checks a raw depth (e.g. from a UI slider) against `[0, max]`.
///
/// ### Parameters
/// - `raw` - Unvalidated depth, possibly negative.
/// - `max` - Largest depth the caller accepts.
///
/// ### Returns
/// - `Ok(depth)` if `0 <= raw <= max`.
/// - `Err(IslandError::NegativeDepth)` if `raw < 0`.
/// - `Err(IslandError::DepthTooLarge)` if `raw > max`.
pub fn validate_depth(raw: i64, max: Depth) -> Result<Depth, IslandError> {
    if raw < 0 {
        return Err(IslandError::NegativeDepth(raw));
    }
    match Depth::try_from(raw) {
        Ok(depth) if depth <= max => Ok(depth),
        _ => Err(IslandError::DepthTooLarge { depth: raw, max }),
    }
}

/// Parameters of one Minkowski island.
///
/// A size of zero or below is accepted and produces a degenerate island
/// whose points overlap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Island {
    center: Point2,
    size: f64,
    depth: Depth,
}

impl Island {
    /// Creates an island centered on `center`.
    ///
    /// ### Parameters
    /// - `center` - Center of the base square; all generated points are
    ///   relative to it.
    /// - `size` - Side length of the base square.
    /// - `depth` - Number of motif applications per side.
    ///
    /// ### Returns
    /// The island, or [`IslandError::DepthTooLarge`] if `depth` exceeds
    /// [`MAX_SUPPORTED_DEPTH`].
    pub fn new(center: Point2, size: f64, depth: Depth) -> Result<Self, IslandError> {
        if depth > MAX_SUPPORTED_DEPTH {
            return Err(IslandError::DepthTooLarge {
                depth: depth.into(),
                max: MAX_SUPPORTED_DEPTH,
            });
        }
        Ok(Self {
            center,
            size,
            depth,
        })
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Returns a copy with a different depth.
    pub fn with_depth(self, depth: Depth) -> Result<Self, IslandError> {
        Self::new(self.center, self.size, depth)
    }

    /// Returns a copy with a different side length.
    pub fn with_size(self, size: f64) -> Self {
        Self { size, ..self }
    }

    /// The base square's corners in counter-clockwise order, starting at
    /// the `(-x, -y)` corner.
    pub fn corners(&self) -> [Point2; 4] {
        let h = self.size / 2.0;
        [
            self.center + Point2::new(-h, -h),
            self.center + Point2::new(h, -h),
            self.center + Point2::new(h, h),
            self.center + Point2::new(-h, h),
        ]
    }

    /// Number of points in [`Island::points`], `4 * 8^depth`.
    pub fn vertex_count(&self) -> usize {
        // Every `Island` comes from `new`, so depth <= MAX_SUPPORTED_DEPTH.
        4 * BRANCHING.pow(self.depth)
    }

    /// Ordered outline points; the last connects back to the first.
    pub fn points(&self) -> Vec<Point2> {
        let corners = self.corners();
        let mut out = Vec::with_capacity(self.vertex_count());
        for i in 0..corners.len() {
            let next = corners[(i + 1) % corners.len()];
            curve::push_side(corners[i], next, self.depth, &mut out);
        }
        out
    }

    /// Outline as interleaved `[x0, y0, x1, y1, ...]`.
    pub fn vertices(&self) -> Vec<f64> {
        flatten(&self.points())
    }
}

/// Generates the flat interleaved vertex list of an island.
///
/// The four sides run counter-clockwise from the `(-x, -y)` corner, and the
/// last point connects back to the first.
///
/// ### Parameters
/// - `center` - Center of the base square.
/// - `size` - Side length of the base square.
/// - `depth` - Number of motif applications per side.
///
/// ### Returns
/// `[x0, y0, x1, y1, ...]` holding `8 * 8^depth` values.
///
/// ### Panics
/// Panics if `depth` exceeds [`MAX_SUPPORTED_DEPTH`]. Bound user input
/// with [`validate_depth`] or go through [`Island::new`] for a `Result`.
pub fn generate_island(center: Point2, size: f64, depth: Depth) -> Vec<f64> {
    match Island::new(center, size, depth) {
        Ok(island) => island.vertices(),
        Err(e) => panic!("cannot generate island: {e}"),
    }
}

fn flatten(points: &[Point2]) -> Vec<f64> {
    let mut flat = Vec::with_capacity(points.len() * 2);
    for p in points {
        flat.push(p.x);
        flat.push(p.y);
    }
    flat
}

use glam::DVec2;

/// A 2D coordinate or displacement in island space.
///
/// Coordinates are relative to the island's center; placement on a display
/// is done by an [`crate::affine::Affine3`], never baked into the points.
pub type Point2 = DVec2;

/// Number of times the Minkowski motif is applied to each side.
///
/// Depth `0` is the undecorated square.
pub type Depth = u32;

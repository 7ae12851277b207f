use crate::types::{Depth, Point2};

/// Tunables shared by the scene and its viewer.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Depth used on start-up and after a reset.
    pub initial_depth: Depth,
    /// Upper bound for user-selected depth.
    pub max_depth: Depth,
    /// Island side as a fraction of the smaller display dimension.
    pub size_fraction: f64,
    /// Rotation speed while animating, in radians per second.
    pub rotation_speed: f64,
    /// Island center in island space.
    pub center: Point2,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_depth: 1,
            max_depth: 6,
            size_fraction: 0.6,
            rotation_speed: 0.5,
            center: Point2::ZERO,
        }
    }
}

impl Config {
    /// Island side length for a display of the given size.
    pub fn size_for_display(&self, width: f64, height: f64) -> f64 {
        width.min(height) * self.size_fraction
    }
}

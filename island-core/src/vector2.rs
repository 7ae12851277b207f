//! Rotation helpers for [`Point2`].
//!
//! Addition, subtraction and scalar scaling come straight from glam's
//! operators; this module only adds rotation by an angle in degrees.

use crate::types::Point2;

/// Extension methods for 2D vectors used by the curve generator.
pub trait Vector2Ext {
    /// Rotates the vector by `angle_deg` degrees.
    ///
    /// Uses the standard rotation matrix
    /// `x' = x cos a - y sin a`, `y' = x sin a + y cos a`,
    /// so a positive angle turns `+X` towards `+Y`.
    fn rotate_deg(self, angle_deg: f64) -> Self;
}

impl Vector2Ext for Point2 {
    #[inline]
    fn rotate_deg(self, angle_deg: f64) -> Self {
        let (sin_a, cos_a) = angle_deg.to_radians().sin_cos();
        Point2::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn approx_eq(a: Point2, b: Point2) -> bool {
        (a - b).abs().max_element() < EPS
    }

    #[test]
    fn rotate_positive_quarter_turn_maps_x_to_y() {
        let v = Point2::new(1.0, 0.0).rotate_deg(90.0);
        assert!(approx_eq(v, Point2::new(0.0, 1.0)), "got {v:?}");
    }

    #[test]
    fn rotate_negative_quarter_turn_maps_x_to_minus_y() {
        // This is the perpendicular used by the Minkowski motif.
        let v = Point2::new(4.0, 0.0).rotate_deg(-90.0);
        assert!(approx_eq(v, Point2::new(0.0, -4.0)), "got {v:?}");
    }

    #[test]
    fn rotate_preserves_length() {
        let v = Point2::new(3.0, -4.0);
        for angle in [-270.0, -90.0, -33.3, 0.0, 12.5, 180.0, 359.0] {
            let r = v.rotate_deg(angle);
            assert!((r.length() - 5.0).abs() < EPS, "angle {angle}: {r:?}");
        }
    }

    #[test]
    fn rotate_zero_is_identity() {
        let v = Point2::new(-2.5, 7.0);
        assert_eq!(v.rotate_deg(0.0), v);
    }

    #[test]
    fn nan_propagates_through_rotation() {
        let v = Point2::new(f64::NAN, 1.0).rotate_deg(45.0);
        assert!(v.x.is_nan() && v.y.is_nan());
    }

    #[test]
    fn operators_cover_add_sub_scale() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(3.0, -1.0);
        assert_eq!(a + b, Point2::new(4.0, 1.0));
        assert_eq!(a - b, Point2::new(-2.0, 3.0));
        assert_eq!(b * 0.5, Point2::new(1.5, -0.5));
    }
}

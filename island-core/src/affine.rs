//! 3×3 homogeneous matrices for placing the island on a display.
//!
//! Storage is column-major, matching what a `mat3` shader uniform expects:
//! translation lives in the third column. Composition is not commutative;
//! `a.multiply(&b)` applies `b` first, then `a`.

use core::ops::Mul;

use glam::{DMat3, DVec3};

use crate::types::Point2;

/// A 2D affine transform in homogeneous coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine3(DMat3);

impl Affine3 {
    pub const IDENTITY: Self = Self(DMat3::IDENTITY);

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self(DMat3::from_translation(Point2::new(tx, ty)))
    }

    /// Rotation by `angle_rad` radians.
    ///
    /// The columns are `(c, -s)` and `(s, c)`, so positive angles map
    /// `+X` towards `-Y`. On a y-down display this reads as a visually
    /// counter-clockwise spin.
    #[inline]
    pub fn rotation(angle_rad: f64) -> Self {
        let (s, c) = angle_rad.sin_cos();
        Self(DMat3::from_cols(
            DVec3::new(c, -s, 0.0),
            DVec3::new(s, c, 0.0),
            DVec3::Z,
        ))
    }

    #[inline]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self(DMat3::from_scale(Point2::new(sx, sy)))
    }

    /// Returns the transform that applies `other` first and then `self`.
    #[inline]
    pub fn multiply(&self, other: &Affine3) -> Self {
        Self(self.0 * other.0)
    }

    /// `self * translation(tx, ty)`.
    #[inline]
    pub fn translate(self, tx: f64, ty: f64) -> Self {
        self * Self::translation(tx, ty)
    }

    /// `self * rotation(angle_rad)`.
    #[inline]
    pub fn rotate(self, angle_rad: f64) -> Self {
        self * Self::rotation(angle_rad)
    }

    /// `self * scaling(sx, sy)`.
    #[inline]
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        self * Self::scaling(sx, sy)
    }

    /// Applies the transform to a point (homogeneous `w = 1`).
    #[inline]
    pub fn transform_point(&self, p: Point2) -> Point2 {
        self.0.transform_point2(p)
    }

    #[inline]
    pub fn to_cols_array(&self) -> [f64; 9] {
        self.0.to_cols_array()
    }

    /// Column-major single-precision copy, ready for a `mat3` uniform.
    #[inline]
    pub fn to_cols_array_f32(&self) -> [f32; 9] {
        self.0.as_mat3().to_cols_array()
    }

    #[inline]
    pub fn as_dmat3(&self) -> &DMat3 {
        &self.0
    }
}

impl Default for Affine3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Affine3 {
    type Output = Affine3;
    #[inline]
    fn mul(self, rhs: Affine3) -> Affine3 {
        self.multiply(&rhs)
    }
}

/// Builds the per-frame transform: rotate about the island center, then
/// move the result to `display_center`.
pub fn compose_frame_transform(display_center: Point2, angle_rad: f64) -> Affine3 {
    Affine3::translation(display_center.x, display_center.y) * Affine3::rotation(angle_rad)
}

//! Minkowski island geometry.
//!
//! Main components:
//! - [`vector2`] — rotation for [`types::Point2`] vectors.
//! - [`affine`] — 3×3 affine transforms for display placement.
//! - [`curve`] — recursive Minkowski subdivision of one side.
//! - [`island`] — the closed island built from four sides.
//! - [`animation`] — idle/animating rotation state.
//! - [`scene`] — island, vertex list and animation owned together.
//! - [`config`] — tunables for the scene.
//! - [`error`] — input validation errors.
//! - [`types`] — shared type aliases.

pub mod affine;
pub mod animation;
pub mod config;
pub mod curve;
pub mod error;
pub mod island;
pub mod scene;
pub mod types;
pub mod vector2;

pub use affine::{Affine3, compose_frame_transform};
pub use error::IslandError;
pub use island::{Island, generate_island};
pub use types::{Depth, Point2};

//! The island as seen by a renderer: parameters, vertex list and rotation.
//!
//! A [`Scene`] owns everything the old global state used to hold. Changing
//! depth or size regenerates the whole vertex list; the previous list stays
//! in place until the new one is complete, and `&mut self` serializes
//! regenerations of the same scene.

use crate::{
    affine::{Affine3, compose_frame_transform},
    animation::{Animator, Rgb, STATIC_COLOR, cycle_color},
    config::Config,
    error::IslandError,
    island::{Island, MAX_SUPPORTED_DEPTH, validate_depth},
    types::{Depth, Point2},
};

/// Everything a renderer needs to draw one frame besides the vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Island space to display pixels.
    pub transform: Affine3,
    pub color: Rgb,
}

/// Owner of one island's geometry and rotation.
///
/// ### Fields
/// - `cfg` - Tunables; `max_depth` is capped at [`MAX_SUPPORTED_DEPTH`].
/// - `home` - Validated island at `initial_depth`, restored by [`Scene::reset`].
/// - `island` - Current island parameters.
/// - `vertices` - Interleaved outline of `island`.
/// - `animator` - Rotation state.
#[derive(Debug)]
pub struct Scene {
    cfg: Config,
    home: Island,
    island: Island,
    vertices: Vec<f64>,
    animator: Animator,
}

impl Scene {
    /// Creates an idle scene at `cfg.initial_depth`.
    ///
    /// The island starts with zero size; call [`Scene::fit_to`] or
    /// [`Scene::set_size`] once the display size is known.
    ///
    /// ### Parameters
    /// - `cfg` - Scene tunables. A `max_depth` above
    ///   [`MAX_SUPPORTED_DEPTH`] is lowered to it.
    ///
    /// ### Returns
    /// The scene with its vertex list generated, or an [`IslandError`] if
    /// `initial_depth` exceeds the (capped) `max_depth`.
    pub fn new(mut cfg: Config) -> Result<Self, IslandError> {
        cfg.max_depth = cfg.max_depth.min(MAX_SUPPORTED_DEPTH);
        let depth = validate_depth(cfg.initial_depth.into(), cfg.max_depth)?;
        let island = Island::new(cfg.center, 0.0, depth)?;

        let mut scene = Self {
            cfg,
            home: island,
            island,
            vertices: Vec::new(),
            animator: Animator::new(cfg.rotation_speed),
        };
        scene.regenerate(island);
        Ok(scene)
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn island(&self) -> &Island {
        &self.island
    }

    pub fn depth(&self) -> Depth {
        self.island.depth()
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    /// Interleaved `[x, y, ...]` outline in island space.
    pub fn vertices(&self) -> &[f64] {
        &self.vertices
    }

    /// Number of 2D points in [`Scene::vertices`].
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Changes the depth and regenerates. Unchanged depth is a no-op.
    pub fn set_depth(&mut self, depth: Depth) -> Result<(), IslandError> {
        self.set_depth_raw(depth.into())
    }

    /// Like [`Scene::set_depth`] but for unvalidated integer input.
    ///
    /// On error the current island and vertices are left untouched.
    pub fn set_depth_raw(&mut self, raw: i64) -> Result<(), IslandError> {
        let depth = validate_depth(raw, self.cfg.max_depth).inspect_err(|e| {
            log::warn!("rejected depth change: {e}");
        })?;
        if depth == self.island.depth() {
            return Ok(());
        }
        let next = self.island.with_depth(depth)?;
        self.regenerate(next);
        Ok(())
    }

    /// Changes the side length and regenerates. Unchanged size is a no-op.
    pub fn set_size(&mut self, size: f64) {
        if size == self.island.size() {
            return;
        }
        let next = self.island.with_size(size);
        self.regenerate(next);
    }

    /// Sizes the island for a display of `width` x `height`.
    pub fn fit_to(&mut self, width: f64, height: f64) {
        self.set_size(self.cfg.size_for_display(width, height));
    }

    /// Stops animating, rewinds rotation and restores the initial depth.
    pub fn reset(&mut self) {
        self.animator.reset();
        let next = self.home.with_size(self.island.size());
        if next != self.island {
            self.regenerate(next);
        }
        log::info!("scene reset to depth {}", self.island.depth());
    }

    /// Advances the animation and returns the parameters for one frame.
    ///
    /// ### Parameters
    /// - `width`, `height` - Display size in pixels; the island is placed
    ///   at its center.
    /// - `now` - Current time in seconds, from the caller's clock.
    ///
    /// ### Returns
    /// A [`Frame`] whose transform rotates by the current angle and then
    /// translates to the display center. The color cycles while animating
    /// and is [`STATIC_COLOR`] otherwise.
    pub fn frame(&mut self, width: f64, height: f64, now: f64) -> Frame {
        let angle = self.animator.tick(now);
        let color = if self.animator.is_animating() {
            cycle_color(now)
        } else {
            STATIC_COLOR
        };
        let display_center = Point2::new(width / 2.0, height / 2.0);
        Frame {
            transform: compose_frame_transform(display_center, angle),
            color,
        }
    }

    fn regenerate(&mut self, next: Island) {
        let vertices = next.vertices();
        log::debug!(
            "regenerated island: depth={} size={:.1} points={}",
            next.depth(),
            next.size(),
            vertices.len() / 2
        );
        self.vertices = vertices;
        self.island = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        let mut s = Scene::new(Config::default()).unwrap();
        s.fit_to(800.0, 600.0);
        s
    }

    #[test]
    fn new_scene_uses_initial_depth() {
        let s = scene();
        assert_eq!(s.depth(), 1);
        assert_eq!(s.vertex_count(), 32);
        assert!((s.island().size() - 360.0).abs() < 1e-12);
        assert!(!s.animator().is_animating());
    }

    #[test]
    fn new_rejects_initial_depth_above_max() {
        let cfg = Config {
            initial_depth: 7,
            max_depth: 6,
            ..Config::default()
        };
        assert_eq!(
            Scene::new(cfg).unwrap_err(),
            IslandError::DepthTooLarge { depth: 7, max: 6 }
        );
    }

    #[test]
    fn max_depth_is_capped_at_supported_ceiling() {
        let cfg = Config {
            max_depth: 50,
            ..Config::default()
        };
        let s = Scene::new(cfg).unwrap();
        assert_eq!(s.config().max_depth, MAX_SUPPORTED_DEPTH);
    }

    #[test]
    fn set_depth_regenerates_vertices() {
        let mut s = scene();
        s.set_depth(3).unwrap();
        assert_eq!(s.depth(), 3);
        assert_eq!(s.vertex_count(), 4 * 512);
        assert_eq!(s.vertices(), s.island().vertices().as_slice());
    }

    #[test]
    fn invalid_depth_leaves_previous_buffer_in_place() {
        let mut s = scene();
        s.set_depth(2).unwrap();
        let before = s.vertices().to_vec();

        assert_eq!(s.set_depth_raw(-1), Err(IslandError::NegativeDepth(-1)));
        assert_eq!(
            s.set_depth(9),
            Err(IslandError::DepthTooLarge { depth: 9, max: 6 })
        );

        assert_eq!(s.depth(), 2);
        assert_eq!(s.vertices(), before.as_slice());
    }

    #[test]
    fn fit_to_tracks_display_size() {
        let mut s = scene();
        s.fit_to(1000.0, 2000.0);
        assert!((s.island().size() - 600.0).abs() < 1e-12);
        let xs: Vec<f64> = s.vertices().iter().step_by(2).copied().collect();
        assert!(xs.iter().any(|&x| (x + 300.0).abs() < 1e-9));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut s = scene();
        s.set_depth(4).unwrap();
        s.animator_mut().start(0.0);
        s.frame(800.0, 600.0, 3.0);
        assert!(s.animator().angle() > 0.0);

        s.reset();

        assert_eq!(s.depth(), 1);
        assert_eq!(s.vertex_count(), 32);
        assert!(!s.animator().is_animating());
        assert_eq!(s.animator().angle(), 0.0);
    }

    #[test]
    fn reset_keeps_current_size() {
        let mut s = scene();
        s.set_depth(3).unwrap();
        s.fit_to(1000.0, 1000.0);

        s.reset();

        assert_eq!(s.depth(), 1);
        assert!((s.island().size() - 600.0).abs() < 1e-12);
        assert_eq!(s.vertices(), s.island().vertices().as_slice());
    }

    #[test]
    fn reset_uses_configured_initial_depth() {
        let cfg = Config {
            initial_depth: 2,
            ..Config::default()
        };
        let mut s = Scene::new(cfg).unwrap();
        s.set_depth(0).unwrap();
        s.reset();
        assert_eq!(s.depth(), 2);
        assert_eq!(s.vertex_count(), 4 * 64);
    }

    #[test]
    fn static_frame_is_white_and_centered() {
        let mut s = scene();
        let frame = s.frame(800.0, 600.0, 12.0);
        assert_eq!(frame.color, STATIC_COLOR);
        assert_eq!(
            frame.transform.transform_point(Point2::ZERO),
            Point2::new(400.0, 300.0)
        );
    }

    #[test]
    fn animated_frame_rotates_and_cycles_color() {
        let mut s = scene();
        s.animator_mut().start(1.0);
        let frame = s.frame(800.0, 600.0, 3.0);

        // 2 s at 0.5 rad/s.
        let expected = compose_frame_transform(Point2::new(400.0, 300.0), 1.0);
        assert_eq!(frame.transform, expected);
        assert_eq!(frame.color, cycle_color(3.0));
    }
}

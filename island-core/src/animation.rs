//! Rotation animation, kept separate from the geometry.
//!
//! Time is supplied by the caller in seconds from any monotonic source
//! (e.g. the UI toolkit's frame clock). The animator never reads a clock.

use std::f64::consts::FRAC_PI_2;

/// Linear RGB color with components in `[0, 1]`.
pub type Rgb = [f32; 3];

/// Color used for frames drawn while the animation is stopped.
pub const STATIC_COLOR: Rgb = [1.0, 1.0, 1.0];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationState {
    Idle,
    /// `last_time` is the timestamp of the previous tick, in seconds.
    Animating { last_time: f64 },
}

/// Accumulates the island's rotation angle while animating.
#[derive(Clone, Debug)]
pub struct Animator {
    state: AnimationState,
    angle: f64,
    speed: f64,
}

impl Animator {
    /// Creates an idle animator with angle `0`.
    ///
    /// `speed` is in radians per second.
    pub fn new(speed: f64) -> Self {
        Self {
            state: AnimationState::Idle,
            angle: 0.0,
            speed,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, AnimationState::Animating { .. })
    }

    /// Current rotation angle in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Starts animating with `now` as the time baseline.
    ///
    /// Time spent idle never contributes to the angle. Starting while
    /// already animating is a no-op.
    pub fn start(&mut self, now: f64) {
        if self.is_animating() {
            return;
        }
        self.state = AnimationState::Animating { last_time: now };
        log::info!("animation started at angle {:.3} rad", self.angle);
    }

    /// Stops animating. The angle is kept.
    pub fn stop(&mut self) {
        if self.is_animating() {
            self.state = AnimationState::Idle;
            log::info!("animation stopped at angle {:.3} rad", self.angle);
        }
    }

    /// Flips between idle and animating; returns whether it is now animating.
    pub fn toggle(&mut self, now: f64) -> bool {
        if self.is_animating() {
            self.stop();
        } else {
            self.start(now);
        }
        self.is_animating()
    }

    /// Stops and rewinds the angle to `0`.
    pub fn reset(&mut self) {
        self.stop();
        self.angle = 0.0;
    }

    /// Advances the angle to `now` and returns it.
    ///
    /// While idle the angle is returned unchanged. Time going backwards
    /// counts as zero elapsed.
    pub fn tick(&mut self, now: f64) -> f64 {
        if let AnimationState::Animating { last_time } = self.state {
            let dt = (now - last_time).max(0.0);
            self.angle += dt * self.speed;
            self.state = AnimationState::Animating { last_time: now };
        }
        self.angle
    }
}

/// Slowly cycling outline color for animated frames at time `now` (seconds).
pub fn cycle_color(now: f64) -> Rgb {
    let r = (now * 0.6).cos() * 0.5 + 0.5;
    let g = (now * 0.4).sin() * 0.5 + 0.5;
    let b = (now * 0.8 + FRAC_PI_2).cos() * 0.5 + 0.5;
    [r as f32, g as f32, b as f32]
}

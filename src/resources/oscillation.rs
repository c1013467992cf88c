//! Shared oscillation clock.
//!
//! Sprites sway around their logical position by
//! `(sin(phase), cos(phase)) * amplitude`. The phase is one value for the
//! whole world and advances by `speed` once per tick, in
//! [`advance_oscillation_clock`](crate::systems::animation::advance_oscillation_clock).

use bevy_ecs::prelude::Resource;
use glam::Vec2;

pub const DEFAULT_OSCILLATION_SPEED: f32 = 0.05;
pub const DEFAULT_OSCILLATION_AMPLITUDE: f32 = 100.0;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OscillationClock {
    /// Current phase in radians.
    pub phase: f32,
    /// Phase increment per tick.
    pub speed: f32,
    /// Offset magnitude in pixels.
    pub amplitude: f32,
}

impl Default for OscillationClock {
    fn default() -> Self {
        Self {
            phase: 0.0,
            speed: DEFAULT_OSCILLATION_SPEED,
            amplitude: DEFAULT_OSCILLATION_AMPLITUDE,
        }
    }
}

impl OscillationClock {
    pub fn new(speed: f32, amplitude: f32) -> Self {
        Self {
            phase: 0.0,
            speed,
            amplitude,
        }
    }

    /// A clock that never moves anything.
    pub fn disabled() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Current offset, truncated to whole pixels.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(
            (self.phase.sin() * self.amplitude).trunc(),
            (self.phase.cos() * self.amplitude).trunc(),
        )
    }

    pub fn advance(&mut self) {
        self.phase += self.speed;
    }
}

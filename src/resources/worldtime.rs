//! Simulation time resource.
//!
//! Time is kept in whole milliseconds, the unit animations are timed in.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WorldTime {
    /// Scaled milliseconds since the world started.
    pub elapsed_ms: u64,
    /// Scaled milliseconds of the current tick.
    pub delta_ms: u32,
    pub time_scale: f32,
    /// Number of ticks run so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed_ms: 0,
            delta_ms: 0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}

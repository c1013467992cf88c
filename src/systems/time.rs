//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per tick, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta milliseconds on the `WorldTime` resource.
///
/// `dt_ms` is the unscaled tick delta. The scaled delta is truncated to whole
/// milliseconds; negative scales clamp to zero.
pub fn update_world_time(world: &mut World, dt_ms: u32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = (dt_ms as f32 * wt.time_scale).max(0.0) as u32;
    wt.elapsed_ms += u64::from(scaled_dt);
    wt.delta_ms = scaled_dt;
    wt.frame_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_world_time_accumulates() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        update_world_time(&mut world, 16);
        update_world_time(&mut world, 17);
        let wt = world.resource::<WorldTime>();
        assert_eq!(wt.delta_ms, 17);
        assert_eq!(wt.elapsed_ms, 33);
        assert_eq!(wt.frame_count, 2);
    }

    #[test]
    fn test_update_world_time_applies_scale() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(0.5));
        update_world_time(&mut world, 25);
        assert_eq!(world.resource::<WorldTime>().delta_ms, 12);

        world.resource_mut::<WorldTime>().time_scale = -1.0;
        update_world_time(&mut world, 25);
        assert_eq!(world.resource::<WorldTime>().delta_ms, 0);
    }
}

//! Animation systems.
//!
//! - [`animated_sprite_system`] advances every [`AnimatedSprite`] by the tick's
//!   delta, re-places it, and triggers [`AnimationEndedEvent`] for animations
//!   that ended during the tick.
//! - [`advance_oscillation_clock`] moves the shared sway phase forward once
//!   per tick. It must run after the sprite system so all sprites in a tick
//!   see the same offset.
//!
//! # Related
//!
//! - [`crate::components::animation::Animation`] – the playback engine
//! - [`crate::resources::oscillation::OscillationClock`] – shared sway phase

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::animatedsprite::AnimatedSprite;
use crate::events::animation::AnimationEndedEvent;
use crate::resources::oscillation::OscillationClock;
use crate::resources::worldtime::WorldTime;

/// Advance sprite animations and report the ones that ended.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta in milliseconds.
/// - Reads [`OscillationClock`] for the sway offset.
/// - Mutates each [`AnimatedSprite`] (animation state and rect).
/// - Triggers one [`AnimationEndedEvent`] per animation that ended.
pub fn animated_sprite_system(
    mut query: Query<(Entity, &mut AnimatedSprite)>,
    time: Res<WorldTime>,
    clock: Res<OscillationClock>,
    mut commands: Commands,
) {
    for (entity, mut sprite) in query.iter_mut() {
        let report = sprite.update(time.delta_ms, &clock);
        if report.flips > 0 {
            trace!(
                "{:?} '{}' flipped {} time(s), index {}",
                entity,
                sprite.animation.tag(),
                report.flips,
                sprite.animation.index()
            );
        }
        if report.ended {
            commands.trigger(AnimationEndedEvent {
                entity,
                tag: sprite.animation.tag().to_string(),
            });
        }
    }
}

/// Move the shared oscillation phase forward by one tick.
pub fn advance_oscillation_clock(mut clock: ResMut<OscillationClock>) {
    clock.advance();
}

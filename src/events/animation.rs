//! Animation completion events.
//!
//! When an [`AnimatedSprite`](crate::components::animatedsprite::AnimatedSprite)'s
//! animation reaches its end during a tick, an [`AnimationEndedEvent`] is
//! triggered after the animation's own callback has run. Observers can react
//! with commands, which apply before the next tick: replay the animation,
//! swap it, or despawn the entity.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<AnimationEndedEvent>, mut q: Query<&mut AnimatedSprite>| {
//!     if let Ok(mut sprite) = q.get_mut(trigger.entity) {
//!         sprite.animation.reset();
//!         sprite.animation.play();
//!     }
//! });
//! ```
//!
//! # Related
//!
//! - [`crate::systems::animation::animated_sprite_system`] – emits these events
//! - [`crate::components::animatedsprite::DespawnOnEnd`] – despawn marker

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animatedsprite::DespawnOnEnd;

/// Event emitted when a sprite's animation ends.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct AnimationEndedEvent {
    /// The entity whose animation ended.
    pub entity: Entity,
    /// The animation's tag.
    pub tag: String,
}

/// Observer that despawns ended sprites carrying [`DespawnOnEnd`].
pub fn despawn_on_end_observer(
    trigger: On<AnimationEndedEvent>,
    query: Query<(), With<DespawnOnEnd>>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if query.contains(event.entity) {
        debug!("Despawning {:?} after '{}' ended", event.entity, event.tag);
        commands.entity(event.entity).try_despawn();
    }
}

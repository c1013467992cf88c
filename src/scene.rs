//! Single-sprite playback scene.
//!
//! Wires an [`Animation`] into a bevy_ecs [`World`] the way the CLI uses it:
//! one [`AnimatedSprite`] at the centre of a headless [`Screen`], the shared
//! [`OscillationClock`], and a schedule running
//! `animated_sprite_system -> advance_oscillation_clock -> render_system`.
//!
//! The sprite carries [`DespawnOnEnd`], so a non-repeating animation removes
//! itself once it finishes.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec2;
use serde::Serialize;

use crate::components::animatedsprite::{AnimatedSprite, DespawnOnEnd, Rect};
use crate::components::animation::{Animation, AnimationLoopType};
use crate::events::animation::despawn_on_end_observer;
use crate::resources::config::FlipbookConfig;
use crate::resources::oscillation::OscillationClock;
use crate::resources::screen::Screen;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::{advance_oscillation_clock, animated_sprite_system};
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;

/// Per-tick state of the scene's sprite, printed by `flipbook --json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickSnapshot {
    pub tick: u64,
    pub elapsed_ms: u64,
    pub tag: String,
    pub index: isize,
    pub frame_count: usize,
    pub playing: bool,
    pub reversed: bool,
    pub loop_type: AnimationLoopType,
    pub time_since_flip: u32,
    pub rect: Rect,
}

pub struct Scene {
    pub world: World,
    schedule: Schedule,
    sprite: Entity,
}

impl Scene {
    /// Build the world around `animation`. The animation is not started.
    pub fn new(config: &FlipbookConfig, animation: Animation) -> Self {
        let mut world = World::new();
        let screen = Screen::new(config.screen_width, config.screen_height);
        let (cx, cy) = screen.center();

        world.insert_resource(WorldTime::default());
        world.insert_resource(config.oscillation_clock());
        world.insert_resource(screen);
        world.spawn(Observer::new(despawn_on_end_observer));
        world.flush();

        let sprite = world
            .spawn((
                AnimatedSprite::new(animation, Vec2::new(cx, cy), config.placement),
                DespawnOnEnd,
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                animated_sprite_system,
                advance_oscillation_clock,
                render_system,
            )
                .chain(),
        );

        Self {
            world,
            schedule,
            sprite,
        }
    }

    pub fn sprite_entity(&self) -> Entity {
        self.sprite
    }

    pub fn sprite(&self) -> Option<&AnimatedSprite> {
        self.world.get::<AnimatedSprite>(self.sprite)
    }

    pub fn sprite_mut(&mut self) -> Option<Mut<'_, AnimatedSprite>> {
        self.world.get_mut::<AnimatedSprite>(self.sprite)
    }

    pub fn play(&mut self) {
        if let Some(mut sprite) = self.sprite_mut() {
            sprite.animation.play();
        }
    }

    /// True once the sprite has been despawned.
    pub fn is_finished(&self) -> bool {
        self.world.get_entity(self.sprite).is_err()
    }

    pub fn screen(&self) -> &Screen {
        self.world.resource::<Screen>()
    }

    pub fn clock(&self) -> &OscillationClock {
        self.world.resource::<OscillationClock>()
    }

    /// Run one tick of `dt_ms` milliseconds.
    pub fn tick(&mut self, dt_ms: u32) {
        update_world_time(&mut self.world, dt_ms);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// State of the sprite after the last tick, or `None` once it is gone.
    pub fn snapshot(&self) -> Option<TickSnapshot> {
        let time = self.world.resource::<WorldTime>();
        self.sprite().map(|sprite| {
            let anim = &sprite.animation;
            TickSnapshot {
                tick: time.frame_count,
                elapsed_ms: time.elapsed_ms,
                tag: anim.tag().to_string(),
                index: anim.index(),
                frame_count: anim.frame_count(),
                playing: anim.is_playing(),
                reversed: anim.is_reversed(),
                loop_type: anim.loop_type(),
                time_since_flip: anim.time_since_flip(),
                rect: sprite.rect,
            }
        })
    }
}

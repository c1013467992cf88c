//! Animated sprite component.
//!
//! An [`AnimatedSprite`] puts an [`Animation`] on screen: it keeps a logical
//! position, an anchor [`Placement`], and the [`Rect`] the current frame
//! occupies after the decorative oscillation offset is applied.
//!
//! The oscillation phase is not stored here. It is read from the shared
//! [`OscillationClock`](crate::resources::oscillation::OscillationClock)
//! resource so every sprite sways in step.

use std::fmt;
use std::str::FromStr;

use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::animation::{Animation, TickReport};
use crate::error::FlipbookError;
use crate::resources::oscillation::OscillationClock;

/// Which point of the sprite's rectangle sits on its position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    #[default]
    Center,
}

impl Placement {
    pub const ALL: [Placement; 5] = [
        Placement::TopLeft,
        Placement::TopRight,
        Placement::BottomLeft,
        Placement::BottomRight,
        Placement::Center,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Placement::TopLeft => "top_left",
            Placement::TopRight => "top_right",
            Placement::BottomLeft => "bottom_left",
            Placement::BottomRight => "bottom_right",
            Placement::Center => "center",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = FlipbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        // also accept the unseparated spelling, e.g. "topleft"
        Placement::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted || p.as_str().replace('_', "") == wanted)
            .ok_or_else(|| FlipbookError::InvalidInput(format!("unknown placement '{s}'")))
    }
}

/// Integer screen rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of `size` whose `placement` point lies on `point`.
    ///
    /// `point` is truncated to whole pixels; the centre of an odd-sized
    /// rectangle rounds towards the top-left.
    pub fn anchored(placement: Placement, point: Vec2, (w, h): (u32, u32)) -> Self {
        let (px, py) = (point.x as i32, point.y as i32);
        let (wi, hi) = (w as i32, h as i32);
        let (x, y) = match placement {
            Placement::TopLeft => (px, py),
            Placement::TopRight => (px - wi, py),
            Placement::BottomLeft => (px, py - hi),
            Placement::BottomRight => (px - wi, py - hi),
            Placement::Center => (px - wi / 2, py - hi / 2),
        };
        Self { x, y, w, h }
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w as i32 / 2, self.y + self.h as i32 / 2)
    }
}

/// An animation placed on screen.
#[derive(Component, Debug)]
pub struct AnimatedSprite {
    pub animation: Animation,
    /// Logical position of the anchor point, before oscillation.
    pub position: Vec2,
    pub placement: Placement,
    /// Where the current frame was last placed.
    pub rect: Rect,
}

impl AnimatedSprite {
    pub fn new(animation: Animation, position: Vec2, placement: Placement) -> Self {
        let rect = Rect::anchored(placement, position, animation.size());
        Self {
            animation,
            position,
            placement,
            rect,
        }
    }

    /// Advance the animation and re-place it using the clock's current offset.
    pub fn update(&mut self, delta_ms: u32, clock: &OscillationClock) -> TickReport {
        let report = self.animation.update(delta_ms);
        self.rect = Rect::anchored(
            self.placement,
            self.position + clock.offset(),
            self.animation.size(),
        );
        report
    }
}

/// Marker: despawn the entity once its animation ends.
///
/// See [`crate::events::animation::despawn_on_end_observer`].
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct DespawnOnEnd;

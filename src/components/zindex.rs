//! Z-index component for render ordering.

use bevy_ecs::prelude::Component;

/// Drawing order hint for sprites on the [`Screen`](crate::resources::screen::Screen).
///
/// Higher values are drawn later (on top). Sprites without one draw at `0`;
/// ties keep query order.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZIndex(pub i32);

//! Render system.
//!
//! Composites every sprite's current frame into the headless
//! [`Screen`] in [`ZIndex`] order.

use bevy_ecs::prelude::*;

use crate::components::animatedsprite::AnimatedSprite;
use crate::components::zindex::ZIndex;
use crate::resources::screen::Screen;

/// Clear the screen and draw all sprites at their rects, lowest z first.
pub fn render_system(
    mut screen: ResMut<Screen>,
    query: Query<(&AnimatedSprite, Option<&ZIndex>)>,
) {
    let mut to_draw: Vec<(&AnimatedSprite, ZIndex)> = query
        .iter()
        .map(|(sprite, z)| (sprite, z.copied().unwrap_or_default()))
        .collect();
    to_draw.sort_by_key(|(_, z)| *z);

    screen.clear();
    for (sprite, _z) in to_draw {
        screen.draw(sprite.animation.surface(), sprite.rect);
    }
}

//! Headless screen resource.
//!
//! A fixed-size RGBA buffer that [`render_system`](crate::systems::render::render_system)
//! composites every sprite into once per tick. There is no window; the CLI
//! can save the buffer as a PNG snapshot.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use image::{Rgba, RgbaImage};
use log::info;

use crate::components::animatedsprite::Rect;
use crate::error::{FlipbookError, Result};
use crate::frame::Surface;

/// Opaque black, the default background.
pub const DEFAULT_CLEAR_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[derive(Resource, Debug, Clone)]
pub struct Screen {
    surface: Surface,
    pub clear_color: Rgba<u8>,
}

impl Screen {
    pub fn new(width: u32, height: u32) -> Self {
        let mut screen = Self {
            surface: Surface::new(width, height),
            clear_color: DEFAULT_CLEAR_COLOR,
        };
        screen.clear();
        screen
    }

    pub fn with_clear_color(mut self, color: Rgba<u8>) -> Self {
        self.clear_color = color;
        self.clear();
        self
    }

    pub fn size(&self) -> (u32, u32) {
        self.surface.size()
    }

    pub fn image(&self) -> &RgbaImage {
        self.surface.buffer()
    }

    /// Centre of the screen in pixels.
    pub fn center(&self) -> (f32, f32) {
        let (w, h) = self.size();
        (w as f32 / 2.0, h as f32 / 2.0)
    }

    pub fn clear(&mut self) {
        let color = self.clear_color;
        self.surface.clear(color);
    }

    /// Composite `source` with its top-left corner at `rect`'s origin.
    pub fn draw(&mut self, source: &Surface, rect: Rect) {
        self.surface
            .blit(source.buffer(), i64::from(rect.x), i64::from(rect.y));
    }

    /// Write the current contents as an image; the format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.surface
            .buffer()
            .save(path)
            .map_err(|source| FlipbookError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Saved snapshot to {}", path.display());
        Ok(())
    }
}

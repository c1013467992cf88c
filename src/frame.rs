//! Pixel buffers used by the animation engine.
//!
//! - [`Frame`] – one immutable decoded image, shared cheaply between the
//!   engine's frame list and whatever is currently displayed.
//! - [`Surface`] – an owned, mutable RGBA buffer that frames are composited
//!   into. The engine owns one and redraws it on every frame flip; the
//!   [`Screen`](crate::resources::screen::Screen) wraps another one.

use std::sync::Arc;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Fully transparent pixel used to clear surfaces.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// An immutable RGBA image used as one still of an animation.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    image: Arc<RgbaImage>,
}

impl Frame {
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image: Arc::new(image),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// `(width, height)` in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Return a copy of this frame resized to exactly `width` x `height`.
    ///
    /// Uses nearest-neighbour sampling so pixel art stays crisp. When the size
    /// already matches, the underlying buffer is shared instead of copied.
    pub fn scaled(&self, width: u32, height: u32) -> Frame {
        if self.size() == (width, height) {
            return self.clone();
        }
        Frame::new(imageops::resize(
            self.image.as_ref(),
            width,
            height,
            FilterType::Nearest,
        ))
    }

    /// True if both frames share the same pixel buffer.
    pub fn same_buffer(&self, other: &Frame) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}

impl From<RgbaImage> for Frame {
    fn from(image: RgbaImage) -> Self {
        Frame::new(image)
    }
}

/// Mutable RGBA buffer that frames are drawn onto.
#[derive(Clone, Debug)]
pub struct Surface {
    buffer: RgbaImage,
}

impl Surface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: RgbaImage::from_pixel(width, height, TRANSPARENT),
        }
    }

    pub fn size(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    pub fn buffer(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Rgba<u8>) {
        for pixel in self.buffer.pixels_mut() {
            *pixel = color;
        }
    }

    /// Alpha-composite `image` with its top-left corner at `(x, y)`.
    ///
    /// Parts that fall outside the surface are clipped.
    pub fn blit(&mut self, image: &RgbaImage, x: i64, y: i64) {
        imageops::overlay(&mut self.buffer, image, x, y);
    }

    /// Alpha-composite a frame at `(x, y)`.
    pub fn blit_frame(&mut self, frame: &Frame, x: i64, y: i64) {
        self.blit(frame.image(), x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: u32, h: u32, value: u8) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([value, value, value, 255]))
    }

    #[test]
    fn scaled_resizes_to_exact_dimensions() {
        let frame = Frame::new(solid(2, 3, 10));
        let scaled = frame.scaled(8, 6);
        assert_eq!(scaled.size(), (8, 6));
        assert_eq!(scaled.image().get_pixel(7, 5), &Rgba([10, 10, 10, 255]));
        assert!(!scaled.same_buffer(&frame));
    }

    #[test]
    fn scaled_to_same_size_shares_buffer() {
        let frame = Frame::new(solid(4, 4, 1));
        assert!(frame.scaled(4, 4).same_buffer(&frame));
    }

    #[test]
    fn new_surface_is_transparent() {
        let surface = Surface::new(3, 2);
        assert_eq!(surface.size(), (3, 2));
        assert!(surface.buffer().pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn blit_clips_outside_pixels() {
        let mut surface = Surface::new(4, 4);
        surface.blit(&solid(2, 2, 200), 3, 3);
        assert_eq!(surface.buffer().get_pixel(3, 3), &Rgba([200, 200, 200, 255]));
        assert_eq!(surface.buffer().get_pixel(2, 2), &TRANSPARENT);
    }

    #[test]
    fn clear_overwrites_previous_content() {
        let mut surface = Surface::new(2, 2);
        surface.blit_frame(&Frame::new(solid(2, 2, 50)), 0, 0);
        surface.clear(TRANSPARENT);
        assert!(surface.buffer().pixels().all(|p| *p == TRANSPARENT));
    }
}

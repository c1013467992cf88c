//! ECS components and the animation engine.
//!
//! Submodules overview:
//! - [`animation`] – the frame playback engine, its loop types and settings
//! - [`animatedsprite`] – places an animation on screen; despawn-on-end marker
//! - [`zindex`] – rendering order hint for the headless screen

pub mod animatedsprite;
pub mod animation;
pub mod zindex;

//! Flipbook library.
//!
//! Frame-based sprite animation: an [`Animation`](components::animation::Animation)
//! engine that plays an ordered list of frames forward, backward, looping, or
//! isolating over time, plus the bevy_ecs components, resources, systems, and
//! events that load, place, and draw it.

pub mod components;
pub mod error;
pub mod events;
pub mod frame;
pub mod logging;
pub mod resources;
pub mod scene;
pub mod systems;

pub use error::{FlipbookError, Result};

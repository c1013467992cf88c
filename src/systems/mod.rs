//! Engine systems.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations and the oscillation clock
//! - [`render`] – composite sprites into the headless screen
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod render;
pub mod time;

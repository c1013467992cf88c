//! Event types and observers.
//!
//! Submodules:
//! - [`animation`] – notification raised when a sprite's animation ends, and
//!   the observer that despawns finished sprites
pub mod animation;

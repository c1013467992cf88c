//! ECS resources made available to systems.
//!
//! Overview
//! - `config` – INI-backed playback and scene settings
//! - `frameloader` – decodes frame folders in natural filename order
//! - `oscillation` – shared sway phase for all sprites
//! - `screen` – headless RGBA buffer sprites are composited into
//! - `worldtime` – simulation time and delta in milliseconds
pub mod config;
pub mod frameloader;
pub mod oscillation;
pub mod screen;
pub mod worldtime;

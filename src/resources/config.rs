//! Playback configuration resource.
//!
//! Settings for the CLI and the default sprite scene, loaded from an INI
//! file. Every value has a safe default so a missing file or section is not
//! an error; a value that is present but malformed is.
//!
//! # Configuration File Format
//!
//! ```ini
//! [screen]
//! width = 500
//! height = 500
//!
//! [animation]
//! time = 1000
//! scale = 1.0
//! loop_type = forward
//! tag = Animation
//! extensions = png, jpg
//! placement = center
//!
//! [oscillation]
//! enabled = true
//! speed = 0.05
//! amplitude = 100
//!
//! [run]
//! tick_ms = 16
//! ticks = 120
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;

use crate::components::animatedsprite::Placement;
use crate::components::animation::{
    AnimationLoopType, AnimationSettings, DEFAULT_ANIMATION_TIME, DEFAULT_TAG,
};
use crate::error::{FlipbookError, Result};
use crate::resources::frameloader::{DEFAULT_EXTENSIONS, FrameLoader};
use crate::resources::oscillation::{
    DEFAULT_OSCILLATION_AMPLITUDE, DEFAULT_OSCILLATION_SPEED, OscillationClock,
};

/// Default safe values for startup
const DEFAULT_SCREEN_WIDTH: u32 = 500;
const DEFAULT_SCREEN_HEIGHT: u32 = 500;
const DEFAULT_SCALE: f32 = 1.0;
const DEFAULT_TICK_MS: u32 = 16;
const DEFAULT_TICKS: u32 = 120;
pub const DEFAULT_CONFIG_PATH: &str = "./flipbook.ini";

/// Flipbook configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FlipbookConfig {
    /// Headless screen width in pixels.
    pub screen_width: u32,
    /// Headless screen height in pixels.
    pub screen_height: u32,
    /// Total animation time in milliseconds.
    pub animation_time: u32,
    pub scale: f32,
    pub loop_type: AnimationLoopType,
    pub tag: String,
    /// Frame file extensions accepted by the loader.
    pub extensions: Vec<String>,
    pub placement: Placement,
    pub oscillation_enabled: bool,
    pub oscillation_speed: f32,
    pub oscillation_amplitude: f32,
    /// Milliseconds per simulated tick.
    pub tick_ms: u32,
    /// Number of ticks to simulate.
    pub ticks: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for FlipbookConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FlipbookConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            animation_time: DEFAULT_ANIMATION_TIME,
            scale: DEFAULT_SCALE,
            loop_type: AnimationLoopType::default(),
            tag: DEFAULT_TAG.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            placement: Placement::default(),
            oscillation_enabled: true,
            oscillation_speed: DEFAULT_OSCILLATION_SPEED,
            oscillation_amplitude: DEFAULT_OSCILLATION_AMPLITUDE,
            tick_ms: DEFAULT_TICK_MS,
            ticks: DEFAULT_TICKS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or a value cannot be parsed.
    pub fn load_from_file(&mut self) -> Result<()> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(|e| {
            FlipbookError::Config(format!(
                "failed to load {}: {}",
                self.config_path.display(),
                e
            ))
        })?;
        self.apply_ini(&config)?;

        info!(
            "Loaded config: {}x{} screen, {} ms {} animation, scale={}, tick={} ms x {}",
            self.screen_width,
            self.screen_height,
            self.animation_time,
            self.loop_type,
            self.scale,
            self.tick_ms,
            self.ticks
        );

        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<()> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| FlipbookError::Config(format!("failed to parse config: {}", e)))?;
        self.apply_ini(&config)
    }

    fn apply_ini(&mut self, config: &Ini) -> Result<()> {
        // [screen] section
        if let Some(width) = get_uint(config, "screen", "width")? {
            self.screen_width = width;
        }
        if let Some(height) = get_uint(config, "screen", "height")? {
            self.screen_height = height;
        }

        // [animation] section
        if let Some(time) = get_uint(config, "animation", "time")? {
            self.animation_time = time;
        }
        if let Some(scale) = get_float(config, "animation", "scale")? {
            self.scale = scale;
        }
        if let Some(loop_type) = get_parsed(config, "animation", "loop_type")? {
            self.loop_type = loop_type;
        }
        if let Some(tag) = config.get("animation", "tag") {
            self.tag = tag;
        }
        if let Some(extensions) = config.get("animation", "extensions") {
            self.extensions = extensions
                .split(',')
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .collect();
        }
        if let Some(placement) = get_parsed(config, "animation", "placement")? {
            self.placement = placement;
        }

        // [oscillation] section
        if let Some(enabled) = config
            .getbool("oscillation", "enabled")
            .map_err(FlipbookError::Config)?
        {
            self.oscillation_enabled = enabled;
        }
        if let Some(speed) = get_float(config, "oscillation", "speed")? {
            self.oscillation_speed = speed;
        }
        if let Some(amplitude) = get_float(config, "oscillation", "amplitude")? {
            self.oscillation_amplitude = amplitude;
        }

        // [run] section
        if let Some(tick_ms) = get_uint(config, "run", "tick_ms")? {
            self.tick_ms = tick_ms;
        }
        if let Some(ticks) = get_uint(config, "run", "ticks")? {
            self.ticks = ticks;
        }

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<()> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| FlipbookError::Io {
                path: self.config_path.clone(),
                source: e,
            })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();

        config.set("screen", "width", Some(self.screen_width.to_string()));
        config.set("screen", "height", Some(self.screen_height.to_string()));

        config.set("animation", "time", Some(self.animation_time.to_string()));
        config.set("animation", "scale", Some(self.scale.to_string()));
        config.set("animation", "loop_type", Some(self.loop_type.to_string()));
        config.set("animation", "tag", Some(self.tag.clone()));
        config.set("animation", "extensions", Some(self.extensions.join(", ")));
        config.set("animation", "placement", Some(self.placement.to_string()));

        config.set(
            "oscillation",
            "enabled",
            Some(self.oscillation_enabled.to_string()),
        );
        config.set(
            "oscillation",
            "speed",
            Some(self.oscillation_speed.to_string()),
        );
        config.set(
            "oscillation",
            "amplitude",
            Some(self.oscillation_amplitude.to_string()),
        );

        config.set("run", "tick_ms", Some(self.tick_ms.to_string()));
        config.set("run", "ticks", Some(self.ticks.to_string()));

        config
    }

    /// Animation settings for the scene's sprite.
    pub fn animation_settings(&self) -> AnimationSettings {
        AnimationSettings::default()
            .with_scale(self.scale)
            .with_animation_time(self.animation_time)
            .with_tag(self.tag.clone())
            .with_loop_type(self.loop_type)
    }

    pub fn frame_loader(&self) -> FrameLoader {
        FrameLoader::new(&self.extensions)
    }

    pub fn oscillation_clock(&self) -> OscillationClock {
        if self.oscillation_enabled {
            OscillationClock::new(self.oscillation_speed, self.oscillation_amplitude)
        } else {
            OscillationClock::disabled()
        }
    }
}

fn get_uint(config: &Ini, section: &str, key: &str) -> Result<Option<u32>> {
    config
        .getuint(section, key)
        .map_err(FlipbookError::Config)?
        .map(|value| {
            u32::try_from(value)
                .map_err(|_| FlipbookError::Config(format!("[{section}] {key} is too large")))
        })
        .transpose()
}

fn get_float(config: &Ini, section: &str, key: &str) -> Result<Option<f32>> {
    Ok(config
        .getfloat(section, key)
        .map_err(FlipbookError::Config)?
        .map(|value| value as f32))
}

fn get_parsed<T>(config: &Ini, section: &str, key: &str) -> Result<Option<T>>
where
    T: FromStr<Err = FlipbookError>,
{
    config.get(section, key).map(|s| s.parse()).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FlipbookConfig::new();
        assert_eq!(config.screen_width, 500);
        assert_eq!(config.animation_time, DEFAULT_ANIMATION_TIME);
        assert_eq!(config.loop_type, AnimationLoopType::Forward);
        assert_eq!(config.extensions, vec!["png".to_string()]);
        assert_eq!(config.placement, Placement::Center);
        assert_eq!(config.config_path, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_load_from_str_overrides_present_values() {
        let mut config = FlipbookConfig::new();
        config
            .load_from_str(
                "[screen]\nwidth = 320\n\n[animation]\nloop_type = repeating_backward\n\
                 extensions = png, .JPG\nplacement = top_left\ntag = boom\n\n\
                 [oscillation]\nenabled = false\n\n[run]\nticks = 10\n",
            )
            .unwrap();
        assert_eq!(config.screen_width, 320);
        assert_eq!(config.screen_height, 500);
        assert_eq!(config.loop_type, AnimationLoopType::RepeatingBackward);
        assert_eq!(config.extensions, vec!["png".to_string(), ".JPG".to_string()]);
        assert_eq!(config.placement, Placement::TopLeft);
        assert_eq!(config.tag, "boom");
        assert!(!config.oscillation_enabled);
        assert_eq!(config.ticks, 10);
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);

        assert_eq!(config.oscillation_clock(), OscillationClock::disabled());
        assert!(config.frame_loader().accepts(std::path::Path::new("a.jpg")));
    }

    #[test]
    fn test_bad_values_are_config_errors() {
        let mut config = FlipbookConfig::new();
        assert!(matches!(
            config.load_from_str("[screen]\nwidth = wide\n"),
            Err(FlipbookError::Config(_))
        ));
        assert!(matches!(
            config.load_from_str("[animation]\nloop_type = sideways\n"),
            Err(FlipbookError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = FlipbookConfig::with_path("/no/such/flipbook.ini");
        assert!(matches!(
            config.load_from_file(),
            Err(FlipbookError::Config(_))
        ));
    }

    #[test]
    fn test_ini_round_trip_keeps_settings() {
        let mut original = FlipbookConfig::new();
        original.loop_type = AnimationLoopType::Isolating;
        original.placement = Placement::BottomRight;
        original.tick_ms = 33;

        let text = original.to_ini().writes();
        let mut loaded = FlipbookConfig::new();
        loaded.load_from_str(&text).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_animation_settings_from_config() {
        let mut config = FlipbookConfig::new();
        config.animation_time = 600;
        config.tag = "spark".to_string();
        let settings = config.animation_settings();
        assert_eq!(settings.animation_time, 600);
        assert_eq!(settings.tag, "spark");
        assert_eq!(settings.size, None);
    }
}

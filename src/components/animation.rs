//! Frame-based animation playback engine.
//!
//! An [`Animation`] owns an ordered list of [`Frame`]s and a small playback
//! state machine. It has no timers of its own: the owner calls
//! [`Animation::update`] once per tick with the elapsed milliseconds and the
//! engine decides whether to flip to the next frame, turn around, stop, or
//! fire its completion callback.
//!
//! # States
//!
//! An animation is either stopped (the initial state) or playing.
//! [`Animation::play`] starts it, [`Animation::stop`] pauses it without
//! touching the frame index or the timer, and reaching the end of a
//! non-repeating sequence stops it and calls the callback with the tag.
//!
//! # Loop types
//!
//! See [`AnimationLoopType`]. Backward variants are implemented by storing the
//! frames in reverse order; playback itself always walks the index upwards.
//!
//! # Related
//!
//! - [`crate::components::animatedsprite::AnimatedSprite`] – places an animation on screen
//! - [`crate::systems::animation::animated_sprite_system`] – drives animations every tick

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::error::{FlipbookError, Result};
use crate::frame::{Frame, Surface, TRANSPARENT};
use crate::resources::frameloader::FrameLoader;

/// Total playback time in milliseconds used when none is given.
pub const DEFAULT_ANIMATION_TIME: u32 = 1000;
/// Tag passed to the callback when none is given.
pub const DEFAULT_TAG: &str = "Animation";

/// Policy governing direction and repetition of frame playback.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationLoopType {
    /// Play the frames in load order once.
    #[default]
    Forward,
    /// Play the frames in reverse load order once.
    Backward,
    /// Play forward, then turn around in place instead of running off the end.
    Isolating,
    /// Play in load order forever.
    Repeating,
    /// Play in reverse load order forever.
    RepeatingBackward,
}

impl AnimationLoopType {
    pub const ALL: [AnimationLoopType; 5] = [
        AnimationLoopType::Forward,
        AnimationLoopType::Backward,
        AnimationLoopType::Isolating,
        AnimationLoopType::Repeating,
        AnimationLoopType::RepeatingBackward,
    ];

    /// The loop type obtained by flipping playback direction.
    pub const fn reverse(self) -> Self {
        match self {
            AnimationLoopType::Forward => AnimationLoopType::Backward,
            AnimationLoopType::Backward => AnimationLoopType::Forward,
            AnimationLoopType::Isolating => AnimationLoopType::Isolating,
            AnimationLoopType::Repeating => AnimationLoopType::RepeatingBackward,
            AnimationLoopType::RepeatingBackward => AnimationLoopType::Repeating,
        }
    }

    /// True for the variants that store their frames reversed at construction.
    pub const fn is_backward(self) -> bool {
        matches!(
            self,
            AnimationLoopType::Backward | AnimationLoopType::RepeatingBackward
        )
    }

    /// True for the variants that never end on their own.
    pub const fn is_repeating(self) -> bool {
        matches!(
            self,
            AnimationLoopType::Repeating | AnimationLoopType::RepeatingBackward
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            AnimationLoopType::Forward => "forward",
            AnimationLoopType::Backward => "backward",
            AnimationLoopType::Isolating => "isolating",
            AnimationLoopType::Repeating => "repeating",
            AnimationLoopType::RepeatingBackward => "repeating_backward",
        }
    }
}

impl fmt::Display for AnimationLoopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationLoopType {
    type Err = FlipbookError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        AnimationLoopType::ALL
            .into_iter()
            .find(|loop_type| loop_type.as_str() == wanted)
            .ok_or_else(|| FlipbookError::InvalidInput(format!("unknown loop type '{s}'")))
    }
}

/// Completion callback, called with the animation's tag.
pub type AnimationCallback = Box<dyn FnMut(&str) + Send + Sync>;

/// A callback that does nothing.
pub fn noop_callback() -> AnimationCallback {
    Box::new(|_| {})
}

/// What a single [`Animation::update`] call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Number of frame advances performed during the tick.
    pub flips: u32,
    /// Whether one of those advances ended the animation.
    pub ended: bool,
}

/// Playback configuration used by [`Animation::from_folder_path`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSettings {
    /// Target frame size before scaling. `None` keeps the first frame's size.
    pub size: Option<(u32, u32)>,
    /// Uniform scale factor applied on top of `size`.
    pub scale: f32,
    /// Time in milliseconds to show every frame once.
    pub animation_time: u32,
    pub tag: String,
    pub loop_type: AnimationLoopType,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            size: None,
            scale: 1.0,
            animation_time: DEFAULT_ANIMATION_TIME,
            tag: DEFAULT_TAG.to_string(),
            loop_type: AnimationLoopType::Forward,
        }
    }
}

impl AnimationSettings {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = Some((width, height));
        self
    }
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
    pub fn with_animation_time(mut self, animation_time: u32) -> Self {
        self.animation_time = animation_time;
        self
    }
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }
    pub fn with_loop_type(mut self, loop_type: AnimationLoopType) -> Self {
        self.loop_type = loop_type;
        self
    }
}

/// One animation instance: frames plus playback state.
pub struct Animation {
    frames: Vec<Frame>,
    /// Signed so it can run past either end; that is what triggers [`Animation::end`].
    index: isize,
    flip_interval: u32,
    time_since_flip: u32,
    playing: bool,
    reversed: bool,
    loop_type: AnimationLoopType,
    tag: String,
    callback: AnimationCallback,
    current: Frame,
    surface: Surface,
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("frames", &self.frames.len())
            .field("index", &self.index)
            .field("flip_interval", &self.flip_interval)
            .field("time_since_flip", &self.time_since_flip)
            .field("playing", &self.playing)
            .field("reversed", &self.reversed)
            .field("loop_type", &self.loop_type)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

impl Animation {
    /// Build an animation from decoded frames.
    ///
    /// Every frame is resized to `target_size * scale`. Each frame is shown for
    /// `total_animation_time / frame_count` milliseconds (truncated).
    ///
    /// # Errors
    ///
    /// [`FlipbookError::InvalidInput`] if `frames` is empty, `scale` is not a
    /// finite positive number, or the resulting flip interval would be zero.
    /// A zero interval is refused because [`update`](Self::update) would
    /// never catch up with it.
    pub fn new(
        frames: Vec<Frame>,
        target_size: (u32, u32),
        scale: f32,
        total_animation_time: u32,
        tag: impl Into<String>,
        callback: AnimationCallback,
        loop_type: AnimationLoopType,
    ) -> Result<Self> {
        let tag = tag.into();
        if frames.is_empty() {
            return Err(FlipbookError::InvalidInput(format!(
                "animation '{tag}' needs at least one frame"
            )));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(FlipbookError::InvalidInput(format!(
                "animation '{tag}': scale must be positive and finite, got {scale}"
            )));
        }
        let frame_count = u32::try_from(frames.len()).map_err(|_| {
            FlipbookError::InvalidInput(format!("animation '{tag}' has too many frames"))
        })?;
        let flip_interval = total_animation_time / frame_count;
        if flip_interval == 0 {
            return Err(FlipbookError::InvalidInput(format!(
                "animation '{tag}': {total_animation_time} ms is too short for {frame_count} frames"
            )));
        }

        let (width, height) = scaled_size(target_size, scale);
        let mut frames: Vec<Frame> = frames
            .iter()
            .map(|frame| frame.scaled(width, height))
            .collect();

        let reversed = loop_type.is_backward();
        if reversed {
            frames.reverse();
        }

        let current = frames[0].clone();
        let mut surface = Surface::new(width, height);
        surface.blit_frame(&current, 0, 0);

        debug!(
            "Animation '{}': {} frames of {}x{}, flip every {} ms, loop {}",
            tag, frame_count, width, height, flip_interval, loop_type
        );

        Ok(Self {
            frames,
            index: 0,
            flip_interval,
            time_since_flip: 0,
            playing: false,
            reversed,
            loop_type,
            tag,
            callback,
            current,
            surface,
        })
    }

    /// Load every allowed image in `folder` and build an animation from them.
    ///
    /// When `settings.size` is `None` the first frame's size is used as the
    /// target size.
    pub fn from_folder_path(
        folder: impl AsRef<Path>,
        loader: &FrameLoader,
        settings: AnimationSettings,
        callback: AnimationCallback,
    ) -> Result<Self> {
        let frames = loader.load(folder)?;
        let size = match settings.size {
            Some(size) => size,
            None => frames.first().map(Frame::size).unwrap_or_default(),
        };
        Self::new(
            frames,
            size,
            settings.scale,
            settings.animation_time,
            settings.tag,
            callback,
            settings.loop_type,
        )
    }

    pub fn play(&mut self) {
        if !self.playing {
            debug!("Animation '{}' playing", self.tag);
        }
        self.playing = true;
    }

    pub fn stop(&mut self) {
        if self.playing {
            debug!("Animation '{}' stopped", self.tag);
        }
        self.playing = false;
    }

    /// Advance playback by `delta_time` milliseconds.
    ///
    /// Does nothing while stopped. A delta spanning several flip intervals
    /// performs several advances; the remainder carries over to the next tick.
    pub fn update(&mut self, delta_time: u32) -> TickReport {
        let mut report = TickReport::default();
        if !self.playing {
            return report;
        }
        self.time_since_flip = self.time_since_flip.saturating_add(delta_time);
        while self.time_since_flip >= self.flip_interval {
            self.time_since_flip -= self.flip_interval;
            report.flips += 1;
            if self.flip_image() {
                report.ended = true;
                break;
            }
        }
        report
    }

    /// Move to the next frame according to the loop type. Returns true if the
    /// animation ended.
    fn flip_image(&mut self) -> bool {
        let count = self.frames.len() as isize;
        match self.loop_type {
            AnimationLoopType::Forward | AnimationLoopType::Backward => self.index += 1,
            AnimationLoopType::Repeating | AnimationLoopType::RepeatingBackward => {
                self.index = (self.index + 1).rem_euclid(count);
            }
            AnimationLoopType::Isolating => {
                if self.index == count - 1 {
                    self.reverse();
                }
                self.index += 1;
            }
        }

        let Some(index) = self.valid_index() else {
            self.end();
            return true;
        };
        if self.playing {
            self.show(index);
        }
        trace!("Animation '{}' flipped to frame {}", self.tag, index);
        false
    }

    fn valid_index(&self) -> Option<usize> {
        usize::try_from(self.index)
            .ok()
            .filter(|&index| index < self.frames.len())
    }

    fn show(&mut self, index: usize) {
        self.current = self.frames[index].clone();
        self.surface.clear(TRANSPARENT);
        self.surface.blit_frame(&self.current, 0, 0);
    }

    /// Flip playback direction in place.
    ///
    /// Reverses the stored frames, mirrors the index, and swaps the loop type
    /// for its reverse. The displayed frame is left alone until the next flip.
    pub fn reverse(&mut self) {
        self.frames.reverse();
        self.index = self.frames.len() as isize - self.index;
        self.reversed = !self.reversed;
        self.loop_type = self.loop_type.reverse();
        debug!(
            "Animation '{}' reversed, now {} at index {}",
            self.tag, self.loop_type, self.index
        );
    }

    /// Stop and notify the callback.
    pub fn end(&mut self) {
        self.stop();
        info!("Animation '{}' ended", self.tag);
        (self.callback)(&self.tag);
    }

    /// Stop, restore load order and rewind to the first frame.
    ///
    /// Leaves `time_since_flip`, the loop type and the displayed frame as they are.
    pub fn reset(&mut self) {
        self.stop();
        if self.reversed {
            self.frames.reverse();
            self.reversed = false;
        }
        self.index = 0;
        debug!("Animation '{}' reset", self.tag);
    }

    /// Dimensions of the displayed frame.
    pub fn size(&self) -> (u32, u32) {
        self.current.size()
    }

    pub fn current_image(&self) -> &Frame {
        &self.current
    }

    /// The buffer the current frame is composited into.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Frames in their current stored order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn index(&self) -> isize {
        self.index
    }

    pub fn flip_interval(&self) -> u32 {
        self.flip_interval
    }

    pub fn time_since_flip(&self) -> u32 {
        self.time_since_flip
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn loop_type(&self) -> AnimationLoopType {
        self.loop_type
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

fn scaled_size((width, height): (u32, u32), scale: f32) -> (u32, u32) {
    let scale_dim = |dim: u32| ((dim as f32 * scale) as u32).max(1);
    (scale_dim(width), scale_dim(height))
}

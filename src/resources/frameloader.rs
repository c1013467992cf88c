//! Frame loader resource.
//!
//! Decodes every image with an allowed extension in a folder into
//! [`Frame`]s. Files are ordered by a natural, numeric-aware comparison of
//! their names so `2.png` comes before `10.png`.
//!
//! # Example
//!
//! ```ignore
//! let loader = FrameLoader::default().with_extension("jpg");
//! let frames = loader.load("assets/explosion")?;
//! ```

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use bevy_ecs::prelude::Resource;
use log::{debug, warn};
use rustc_hash::FxHashSet;

use crate::error::{FlipbookError, Result};
use crate::frame::Frame;

/// Extensions accepted when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["png"];

/// Loads animation frames from folders on disk.
#[derive(Resource, Debug, Clone)]
pub struct FrameLoader {
    /// Lowercase extensions without the leading dot.
    extensions: FxHashSet<String>,
}

impl Default for FrameLoader {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().copied())
    }
}

impl FrameLoader {
    /// Create a loader accepting the given extensions (case-insensitive,
    /// leading dot optional).
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .filter_map(|ext| normalize_extension(ext.as_ref()))
                .collect(),
        }
    }

    /// Builder-style: also accept `extension`.
    pub fn with_extension(mut self, extension: &str) -> Self {
        if let Some(ext) = normalize_extension(extension) {
            self.extensions.insert(ext);
        }
        self
    }

    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(normalize_extension)
            .is_some_and(|ext| self.extensions.contains(&ext))
    }

    /// Sorted list of accepted extensions.
    pub fn extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }

    /// Paths of all accepted files in `folder`, in natural order.
    pub fn frame_paths(&self, folder: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let folder = folder.as_ref();
        let io_err = |source| FlipbookError::Io {
            path: folder.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(folder).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && self.accepts(&path) {
                paths.push(path);
            }
        }
        paths.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));
        Ok(paths)
    }

    /// Decode every accepted image in `folder`.
    ///
    /// # Errors
    ///
    /// - [`FlipbookError::Io`] if the folder cannot be read
    /// - [`FlipbookError::Decode`] if a file is not a valid image
    /// - [`FlipbookError::NoFrames`] if nothing is left after filtering
    pub fn load(&self, folder: impl AsRef<Path>) -> Result<Vec<Frame>> {
        let folder = folder.as_ref();
        let paths = self.frame_paths(folder)?;
        if paths.is_empty() {
            warn!(
                "No {:?} files in {}",
                self.extensions(),
                folder.display()
            );
            return Err(FlipbookError::NoFrames(folder.to_path_buf()));
        }

        let frames = paths
            .iter()
            .map(|path| {
                image::open(path)
                    .map(|img| Frame::new(img.into_rgba8()))
                    .map_err(|source| FlipbookError::Decode {
                        path: path.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("Loaded {} frames from {}", frames.len(), folder.display());
        Ok(frames)
    }
}

fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim().trim_start_matches('.');
    (!ext.is_empty()).then(|| ext.to_ascii_lowercase())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// A run of either digits or non-digits inside a file name.
#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Number(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_digits = None;
    for (i, c) in s.char_indices() {
        let digit = c.is_ascii_digit();
        match in_digits {
            Some(prev) if prev != digit => {
                out.push(make_chunk(&s[start..i], prev));
                start = i;
            }
            _ => {}
        }
        in_digits = Some(digit);
    }
    if let Some(digit) = in_digits {
        out.push(make_chunk(&s[start..], digit));
    }
    out
}

fn make_chunk(s: &str, digit: bool) -> Chunk<'_> {
    if digit { Chunk::Number(s) } else { Chunk::Text(s) }
}

/// Compare two digit strings by numeric value, without overflow.
fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
}

/// Natural ordering: digit runs compare numerically, text runs lexically.
///
/// Numbers sort before text at the same position. Names that compare equal
/// chunk by chunk (e.g. `01` and `1`) fall back to plain string order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (ca, cb) = (chunks(a), chunks(b));
    for (x, y) in ca.iter().zip(cb.iter()) {
        let ord = match (x, y) {
            (Chunk::Number(x), Chunk::Number(y)) => cmp_numeric(x, y),
            (Chunk::Text(x), Chunk::Text(y)) => x.cmp(y),
            (Chunk::Number(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Number(_)) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    ca.len().cmp(&cb.len()).then_with(|| a.cmp(b))
}

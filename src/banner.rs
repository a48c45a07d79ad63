//! Banner glyph tables.
//!
//! A banner file defines the art for every printable ASCII character, in
//! increasing character order starting at space (32). Each character occupies
//! a block of exactly [`BANNER_HEIGHT`] rows, with one blank separator line
//! between blocks. All rows of a glyph share the same width; widths may differ
//! between characters.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of art rows per glyph.
pub const BANNER_HEIGHT: usize = 8;

/// Directory holding the shipped banner files, relative to the working
/// directory, used when neither the CLI flag nor the config names one.
pub const DEFAULT_BANNER_DIR: &str = "banners";

/// First character a banner file defines.
const FIRST_CHAR: char = ' ';
/// Last character a banner file defines.
const LAST_CHAR: char = '~';

/// Errors that can occur while loading a banner file.
#[derive(Debug, thiserror::Error)]
pub enum BannerError {
    #[error("Failed to read banner file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A named banner style shipped with the tool.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Standard,
    Shadow,
    Thinkertoy,
}

impl Style {
    /// File name of this style inside a banner directory.
    pub fn filename(&self) -> &'static str {
        match self {
            Style::Standard => "standard.txt",
            Style::Shadow => "shadow.txt",
            Style::Thinkertoy => "thinkertoy.txt",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Style::Standard => "standard",
            Style::Shadow => "shadow",
            Style::Thinkertoy => "thinkertoy",
        };
        write!(f, "{}", name)
    }
}

/// Glyph table mapping each supported character to its art rows.
#[derive(Debug, Clone, Default)]
pub struct Banner {
    glyphs: HashMap<char, Vec<String>>,
}

impl Banner {
    /// Create an empty glyph table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a banner file into a glyph table.
    ///
    /// Characters are assigned in file order from space to tilde. Trailing
    /// partial blocks are ignored; a file defining fewer characters simply
    /// produces a smaller table (missing characters fail later, at render
    /// time).
    pub fn load(path: &Path) -> Result<Self, BannerError> {
        let contents = fs::read_to_string(path).map_err(|source| BannerError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let lines: Vec<&str> = contents.lines().collect();

        let mut banner = Banner::new();
        let mut ch = FIRST_CHAR;
        let mut i = 0;
        while i + BANNER_HEIGHT <= lines.len() && ch <= LAST_CHAR {
            let block = lines[i..i + BANNER_HEIGHT]
                .iter()
                .map(|row| row.to_string())
                .collect();
            banner.glyphs.insert(ch, block);
            match char::from_u32(ch as u32 + 1) {
                Some(next) => ch = next,
                None => break,
            }
            // Skip the blank separator line after the block.
            i += BANNER_HEIGHT + 1;
        }

        debug!(path = %path.display(), glyphs = banner.len(), "loaded banner");
        Ok(banner)
    }

    /// Insert a glyph. Mainly useful for constructing tables in tests.
    pub fn insert(&mut self, ch: char, rows: Vec<String>) {
        self.glyphs.insert(ch, rows);
    }

    /// Art rows for `ch`, or `None` if the character is unsupported.
    pub fn get(&self, ch: char) -> Option<&[String]> {
        self.glyphs.get(&ch).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }
}

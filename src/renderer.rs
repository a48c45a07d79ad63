//! Text-to-banner rendering.
//!
//! Converts input text into multi-line ASCII art using a [`Banner`] glyph
//! table. Input may contain printable ASCII characters (32-126) and `'\n'`
//! line separators. Each non-empty input line renders as a block of
//! [`BANNER_HEIGHT`] art rows; empty lines (from consecutive separators)
//! render as a single empty row, preserving the input's vertical structure.
//!
//! Validation order is a committed contract: printability of the whole input
//! first, then the empty-input special case, then banner emptiness, then
//! per-character glyph lookup lazily during row assembly (the first offending
//! character aborts the render).

use crate::banner::{Banner, BANNER_HEIGHT};
use crate::color::ANSI_RESET;
use crate::coloring;

/// Errors that can occur while rendering text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("input contains unprintable character {0:?}")]
    UnprintableCharacter(char),

    #[error("banner has no glyphs")]
    EmptyGlyphTable,

    #[error("no glyph for character {0:?}")]
    MissingGlyph(char),

    #[error("glyph for {ch:?} has {rows} rows, expected {expected}")]
    MalformedGlyph {
        ch: char,
        rows: usize,
        expected: usize,
    },
}

/// Render `text` as ASCII art.
///
/// The output never ends with a trailing `'\n'`. Empty input, or input that
/// is exactly one `'\n'`, renders to an empty string.
pub fn render(text: &str, banner: &Banner) -> Result<String, RenderError> {
    render_inner(text, banner, None)
}

/// Render `text` as ASCII art with occurrences of `pattern` wrapped in
/// `prefix` / reset ANSI sequences.
///
/// Matching is per input line; each line's block is colorized with that
/// line's own match mask and width table, so color boundaries align
/// vertically across all rows of a block. An empty `pattern` highlights
/// every character (see [`coloring::find_matches`]).
pub fn render_highlighted(
    text: &str,
    banner: &Banner,
    pattern: &str,
    prefix: &str,
) -> Result<String, RenderError> {
    render_inner(text, banner, Some((pattern, prefix)))
}

fn render_inner(
    text: &str,
    banner: &Banner,
    highlight: Option<(&str, &str)>,
) -> Result<String, RenderError> {
    for ch in text.chars() {
        if ch != '\n' && !is_printable(ch) {
            return Err(RenderError::UnprintableCharacter(ch));
        }
    }
    if text.is_empty() || text == "\n" {
        return Ok(String::new());
    }
    if banner.is_empty() {
        return Err(RenderError::EmptyGlyphTable);
    }

    let mut out: Vec<String> = Vec::new();
    for line in segment(text) {
        if line.is_empty() {
            out.push(String::new());
            continue;
        }
        let mut rows = render_line(line, banner)?;
        if let Some((pattern, prefix)) = highlight {
            let mask = coloring::find_matches(line, pattern);
            let widths = coloring::char_widths(line, banner);
            rows = coloring::colorize(&rows, &mask, &widths, prefix, ANSI_RESET);
        }
        out.extend(rows);
    }
    Ok(out.join("\n"))
}

/// Split input into text lines. A single trailing separator produces no
/// extra empty line.
fn segment(text: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = text.split('\n').collect();
    if parts.last() == Some(&"") {
        parts.pop();
    }
    parts
}

/// Assemble the art block for one non-empty text line.
fn render_line(line: &str, banner: &Banner) -> Result<Vec<String>, RenderError> {
    let mut rows = vec![String::new(); BANNER_HEIGHT];
    for ch in line.chars() {
        let glyph = glyph_rows(ch, banner)?;
        for (row, art) in rows.iter_mut().zip(glyph) {
            row.push_str(art);
        }
    }
    Ok(rows)
}

/// Look up the glyph for `ch`, validating its height.
fn glyph_rows<'a>(ch: char, banner: &'a Banner) -> Result<&'a [String], RenderError> {
    let rows = banner.get(ch).ok_or(RenderError::MissingGlyph(ch))?;
    if rows.len() != BANNER_HEIGHT {
        return Err(RenderError::MalformedGlyph {
            ch,
            rows: rows.len(),
            expected: BANNER_HEIGHT,
        });
    }
    Ok(rows)
}

fn is_printable(ch: char) -> bool {
    (' '..='~').contains(&ch)
}

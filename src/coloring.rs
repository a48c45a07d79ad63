//! Substring highlighting for rendered banner art.
//!
//! Works in two coordinate spaces: character indices in the original text
//! line, and column offsets inside the rendered art rows. [`find_matches`]
//! produces a per-character match mask in text space; [`char_widths`] gives
//! the column width each character occupies in art space; [`colorize`] walks
//! both together to splice ANSI sequences around the matching column spans.
//!
//! All inputs are printable ASCII (the renderer validates this), so byte and
//! character indices coincide throughout.

use crate::banner::Banner;

/// Mark which character positions of `line` are covered by an occurrence of
/// `pattern`.
///
/// Matching is case-sensitive and exact. Overlapping occurrences merge into
/// one mask via logical OR; the mask is exactly the union of occurrence
/// coverages.
///
/// An empty `pattern` marks every position. This degenerate behavior is
/// inherited from the original tool and is relied on by the CLI's
/// "highlight the whole text" default; callers wanting no-match semantics
/// must guard against it themselves.
pub fn find_matches(line: &str, pattern: &str) -> Vec<bool> {
    let line = line.as_bytes();
    let pattern = pattern.as_bytes();

    if pattern.is_empty() {
        return vec![true; line.len()];
    }

    let mut mask = vec![false; line.len()];
    if pattern.len() > line.len() {
        return mask;
    }
    for start in 0..=line.len() - pattern.len() {
        if &line[start..start + pattern.len()] == pattern {
            for covered in &mut mask[start..start + pattern.len()] {
                *covered = true;
            }
        }
    }
    mask
}

/// Column width each character of `line` occupies in its rendered rows.
///
/// Widths come from the glyph's first row; all rows of a glyph share one
/// width. Characters without a glyph map to width 0 (callers run this only
/// after a successful render, where every character has one).
pub fn char_widths(line: &str, banner: &Banner) -> Vec<usize> {
    line.chars()
        .map(|ch| {
            banner
                .get(ch)
                .and_then(|rows| rows.first())
                .map_or(0, |row| row.len())
        })
        .collect()
}

/// Splice `prefix` / `reset` ANSI sequences into `rows` around the column
/// spans of masked characters.
///
/// Every row is processed identically with the same mask and width table, so
/// color boundaries align vertically across a block. One prefix/reset pair is
/// emitted per contiguous run of masked characters, not per character.
/// Empty `rows` or an empty width table return the rows unchanged.
pub fn colorize(
    rows: &[String],
    mask: &[bool],
    widths: &[usize],
    prefix: &str,
    reset: &str,
) -> Vec<String> {
    if rows.is_empty() || widths.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .map(|row| colorize_row(row, mask, widths, prefix, reset))
        .collect()
}

/// Color one art row: a single forward walk over the width table with a
/// running column offset.
fn colorize_row(row: &str, mask: &[bool], widths: &[usize], prefix: &str, reset: &str) -> String {
    let mut out = String::with_capacity(row.len() + prefix.len() + reset.len());
    let mut offset = 0;

    let count = widths.len().min(mask.len());
    for idx in 0..count {
        // Span for this character, clipped to the actual row length. A short
        // row yields empty spans rather than cutting the walk off, so every
        // emitted prefix still gets its reset.
        let end = (offset + widths[idx]).min(row.len());

        let starts_run = mask[idx] && (idx == 0 || !mask[idx - 1]);
        let ends_run = mask[idx] && (idx == count - 1 || !mask[idx + 1]);

        if starts_run {
            out.push_str(prefix);
        }
        out.push_str(&row[offset..end]);
        if ends_run {
            out.push_str(reset);
        }

        offset = end;
    }

    // Columns past the last mapped span stay uncolored.
    if offset < row.len() {
        out.push_str(&row[offset..]);
    }
    out
}

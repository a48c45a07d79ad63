//! CLI definitions for asciiart
//!
//! The clap structure lives here, separated from main.rs, so library users
//! and tests can construct and inspect it without going through the binary.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use std::path::PathBuf;

use crate::banner::Style;

/// Build clap styles for the help output.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "asciiart")]
#[command(about = "Render text as ASCII-art banners, with optional substring highlighting")]
#[command(
    long_about = "Render text as multi-line ASCII-art banners.

Each character of the input becomes an 8-row block of art, looked up in a
banner glyph file (standard, shadow, or thinkertoy). With --color, matching
parts of the text are wrapped in ANSI color sequences, aligned across all
8 rows of each character.

QUICK START:
    asciiart \"Hello\"                        Render with the standard banner
    asciiart \"Hello\" shadow                 Use the shadow banner
    asciiart \"Hello\\nWorld\"                 Two lines of art
    asciiart \"Hello\" --color red            Color the whole text red
    asciiart \"Hello\" --color red --highlight He
                                            Color only occurrences of \"He\""
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Text to render; literal \n sequences start a new line
    pub text: String,

    /// Banner style (defaults to the configured style)
    #[arg(value_enum)]
    pub style: Option<Style>,

    /// Highlight color: a name (red, green, yellow, orange, blue, magenta),
    /// #RRGGBB, or rgb(r,g,b)
    #[arg(long, value_name = "SPEC")]
    pub color: Option<String>,

    /// Substring to highlight; the whole text when omitted
    #[arg(long, requires = "color", value_name = "SUBSTRING")]
    pub highlight: Option<String>,

    /// Directory containing banner files
    #[arg(long, value_name = "DIR")]
    pub banner_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

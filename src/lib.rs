//! ASCII-art banner rendering library.
//!
//! Renders plain text into multi-line banner art using per-character glyph
//! tables, and optionally highlights substring occurrences by splicing ANSI
//! color sequences into the matching art columns.

pub mod banner;
pub mod cli;
pub mod color;
pub mod coloring;
pub mod config;
pub mod renderer;

pub use banner::{Banner, BannerError, Style, BANNER_HEIGHT};
pub use color::{ColorError, Rgb, ANSI_RESET};
pub use config::Config;
pub use renderer::{render, render_highlighted, RenderError};

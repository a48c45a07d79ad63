//! Color specification parsing and ANSI escape sequences.
//!
//! Accepts named colors, `#RRGGBB` hex, and `rgb(r,g,b)` with each channel
//! in 0-255, and turns them into a 24-bit [`Rgb`] value. The colorizer never
//! parses specs itself; it only splices the ready-made escape strings
//! produced here.

/// ANSI reset sequence.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Named colors accepted by `--color`.
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("red", Rgb { r: 255, g: 0, b: 0 }),
    ("green", Rgb { r: 0, g: 255, b: 0 }),
    (
        "yellow",
        Rgb {
            r: 255,
            g: 255,
            b: 0,
        },
    ),
    (
        "orange",
        Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
    ),
    ("blue", Rgb { r: 0, g: 0, b: 255 }),
    (
        "magenta",
        Rgb {
            r: 255,
            g: 0,
            b: 255,
        },
    ),
];

/// Errors that can occur while parsing a color specification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("unsupported color {0:?} (expected a color name, #RRGGBB, or rgb(r,g,b))")]
    UnknownName(String),

    #[error("invalid HEX color {0:?}: expected exactly 6 hexadecimal digits")]
    InvalidHex(String),

    #[error("invalid RGB color {0:?}: expected rgb(r,g,b) with each channel 0-255")]
    InvalidRgb(String),
}

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a color specification string.
    pub fn parse(spec: &str) -> Result<Rgb, ColorError> {
        if let Some((_, rgb)) = NAMED_COLORS.iter().find(|(name, _)| *name == spec) {
            return Ok(*rgb);
        }
        if let Some(hex) = spec.strip_prefix('#') {
            return parse_hex(spec, hex);
        }
        if let Some(inner) = spec.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            return parse_rgb(spec, inner);
        }
        Err(ColorError::UnknownName(spec.to_string()))
    }

    /// Truecolor foreground escape prefix for this color.
    pub fn ansi_prefix(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

fn parse_hex(spec: &str, hex: &str) -> Result<Rgb, ColorError> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(spec.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::InvalidHex(spec.to_string()))
    };
    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

fn parse_rgb(spec: &str, inner: &str) -> Result<Rgb, ColorError> {
    let channels: Vec<&str> = inner.split(',').collect();
    if channels.len() != 3 {
        return Err(ColorError::InvalidRgb(spec.to_string()));
    }
    let channel = |value: &str| {
        value
            .trim()
            .parse::<u8>()
            .map_err(|_| ColorError::InvalidRgb(spec.to_string()))
    };
    Ok(Rgb {
        r: channel(channels[0])?,
        g: channel(channels[1])?,
        b: channel(channels[2])?,
    })
}

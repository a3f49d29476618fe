//! Small value types shared across the renderer.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Check that a value is a usable finite number.
#[inline]
pub fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Check that a value is finite and strictly positive.
#[inline]
pub fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Check both components of a point.
pub fn check_point_positive(p: DVec2) -> Result<DVec2, NumericError> {
    check_positive(p.x)?;
    check_positive(p.y)?;
    Ok(p)
}

/// Fill or stroke color.
///
/// Hex colors are normalized to lowercase `#rrggbb`. Only the color keywords
/// SVG Tiny 1.2 defines are accepted by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Named(&'static str),
    Rgb(u8, u8, u8),
}

/// Color keywords recognized by SVG Tiny 1.2, plus `none`
pub const COLOR_KEYWORDS: [&str; 17] = [
    "black", "silver", "gray", "white", "maroon", "red", "purple", "fuchsia", "green", "lime",
    "olive", "yellow", "navy", "blue", "teal", "aqua", "none",
];

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

/// The string could not be read as a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a color: {:?}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(err());
            }
            // hex is all ASCII from here on, so byte slicing is safe
            let channel = |i: usize, len: usize| -> Result<u8, ParseColorError> {
                let v = u8::from_str_radix(&hex[i..i + len], 16).map_err(|_| err())?;
                // #abc is shorthand for #aabbcc
                Ok(if len == 1 { v * 17 } else { v })
            };
            return match hex.len() {
                3 => Ok(Color::Rgb(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
                6 => Ok(Color::Rgb(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
                _ => Err(err()),
            };
        }

        COLOR_KEYWORDS
            .iter()
            .find(|k| k.eq_ignore_ascii_case(s))
            .map(|k| Color::Named(*k))
            .ok_or_else(err)
    }
}

//! Logo configuration and its default constants.

use glam::{DVec2, dvec2};

use crate::errors::LogoError;
use crate::types::{Color, check_finite, check_point_positive};

/// Point through which every mirrored shape is reflected.
pub const MIRROR_CENTER: DVec2 = dvec2(299.0, 229.0);
/// Default thickness of the logo's bars.
pub const BAR_WIDTH: f64 = 50.0;
/// Stroke width of every emitted shape.
pub const STROKE_WIDTH: f64 = 2.0;
/// Where the binary writes its output.
pub const OUTPUT_FILE: &str = "logo.svg";

pub const COLOR_A: Color = Color::rgb(0xa9, 0xa9, 0xd4);
pub const COLOR_B: Color = Color::rgb(0xff, 0xff, 0xff);
pub const COLOR_C: Color = Color::rgb(0xc4, 0xb5, 0xfd);
pub const COLOR_D: Color = Color::rgb(0x1a, 0x1a, 0x2e);

/// The four logo colors
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub a: Color,
    pub b: Color,
    pub c: Color,
    pub d: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            a: COLOR_A,
            b: COLOR_B,
            c: COLOR_C,
            d: COLOR_D,
        }
    }
}

impl Palette {
    /// Build a palette from four color strings.
    pub fn parse(a: &str, b: &str, c: &str, d: &str) -> Result<Self, LogoError> {
        Ok(Self {
            a: a.parse()?,
            b: b.parse()?,
            c: c.parse()?,
            d: d.parse()?,
        })
    }
}

/// Everything that parameterizes a logo render.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoConfig {
    /// Canvas symmetry point; also half the canvas size.
    pub mirror_center: DVec2,
    pub bar_width: f64,
    pub palette: Palette,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            mirror_center: MIRROR_CENTER,
            bar_width: BAR_WIDTH,
            palette: Palette::default(),
        }
    }
}

impl LogoConfig {
    /// Canvas width and height in pixels.
    pub fn canvas_size(&self) -> DVec2 {
        self.mirror_center * 2.0
    }

    /// Reject NaN, infinite or non-positive geometry.
    pub fn validate(&self) -> Result<(), LogoError> {
        check_point_positive(self.mirror_center).map_err(|source| LogoError::InvalidConfig {
            field: "mirror_center",
            source,
        })?;
        check_finite(self.bar_width).map_err(|source| LogoError::InvalidConfig {
            field: "bar_width",
            source,
        })?;
        Ok(())
    }
}

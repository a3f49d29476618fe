//! Draws a point-symmetric logo out of rectangles and right triangles and
//! writes it as an SVG Tiny document.
//!
//! Shapes accumulate on an owned [`Canvas`] in paint order. Any shape can
//! be drawn together with its reflection through the canvas center using
//! [`Canvas::draw_symmetric`].
//!
//! ```no_run
//! use symlogo::{LogoConfig, build_logo};
//!
//! let canvas = build_logo(&LogoConfig::default())?;
//! canvas.save("logo.svg")?;
//! # Ok::<(), symlogo::LogoError>(())
//! ```

pub mod canvas;
pub mod config;
pub mod errors;
pub mod log;
pub mod logo;
pub mod shapes;
pub mod svg;
pub mod transform;
pub mod types;

pub use canvas::Canvas;
pub use config::{LogoConfig, Palette};
pub use errors::LogoError;
pub use logo::{build_logo, draw_logo, render_logo};
pub use shapes::{
    Drawable, RectShape, RectSpec, RenderSvg, Shape, TriangleShape, TriangleSpec,
    draw_right_triangle, draw_rotated_rect, right_triangle_points,
};
pub use svg::{to_svg_dom, to_svg_string};
pub use transform::{Rotation, Transform, mirror_transform};
pub use types::{Color, NumericError};

// Re-exported so callers can build coordinates without depending on glam
pub use glam::{DVec2, dvec2};

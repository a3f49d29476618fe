//! SVG generation

use std::path::Path;

use symlogo_svg::{Svg, SvgNode, facet_xml};

use crate::canvas::Canvas;
use crate::errors::LogoError;
use crate::shapes::RenderSvg;

/// Build the SVG document for a canvas; document order is paint order.
pub fn to_svg_dom(canvas: &Canvas) -> Svg {
    let children: Vec<SvgNode> = canvas.shapes().iter().map(RenderSvg::to_svg_node).collect();

    Svg {
        base_profile: Some("tiny".to_string()),
        version: Some("1.2".to_string()),
        width: Some(format!("{}px", fmt_num(canvas.width()))),
        height: Some(format!("{}px", fmt_num(canvas.height()))),
        children,
    }
}

/// Serialize a canvas to an SVG string.
pub fn to_svg_string(canvas: &Canvas) -> Result<String, LogoError> {
    let svg = to_svg_dom(canvas);
    facet_xml::to_string(&svg).map_err(|e| LogoError::Serialize(e.to_string()))
}

impl Canvas {
    /// Serialize and write the canvas to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LogoError> {
        let path = path.as_ref();
        let svg = to_svg_string(self)?;
        std::fs::write(path, svg).map_err(|source| LogoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        crate::log::debug!(path = %path.display(), shapes = self.len(), "saved svg");
        Ok(())
    }
}

/// Format a number with the shortest text that reads back to the same value.
///
/// Integral values print without a decimal point and negative zero prints as `0`.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{COLOR_B, MIRROR_CENTER};
    use crate::shapes::RectSpec;
    use glam::dvec2;

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(598.0), "598");
        assert_eq!(fmt_num(-11.0), "-11");
        assert_eq!(fmt_num(299.5), "299.5");
        assert_eq!(fmt_num(0.125), "0.125");
        assert_eq!(fmt_num(1_000_000.0), "1000000");
        assert_eq!(fmt_num(1_234_567.0), "1234567");
        assert_eq!(fmt_num(200.246912), "200.246912");
        assert_eq!(fmt_num(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn wide_canvas_keeps_every_digit() {
        let canvas = Canvas::new(dvec2(100.123456, 617283.5));
        let svg = to_svg_dom(&canvas);
        assert_eq!(svg.width.as_deref(), Some("200.246912px"));
        assert_eq!(svg.height.as_deref(), Some("1234567px"));
    }

    #[test]
    fn empty_canvas_dom() {
        let svg = to_svg_dom(&Canvas::new(MIRROR_CENTER));
        assert_eq!(svg.width.as_deref(), Some("598px"));
        assert_eq!(svg.height.as_deref(), Some("458px"));
        assert_eq!(svg.base_profile.as_deref(), Some("tiny"));
        assert!(svg.children.is_empty());
    }

    #[test]
    fn dom_keeps_paint_order() {
        let mut c = Canvas::new(MIRROR_CENTER);
        c.draw_symmetric(&RectSpec::new(dvec2(0.0, 111.0), dvec2(50.0, 200.0), COLOR_B));
        let svg = to_svg_dom(&c);
        let transforms: Vec<_> = svg.children.iter().map(|n| n.attrs().transform()).collect();
        assert_eq!(transforms, [None, Some("translate(598,458) scale(-1,-1)")]);
    }
}

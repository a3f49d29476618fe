//! The logo itself: a fixed list of bars and triangles, most of them drawn
//! together with their reflection through the canvas center.

use glam::dvec2;

use crate::canvas::Canvas;
use crate::config::LogoConfig;
use crate::errors::LogoError;
use crate::shapes::{RectSpec, TriangleSpec};

/// Draw every logo shape onto `canvas`, in paint order.
pub fn draw_logo(canvas: &mut Canvas, config: &LogoConfig) {
    let bar = config.bar_width;
    let p = &config.palette;

    // Side posts
    canvas.draw_symmetric(
        &RectSpec::new(dvec2(0.0, 111.0), dvec2(bar, 200.0), p.b.clone()).with_stroke(p.b.clone()),
    );
    // Corner wedges
    canvas.draw_symmetric(
        &TriangleSpec::new(dvec2(0.0, 316.0), dvec2(70.0, 70.0), p.c.clone())
            .with_stroke(p.c.clone()),
    );
    // Short diagonal struts
    canvas.draw_symmetric(
        &RectSpec::new(dvec2(4.0, 67.0), dvec2(100.0, bar), p.b.clone())
            .with_stroke(p.b.clone())
            .with_angle(-45.0),
    );
    canvas.draw_symmetric(
        &RectSpec::new(dvec2(146.0, 344.0), dvec2(100.0, bar), p.b.clone())
            .with_stroke(p.b.clone())
            .with_angle(-45.0),
    );
    // Accent bars
    canvas.draw_symmetric(
        &RectSpec::new(dvec2(-11.0, 345.0), dvec2(200.0, bar), p.c.clone())
            .with_stroke(p.c.clone())
            .with_angle(45.0),
    );

    // Long central bar, already symmetric about the center
    canvas.draw(
        &RectSpec::new(dvec2(4.0, 204.0), dvec2(590.0, bar), p.a.clone())
            .with_stroke(p.a.clone())
            .with_angle(45.0),
    );

    crate::log::debug!(shapes = canvas.len(), "logo drawn");
}

/// Validate `config` and draw the logo on a fresh canvas.
pub fn build_logo(config: &LogoConfig) -> Result<Canvas, LogoError> {
    config.validate()?;
    let mut canvas = Canvas::new(config.mirror_center);
    draw_logo(&mut canvas, config);
    Ok(canvas)
}

/// Render the logo straight to an SVG string.
pub fn render_logo(config: &LogoConfig) -> Result<String, LogoError> {
    crate::svg::to_svg_string(&build_logo(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{RenderSvg, Shape};

    #[test]
    fn default_logo_has_eleven_shapes() {
        let canvas = build_logo(&LogoConfig::default()).unwrap();
        let kinds: Vec<_> = canvas.shapes().iter().map(Shape::kind).collect();
        assert_eq!(
            kinds,
            [
                "rect", "rect", "triangle", "triangle", "rect", "rect", "rect", "rect", "rect",
                "rect", "rect"
            ]
        );
    }

    #[test]
    fn every_pair_is_plain_then_mirrored() {
        let canvas = build_logo(&LogoConfig::default()).unwrap();
        for pair in canvas.shapes()[..10].chunks(2) {
            assert!(pair[0].transform().mirror.is_none());
            assert!(pair[1].transform().mirror.is_some());
        }
        assert!(canvas.shapes()[10].transform().mirror.is_none());
    }

    #[test]
    fn bar_width_drives_bar_thickness() {
        let config = LogoConfig {
            bar_width: 20.0,
            ..LogoConfig::default()
        };
        let canvas = build_logo(&config).unwrap();
        let Shape::Rect(post) = &canvas.shapes()[0] else {
            panic!("expected a rect");
        };
        assert_eq!(post.size, dvec2(20.0, 200.0));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = LogoConfig {
            mirror_center: dvec2(-1.0, 5.0),
            ..LogoConfig::default()
        };
        assert!(matches!(
            build_logo(&config),
            Err(LogoError::InvalidConfig { .. })
        ));
    }
}

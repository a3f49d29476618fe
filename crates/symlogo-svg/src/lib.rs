//! Facet-derived types for the SVG subset symlogo emits.
//!
//! Only the elements the logo renderer produces are modelled: the root
//! `<svg>`, `<rect>` and `<polygon>`. Numeric attributes are carried as
//! pre-formatted strings so the caller controls number formatting.
//!
//! # Example
//!
//! ```rust
//! use symlogo_svg::{Svg, SvgNode};
//!
//! let svg_str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100px" height="100px">
//!     <rect x="10" y="10" width="80" height="80" fill="blue"/>
//! </svg>"#;
//!
//! let svg: Svg = symlogo_svg::facet_xml::from_str(svg_str).unwrap();
//! assert!(matches!(svg.children[0], SvgNode::Rect(_)));
//! ```

use facet::Facet;
use facet_xml as xml;

/// Root SVG element
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Svg {
    #[facet(xml::attribute, rename = "baseProfile")]
    pub base_profile: Option<String>,
    #[facet(xml::attribute)]
    pub version: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Any SVG node the renderer emits
#[derive(Facet, Debug, Clone)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "rect")]
    Rect(Rect),
    #[facet(rename = "polygon")]
    Polygon(Polygon),
}

/// Common presentation attributes shared by shape elements
pub trait PresentationAttrs {
    fn fill(&self) -> Option<&str>;
    fn stroke(&self) -> Option<&str>;
    fn stroke_width(&self) -> Option<&str>;
    fn transform(&self) -> Option<&str>;
}

macro_rules! impl_presentation_attrs {
    ($($ty:ty),*) => {
        $(
            impl PresentationAttrs for $ty {
                fn fill(&self) -> Option<&str> { self.fill.as_deref() }
                fn stroke(&self) -> Option<&str> { self.stroke.as_deref() }
                fn stroke_width(&self) -> Option<&str> { self.stroke_width.as_deref() }
                fn transform(&self) -> Option<&str> { self.transform.as_deref() }
            }
        )*
    };
}

/// SVG rect element (`<rect>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Rect {
    #[facet(xml::attribute)]
    pub x: Option<String>,
    #[facet(xml::attribute)]
    pub y: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute)]
    pub transform: Option<String>,
}

/// SVG polygon element (`<polygon>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Polygon {
    #[facet(xml::attribute)]
    pub points: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute)]
    pub transform: Option<String>,
}

impl_presentation_attrs!(Rect, Polygon);

impl SvgNode {
    /// Presentation attributes of whichever element this node wraps
    pub fn attrs(&self) -> &dyn PresentationAttrs {
        match self {
            SvgNode::Rect(r) => r,
            SvgNode::Polygon(p) => p,
        }
    }
}

// Re-export facet_xml for convenience
pub use facet_xml;

//! Shape types for logo rendering
//!
//! Each shape knows its outline and how to render itself as an SVG node.
//! `Shape` is the closed set of everything a canvas can hold.

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};
use symlogo_svg::{Polygon, Rect, SvgNode};

use crate::canvas::Canvas;
use crate::config::STROKE_WIDTH;
use crate::svg::fmt_num;
use crate::transform::Transform;
use crate::types::Color;

/// Common behavior for all shapes
#[enum_dispatch]
pub trait RenderSvg {
    /// Effective transform (rotation and/or reflection)
    fn transform(&self) -> &Transform;

    /// Vertices in local coordinates, before the transform
    fn local_outline(&self) -> Vec<DVec2>;

    /// Vertices in canvas coordinates, after the transform
    fn outline(&self) -> Vec<DVec2> {
        let t = self.transform();
        self.local_outline().into_iter().map(|p| t.apply(p)).collect()
    }

    /// Render this shape to an SVG node
    fn to_svg_node(&self) -> SvgNode;
}

/// A shape on the canvas
#[enum_dispatch(RenderSvg)]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(RectShape),
    Triangle(TriangleShape),
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Rect(_) => "rect",
            Shape::Triangle(_) => "triangle",
        }
    }
}

/// Axis-aligned rectangle, possibly rotated by its transform
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    /// Top-left corner
    pub insert: DVec2,
    pub size: DVec2,
    pub fill: Color,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub transform: Transform,
}

impl RectShape {
    pub fn center(&self) -> DVec2 {
        self.insert + self.size / 2.0
    }
}

impl RenderSvg for RectShape {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn local_outline(&self) -> Vec<DVec2> {
        let DVec2 { x, y } = self.insert;
        let DVec2 { x: w, y: h } = self.size;
        vec![dvec2(x, y), dvec2(x + w, y), dvec2(x + w, y + h), dvec2(x, y + h)]
    }

    fn to_svg_node(&self) -> SvgNode {
        SvgNode::Rect(Rect {
            x: Some(fmt_num(self.insert.x)),
            y: Some(fmt_num(self.insert.y)),
            width: Some(fmt_num(self.size.x)),
            height: Some(fmt_num(self.size.y)),
            fill: Some(self.fill.to_string()),
            stroke: self.stroke.as_ref().map(Color::to_string),
            stroke_width: Some(fmt_num(self.stroke_width)),
            transform: self.transform.to_attr(),
        })
    }
}

/// Right triangle given by its three vertices
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleShape {
    pub points: [DVec2; 3],
    pub fill: Color,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub transform: Transform,
}

impl RenderSvg for TriangleShape {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn local_outline(&self) -> Vec<DVec2> {
        self.points.to_vec()
    }

    fn to_svg_node(&self) -> SvgNode {
        let points = self
            .points
            .iter()
            .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        SvgNode::Polygon(Polygon {
            points: Some(points),
            fill: Some(self.fill.to_string()),
            stroke: self.stroke.as_ref().map(Color::to_string),
            stroke_width: Some(fmt_num(self.stroke_width)),
            transform: self.transform.to_attr(),
        })
    }
}

// ============================================================================
// Drawing operations
// ============================================================================

/// Something that can be drawn onto a canvas, plain or reflected.
pub trait Drawable {
    fn draw(&self, canvas: &mut Canvas, mirror: bool);
}

/// Parameters for [`draw_rotated_rect`]
#[derive(Debug, Clone, PartialEq)]
pub struct RectSpec {
    /// Top-left corner before rotation
    pub insert: DVec2,
    pub size: DVec2,
    pub fill: Color,
    pub stroke: Option<Color>,
    /// Degrees, clockwise in image coordinates
    pub angle: f64,
}

impl RectSpec {
    pub fn new(insert: DVec2, size: DVec2, fill: Color) -> Self {
        Self {
            insert,
            size,
            fill,
            stroke: None,
            angle: 0.0,
        }
    }

    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }
}

impl Drawable for RectSpec {
    fn draw(&self, canvas: &mut Canvas, mirror: bool) {
        draw_rotated_rect(canvas, self, mirror);
    }
}

/// Parameters for [`draw_right_triangle`]
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleSpec {
    /// Vertex holding the right angle
    pub anchor: DVec2,
    /// Leg lengths: `x` to the right, `y` upwards
    pub size: DVec2,
    pub fill: Color,
    pub stroke: Option<Color>,
}

impl TriangleSpec {
    pub fn new(anchor: DVec2, size: DVec2, fill: Color) -> Self {
        Self {
            anchor,
            size,
            fill,
            stroke: None,
        }
    }

    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

impl Drawable for TriangleSpec {
    fn draw(&self, canvas: &mut Canvas, mirror: bool) {
        draw_right_triangle(canvas, self, mirror);
    }
}

/// Vertices of a right triangle with the right angle at `anchor`.
///
/// One leg runs right by `size.x`, the other runs up (negative y) by `size.y`.
pub fn right_triangle_points(anchor: DVec2, size: DVec2) -> [DVec2; 3] {
    [
        anchor,
        anchor + dvec2(size.x, 0.0),
        anchor - dvec2(0.0, size.y),
    ]
}

/// Draw a rectangle rotated `spec.angle` degrees about its own center.
pub fn draw_rotated_rect(canvas: &mut Canvas, spec: &RectSpec, mirror: bool) {
    let rect = RectShape {
        insert: spec.insert,
        size: spec.size,
        fill: spec.fill.clone(),
        stroke: spec.stroke.clone(),
        stroke_width: STROKE_WIDTH,
        transform: Transform::IDENTITY,
    };
    let transform =
        Transform::rotate(spec.angle, rect.center()).mirrored(mirror, canvas.mirror_center());

    if spec.size.x == 0.0 || spec.size.y == 0.0 {
        crate::log::warn!(x = spec.insert.x, y = spec.insert.y, "zero-area rectangle");
    }

    canvas.push(Shape::Rect(RectShape { transform, ..rect }));
}

/// Draw a right triangle anchored at `spec.anchor`.
pub fn draw_right_triangle(canvas: &mut Canvas, spec: &TriangleSpec, mirror: bool) {
    let transform = Transform::IDENTITY.mirrored(mirror, canvas.mirror_center());

    if spec.size.x == 0.0 || spec.size.y == 0.0 {
        crate::log::warn!(x = spec.anchor.x, y = spec.anchor.y, "zero-area triangle");
    }

    canvas.push(Shape::Triangle(TriangleShape {
        points: right_triangle_points(spec.anchor, spec.size),
        fill: spec.fill.clone(),
        stroke: spec.stroke.clone(),
        stroke_width: STROKE_WIDTH,
        transform,
    }));
}

//! The drawing surface: a fixed-size canvas accumulating shapes in paint order.

use glam::DVec2;

use crate::shapes::{Drawable, RenderSvg, Shape};

/// Owned canvas that drawing operations append to.
///
/// The canvas is exactly twice the mirror center in each dimension, so the
/// mirror center is always its geometric center.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    mirror_center: DVec2,
    /// Insertion order is paint order
    shapes: Vec<Shape>,
}

impl Canvas {
    pub fn new(mirror_center: DVec2) -> Self {
        Self {
            mirror_center,
            shapes: Vec::new(),
        }
    }

    pub fn mirror_center(&self) -> DVec2 {
        self.mirror_center
    }

    pub fn width(&self) -> f64 {
        self.mirror_center.x * 2.0
    }

    pub fn height(&self) -> f64 {
        self.mirror_center.y * 2.0
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Append a shape on top of everything drawn so far.
    pub fn push(&mut self, shape: Shape) {
        crate::log::debug!(
            index = self.shapes.len(),
            kind = shape.kind(),
            transform = %shape.transform(),
            "push shape"
        );
        self.shapes.push(shape);
    }

    /// Draw a single, unmirrored copy.
    pub fn draw<D: Drawable + ?Sized>(&mut self, item: &D) {
        item.draw(self, false);
    }

    /// Run `op` twice: plain first, then reflected through the mirror center.
    ///
    /// The reflected copy is painted last, so it ends up on top where the
    /// two overlap.
    pub fn symmetric(&mut self, mut op: impl FnMut(&mut Canvas, bool)) {
        op(self, false);
        op(self, true);
    }

    /// Draw `item` and its point reflection.
    pub fn draw_symmetric<D: Drawable + ?Sized>(&mut self, item: &D) {
        self.symmetric(|canvas, mirror| item.draw(canvas, mirror));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{COLOR_A, COLOR_C, MIRROR_CENTER};
    use crate::shapes::{RectSpec, TriangleSpec, draw_right_triangle};
    use crate::transform::Transform;
    use glam::dvec2;

    #[test]
    fn size_is_twice_mirror_center() {
        let c = Canvas::new(dvec2(299.0, 229.0));
        assert_eq!(c.width(), 598.0);
        assert_eq!(c.height(), 458.0);
        assert!(c.is_empty());
    }

    #[test]
    fn symmetric_pair_is_plain_then_mirrored() {
        let mut c = Canvas::new(MIRROR_CENTER);
        let spec = RectSpec::new(dvec2(0.0, 111.0), dvec2(50.0, 200.0), COLOR_A);
        c.draw_symmetric(&spec);

        assert_eq!(c.len(), 2);
        assert_eq!(c.shapes()[0].transform().to_attr(), None);
        assert_eq!(
            c.shapes()[1].transform().to_attr().as_deref(),
            Some("translate(598,458) scale(-1,-1)")
        );
    }

    #[test]
    fn symmetric_matches_two_explicit_calls() {
        let spec = TriangleSpec::new(dvec2(0.0, 316.0), dvec2(70.0, 70.0), COLOR_C);

        let mut paired = Canvas::new(MIRROR_CENTER);
        paired.symmetric(|canvas, mirror| draw_right_triangle(canvas, &spec, mirror));

        let mut explicit = Canvas::new(MIRROR_CENTER);
        draw_right_triangle(&mut explicit, &spec, false);
        draw_right_triangle(&mut explicit, &spec, true);

        assert_eq!(paired, explicit);
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut c = Canvas::new(MIRROR_CENTER);
        c.draw(&TriangleSpec::new(dvec2(0.0, 0.0), dvec2(1.0, 1.0), COLOR_C));
        c.draw_symmetric(&RectSpec::new(dvec2(0.0, 0.0), dvec2(1.0, 1.0), COLOR_A));
        let kinds: Vec<_> = c.shapes().iter().map(Shape::kind).collect();
        assert_eq!(kinds, ["triangle", "rect", "rect"]);
        assert_eq!(*c.shapes()[0].transform(), Transform::IDENTITY);
    }
}

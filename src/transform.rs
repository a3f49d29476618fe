//! Shape transforms: an optional rotation, optionally wrapped in a point
//! reflection through the canvas mirror center.
//!
//! SVG composes transform lists left to right as outer to inner, so the
//! reflection is written first and the rotation last. The reflection is a
//! 180° turn about the mirror center (both axes flip), not a left-right flip.

use std::fmt;

use glam::DVec2;

use crate::svg::fmt_num;

/// Combine a base transform with the point reflection through `mirror_center`.
///
/// Without `mirror` the base transform is returned as is (possibly empty).
pub fn mirror_transform(base: &str, mirror: bool, mirror_center: DVec2) -> String {
    if !mirror {
        return base.to_string();
    }
    let offset = mirror_center * 2.0;
    format!(
        "translate({},{}) scale(-1,-1) {}",
        fmt_num(offset.x),
        fmt_num(offset.y),
        base
    )
    .trim()
    .to_string()
}

/// Rotation by `degrees` about `pivot`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub degrees: f64,
    pub pivot: DVec2,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rotate({},{},{})",
            fmt_num(self.degrees),
            fmt_num(self.pivot.x),
            fmt_num(self.pivot.y)
        )
    }
}

/// Effective transform of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// Applied first
    pub rotation: Option<Rotation>,
    /// Mirror center, when the shape is the reflected copy
    pub mirror: Option<DVec2>,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        rotation: None,
        mirror: None,
    };

    /// Rotation about `pivot`; a zero angle yields no rotation at all.
    pub fn rotate(degrees: f64, pivot: DVec2) -> Self {
        let rotation = (degrees != 0.0).then_some(Rotation { degrees, pivot });
        Transform {
            rotation,
            mirror: None,
        }
    }

    /// Wrap this transform in the point reflection when `mirror` is set.
    pub fn mirrored(self, mirror: bool, mirror_center: DVec2) -> Self {
        Transform {
            mirror: mirror.then_some(mirror_center),
            ..self
        }
    }

    pub fn is_identity(&self) -> bool {
        self.rotation.is_none() && self.mirror.is_none()
    }

    /// The `transform` attribute value, or `None` when there is nothing to apply.
    pub fn to_attr(&self) -> Option<String> {
        (!self.is_identity()).then(|| self.to_string())
    }

    /// Map a point through the transform, as a renderer would.
    pub fn apply(&self, p: DVec2) -> DVec2 {
        let mut p = p;
        if let Some(rot) = self.rotation {
            let (sin, cos) = rot.degrees.to_radians().sin_cos();
            let d = p - rot.pivot;
            p = rot.pivot + DVec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos);
        }
        if let Some(center) = self.mirror {
            p = center * 2.0 - p;
        }
        p
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.rotation.map(|r| r.to_string()).unwrap_or_default();
        match self.mirror {
            Some(center) => f.write_str(&mirror_transform(&base, true, center)),
            None => f.write_str(&base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    const CENTER: DVec2 = dvec2(299.0, 229.0);

    #[test]
    fn unmirrored_returns_base_unchanged() {
        assert_eq!(mirror_transform("", false, CENTER), "");
        assert_eq!(
            mirror_transform("rotate(45,299,229)", false, CENTER),
            "rotate(45,299,229)"
        );
        assert_eq!(mirror_transform("  odd  ", false, CENTER), "  odd  ");
    }

    #[test]
    fn mirrored_empty_base_has_no_trailing_space() {
        insta::assert_snapshot!(mirror_transform("", true, CENTER), @"translate(598,458) scale(-1,-1)");
    }

    #[test]
    fn mirrored_base_goes_innermost() {
        insta::assert_snapshot!(
            mirror_transform("rotate(-45,54,92)", true, CENTER),
            @"translate(598,458) scale(-1,-1) rotate(-45,54,92)"
        );
    }

    #[test]
    fn fractional_center() {
        assert_eq!(
            mirror_transform("", true, dvec2(10.25, 3.5)),
            "translate(20.5,7) scale(-1,-1)"
        );
    }

    #[test]
    fn large_center_keeps_full_precision() {
        assert_eq!(
            mirror_transform("", true, dvec2(100.123456, 617283.5)),
            "translate(200.246912,1234567) scale(-1,-1)"
        );
    }

    #[test]
    fn zero_angle_is_identity() {
        let t = Transform::rotate(0.0, dvec2(25.0, 211.0));
        assert!(t.is_identity());
        assert_eq!(t.to_attr(), None);
    }

    #[test]
    fn structured_transform_matches_string_form() {
        let t = Transform::rotate(45.0, dvec2(299.0, 229.0));
        assert_eq!(t.to_string(), "rotate(45,299,229)");
        let m = t.mirrored(true, CENTER);
        assert_eq!(
            m.to_string(),
            mirror_transform("rotate(45,299,229)", true, CENTER)
        );
        assert_eq!(
            Transform::IDENTITY.mirrored(true, CENTER).to_attr().as_deref(),
            Some("translate(598,458) scale(-1,-1)")
        );
    }

    #[test]
    fn reflection_is_a_point_reflection() {
        let t = Transform::IDENTITY.mirrored(true, CENTER);
        assert_eq!(t.apply(dvec2(0.0, 0.0)), dvec2(598.0, 458.0));
        assert_eq!(t.apply(dvec2(0.0, 316.0)), dvec2(598.0, 142.0));
        assert_eq!(t.apply(CENTER), CENTER);
    }

    #[test]
    fn rotation_applies_before_reflection() {
        let t = Transform::rotate(90.0, dvec2(0.0, 0.0)).mirrored(true, CENTER);
        let p = t.apply(dvec2(1.0, 0.0));
        // rotate (1,0) -> (0,1), then reflect -> (598,457)
        assert!((p - dvec2(598.0, 457.0)).length() < 1e-9);
    }
}

//! Plane geometry used by the stroke pipeline.
//!
//! This module provides:
//! - [`Vec2d`]: a 2-D vector with the handful of operations the freehand code needs
//! - Angle helpers ([`canonicalize_rotation`], [`short_angle_dist`])
//! - Hit-testable primitives ([`Circle2d`], [`Polygon2d`], [`Polyline2d`], [`Edge2d`]) and [`Box2d`]

pub mod primitives;

pub use primitives::{Box2d, Circle2d, Edge2d, Polygon2d, Polyline2d};

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// A point or direction in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2d {
    pub x: f64,
    pub y: f64,
}

impl Vec2d {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vec2d) -> Vec2d {
        Vec2d::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Vec2d) -> Vec2d {
        Vec2d::new(self.x - other.x, self.y - other.y)
    }

    pub fn mul(self, t: f64) -> Vec2d {
        Vec2d::new(self.x * t, self.y * t)
    }

    pub fn dot(self, other: Vec2d) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn len(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn uni(self) -> Vec2d {
        let len = self.len();
        if len == 0.0 {
            self
        } else {
            Vec2d::new(self.x / len, self.y / len)
        }
    }

    /// Perpendicular (rotated 90° clockwise in screen space).
    pub fn per(self) -> Vec2d {
        Vec2d::new(self.y, -self.x)
    }

    pub fn neg(self) -> Vec2d {
        Vec2d::new(-self.x, -self.y)
    }

    /// Linear interpolation from `self` (t = 0) to `other` (t = 1).
    pub fn lrp(self, other: Vec2d, t: f64) -> Vec2d {
        self.add(other.sub(self).mul(t))
    }

    pub fn mid(self, other: Vec2d) -> Vec2d {
        self.lrp(other, 0.5)
    }

    pub fn dist(self, other: Vec2d) -> f64 {
        self.sub(other).len()
    }

    pub fn dist2(self, other: Vec2d) -> f64 {
        let d = self.sub(other);
        d.x * d.x + d.y * d.y
    }

    /// Direction of travel from `self` to `other`, in radians.
    pub fn angle_to(self, other: Vec2d) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Rotates `self` around `center` by `angle` radians.
    pub fn rot_with(self, center: Vec2d, angle: f64) -> Vec2d {
        let (s, c) = angle.sin_cos();
        let d = self.sub(center);
        Vec2d::new(center.x + d.x * c - d.y * s, center.y + d.x * s + d.y * c)
    }
}

/// Wraps an angle into `[0, 2π)`.
pub fn canonicalize_rotation(angle: f64) -> f64 {
    let a = angle % TAU;
    if a < 0.0 { a + TAU } else { a }
}

/// Signed shortest angular distance from `a0` to `a1`, in `(-π, π]`.
pub fn short_angle_dist(a0: f64, a1: f64) -> f64 {
    let da = (a1 - a0) % TAU;
    ((2.0 * da) % TAU) - da
}

/// Circular mean of a run of angles, canonicalized to `[0, 2π)`.
///
/// Returns `None` when the input is empty. When the unit vectors cancel out
/// the first angle is returned.
pub fn mean_angle<I: IntoIterator<Item = f64>>(angles: I) -> Option<f64> {
    let mut first = None;
    let (mut sin_sum, mut cos_sum) = (0.0, 0.0);
    for angle in angles {
        first.get_or_insert(angle);
        sin_sum += angle.sin();
        cos_sum += angle.cos();
    }
    let first = first?;
    if sin_sum.hypot(cos_sum) < 1e-12 {
        return Some(canonicalize_rotation(first));
    }
    Some(canonicalize_rotation(sin_sum.atan2(cos_sum)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalize_wraps_negative_and_large_angles() {
        assert!((canonicalize_rotation(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
        assert!((canonicalize_rotation(5.0 * PI) - PI).abs() < 1e-12);
        assert_eq!(canonicalize_rotation(0.0), 0.0);
    }

    #[test]
    fn short_angle_dist_takes_the_short_way_round() {
        let d = short_angle_dist(0.1, TAU - 0.1);
        assert!((d + 0.2).abs() < 1e-12);
        let d = short_angle_dist(TAU - 0.1, 0.1);
        assert!((d - 0.2).abs() < 1e-12);
    }

    #[test]
    fn mean_angle_of_opposite_quadrants() {
        let mean = mean_angle([0.0, PI / 2.0]).unwrap();
        assert!((mean - PI / 4.0).abs() < 1e-12);
        assert!(mean_angle(std::iter::empty()).is_none());
    }

    #[test]
    fn mean_angle_wraps_across_pi() {
        let mean = mean_angle([PI - 0.1, -(PI - 0.1)]).unwrap();
        assert!((mean - PI).abs() < 1e-12, "{mean}");
        let mean = mean_angle([-0.2, 0.4]).unwrap();
        assert!((mean - 0.1).abs() < 1e-12, "{mean}");
    }

    #[test]
    fn mean_angle_of_cancelling_headings_falls_back_to_first() {
        let mean = mean_angle([-PI / 2.0, PI / 2.0]).unwrap();
        assert!((mean - 3.0 * PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn uni_and_per_are_orthonormal() {
        let v = Vec2d::new(3.0, 4.0).uni();
        assert!((v.len() - 1.0).abs() < 1e-12);
        assert!(v.dot(v.per()).abs() < 1e-12);
        assert_eq!(Vec2d::default().uni(), Vec2d::default());
    }
}

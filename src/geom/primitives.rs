//! Hit-testable geometric primitives.

use super::Vec2d;
use serde::Serialize;

/// Axis-aligned bounding box in floating-point coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Box2d {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Box2d {
    /// Builds the tightest box around `points`. Returns `None` for an empty slice.
    pub fn from_points(points: &[Vec2d]) -> Option<Self> {
        let first = points.first()?;
        let mut min_x = first.x;
        let mut max_x = first.x;
        let mut min_y = first.y;
        let mut max_y = first.y;

        for p in &points[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        Some(Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        })
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Grows the box evenly in all directions by `amount`.
    pub fn expand_by(&self, amount: f64) -> Self {
        Self {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + amount * 2.0,
            height: self.height + amount * 2.0,
        }
    }

    pub fn contains_point(&self, p: Vec2d) -> bool {
        p.x >= self.x && p.x <= self.max_x() && p.y >= self.y && p.y <= self.max_y()
    }
}

/// A straight segment between two points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Edge2d {
    pub start: Vec2d,
    pub end: Vec2d,
}

impl Edge2d {
    pub fn new(start: Vec2d, end: Vec2d) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.dist(self.end)
    }

    /// Closest point on the segment to `p`.
    pub fn nearest_point(&self, p: Vec2d) -> Vec2d {
        let d = self.end.sub(self.start);
        let len2 = d.dot(d);
        if len2 == 0.0 {
            return self.start;
        }
        let t = (p.sub(self.start).dot(d) / len2).clamp(0.0, 1.0);
        self.start.add(d.mul(t))
    }

    pub fn distance_to_point(&self, p: Vec2d) -> f64 {
        self.nearest_point(p).dist(p)
    }
}

/// Circle positioned by the top-left corner of its bounding square.
///
/// Shapes place geometry relative to their local origin, so `(x, y)` is the offset of
/// the bounding square and the center sits at `(x + radius, y + radius)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Circle2d {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub is_filled: bool,
}

impl Circle2d {
    pub fn new(x: f64, y: f64, radius: f64, is_filled: bool) -> Self {
        Self {
            x,
            y,
            radius,
            is_filled,
        }
    }

    pub fn center(&self) -> Vec2d {
        Vec2d::new(self.x + self.radius, self.y + self.radius)
    }

    pub fn bounds(&self) -> Box2d {
        Box2d {
            x: self.x,
            y: self.y,
            width: self.radius * 2.0,
            height: self.radius * 2.0,
        }
    }

    pub fn distance_to_point(&self, p: Vec2d) -> f64 {
        let d = self.center().dist(p) - self.radius;
        if self.is_filled { d.max(0.0) } else { d.abs() }
    }
}

/// Closed polygon, optionally filled for hit-testing purposes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Polygon2d {
    pub points: Vec<Vec2d>,
    pub is_filled: bool,
}

impl Polygon2d {
    pub fn new(points: Vec<Vec2d>, is_filled: bool) -> Self {
        Self { points, is_filled }
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge2d> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Edge2d::new(self.points[i], self.points[(i + 1) % n]))
    }

    pub fn bounds(&self) -> Option<Box2d> {
        Box2d::from_points(&self.points)
    }

    /// Even-odd containment test.
    pub fn contains_point(&self, p: Vec2d) -> bool {
        let mut inside = false;
        for edge in self.edges() {
            let (a, b) = (edge.start, edge.end);
            if (a.y > p.y) != (b.y > p.y) {
                let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    pub fn distance_to_point(&self, p: Vec2d) -> f64 {
        if self.is_filled && self.contains_point(p) {
            return 0.0;
        }
        min_edge_distance(self.edges(), p)
    }
}

/// Open chain of straight segments.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Polyline2d {
    pub points: Vec<Vec2d>,
}

impl Polyline2d {
    pub fn new(points: Vec<Vec2d>) -> Self {
        Self { points }
    }

    pub fn segments(&self) -> impl Iterator<Item = Edge2d> + '_ {
        self.points.windows(2).map(|w| Edge2d::new(w[0], w[1]))
    }

    pub fn bounds(&self) -> Option<Box2d> {
        Box2d::from_points(&self.points)
    }

    pub fn distance_to_point(&self, p: Vec2d) -> f64 {
        match self.points.as_slice() {
            [only] => only.dist(p),
            _ => min_edge_distance(self.segments(), p),
        }
    }
}

fn min_edge_distance(edges: impl Iterator<Item = Edge2d>, p: Vec2d) -> f64 {
    edges
        .map(|edge| edge.distance_to_point(p))
        .fold(f64::INFINITY, f64::min)
}

//! Draw shape data model: points, segments, and the style props a stroke renders with.

use super::color::ColorStyle;
use crate::error::{DrawError, Result};
use crate::geom::Vec2d;
use serde::{Deserialize, Serialize};

/// A raw input point. `z` carries pressure (or any auxiliary channel) untouched.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub const fn with_pressure(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    pub fn vec(&self) -> Vec2d {
        Vec2d::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// How a segment was drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentKind {
    /// Traced by dragging
    #[default]
    Free,
    /// Straight run added with a modifier; the stroke ends finished when this is last
    Straight,
}

/// A contiguous run of points of one kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "type", default)]
    pub kind: SegmentKind,
    pub points: Vec<Point>,
}

impl Segment {
    pub fn free(points: Vec<Point>) -> Self {
        Self {
            kind: SegmentKind::Free,
            points,
        }
    }

    pub fn straight(points: Vec<Point>) -> Self {
        Self {
            kind: SegmentKind::Straight,
            points,
        }
    }
}

/// Size class; mapped to a stroke width by [`crate::config::StrokeSizes`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeStyle {
    S,
    #[default]
    M,
    L,
    Xl,
}

/// Line style of the stroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashStyle {
    /// Sketchy hand-drawn style with variable width
    #[default]
    Draw,
    Solid,
    Dashed,
    Dotted,
}

/// Interior fill of a closed stroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStyle {
    #[default]
    None,
    Semi,
    Solid,
    Pattern,
}

/// Drawing-relevant props of a freehand stroke.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawShapeProps {
    /// Segments in drawing order; never reordered
    #[serde(default)]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub color: ColorStyle,
    #[serde(default)]
    pub fill: FillStyle,
    #[serde(default)]
    pub dash: DashStyle,
    #[serde(default)]
    pub size: SizeStyle,
    /// Set once the drawing gesture has ended
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub is_closed: bool,
    /// Drawn with a pressure-sensitive input
    #[serde(default)]
    pub is_pen: bool,
}

impl Default for DrawShapeProps {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            color: ColorStyle::Black,
            fill: FillStyle::None,
            dash: DashStyle::Draw,
            size: SizeStyle::M,
            is_complete: false,
            is_closed: false,
            is_pen: false,
        }
    }
}

impl DrawShapeProps {
    /// Canonical point list: segment order, then point order.
    pub fn points(&self) -> Vec<Point> {
        self.segments
            .iter()
            .flat_map(|segment| segment.points.iter().copied())
            .collect()
    }

    /// Flattened points, failing fast when the render preconditions are broken.
    pub fn checked_points(&self) -> Result<Vec<Point>> {
        if self.segments.is_empty() {
            return Err(DrawError::EmptySegments);
        }
        let points = self.points();
        if points.is_empty() {
            return Err(DrawError::EmptyPoints);
        }
        Ok(points)
    }

    /// A single tap: one segment holding fewer than two points.
    pub fn is_dot(&self) -> bool {
        matches!(self.segments.as_slice(), [only] if only.points.len() < 2)
    }

    /// Whether the terminal cap should render as finished.
    pub fn show_as_complete(&self) -> bool {
        self.is_complete
            || self
                .segments
                .last()
                .is_some_and(|segment| segment.kind == SegmentKind::Straight)
    }
}

/// A freehand stroke with a stable identity.
///
/// The identity seeds the per-shape width jitter, so it must survive re-renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawShape {
    pub id: String,
    #[serde(default)]
    pub props: DrawShapeProps,
}

impl DrawShape {
    pub fn new(id: impl Into<String>, props: DrawShapeProps) -> Self {
        Self {
            id: id.into(),
            props,
        }
    }

    /// Parses a shape from its JSON document form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Projects points onto the plane, dropping the auxiliary channel.
pub fn to_vecs(points: &[Point]) -> Vec<Vec2d> {
    points.iter().map(Point::vec).collect()
}

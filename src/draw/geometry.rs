//! Abstract hit-test geometry for a draw shape.

use super::shape::{FillStyle, Point, to_vecs};
use crate::error::{DrawError, Result};
use crate::freehand::{geometry_options, stroke_points};
use crate::geom::{Box2d, Circle2d, Polygon2d, Polyline2d, Vec2d};
use log::debug;
use serde::Serialize;

/// The 2-D shape that stands in for a stroke during selection and hit-testing.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ShapeGeometry {
    /// A tap: filled circle of radius equal to the stroke width
    Dot(Circle2d),
    /// Closed stroke; filled for hit-testing only when the shape has a fill
    FilledPolygon(Polygon2d),
    /// Open stroke; never filled
    OpenPolyline(Polyline2d),
}

impl ShapeGeometry {
    pub fn bounds(&self) -> Option<Box2d> {
        match self {
            ShapeGeometry::Dot(circle) => Some(circle.bounds()),
            ShapeGeometry::FilledPolygon(polygon) => polygon.bounds(),
            ShapeGeometry::OpenPolyline(polyline) => polyline.bounds(),
        }
    }

    pub fn distance_to_point(&self, p: Vec2d) -> f64 {
        match self {
            ShapeGeometry::Dot(circle) => circle.distance_to_point(p),
            ShapeGeometry::FilledPolygon(polygon) => polygon.distance_to_point(p),
            ShapeGeometry::OpenPolyline(polyline) => polyline.distance_to_point(p),
        }
    }

    /// True when `p` lies within `margin` of the geometry (or inside a filled area).
    pub fn hit_test_point(&self, p: Vec2d, margin: f64) -> bool {
        self.distance_to_point(p) <= margin
    }

    pub fn is_filled(&self) -> bool {
        match self {
            ShapeGeometry::Dot(circle) => circle.is_filled,
            ShapeGeometry::FilledPolygon(polygon) => polygon.is_filled,
            ShapeGeometry::OpenPolyline(_) => false,
        }
    }
}

/// Classifies a stroke into a dot, a closed polygon, or an open polyline.
///
/// Only a single-segment stroke whose points fit inside a `2 * stroke_width` square
/// becomes a dot; several segments collapsed into a tiny area still produce a
/// polyline or polygon, so only a true single tap renders as a perfect dot.
///
/// # Errors
/// Returns [`DrawError::EmptyPoints`] when `points` is empty.
pub fn classify(
    points: &[Point],
    stroke_width: f64,
    is_closed: bool,
    fill: FillStyle,
    segment_count: usize,
) -> Result<ShapeGeometry> {
    let vecs = to_vecs(points);
    let bounds = Box2d::from_points(&vecs).ok_or(DrawError::EmptyPoints)?;

    if segment_count == 1 && bounds.width < stroke_width * 2.0 && bounds.height < stroke_width * 2.0
    {
        debug!(
            "Classified stroke as dot ({:.2}x{:.2} within {:.2})",
            bounds.width,
            bounds.height,
            stroke_width * 2.0
        );
        return Ok(ShapeGeometry::Dot(Circle2d::new(
            -stroke_width,
            -stroke_width,
            stroke_width,
            true,
        )));
    }

    let outline: Vec<Vec2d> = stroke_points(points, &geometry_options(stroke_width))
        .into_iter()
        .map(|sp| sp.point)
        .collect();

    if is_closed {
        let is_filled = fill != FillStyle::None;
        debug!(
            "Classified stroke as polygon ({} points, filled: {})",
            outline.len(),
            is_filled
        );
        Ok(ShapeGeometry::FilledPolygon(Polygon2d::new(outline, is_filled)))
    } else {
        debug!("Classified stroke as polyline ({} points)", outline.len());
        Ok(ShapeGeometry::OpenPolyline(Polyline2d::new(outline)))
    }
}

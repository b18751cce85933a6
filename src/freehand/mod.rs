//! Variable-width freehand stroke construction.
//!
//! The pipeline runs in three passes over a stroke skeleton:
//! 1. [`stroke_points`] resamples and streamlines raw input into centerline points
//! 2. [`set_stroke_point_radii`] assigns each point a radius from (real or simulated) pressure and tapers
//! 3. [`stroke_outline_points`] walks both rails of the centerline to produce a closed outline polygon
//!
//! [`svg`] turns either the centerline or the outline into path data.

pub mod options;
pub mod outline;
pub mod radii;
pub mod stroke_points;
pub mod svg;

pub use options::{Easing, StrokeOptions, Taper, TaperOptions, freehand_options, geometry_options};
pub use outline::stroke_outline_points;
pub use radii::set_stroke_point_radii;
pub use stroke_points::stroke_points;
pub use svg::{
    circle_path, dash_array, dot_path, svg_path_from_points, svg_path_from_polyline,
    svg_path_from_stroke_points,
};

use crate::geom::Vec2d;

/// A resampled point on a stroke's centerline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokePoint {
    /// Streamlined position
    pub point: Vec2d,
    /// Raw input position this point was derived from
    pub input: Vec2d,
    pub pressure: f64,
    /// Unit vector pointing back toward the previous point
    pub vector: Vec2d,
    /// Distance from the previous stroke point
    pub distance: f64,
    /// Centerline length up to and including this point
    pub running_length: f64,
    pub radius: f64,
}

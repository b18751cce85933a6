//! Sliding-window point augmentation: local density and corner estimates.
//!
//! For every input point a window of up to `2 * DISTANCE_WINDOW + 1` neighbours is
//! examined. The average spacing inside the window gives a density weight, and
//! the point's distance from the window's chord gives a corner severity. The
//! output drives the interactive augmentation overlay only; committed geometry
//! never depends on it.

use super::shape::Point;
use crate::error::{DrawError, Result};
use crate::geom::{Edge2d, Vec2d, mean_angle, short_angle_dist};
use serde::Serialize;
use std::f64::consts::FRAC_PI_2;

/// Half-width of the sliding window, in points.
pub const DISTANCE_WINDOW: usize = 3;
/// Upper bound on `weight`; also the weight of a lone point.
pub const MAX_WEIGHT: f64 = 0.5;

const SEVERITY_GAIN: f64 = 10.0;

/// A point annotated with local density and curvature estimates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AugmentedPoint {
    pub x: f64,
    pub y: f64,
    /// Inverse of the average spacing in the window, in `[0, MAX_WEIGHT]`
    pub weight: f64,
    /// Outward normal direction at this point, in radians
    pub corner_angle: f64,
    /// How sharply the path bends here, in `[0, 1]`
    pub corner_severity: f64,
}

/// Augments `points` with density and corner metrics, preserving length and order.
///
/// # Errors
/// Returns [`DrawError::EmptyPoints`] for an empty slice.
pub fn augment(points: &[Point]) -> Result<Vec<AugmentedPoint>> {
    let pts: Vec<Vec2d> = points.iter().map(Point::vec).collect();

    match pts.as_slice() {
        [] => Err(DrawError::EmptyPoints),
        [only] => Ok(vec![AugmentedPoint {
            x: only.x,
            y: only.y,
            weight: MAX_WEIGHT,
            corner_angle: 0.0,
            corner_severity: 0.0,
        }]),
        _ => Ok(augment_many(&pts)),
    }
}

fn augment_many(pts: &[Vec2d]) -> Vec<AugmentedPoint> {
    let last = pts.len() - 1;
    let distances: Vec<f64> = pts.windows(2).map(|w| w[0].dist(w[1])).collect();

    (0..pts.len())
        .map(|i| {
            let window_start = i.saturating_sub(DISTANCE_WINDOW);
            let window_end = last.min(window_start + DISTANCE_WINDOW * 2);

            // Each point in the window contributes the gap leaving it; the final
            // point of the stroke has none.
            let points_in_window = (window_end - window_start + 1) as f64;
            let distance_in_window: f64 = distances
                [window_start..(window_end + 1).min(distances.len())]
                .iter()
                .sum();
            let avg_distance = distance_in_window / points_in_window;

            let avg_window_angle = mean_angle(
                (window_start + 1..=window_end).map(|j| pts[j - 1].angle_to(pts[j])),
            )
            .unwrap_or_default();

            let (corner_angle, corner_severity) = if i == 0 {
                (pts[0].angle_to(pts[1]), 0.0)
            } else if i == last {
                (pts[i - 1].angle_to(pts[i]), 0.0)
            } else {
                let chord = Edge2d::new(pts[window_start], pts[window_end]);
                let first_neighbor_angle = pts[window_start].angle_to(pts[i]);
                let corner_angle = if short_angle_dist(avg_window_angle, first_neighbor_angle) < 0.0
                {
                    avg_window_angle - FRAC_PI_2
                } else {
                    avg_window_angle + FRAC_PI_2
                };
                (corner_angle, corner_severity(&chord, pts[i]))
            };

            AugmentedPoint {
                x: pts[i].x,
                y: pts[i].y,
                weight: density_weight(avg_distance),
                corner_angle,
                corner_severity,
            }
        })
        .collect()
}

/// Inverse spacing, capped so coincident points do not blow up.
fn density_weight(avg_distance: f64) -> f64 {
    if avg_distance > 0.0 {
        (1.0 / avg_distance).min(MAX_WEIGHT)
    } else {
        MAX_WEIGHT
    }
}

/// Bulge of `p` away from the chord relative to the chord's length, saturating at 1.
fn corner_severity(chord: &Edge2d, p: Vec2d) -> f64 {
    let length = chord.length();
    let distance = chord.distance_to_point(p);
    if length > 0.0 {
        (SEVERITY_GAIN * distance / length).min(1.0)
    } else if distance > 0.0 {
        1.0
    } else {
        0.0
    }
}

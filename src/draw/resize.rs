//! Pure coordinate scaling for stored segments.

use super::shape::{Point, Segment};
use crate::error::{DrawError, Result};
use crate::util::to_fixed;

/// Scales every stored point by independent X and Y factors.
///
/// Segment order, segment kind, point order, and each point's `z` channel are kept
/// as they are. Coordinates are quantized with [`to_fixed`] so that repeated
/// resizes do not accumulate float noise.
pub fn resize(segments: &[Segment], scale_x: f64, scale_y: f64) -> Vec<Segment> {
    segments
        .iter()
        .map(|segment| Segment {
            kind: segment.kind,
            points: segment
                .points
                .iter()
                .map(|p| Point {
                    x: to_fixed(scale_x * p.x),
                    y: to_fixed(scale_y * p.y),
                    z: p.z,
                })
                .collect(),
        })
        .collect()
}

/// [`resize`] for scale factors read from untrusted input.
///
/// # Errors
/// Returns [`DrawError::InvalidDimension`] when either factor is not finite.
pub fn checked_resize(segments: &[Segment], scale_x: f64, scale_y: f64) -> Result<Vec<Segment>> {
    for (axis, scale) in [("x", scale_x), ("y", scale_y)] {
        if !scale.is_finite() {
            return Err(DrawError::InvalidDimension(format!(
                "scale {axis} must be finite, got {scale}"
            )));
        }
    }
    Ok(resize(segments, scale_x, scale_y))
}

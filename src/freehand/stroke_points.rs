//! Resampling raw input into streamlined centerline points.

use super::{StrokeOptions, StrokePoint};
use crate::draw::shape::Point;
use crate::geom::Vec2d;

/// Leading points below this pressure are noise from the pen touching down.
const MIN_START_PRESSURE: f64 = 0.025;
/// Trailing points below this pressure are noise from the pen lifting.
const MIN_END_PRESSURE: f64 = 0.01;
const DEFAULT_PRESSURE: f64 = 0.5;

/// Streamlines `points` into centerline stroke points.
///
/// Points crowding either end are merged away, a two-point stroke with simulated
/// pressure is subdivided so its tapers have room, and each point is pulled toward
/// its predecessor according to `options.streamline`. Radii are left at 1; run
/// [`super::set_stroke_point_radii`] before building an outline.
pub fn stroke_points(points: &[Point], options: &StrokeOptions) -> Vec<StrokePoint> {
    let Some(first_raw) = points.first() else {
        return Vec::new();
    };

    let size = options.size;
    let simulate = options.simulate_pressure;
    let t = 0.15 + (1.0 - options.streamline) * 0.85;

    let mut pts: Vec<(Vec2d, f64)> = points
        .iter()
        .map(|p| (p.vec(), p.z.unwrap_or(DEFAULT_PRESSURE)))
        .collect();

    if !simulate {
        let start = pts
            .iter()
            .position(|(_, z)| *z >= MIN_START_PRESSURE)
            .unwrap_or(pts.len());
        pts.drain(..start);
        while pts.last().is_some_and(|(_, z)| *z < MIN_END_PRESSURE) {
            pts.pop();
        }
    }

    if pts.is_empty() {
        let p = first_raw.vec();
        return vec![StrokePoint {
            point: p,
            input: p,
            pressure: if simulate { DEFAULT_PRESSURE } else { 0.15 },
            vector: Vec2d::new(1.0, 1.0),
            distance: 0.0,
            running_length: 0.0,
            radius: 1.0,
        }];
    }

    let min_dist2 = (size / 3.0).powi(2);

    while pts.len() > 1 && pts[1].0.dist2(pts[0].0) <= min_dist2 {
        pts[0].1 = pts[0].1.max(pts[1].1);
        pts.remove(1);
    }

    let mut removed_near_end = 0usize;
    if let Some(last) = pts.pop() {
        while pts.last().is_some_and(|(p, _)| p.dist2(last.0) <= min_dist2) {
            pts.pop();
            removed_near_end += 1;
        }
        pts.push(last);
    }

    let n = pts.len();
    let is_complete = options.last
        || !simulate
        || (n > 1 && pts[n - 1].0.dist2(pts[n - 2].0) < size * size)
        || removed_near_end > 0;

    if n == 2 && simulate {
        let (a, az) = pts[0];
        let (b, bz) = pts[1];
        pts = (0..5)
            .map(|i| {
                let f = i as f64 / 4.0;
                (a.lrp(b, f), az + (bz - az) * f)
            })
            .collect();
    }

    let (p0, z0) = pts[0];
    let mut out = vec![StrokePoint {
        point: p0,
        input: p0,
        pressure: if simulate { DEFAULT_PRESSURE } else { z0 },
        vector: Vec2d::new(1.0, 1.0),
        distance: 0.0,
        running_length: 0.0,
        radius: 1.0,
    }];

    if is_complete && options.streamline > 0.0 {
        let tail = pts[pts.len() - 1];
        pts.push(tail);
    }

    let n = pts.len();
    let mut prev = p0;
    let mut total_length = 0.0;

    for (i, &(input, z)) in pts.iter().enumerate().skip(1) {
        let point = if t == 0.0 || (options.last && i == n - 1) {
            input
        } else {
            input.lrp(prev, 1.0 - t)
        };

        if point == prev {
            continue;
        }

        let distance = point.dist(prev);
        total_length += distance;

        // Skip the jittery first few samples until the stroke has some length.
        if i < 4 && total_length < size {
            continue;
        }

        out.push(StrokePoint {
            point,
            input,
            pressure: if simulate { DEFAULT_PRESSURE } else { z },
            vector: prev.sub(point).uni(),
            distance,
            running_length: total_length,
            radius: 1.0,
        });
        prev = point;
    }

    out[0].vector = out.get(1).map(|sp| sp.vector).unwrap_or_default();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::shape::{DashStyle, DrawShapeProps};
    use crate::freehand::freehand_options;

    fn solid(width: f64) -> StrokeOptions {
        let props = DrawShapeProps {
            dash: DashStyle::Solid,
            ..DrawShapeProps::default()
        };
        freehand_options(&props, width, false, false)
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(stroke_points(&[], &solid(2.0)).is_empty());
    }

    #[test]
    fn single_point_yields_single_stroke_point() {
        let out = stroke_points(&[Point::new(5.0, 5.0)], &solid(2.0));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].point, Vec2d::new(5.0, 5.0));
    }

    #[test]
    fn corner_stroke_keeps_multiple_points_with_growing_length() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let out = stroke_points(&pts, &solid(2.0));
        assert!(out.len() >= 2);
        for pair in out.windows(2) {
            assert!(pair[1].running_length > pair[0].running_length);
        }
        assert_eq!(out[0].vector, out[1].vector);
    }

    #[test]
    fn last_point_is_exact_when_stroke_is_finished() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(40.0, 0.0),
        ];
        let mut options = solid(2.0);
        options.last = true;
        let out = stroke_points(&pts, &options);
        assert_eq!(out.last().map(|sp| sp.point), Some(Vec2d::new(40.0, 0.0)));
    }

    #[test]
    fn low_pressure_lead_in_is_stripped_without_simulation() {
        let pts = [
            Point::with_pressure(0.0, 0.0, 0.0),
            Point::with_pressure(20.0, 0.0, 0.6),
            Point::with_pressure(40.0, 0.0, 0.6),
        ];
        let mut options = solid(2.0);
        options.last = true;
        let out = stroke_points(&pts, &options);
        assert_eq!(out[0].point, Vec2d::new(20.0, 0.0));
    }

    #[test]
    fn two_point_simulated_stroke_is_subdivided() {
        let props = DrawShapeProps::default();
        let options = freehand_options(&props, 2.0, true, false);
        let pts = [Point::new(0.0, 0.0), Point::new(40.0, 0.0)];
        let out = stroke_points(&pts, &options);
        assert!(out.len() > 2);
    }
}

//! Outline polygon around a stroke's centerline.

use super::{StrokeOptions, StrokePoint};
use crate::geom::Vec2d;
use std::f64::consts::PI;

const CAP_STEPS: usize = 13;
const CORNER_STEPS: usize = 13;

/// Builds the closed outline of a stroke whose radii have already been set.
///
/// The result runs down the left rail, around the end cap, back up the right rail,
/// and around the start cap. A single stroke point becomes a dot of diameter
/// `options.size`. An empty input yields an empty outline.
pub fn stroke_outline_points(points: &[StrokePoint], options: &StrokeOptions) -> Vec<Vec2d> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    let Some(last) = points.last() else {
        return Vec::new();
    };

    if points.len() == 1 {
        return dot_points(first.point, options.size / 2.0);
    }

    let min_distance = (options.size * options.smoothing).powi(2);
    let mut left: Vec<Vec2d> = Vec::with_capacity(points.len());
    let mut right: Vec<Vec2d> = Vec::with_capacity(points.len());

    for (i, sp) in points.iter().enumerate() {
        let is_last = i == points.len() - 1;
        let next_vector = if is_last {
            sp.vector
        } else {
            points[i + 1].vector
        };
        let next_dpr = if is_last {
            1.0
        } else {
            sp.vector.dot(next_vector)
        };

        // Sharp corner: swing both rails around the point instead of crossing over.
        if next_dpr < 0.0 && i > 0 && !is_last {
            let offset = sp.vector.per().mul(sp.radius);
            for step in 0..=CORNER_STEPS {
                let t = step as f64 / CORNER_STEPS as f64;
                left.push(sp.point.sub(offset).rot_with(sp.point, PI * t));
                right.push(sp.point.add(offset).rot_with(sp.point, -PI * t));
            }
            continue;
        }

        let offset = next_vector
            .lrp(sp.vector, next_dpr)
            .per()
            .uni()
            .mul(sp.radius);
        let tl = sp.point.sub(offset);
        let tr = sp.point.add(offset);

        if i <= 1 || left.last().is_none_or(|pl| pl.dist2(tl) > min_distance) {
            left.push(tl);
        }
        if i <= 1 || right.last().is_none_or(|pr| pr.dist2(tr) > min_distance) {
            right.push(tr);
        }
    }

    // Always reach the final point's rails so the end cap joins cleanly.
    let end_offset = last.vector.per().uni().mul(last.radius);
    let end_left = last.point.sub(end_offset);
    let end_right = last.point.add(end_offset);
    if left.last() != Some(&end_left) {
        left.push(end_left);
    }
    if right.last() != Some(&end_right) {
        right.push(end_right);
    }

    let forward = last.vector.neg();
    let end_cap = if options.end.taper.is_active() {
        vec![last.point]
    } else {
        round_cap(end_left, last.point, forward)
    };

    let backward = first.vector;
    let start_right = right.first().copied().unwrap_or(first.point);
    let start_cap = if options.start.taper.is_active() {
        vec![first.point]
    } else {
        round_cap(start_right, first.point, backward)
    };

    let mut outline = left;
    outline.extend(end_cap);
    outline.extend(right.into_iter().rev());
    outline.extend(start_cap);
    outline
}

/// Half-circle from `from` around `center`, bulging toward `bulge`.
fn round_cap(from: Vec2d, center: Vec2d, bulge: Vec2d) -> Vec<Vec2d> {
    let quarter = from.rot_with(center, PI / 2.0).sub(center);
    let sign = if quarter.dot(bulge) >= 0.0 { 1.0 } else { -1.0 };
    (1..CAP_STEPS)
        .map(|step| {
            let t = step as f64 / CAP_STEPS as f64;
            from.rot_with(center, sign * PI * t)
        })
        .collect()
}

fn dot_points(center: Vec2d, radius: f64) -> Vec<Vec2d> {
    let start = Vec2d::new(center.x - radius, center.y);
    (0..CAP_STEPS)
        .map(|step| start.rot_with(center, 2.0 * PI * step as f64 / CAP_STEPS as f64))
        .collect()
}

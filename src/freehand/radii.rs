//! Per-point radius assignment from pressure, thinning, and tapers.

use super::{StrokeOptions, StrokePoint};

const RATE_OF_PRESSURE_CHANGE: f64 = 0.275;

/// Sets `radius` (and, for simulated pressure, `pressure`) on every stroke point.
pub fn set_stroke_point_radii(points: &mut [StrokePoint], options: &StrokeOptions) {
    let Some(total_length) = points.last().map(|sp| sp.running_length) else {
        return;
    };

    let size = options.size;
    let thinning = options.thinning;
    let simulate = options.simulate_pressure;
    let radius_for = |pressure: f64| size * options.easing.apply(0.5 - thinning * (0.5 - pressure));

    if !simulate && total_length < size {
        // Too short to read pressure changes from; use the firmest sample throughout.
        let max = points.iter().fold(0.5_f64, |max, sp| max.max(sp.pressure));
        for sp in points.iter_mut() {
            sp.pressure = max;
            sp.radius = radius_for(max);
        }
        return;
    }

    // Seed the running pressure from the opening stretch of the stroke.
    let mut prev_pressure = points[0].pressure;
    for sp in points.iter() {
        if sp.running_length > size * 5.0 {
            break;
        }
        let sp_speed = (sp.distance / size).min(1.0);
        let p = if simulate {
            let rp = (1.0 - sp_speed).min(1.0);
            (prev_pressure + (rp - prev_pressure) * (sp_speed * RATE_OF_PRESSURE_CHANGE)).min(1.0)
        } else {
            (prev_pressure + (sp.pressure - prev_pressure) * 0.5).min(1.0)
        };
        prev_pressure += (p - prev_pressure) * 0.5;
    }

    for sp in points.iter_mut() {
        if thinning != 0.0 {
            let sp_speed = (sp.distance / size).min(1.0);
            let pressure = if simulate {
                let rp = (1.0 - sp_speed).min(1.0);
                (prev_pressure + (rp - prev_pressure) * (sp_speed * RATE_OF_PRESSURE_CHANGE))
                    .min(1.0)
            } else {
                (prev_pressure
                    + (sp.pressure - prev_pressure) * (sp_speed * RATE_OF_PRESSURE_CHANGE))
                    .min(1.0)
            };
            if simulate {
                sp.pressure = pressure;
            }
            sp.radius = radius_for(pressure);
            prev_pressure = pressure;
        } else {
            sp.radius = size / 2.0;
        }
    }

    let taper_start = options.start.taper.length(size, total_length);
    let taper_end = options.end.taper.length(size, total_length);

    if taper_start > 0.0 || taper_end > 0.0 {
        for sp in points.iter_mut() {
            let run = sp.running_length;
            let ts = if run < taper_start {
                options.start.easing.apply(run / taper_start)
            } else {
                1.0
            };
            let remaining = total_length - run;
            let te = if remaining < taper_end {
                options.end.easing.apply(remaining / taper_end)
            } else {
                1.0
            };
            sp.radius = (sp.radius * ts.min(te)).max(0.01);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::shape::{DashStyle, DrawShapeProps, Point};
    use crate::freehand::{freehand_options, stroke_points};

    fn line_points() -> Vec<Point> {
        (0..30).map(|i| Point::new(i as f64 * 4.0, 0.0)).collect()
    }

    #[test]
    fn solid_stroke_has_uniform_half_size_radius() {
        let props = DrawShapeProps {
            dash: DashStyle::Solid,
            ..DrawShapeProps::default()
        };
        let options = freehand_options(&props, 2.0, true, false);
        let mut sps = stroke_points(&line_points(), &options);
        set_stroke_point_radii(&mut sps, &options);
        assert!(sps.iter().all(|sp| (sp.radius - 1.5).abs() < 1e-12));
    }

    #[test]
    fn simulated_stroke_tapers_toward_both_ends() {
        let props = DrawShapeProps::default();
        let options = freehand_options(&props, 4.0, true, false);
        let mut sps = stroke_points(&line_points(), &options);
        set_stroke_point_radii(&mut sps, &options);

        let first = sps.first().map(|sp| sp.radius).unwrap_or_default();
        let last = sps.last().map(|sp| sp.radius).unwrap_or_default();
        let widest = sps.iter().map(|sp| sp.radius).fold(0.0, f64::max);
        assert!(sps.iter().all(|sp| sp.radius >= 0.01));
        assert!(widest > first);
        assert!(widest > last);
    }

    #[test]
    fn empty_slice_is_a_no_op() {
        let options = freehand_options(&DrawShapeProps::default(), 2.0, true, false);
        set_stroke_point_radii(&mut [], &options);
    }
}

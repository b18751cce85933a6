//! Stroke option presets for each dash style and input device.

use crate::draw::shape::{DashStyle, DrawShapeProps};
use std::f64::consts::PI;

/// Easing curves applied to pressure and taper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOutSine,
    EaseOutQuad,
    EaseOutCubic,
    /// Blend tuned for real stylus pressure
    Pen,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseOutSine => (t * PI / 2.0).sin(),
            Easing::EaseOutQuad => t * (2.0 - t),
            Easing::EaseOutCubic => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Easing::Pen => t * 0.65 + (t * PI / 2.0).sin() * 0.35,
        }
    }
}

/// How much of one end of the stroke narrows to a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Taper {
    None,
    /// Taper over `max(size, total length)`
    Auto,
    /// Taper over a fixed length
    Length(f64),
}

impl Taper {
    /// Taper length for a stroke of `total_length` drawn at `size`.
    pub fn length(self, size: f64, total_length: f64) -> f64 {
        match self {
            Taper::None => 0.0,
            Taper::Auto => size.max(total_length),
            Taper::Length(len) => len,
        }
    }

    pub fn is_active(self) -> bool {
        !matches!(self, Taper::None) && self != Taper::Length(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaperOptions {
    pub taper: Taper,
    pub easing: Easing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeOptions {
    /// Base diameter of the stroke
    pub size: f64,
    /// How strongly pressure narrows the stroke (0 = uniform)
    pub thinning: f64,
    pub streamline: f64,
    pub smoothing: f64,
    pub simulate_pressure: bool,
    pub easing: Easing,
    pub start: TaperOptions,
    pub end: TaperOptions,
    /// The input is finished; keep the final point exact
    pub last: bool,
}

const NO_TAPER_START: TaperOptions = TaperOptions {
    taper: Taper::None,
    easing: Easing::EaseOutQuad,
};

const NO_TAPER_END: TaperOptions = TaperOptions {
    taper: Taper::None,
    easing: Easing::EaseOutCubic,
};

fn base_streamline(stroke_width: f64) -> f64 {
    0.62 + ((1.0 + stroke_width) / 8.0) * 0.06
}

fn solid_settings(stroke_width: f64, last: bool) -> StrokeOptions {
    StrokeOptions {
        size: 1.0 + stroke_width,
        thinning: 0.0,
        streamline: base_streamline(stroke_width),
        smoothing: 0.62,
        simulate_pressure: false,
        easing: Easing::Linear,
        start: NO_TAPER_START,
        end: NO_TAPER_END,
        last,
    }
}

fn simulate_pressure_settings(stroke_width: f64, last: bool) -> StrokeOptions {
    StrokeOptions {
        size: 1.0 + stroke_width,
        thinning: 0.5,
        streamline: base_streamline(stroke_width),
        smoothing: 0.62,
        simulate_pressure: true,
        easing: Easing::EaseOutSine,
        start: TaperOptions {
            taper: Taper::Auto,
            ..NO_TAPER_START
        },
        end: TaperOptions {
            taper: Taper::Auto,
            ..NO_TAPER_END
        },
        last,
    }
}

fn real_pressure_settings(stroke_width: f64, last: bool) -> StrokeOptions {
    StrokeOptions {
        size: 1.0 + stroke_width * 1.2,
        thinning: 0.62,
        streamline: 0.62,
        smoothing: 0.62,
        simulate_pressure: false,
        easing: Easing::Pen,
        start: NO_TAPER_START,
        end: NO_TAPER_END,
        last,
    }
}

/// Picks the option preset for a shape.
///
/// `force_solid` selects the uniform-width preset regardless of dash style; the
/// interactive indicator uses it so the outline does not wobble.
pub fn freehand_options(
    props: &DrawShapeProps,
    stroke_width: f64,
    force_complete: bool,
    force_solid: bool,
) -> StrokeOptions {
    let last = force_complete || props.is_complete;

    if force_solid || props.dash != DashStyle::Draw {
        return solid_settings(stroke_width, last);
    }

    if props.is_pen {
        real_pressure_settings(stroke_width, last)
    } else {
        simulate_pressure_settings(stroke_width, last)
    }
}

/// Options used when deriving hit-test geometry: simulated pressure, both ends
/// tapered, always complete.
pub fn geometry_options(stroke_width: f64) -> StrokeOptions {
    simulate_pressure_settings(stroke_width, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easings_fix_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseOutSine,
            Easing::EaseOutQuad,
            Easing::EaseOutCubic,
            Easing::Pen,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-12, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{easing:?} at 1");
        }
    }

    #[test]
    fn draw_dash_picks_pressure_preset() {
        let mut props = DrawShapeProps::default();
        let simulated = freehand_options(&props, 2.0, false, false);
        assert!(simulated.simulate_pressure);
        assert_eq!(simulated.size, 3.0);
        assert!(simulated.start.taper.is_active());

        props.is_pen = true;
        let pen = freehand_options(&props, 2.0, false, false);
        assert!(!pen.simulate_pressure);
        assert!((pen.size - 3.4).abs() < 1e-12);
        assert_eq!(pen.easing, Easing::Pen);
    }

    #[test]
    fn solid_preset_when_forced_or_not_draw() {
        let mut props = DrawShapeProps::default();
        let forced = freehand_options(&props, 2.0, false, true);
        assert_eq!(forced.thinning, 0.0);
        assert!(!forced.start.taper.is_active());

        props.dash = DashStyle::Dashed;
        props.is_complete = true;
        let dashed = freehand_options(&props, 2.0, false, false);
        assert!(!dashed.simulate_pressure);
        assert!(dashed.last);
    }

    #[test]
    fn taper_lengths() {
        assert_eq!(Taper::Auto.length(3.0, 10.0), 10.0);
        assert_eq!(Taper::Auto.length(3.0, 1.0), 3.0);
        assert_eq!(Taper::None.length(3.0, 10.0), 0.0);
        assert!(!Taper::Length(0.0).is_active());
    }
}

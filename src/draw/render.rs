//! Path construction for draw shapes: selection indicator, static export, and the
//! augmentation overlay.
//!
//! Every function here returns an immutable [`SvgNode`] by value. Nothing is drawn;
//! callers serialize the tree or hand it to a rasterizer.

use super::augment::augment;
use super::color::{ColorStyle, ColorTheme};
use super::shape::{DashStyle, DrawShape, FillStyle, Point, to_vecs};
use crate::config::DebugConfig;
use crate::error::{DrawError, Result};
use crate::freehand::{
    StrokeOptions, StrokePoint, circle_path, dash_array, dot_path, freehand_options,
    set_stroke_point_radii, stroke_outline_points, stroke_points, svg_path_from_points,
    svg_path_from_polyline, svg_path_from_stroke_points,
};
use crate::geom::{Box2d, Vec2d};
use crate::rng::seeded_unit;
use crate::svg::{PathElement, SvgNode};
use crate::util::fmt_num;
use log::debug;

/// Fill id referenced by the `pattern` fill style; the definition lives with the caller.
pub const HASH_PATTERN_FILL: &str = "url(#hash_pattern)";

/// Stroke width after the per-shape sketchy jitter.
///
/// Only a single-segment, mouse-drawn stroke in the `draw` dash style is jittered.
/// The jitter lies in `[0, stroke_width / 6)` and is seeded by the shape id, so the
/// same shape always gets the same width and different shapes rarely share one.
pub fn stroke_width_with_jitter(shape: &DrawShape, stroke_width: f64) -> f64 {
    let props = &shape.props;
    if props.dash == DashStyle::Draw && !props.is_pen && props.segments.len() == 1 {
        stroke_width + seeded_unit(&shape.id) * (stroke_width / 6.0)
    } else {
        stroke_width
    }
}

/// Centerline state shared by the indicator and export paths.
struct Centerline {
    options: StrokeOptions,
    stroke_points: Vec<StrokePoint>,
    /// Smoothed path through the stroke points, or a dot glyph for a lone point
    path: String,
}

fn centerline(shape: &DrawShape, sw: f64, force_solid: bool) -> Result<Centerline> {
    let props = &shape.props;
    let points = props.checked_points()?;

    let options = freehand_options(props, sw, props.show_as_complete(), force_solid);
    let stroke_points = stroke_points(&points, &options);

    let path = if stroke_points.len() > 1 {
        svg_path_from_stroke_points(&stroke_points, props.is_closed)
    } else {
        dot_path(points[0].vec(), sw)
    };

    Ok(Centerline {
        options,
        stroke_points,
        path,
    })
}

/// Path data for the selection indicator.
///
/// The indicator always uses the uniform-width preset. With `force_solid` the
/// sketchy width jitter is skipped too, giving a stable outline.
///
/// # Errors
/// Fails with [`DrawError::EmptySegments`] or [`DrawError::EmptyPoints`] when the
/// shape has nothing to draw.
pub fn indicator_path(shape: &DrawShape, stroke_width: f64, force_solid: bool) -> Result<String> {
    let sw = if force_solid {
        stroke_width
    } else {
        stroke_width_with_jitter(shape, stroke_width)
    };
    Ok(centerline(shape, sw, true)?.path)
}

/// The selection indicator as a single unfilled path.
pub fn indicator(shape: &DrawShape, stroke_width: f64, force_solid: bool) -> Result<SvgNode> {
    let d = indicator_path(shape, stroke_width, force_solid)?;
    Ok(SvgNode::Path(PathElement::new(d).with("fill", "none")))
}

/// Builds the static export tree for a shape.
///
/// Export never applies width jitter, so the output is reproducible. The `draw`
/// dash style (and any stroke that collapsed to a single stroke point) becomes one
/// filled variable-width outline; other dash styles become a stroked centerline
/// with a dash pattern. A closed shape with a fill gets its fill grouped beneath
/// the foreground path.
///
/// # Arguments
/// * `shape` - The shape to export
/// * `stroke_width` - Resolved width for the shape's size class
/// * `theme` - Palette the color token resolves against
///
/// # Errors
/// Fails on empty segments or points, and with [`DrawError::EmptyOutline`] when
/// the outline generator produces nothing.
pub fn to_svg(shape: &DrawShape, stroke_width: f64, theme: &ColorTheme) -> Result<SvgNode> {
    let props = &shape.props;
    let mut line = centerline(shape, stroke_width, false)?;
    let paint = theme.paint(props.color);

    let foreground = if props.dash == DashStyle::Draw || line.stroke_points.len() < 2 {
        set_stroke_point_radii(&mut line.stroke_points, &line.options);
        let outline = stroke_outline_points(&line.stroke_points, &line.options);
        if outline.is_empty() {
            return Err(DrawError::EmptyOutline);
        }
        debug!(
            "Exporting {} as filled outline ({} outline points)",
            shape.id,
            outline.len()
        );
        PathElement::new(svg_path_from_points(&outline, true))
            .with("fill", paint.solid.to_hex())
            .with("stroke-linecap", "round")
    } else {
        debug!(
            "Exporting {} as stroked centerline ({:?}, {} stroke points)",
            shape.id,
            props.dash,
            line.stroke_points.len()
        );
        PathElement::new(line.path.clone())
            .with("stroke", paint.solid.to_hex())
            .with("fill", "none")
            .with("stroke-linecap", "round")
            .with("stroke-width", fmt_num(stroke_width))
            .with("stroke-dasharray", dash_array(props.dash, stroke_width))
            .with("stroke-dashoffset", "0")
    };

    let fill = if props.is_closed {
        props.fill
    } else {
        FillStyle::None
    };

    Ok(match fill_node(fill, &line.path, props.color, theme) {
        Some(fill) => SvgNode::group(vec![fill, SvgNode::Path(foreground)]),
        None => SvgNode::Path(foreground),
    })
}

/// Interior fill for path data `d`, or `None` for the `none` fill style.
pub fn fill_node(
    fill: FillStyle,
    d: &str,
    color: ColorStyle,
    theme: &ColorTheme,
) -> Option<SvgNode> {
    let semi = || {
        SvgNode::Path(PathElement::new(d).with("fill", theme.paint(color).semi.to_hex()))
    };

    match fill {
        FillStyle::None => None,
        FillStyle::Semi => Some(SvgNode::Path(
            PathElement::new(d).with("fill", theme.solid.to_hex()),
        )),
        FillStyle::Solid => Some(semi()),
        FillStyle::Pattern => Some(SvgNode::group(vec![
            semi(),
            SvgNode::Path(PathElement::new(d).with("fill", HASH_PATTERN_FILL)),
        ])),
    }
}

/// Augmentation overlay: the raw polyline, a weight marker per point, and
/// (optionally) a corner tick per point.
///
/// # Errors
/// Fails when the shape has no segments or no points.
pub fn debug_overlay(shape: &DrawShape, config: &DebugConfig) -> Result<SvgNode> {
    let points = shape.props.checked_points()?;
    let augmented = augment(&points)?;

    let mut children = Vec::with_capacity(augmented.len() * 2 + 1);
    children.push(SvgNode::Path(
        PathElement::new(svg_path_from_polyline(&to_vecs(&points)))
            .with("stroke-linecap", "round")
            .with("fill", "none")
            .with("stroke", "black")
            .with("stroke-width", "1"),
    ));

    for point in &augmented {
        let r = config.marker_base_radius + point.weight * config.marker_weight_scale;
        children.push(SvgNode::Path(
            PathElement::new(circle_path(Vec2d::new(point.x, point.y), r)).with("fill", "red"),
        ));
    }

    if config.show_corner_ticks {
        for point in &augmented {
            let from = Vec2d::new(point.x, point.y);
            let reach = point.corner_severity * config.tick_length;
            let to = from.add(Vec2d::new(
                point.corner_angle.cos() * reach,
                point.corner_angle.sin() * reach,
            ));
            children.push(SvgNode::Path(
                PathElement::new(svg_path_from_polyline(&[from, to]))
                    .with("stroke", "blue")
                    .with("stroke-width", "0.6"),
            ));
        }
    }

    debug!(
        "Built augmentation overlay for {} ({} points)",
        shape.id,
        augmented.len()
    );
    Ok(SvgNode::group(children))
}

/// View box for an exported shape: its point bounds grown by the stroke width
/// plus `padding` on every side.
pub fn export_bounds(points: &[Point], stroke_width: f64, padding: f64) -> Result<Box2d> {
    Box2d::from_points(&to_vecs(points))
        .map(|bounds| bounds.expand_by(stroke_width + padding))
        .ok_or(DrawError::EmptyPoints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::shape::{DrawShapeProps, Segment};

    fn shape(id: &str, segments: Vec<Segment>, dash: DashStyle) -> DrawShape {
        DrawShape::new(
            id,
            DrawShapeProps {
                segments,
                dash,
                ..DrawShapeProps::default()
            },
        )
    }

    fn corner() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]
    }

    fn loop_points() -> Vec<Point> {
        (0..24)
            .map(|i| {
                let t = i as f64 / 24.0 * std::f64::consts::TAU;
                Point::new(50.0 + t.cos() * 30.0, 50.0 + t.sin() * 30.0)
            })
            .collect()
    }

    fn dot_radius(d: &str) -> f64 {
        // "M x y m -r, 0 a ..."
        d.split_whitespace()
            .nth(4)
            .and_then(|tok| tok.trim_start_matches('-').trim_end_matches(',').parse().ok())
            .unwrap()
    }

    #[test]
    fn jitter_is_stable_per_id_and_varies_between_ids() {
        let a = shape("shape:a", vec![Segment::free(corner())], DashStyle::Draw);
        let b = shape("shape:b", vec![Segment::free(corner())], DashStyle::Draw);

        let wa = stroke_width_with_jitter(&a, 2.0);
        assert_eq!(wa.to_bits(), stroke_width_with_jitter(&a, 2.0).to_bits());
        assert_ne!(wa, stroke_width_with_jitter(&b, 2.0));
        assert!((2.0..2.0 + 2.0 / 6.0).contains(&wa));
    }

    #[test]
    fn jitter_skips_pen_multi_segment_and_non_sketchy_strokes() {
        let solid = shape("shape:a", vec![Segment::free(corner())], DashStyle::Solid);
        assert_eq!(stroke_width_with_jitter(&solid, 2.0), 2.0);

        let mut pen = shape("shape:a", vec![Segment::free(corner())], DashStyle::Draw);
        pen.props.is_pen = true;
        assert_eq!(stroke_width_with_jitter(&pen, 2.0), 2.0);

        let multi = shape(
            "shape:a",
            vec![Segment::free(corner()), Segment::straight(corner())],
            DashStyle::Draw,
        );
        assert_eq!(stroke_width_with_jitter(&multi, 2.0), 2.0);
    }

    #[test]
    fn solid_open_stroke_exports_as_stroked_centerline() {
        let s = shape("shape:line", vec![Segment::free(corner())], DashStyle::Solid);
        let theme = ColorTheme::default();
        let node = to_svg(&s, 2.0, &theme).unwrap();

        let SvgNode::Path(path) = node else {
            panic!("expected a lone path, got {node:?}");
        };
        assert!(path.d.starts_with("M0,0 "));
        assert_eq!(path.attr("fill"), Some("none"));
        assert_eq!(path.attr("stroke-width"), Some("2"));
        assert_eq!(path.attr("stroke-dasharray"), Some("none"));
        assert_eq!(path.attr("stroke-dashoffset"), Some("0"));
        assert_eq!(
            path.attr("stroke"),
            Some(theme.paint(ColorStyle::Black).solid.to_hex().as_str())
        );
    }

    #[test]
    fn dashed_stroke_gets_scaled_dash_array() {
        let s = shape("shape:line", vec![Segment::free(corner())], DashStyle::Dashed);
        let node = to_svg(&s, 2.0, &ColorTheme::default()).unwrap();
        assert_eq!(node.paths()[0].attr("stroke-dasharray"), Some("8 8"));
    }

    #[test]
    fn sketchy_stroke_exports_as_filled_outline() {
        let s = shape("shape:draw", vec![Segment::free(corner())], DashStyle::Draw);
        let theme = ColorTheme::default();
        let node = to_svg(&s, 2.0, &theme).unwrap();

        let paths = node.paths();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].d.ends_with('Z'));
        assert_eq!(
            paths[0].attr("fill"),
            Some(theme.paint(ColorStyle::Black).solid.to_hex().as_str())
        );
        assert_eq!(paths[0].attr("stroke"), None);
    }

    #[test]
    fn export_is_unjittered_and_deterministic() {
        let a = shape("shape:a", vec![Segment::free(corner())], DashStyle::Draw);
        let b = shape("shape:b", vec![Segment::free(corner())], DashStyle::Draw);
        let theme = ColorTheme::default();
        assert_eq!(
            to_svg(&a, 2.0, &theme).unwrap(),
            to_svg(&b, 2.0, &theme).unwrap()
        );
    }

    #[test]
    fn closed_filled_stroke_paints_fill_beneath_outline() {
        for dash in [DashStyle::Draw, DashStyle::Solid] {
            let mut s = shape("shape:loop", vec![Segment::free(loop_points())], dash);
            s.props.is_closed = true;
            s.props.fill = FillStyle::Solid;
            let theme = ColorTheme::default();

            let node = to_svg(&s, 2.0, &theme).unwrap();
            let SvgNode::Group { children } = &node else {
                panic!("expected a group for {dash:?}");
            };
            assert_eq!(children.len(), 2);
            let paths = node.paths();
            assert_eq!(
                paths[0].attr("fill"),
                Some(theme.paint(ColorStyle::Black).semi.to_hex().as_str())
            );
            assert_ne!(paths[1].attr("fill"), paths[0].attr("fill"));
        }
    }

    #[test]
    fn open_stroke_ignores_fill_style() {
        let mut s = shape("shape:loop", vec![Segment::free(loop_points())], DashStyle::Solid);
        s.props.fill = FillStyle::Solid;
        let node = to_svg(&s, 2.0, &ColorTheme::default()).unwrap();
        assert!(matches!(node, SvgNode::Path(_)));
    }

    #[test]
    fn fill_styles_resolve_to_expected_paints() {
        let theme = ColorTheme::default();
        assert!(fill_node(FillStyle::None, "M0,0", ColorStyle::Blue, &theme).is_none());

        let semi = fill_node(FillStyle::Semi, "M0,0", ColorStyle::Blue, &theme).unwrap();
        assert_eq!(semi.paths()[0].attr("fill"), Some(theme.solid.to_hex().as_str()));

        let pattern = fill_node(FillStyle::Pattern, "M0,0", ColorStyle::Blue, &theme).unwrap();
        let paths = pattern.paths();
        assert_eq!(paths.len(), 2);
        assert_eq!(
            paths[0].attr("fill"),
            Some(theme.paint(ColorStyle::Blue).semi.to_hex().as_str())
        );
        assert_eq!(paths[1].attr("fill"), Some(HASH_PATTERN_FILL));
    }

    #[test]
    fn single_point_exports_filled_dot_outline() {
        let s = shape(
            "shape:dot",
            vec![Segment::free(vec![Point::new(5.0, 5.0)])],
            DashStyle::Solid,
        );
        let node = to_svg(&s, 2.0, &ColorTheme::default()).unwrap();
        let paths = node.paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].attr("stroke-linecap"), Some("round"));
        assert!(paths[0].attr("stroke-dasharray").is_none());
    }

    #[test]
    fn single_point_indicator_is_jittered_dot_glyph() {
        let s = shape(
            "shape:dot",
            vec![Segment::free(vec![Point::new(5.0, 5.0)])],
            DashStyle::Draw,
        );
        let d = indicator_path(&s, 2.0, false).unwrap();
        assert!(d.starts_with("M 5 5 m -"));
        let sw = stroke_width_with_jitter(&s, 2.0);
        assert!((dot_radius(&d) - (sw + 1.0) / 2.0).abs() < 1e-4);

        let solid = indicator_path(&s, 2.0, true).unwrap();
        assert_eq!(dot_radius(&solid), 1.5);
    }

    #[test]
    fn indicator_is_single_unfilled_path() {
        let s = shape("shape:line", vec![Segment::free(corner())], DashStyle::Draw);
        let node = indicator(&s, 2.0, false).unwrap();
        let SvgNode::Path(path) = node else {
            panic!("indicator must be a single path");
        };
        assert_eq!(path.attr("fill"), Some("none"));
        assert!(path.d.starts_with("M0,0 "));
    }

    #[test]
    fn empty_shapes_fail_instead_of_rendering_nothing() {
        let theme = ColorTheme::default();
        let no_segments = shape("shape:empty", Vec::new(), DashStyle::Draw);
        assert_eq!(to_svg(&no_segments, 2.0, &theme), Err(DrawError::EmptySegments));
        assert_eq!(
            indicator(&no_segments, 2.0, false),
            Err(DrawError::EmptySegments)
        );

        let no_points = shape("shape:empty", vec![Segment::free(Vec::new())], DashStyle::Draw);
        assert_eq!(to_svg(&no_points, 2.0, &theme), Err(DrawError::EmptyPoints));
        assert_eq!(
            debug_overlay(&no_points, &DebugConfig::default()),
            Err(DrawError::EmptyPoints)
        );
    }

    #[test]
    fn debug_overlay_draws_polyline_markers_and_ticks() {
        let s = shape("shape:dbg", vec![Segment::free(corner())], DashStyle::Draw);
        let node = debug_overlay(&s, &DebugConfig::default()).unwrap();
        let paths = node.paths();
        assert_eq!(paths.len(), 1 + 3 + 3);
        assert_eq!(paths[0].d, "M 0 0 L 10 0 L 10 10");
        assert_eq!(paths[0].attr("stroke"), Some("black"));
        assert!(paths[1..4].iter().all(|p| p.attr("fill") == Some("red")));
        assert!(paths[4..].iter().all(|p| p.attr("stroke") == Some("blue")));

        let quiet = DebugConfig {
            show_corner_ticks: false,
            ..DebugConfig::default()
        };
        assert_eq!(debug_overlay(&s, &quiet).unwrap().paths().len(), 4);
    }

    #[test]
    fn export_bounds_cover_points_and_padding() {
        let bounds = export_bounds(&corner(), 2.0, 8.0).unwrap();
        assert_eq!(
            bounds,
            Box2d {
                x: -10.0,
                y: -10.0,
                width: 30.0,
                height: 30.0,
            }
        );
        assert_eq!(export_bounds(&[], 2.0, 8.0), Err(DrawError::EmptyPoints));
    }
}

//! Path-data builders for centerlines, outlines, dots, and dash patterns.

use super::StrokePoint;
use crate::draw::shape::DashStyle;
use crate::geom::Vec2d;
use crate::util::fmt_num;

fn precise(p: Vec2d) -> String {
    format!("{},{} ", fmt_num(p.x), fmt_num(p.y))
}

fn average(a: Vec2d, b: Vec2d) -> String {
    precise(a.mid(b))
}

/// Smooth path through `points` using quadratic curves between midpoints.
///
/// Two points produce a straight `M…L…`; fewer produce an empty string.
pub fn svg_path_from_points(points: &[Vec2d], closed: bool) -> String {
    let len = points.len();
    if len < 2 {
        return String::new();
    }

    let (p0, p1) = (points[0], points[1]);
    if len == 2 {
        return format!("M{}L{}", precise(p0), precise(p1));
    }

    let p2 = points[2];
    let tail: String = points[2..]
        .windows(2)
        .map(|w| average(w[0], w[1]))
        .collect();

    if closed {
        format!(
            "M{}Q{}{}T{}{}{}Z",
            average(p0, p1),
            precise(p1),
            average(p1, p2),
            tail,
            average(points[len - 1], p0),
            average(p0, p1),
        )
    } else {
        format!(
            "M{}Q{}{}{}{}L{}",
            precise(p0),
            precise(p1),
            average(p1, p2),
            if len > 3 { "T" } else { "" },
            tail,
            precise(points[len - 1]),
        )
    }
}

/// Smooth centerline path through stroke points.
pub fn svg_path_from_stroke_points(points: &[StrokePoint], closed: bool) -> String {
    let vecs: Vec<Vec2d> = points.iter().map(|sp| sp.point).collect();
    svg_path_from_points(&vecs, closed)
}

/// Unsmoothed `M x y L x y …` polyline through raw points.
pub fn svg_path_from_polyline(points: &[Vec2d]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { "L" };
        out.push_str(&format!("{cmd} {} {} ", fmt_num(p.x), fmt_num(p.y)));
    }
    out.trim_end().to_string()
}

/// Circular dot glyph of radius `(sw + 1) / 2` centered on `point`, as two arcs.
pub fn dot_path(point: Vec2d, sw: f64) -> String {
    circle_path(point, (sw + 1.0) * 0.5)
}

/// Full circle of radius `r` around `center` as a compact two-arc path.
pub fn circle_path(center: Vec2d, r: f64) -> String {
    let (x, y, r, d) = (fmt_num(center.x), fmt_num(center.y), fmt_num(r), fmt_num(r * 2.0));
    format!("M {x} {y} m -{r}, 0 a {r},{r} 0 1,0 {d},0 a {r},{r} 0 1,0 -{d},0")
}

/// SVG `stroke-dasharray` value for a dash style at a stroke width.
pub fn dash_array(dash: DashStyle, stroke_width: f64) -> String {
    match dash {
        DashStyle::Draw | DashStyle::Solid => "none".to_string(),
        DashStyle::Dotted => format!("0.1 {}", fmt_num(stroke_width * 4.0)),
        DashStyle::Dashed => {
            let len = fmt_num(stroke_width * 4.0);
            format!("{len} {len}")
        }
    }
}

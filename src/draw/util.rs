//! Per-kind shape behavior and tagged-union dispatch.

use super::augment::{AugmentedPoint, augment};
use super::color::ColorTheme;
use super::geometry::{ShapeGeometry, classify};
use super::render;
use super::resize::resize;
use super::shape::{DashStyle, DrawShape, DrawShapeProps};
use crate::config::{Config, DebugConfig, StrokeSizes};
use crate::error::Result;
use crate::svg::SvgNode;
use serde::{Deserialize, Serialize};

/// Capabilities every shape kind provides to the editor.
///
/// Interactive affordances default to "shown" and no outline expansion.
pub trait ShapeUtil {
    type Shape;
    type Props;

    fn default_props(&self) -> Self::Props;

    /// Abstract geometry used for hit-testing and selection.
    fn geometry(&self, shape: &Self::Shape) -> Result<ShapeGeometry>;

    /// Selection indicator path.
    fn indicator(&self, shape: &Self::Shape, force_solid: bool) -> Result<SvgNode>;

    /// Static export tree.
    fn to_svg(&self, shape: &Self::Shape, theme: &ColorTheme) -> Result<SvgNode>;

    /// The shape after scaling by independent X/Y factors.
    fn on_resize(&self, shape: &Self::Shape, scale_x: f64, scale_y: f64) -> Self::Shape;

    fn hide_resize_handles(&self, _shape: &Self::Shape) -> bool {
        false
    }

    fn hide_rotate_handle(&self, _shape: &Self::Shape) -> bool {
        false
    }

    fn hide_selection_bounds_fg(&self, _shape: &Self::Shape) -> bool {
        false
    }

    fn expand_selection_outline_px(&self, _shape: &Self::Shape) -> f64 {
        0.0
    }
}

/// Behavior of freehand draw shapes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawShapeUtil {
    sizes: StrokeSizes,
}

impl DrawShapeUtil {
    pub fn new(sizes: StrokeSizes) -> Self {
        Self { sizes }
    }

    /// Nominal stroke width for the shape's size class, before any jitter.
    pub fn stroke_width(&self, shape: &DrawShape) -> f64 {
        self.sizes.width(shape.props.size)
    }

    /// Density and corner estimates for the shape's flattened points.
    pub fn augment(&self, shape: &DrawShape) -> Result<Vec<AugmentedPoint>> {
        augment(&shape.props.checked_points()?)
    }

    pub fn debug_overlay(&self, shape: &DrawShape, config: &DebugConfig) -> Result<SvgNode> {
        render::debug_overlay(shape, config)
    }
}

impl ShapeUtil for DrawShapeUtil {
    type Shape = DrawShape;
    type Props = DrawShapeProps;

    fn default_props(&self) -> DrawShapeProps {
        DrawShapeProps::default()
    }

    fn geometry(&self, shape: &DrawShape) -> Result<ShapeGeometry> {
        let props = &shape.props;
        let points = props.checked_points()?;
        classify(
            &points,
            self.stroke_width(shape),
            props.is_closed,
            props.fill,
            props.segments.len(),
        )
    }

    fn indicator(&self, shape: &DrawShape, force_solid: bool) -> Result<SvgNode> {
        render::indicator(shape, self.stroke_width(shape), force_solid)
    }

    fn to_svg(&self, shape: &DrawShape, theme: &ColorTheme) -> Result<SvgNode> {
        render::to_svg(shape, self.stroke_width(shape), theme)
    }

    fn on_resize(&self, shape: &DrawShape, scale_x: f64, scale_y: f64) -> DrawShape {
        DrawShape {
            id: shape.id.clone(),
            props: DrawShapeProps {
                segments: resize(&shape.props.segments, scale_x, scale_y),
                ..shape.props.clone()
            },
        }
    }

    fn hide_resize_handles(&self, shape: &DrawShape) -> bool {
        shape.props.is_dot()
    }

    fn hide_rotate_handle(&self, shape: &DrawShape) -> bool {
        shape.props.is_dot()
    }

    fn hide_selection_bounds_fg(&self, shape: &DrawShape) -> bool {
        shape.props.is_dot()
    }

    /// Sketchy strokes render wider than nominal, so their outline grows more.
    fn expand_selection_outline_px(&self, shape: &DrawShape) -> f64 {
        let multiplier = if shape.props.dash == DashStyle::Draw {
            1.6
        } else {
            1.0
        };
        self.stroke_width(shape) * multiplier / 2.0
    }
}

/// Any shape this crate knows how to handle, tagged by kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Draw(DrawShape),
}

impl Shape {
    pub fn id(&self) -> &str {
        match self {
            Shape::Draw(shape) => &shape.id,
        }
    }
}

/// One util per shape kind; dispatches [`Shape`] variants to them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeUtils {
    pub draw: DrawShapeUtil,
}

impl ShapeUtils {
    pub fn from_config(config: &Config) -> Self {
        Self {
            draw: DrawShapeUtil::new(config.stroke_sizes.clone()),
        }
    }

    pub fn geometry(&self, shape: &Shape) -> Result<ShapeGeometry> {
        match shape {
            Shape::Draw(s) => self.draw.geometry(s),
        }
    }

    pub fn indicator(&self, shape: &Shape, force_solid: bool) -> Result<SvgNode> {
        match shape {
            Shape::Draw(s) => self.draw.indicator(s, force_solid),
        }
    }

    pub fn to_svg(&self, shape: &Shape, theme: &ColorTheme) -> Result<SvgNode> {
        match shape {
            Shape::Draw(s) => self.draw.to_svg(s, theme),
        }
    }

    pub fn on_resize(&self, shape: &Shape, scale_x: f64, scale_y: f64) -> Shape {
        match shape {
            Shape::Draw(s) => Shape::Draw(self.draw.on_resize(s, scale_x, scale_y)),
        }
    }

    pub fn hide_resize_handles(&self, shape: &Shape) -> bool {
        match shape {
            Shape::Draw(s) => self.draw.hide_resize_handles(s),
        }
    }

    pub fn hide_rotate_handle(&self, shape: &Shape) -> bool {
        match shape {
            Shape::Draw(s) => self.draw.hide_rotate_handle(s),
        }
    }

    pub fn hide_selection_bounds_fg(&self, shape: &Shape) -> bool {
        match shape {
            Shape::Draw(s) => self.draw.hide_selection_bounds_fg(s),
        }
    }

    pub fn expand_selection_outline_px(&self, shape: &Shape) -> f64 {
        match shape {
            Shape::Draw(s) => self.draw.expand_selection_outline_px(s),
        }
    }
}

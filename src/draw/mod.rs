//! Freehand draw shapes: data model, geometry, rendering, and resizing.
//!
//! This module defines the drawing types and the operations run on every read:
//! - [`DrawShape`]: a stroke as ordered segments plus style props
//! - [`augment`]: per-point density and corner estimates for the overlay
//! - [`classify`]: hit-test geometry ([`ShapeGeometry`])
//! - [`render`]: indicator, export, and overlay path construction
//! - [`resize`]: independent X/Y scaling of stored points
//! - [`ShapeUtil`]: the per-kind capability set, dispatched through [`Shape`]

pub mod augment;
pub mod color;
pub mod geometry;
pub mod render;
pub mod resize;
pub mod shape;
pub mod util;

// Re-export commonly used types at module level
pub use augment::{AugmentedPoint, augment};
pub use color::{Color, ColorPaint, ColorStyle, ColorTheme};
pub use geometry::{ShapeGeometry, classify};
pub use render::{
    debug_overlay, export_bounds, fill_node, indicator, indicator_path, stroke_width_with_jitter,
    to_svg,
};
pub use resize::{checked_resize, resize};
pub use shape::{
    DashStyle, DrawShape, DrawShapeProps, FillStyle, Point, Segment, SegmentKind, SizeStyle,
};
pub use util::{DrawShapeUtil, Shape, ShapeUtil, ShapeUtils};

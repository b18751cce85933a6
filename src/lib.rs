//! Freehand stroke geometry and vector rendering.
//!
//! Turns raw pointer samples grouped into segments into hit-test geometry and
//! SVG-ready path trees. The [`draw`] module holds the shape model and its
//! operations; [`freehand`] builds variable-width outlines; [`svg`] is the output
//! representation. Configuration is shared with the `drawstroke` binary so that
//! tools built on this crate resolve stroke sizes and themes the same way.

pub mod config;
pub mod draw;
pub mod error;
pub mod freehand;
pub mod geom;
pub mod rng;
pub mod svg;
pub mod util;

pub use config::Config;
pub use error::{DrawError, Result};

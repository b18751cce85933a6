//! Configuration type definitions.

use super::enums::{ColorSpec, ThemeMode};
use crate::draw::shape::SizeStyle;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stroke width for each size class.
///
/// Shapes store only the size class; these widths are what the renderer and the
/// geometry classifier actually use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StrokeSizes {
    /// Small stroke width in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_size_s")]
    pub s: f64,

    /// Medium stroke width in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_size_m")]
    pub m: f64,

    /// Large stroke width in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_size_l")]
    pub l: f64,

    /// Extra-large stroke width in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_size_xl")]
    pub xl: f64,
}

impl StrokeSizes {
    pub fn width(&self, size: SizeStyle) -> f64 {
        match size {
            SizeStyle::S => self.s,
            SizeStyle::M => self.m,
            SizeStyle::L => self.l,
            SizeStyle::Xl => self.xl,
        }
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&'static str, &mut f64)> {
        [
            ("s", &mut self.s),
            ("m", &mut self.m),
            ("l", &mut self.l),
            ("xl", &mut self.xl),
        ]
        .into_iter()
    }
}

impl Default for StrokeSizes {
    fn default() -> Self {
        Self {
            s: default_size_s(),
            m: default_size_m(),
            l: default_size_l(),
            xl: default_size_xl(),
        }
    }
}

/// Theme selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ThemeConfig {
    /// Palette used for stroke and fill paints (light or dark)
    #[serde(default)]
    pub mode: ThemeMode,
}

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RenderConfig {
    /// Always draw the selection indicator at the un-jittered width
    #[serde(default)]
    pub force_solid_indicator: bool,

    /// Margin added around exported SVG documents in pixels (valid range: 0.0 - 256.0)
    #[serde(default = "default_export_padding")]
    pub export_padding: f64,

    /// Optional background fill behind exported documents
    #[serde(default)]
    pub export_background: Option<ColorSpec>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            force_solid_indicator: false,
            export_padding: default_export_padding(),
            export_background: None,
        }
    }
}

/// Point-augmentation overlay styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DebugConfig {
    /// Draw a tick per point showing corner direction and severity
    #[serde(default = "default_show_corner_ticks")]
    pub show_corner_ticks: bool,

    /// Marker radius for a point of zero weight
    #[serde(default = "default_marker_base_radius")]
    pub marker_base_radius: f64,

    /// Extra marker radius per unit of weight
    #[serde(default = "default_marker_weight_scale")]
    pub marker_weight_scale: f64,

    /// Tick length at full corner severity
    #[serde(default = "default_tick_length")]
    pub tick_length: f64,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_corner_ticks: default_show_corner_ticks(),
            marker_base_radius: default_marker_base_radius(),
            marker_weight_scale: default_marker_weight_scale(),
            tick_length: default_tick_length(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_size_s() -> f64 {
    1.0
}

fn default_size_m() -> f64 {
    2.0
}

fn default_size_l() -> f64 {
    3.5
}

fn default_size_xl() -> f64 {
    6.0
}

fn default_export_padding() -> f64 {
    8.0
}

fn default_show_corner_ticks() -> bool {
    true
}

fn default_marker_base_radius() -> f64 {
    3.0
}

fn default_marker_weight_scale() -> f64 {
    7.0
}

fn default_tick_length() -> f64 {
    10.0
}

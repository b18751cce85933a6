//! Configuration enum types.

use crate::draw::color::{Color, ColorStyle, ColorTheme};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which palette the renderer resolves color tokens against.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// Color specification - either a color token name or RGB values.
///
/// # Examples
/// ```toml
/// # Named color token
/// export_background = "light-blue"
///
/// # Custom RGB color (0-255 per component)
/// export_background = [255, 255, 255]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Color token: black, grey, light-violet, violet, blue, light-blue, yellow,
    /// orange, green, light-green, light-red, red
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Resolves the specification against a theme.
    ///
    /// Token names resolve to the theme's solid paint for that token. Unknown names
    /// resolve to `None` with a warning. RGB arrays are converted from 0-255 to
    /// 0.0-1.0 with full opacity.
    pub fn to_color(&self, theme: &ColorTheme) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => match name.parse::<ColorStyle>() {
                Ok(style) => Some(theme.paint(style).solid),
                Err(_) => {
                    warn!("Unknown color '{}', ignoring", name);
                    None
                }
            },
            ColorSpec::Rgb([r, g, b]) => Some(Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_spec_resolves_tokens_and_rgb() {
        let theme = ColorTheme::default_for(false);
        assert_eq!(
            ColorSpec::Name("Blue".into()).to_color(&theme),
            Some(theme.paint(ColorStyle::Blue).solid)
        );
        assert_eq!(
            ColorSpec::Rgb([255, 0, 0]).to_color(&theme),
            Some(Color::new(1.0, 0.0, 0.0, 1.0))
        );
        assert_eq!(ColorSpec::Name("chartreuse".into()).to_color(&theme), None);
    }
}

//! RGBA color type, color tokens, and the default light/dark theme.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use drawstroke::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// assert_eq!(red.to_hex(), "#ff0000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f64 / 255.0,
            g: ((rgb >> 8) & 0xff) as f64 / 255.0,
            b: (rgb & 0xff) as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Formats as `#rrggbb`; alpha is carried separately by SVG opacity attributes.
    pub fn to_hex(&self) -> String {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

/// Named color token stored on a shape; resolved to paint by a [`ColorTheme`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorStyle {
    #[default]
    Black,
    Grey,
    LightViolet,
    Violet,
    Blue,
    LightBlue,
    Yellow,
    Orange,
    Green,
    LightGreen,
    LightRed,
    Red,
}

impl ColorStyle {
    pub const ALL: [ColorStyle; 12] = [
        ColorStyle::Black,
        ColorStyle::Grey,
        ColorStyle::LightViolet,
        ColorStyle::Violet,
        ColorStyle::Blue,
        ColorStyle::LightBlue,
        ColorStyle::Yellow,
        ColorStyle::Orange,
        ColorStyle::Green,
        ColorStyle::LightGreen,
        ColorStyle::LightRed,
        ColorStyle::Red,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorStyle::Black => "black",
            ColorStyle::Grey => "grey",
            ColorStyle::LightViolet => "light-violet",
            ColorStyle::Violet => "violet",
            ColorStyle::Blue => "blue",
            ColorStyle::LightBlue => "light-blue",
            ColorStyle::Yellow => "yellow",
            ColorStyle::Orange => "orange",
            ColorStyle::Green => "green",
            ColorStyle::LightGreen => "light-green",
            ColorStyle::LightRed => "light-red",
            ColorStyle::Red => "red",
        }
    }
}

impl fmt::Display for ColorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorStyle {
    type Err = String;

    /// Case-insensitive; accepts `gray` for `grey`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let lower = if lower == "gray" { "grey".to_string() } else { lower };
        ColorStyle::ALL
            .into_iter()
            .find(|style| style.name() == lower)
            .ok_or_else(|| format!("unknown color '{s}'"))
    }
}

/// Concrete paints for one color token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPaint {
    /// Stroke and solid-fill paint
    pub solid: Color,
    /// Pale tint used behind fills
    pub semi: Color,
}

/// Resolved palette for light or dark mode.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTheme {
    pub is_dark_mode: bool,
    /// Page-level solid paint used by the `semi` fill style
    pub solid: Color,
    pub background: Color,
    paints: [ColorPaint; 12],
}

// (light solid, light semi, dark solid, dark semi), indexed like ColorStyle::ALL
const PALETTE: [(u32, u32, u32, u32); 12] = [
    (0x1d1d1d, 0xe8e8e8, 0xe1e1e1, 0x2c3036),
    (0xadb5bd, 0xeceef0, 0x93989f, 0x333438),
    (0xe599f7, 0xf5eafa, 0xc77cff, 0x383442),
    (0xae3ec9, 0xecdcf2, 0x9e54ff, 0x342938),
    (0x4263eb, 0xdce1f8, 0x4f72fc, 0x262d40),
    (0x4dabf7, 0xddedfa, 0x10acff, 0x2a3642),
    (0xffc078, 0xf9f0e6, 0xffcb47, 0x3d3a2e),
    (0xf76707, 0xf8e2d4, 0xff8a3d, 0x3b2b1e),
    (0x099268, 0xd3e9e3, 0x0ea571, 0x253231),
    (0x40c057, 0xdbf0e0, 0x00a642, 0x2b3b2d),
    (0xff8787, 0xf4dadb, 0xff7f7f, 0x3b3235),
    (0xe03131, 0xf4dadb, 0xf24a4a, 0x4f2024),
];

impl ColorTheme {
    /// The built-in palette for the given mode.
    pub fn default_for(is_dark_mode: bool) -> Self {
        let paints = PALETTE.map(|(ls, lm, ds, dm)| {
            if is_dark_mode {
                ColorPaint {
                    solid: Color::from_rgb(ds),
                    semi: Color::from_rgb(dm),
                }
            } else {
                ColorPaint {
                    solid: Color::from_rgb(ls),
                    semi: Color::from_rgb(lm),
                }
            }
        });

        if is_dark_mode {
            Self {
                is_dark_mode,
                solid: Color::from_rgb(0x28292e),
                background: Color::from_rgb(0x1d1d1d),
                paints,
            }
        } else {
            Self {
                is_dark_mode,
                solid: Color::from_rgb(0xfcfffe),
                background: Color::from_rgb(0xf9fafb),
                paints,
            }
        }
    }

    pub fn paint(&self, style: ColorStyle) -> ColorPaint {
        let index = ColorStyle::ALL
            .iter()
            .position(|s| *s == style)
            .unwrap_or_default();
        self.paints[index]
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::default_for(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_packed_rgb() {
        assert_eq!(Color::from_rgb(0x4263eb).to_hex(), "#4263eb");
        assert_eq!(Color::new(2.0, -1.0, 0.5, 1.0).to_hex(), "#ff0080");
    }

    #[test]
    fn color_names_parse_case_insensitively() {
        assert_eq!("Light-Blue".parse::<ColorStyle>(), Ok(ColorStyle::LightBlue));
        assert_eq!("gray".parse::<ColorStyle>(), Ok(ColorStyle::Grey));
        assert!("chartreuse".parse::<ColorStyle>().is_err());
    }

    #[test]
    fn dark_theme_differs_from_light() {
        let light = ColorTheme::default_for(false);
        let dark = ColorTheme::default_for(true);
        assert_eq!(light.paint(ColorStyle::Black).solid.to_hex(), "#1d1d1d");
        assert_eq!(dark.paint(ColorStyle::Black).solid.to_hex(), "#e1e1e1");
        assert_ne!(light.solid, dark.solid);
    }
}

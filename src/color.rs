//! SolidColor type — the public color representation for floem-ring.
//!
//! Stores RGBA as f64 values in 0.0–1.0 range. [`Hsba`] is the decomposed
//! hue/saturation/brightness/alpha form the ring edits.

use std::str::FromStr;

use floem::peniko::Color;

use crate::error::ColorParseError;
use crate::math;

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawRgba"))]
pub struct SolidColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl SolidColor {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }
}

impl Default for SolidColor {
    fn default() -> Self {
        Self {
            r: 0.5,
            g: 0.5,
            b: 0.5,
            a: 1.0,
        }
    }
}

impl SolidColor {
    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Create from f64 RGBA, each clamped to 0.0–1.0.
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: math::clamp_unit(r),
            g: math::clamp_unit(g),
            b: math::clamp_unit(b),
            a: math::clamp_unit(a),
        }
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 3 and 6-char hex default to full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex.parse().ok()
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Returns 6 chars (RRGGBB) when alpha is 1.0, 8 chars (RRGGBBAA) otherwise.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        if (self.a - 1.0).abs() < 0.001 {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            let a = (self.a * 255.0).round() as u8;
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    /// Create from HSB/HSV values.
    ///
    /// Hue is circular and wraps modulo one turn; the other components are
    /// clamped to 0.0–1.0.
    pub fn from_hsb(h: f64, s: f64, b: f64, a: f64) -> Self {
        Hsba::new(h, s, b, a).to_color()
    }

    /// Convert to HSB (all 0.0–1.0). Returns (h, s, b).
    pub fn to_hsb(&self) -> (f64, f64, f64) {
        math::rgb_to_hsb(self.r, self.g, self.b)
    }

    /// Convert to HSB plus alpha.
    pub fn to_hsba(&self) -> Hsba {
        let (h, s, b) = self.to_hsb();
        Hsba::new(h, s, b, self.a)
    }

    /// The color as the renderer consumes it.
    pub fn to_peniko(&self) -> Color {
        Color::rgba(self.r, self.g, self.b, self.a)
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: math::clamp_unit(a),
            ..self
        }
    }
}

impl FromStr for SolidColor {
    type Err = ColorParseError;

    fn from_str(hex: &str) -> Result<Self, Self::Err> {
        let stripped = hex.trim().trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| -> Result<f64, ColorParseError> {
            u8::from_str_radix(&stripped[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))
        };
        match stripped.len() {
            3 => {
                let short = |i: usize| -> Result<f64, ColorParseError> {
                    u8::from_str_radix(&stripped[i..i + 1], 16)
                        .map(|v| (v * 17) as f64 / 255.0)
                        .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))
                };
                Ok(Self {
                    r: short(0)?,
                    g: short(1)?,
                    b: short(2)?,
                    a: 1.0,
                })
            }
            6 => Ok(Self {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: 1.0,
            }),
            8 => Ok(Self {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            n => Err(ColorParseError::InvalidLength(n)),
        }
    }
}

/// Hue, saturation, brightness, and alpha, each normalized.
///
/// Hue lives in `[0, 1)` as a fraction of a full turn; the rest in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawHsba"))]
pub struct Hsba {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub alpha: f64,
}

impl Hsba {
    /// Build a quadruple, wrapping hue and clamping the rest.
    pub fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self {
            hue: math::wrap_unit(hue),
            saturation: math::clamp_unit(saturation),
            brightness: math::clamp_unit(brightness),
            alpha: math::clamp_unit(alpha),
        }
    }

    pub fn to_color(&self) -> SolidColor {
        let (r, g, b) = math::hsb_to_rgb(self.hue, self.saturation, self.brightness);
        SolidColor::from_rgba(r, g, b, self.alpha)
    }
}

impl Default for Hsba {
    fn default() -> Self {
        Self::new(0.0, 1.0, 1.0, 1.0)
    }
}

impl From<SolidColor> for Hsba {
    fn from(color: SolidColor) -> Self {
        color.to_hsba()
    }
}

impl From<Hsba> for SolidColor {
    fn from(hsba: Hsba) -> Self {
        hsba.to_color()
    }
}

/// Unchecked wire form of [`SolidColor`]; deserialization clamps through
/// [`SolidColor::from_rgba`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRgba {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

#[cfg(feature = "serde")]
impl From<RawRgba> for SolidColor {
    fn from(raw: RawRgba) -> Self {
        SolidColor::from_rgba(raw.r, raw.g, raw.b, raw.a)
    }
}

/// Unchecked wire form of [`Hsba`]; deserialization wraps and clamps
/// through [`Hsba::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHsba {
    hue: f64,
    saturation: f64,
    brightness: f64,
    alpha: f64,
}

#[cfg(feature = "serde")]
impl From<RawHsba> for Hsba {
    fn from(raw: RawHsba) -> Self {
        Hsba::new(raw.hue, raw.saturation, raw.brightness, raw.alpha)
    }
}

//! The [`Color`] value shared by every format.
//!
//! A color stores red, green, blue and alpha as fractions in `0.0..=1.0`.
//! Integer (0–255) accessors round from the stored fractions, and every
//! HSV/HSL accessor is derived from RGB on demand, so the two views never
//! disagree.
//!
//! Keeping the fractions instead of quantizing to bytes means a color produced
//! by parsing `hsl(120, 50%, 40%)` formats back to exactly that literal.
//!
//! # Example
//!
//! ```rust
//! use colorlit::Color;
//!
//! let orange = Color::from_hex("#FF8800").unwrap();
//! assert_eq!(orange.red(), 255);
//! assert_eq!(orange.green(), 136);
//! assert_eq!(orange.alpha(), 255);
//!
//! let translucent = Color::from_hsl(32, 255, 127, 0.5).unwrap();
//! assert!(!translucent.is_opaque());
//! ```

use crate::math;

/// RGBA color with components in the 0.0–1.0 range.
///
/// Constructors return `None` for out-of-range input; a `Color` that exists
/// is always fully valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

fn unit(v: f64) -> Option<f64> {
    (0.0..=1.0).contains(&v).then_some(v)
}

fn to_u8(v: f64) -> u8 {
    (v * 255.0).round() as u8
}

fn hue_degrees(h: f64) -> u16 {
    (h * 360.0).round() as u16 % 360
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Creates an opaque color from 0–255 RGB values.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Creates a color from 0–255 RGB values and an alpha fraction.
    pub fn from_rgba(r: u8, g: u8, b: u8, alpha: f64) -> Option<Self> {
        Self::from_rgb(r, g, b).with_alpha(alpha)
    }

    /// Creates a color from RGBA fractions (all 0.0–1.0).
    pub fn from_rgb_f(r: f64, g: f64, b: f64, alpha: f64) -> Option<Self> {
        Some(Self {
            r: unit(r)?,
            g: unit(g)?,
            b: unit(b)?,
            a: unit(alpha)?,
        })
    }

    /// Creates a color from integer HSV: hue in degrees (0–359), saturation
    /// and value in 0–255.
    pub fn from_hsv(h: u16, s: u8, v: u8, alpha: f64) -> Option<Self> {
        if h > 359 {
            return None;
        }
        Self::from_hsv_f(h as f64 / 360.0, s as f64 / 255.0, v as f64 / 255.0, alpha)
    }

    /// Creates a color from HSV fractions (all 0.0–1.0).
    pub fn from_hsv_f(h: f64, s: f64, v: f64, alpha: f64) -> Option<Self> {
        let (r, g, b) = math::hsv_to_rgb(unit(h)?, unit(s)?, unit(v)?);
        Self::from_rgb_f(r, g, b, alpha)
    }

    /// Creates a color from integer HSL: hue in degrees (0–359), saturation
    /// and lightness in 0–255.
    pub fn from_hsl(h: u16, s: u8, l: u8, alpha: f64) -> Option<Self> {
        if h > 359 {
            return None;
        }
        Self::from_hsl_f(h as f64 / 360.0, s as f64 / 255.0, l as f64 / 255.0, alpha)
    }

    /// Creates a color from HSL fractions (all 0.0–1.0).
    pub fn from_hsl_f(h: f64, s: f64, l: f64, alpha: f64) -> Option<Self> {
        let (r, g, b) = math::hsl_to_rgb(unit(h)?, unit(s)?, unit(l)?);
        Self::from_rgb_f(r, g, b, alpha)
    }

    /// Returns this color with a different alpha fraction.
    pub fn with_alpha(self, alpha: f64) -> Option<Self> {
        Some(Self {
            a: unit(alpha)?,
            ..self
        })
    }

    /// Parses `#RGB`, `#RRGGBB` or `#AARRGGBB` (alpha byte first).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        match digits.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok();
                Some(Self::from_rgb(
                    nibble(0)? * 17,
                    nibble(1)? * 17,
                    nibble(2)? * 17,
                ))
            }
            6 => Some(Self::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Self::from_rgba(byte(2)?, byte(4)?, byte(6)?, byte(0)? as f64 / 255.0),
            _ => None,
        }
    }

    /// Decodes a hex literal or a CSS color keyword (`red`, `rebeccapurple`,
    /// `transparent`, ...). Keywords are case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.starts_with('#') {
            return Self::from_hex(name);
        }
        if name.eq_ignore_ascii_case("transparent") {
            return Some(Self {
                a: 0.0,
                ..Self::BLACK
            });
        }
        let keyword = name.to_ascii_lowercase();
        match cssparser::parse_color_keyword::<cssparser::Color>(&keyword).ok()? {
            cssparser::Color::Rgba(rgba) => Some(Self::from_rgb(rgba.red?, rgba.green?, rgba.blue?)),
            // currentcolor has no value of its own
            _ => None,
        }
    }
}

// ─── RGB accessors ──────────────────────────────────────────────────────────

impl Color {
    /// Red component (0–255).
    pub fn red(&self) -> u8 {
        to_u8(self.r)
    }
    /// Green component (0–255).
    pub fn green(&self) -> u8 {
        to_u8(self.g)
    }
    /// Blue component (0–255).
    pub fn blue(&self) -> u8 {
        to_u8(self.b)
    }
    /// Alpha component (0–255).
    pub fn alpha(&self) -> u8 {
        to_u8(self.a)
    }

    /// Red component (0.0–1.0).
    pub fn red_f(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn green_f(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn blue_f(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn alpha_f(&self) -> f64 {
        self.a
    }

    /// `true` when alpha is exactly 1.0.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

// ─── HSV / HSL accessors ────────────────────────────────────────────────────

impl Color {
    /// HSV as fractions `(h, s, v)`.
    pub fn to_hsv_f(&self) -> (f64, f64, f64) {
        math::rgb_to_hsv(self.r, self.g, self.b)
    }

    /// HSL as fractions `(h, s, l)`.
    pub fn to_hsl_f(&self) -> (f64, f64, f64) {
        math::rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Hue as a fraction of a full turn (0.0–1.0). Shared by HSV and HSL.
    pub fn hue_f(&self) -> f64 {
        self.to_hsv_f().0
    }

    /// Hue in degrees (0–359). Achromatic colors report 0.
    pub fn hue(&self) -> u16 {
        hue_degrees(self.hue_f())
    }

    /// HSV saturation (0.0–1.0).
    pub fn hsv_saturation_f(&self) -> f64 {
        self.to_hsv_f().1
    }

    /// HSV saturation (0–255).
    pub fn hsv_saturation(&self) -> u8 {
        to_u8(self.hsv_saturation_f())
    }

    /// HSV value (0.0–1.0).
    pub fn value_f(&self) -> f64 {
        self.to_hsv_f().2
    }

    /// HSV value (0–255).
    pub fn value(&self) -> u8 {
        to_u8(self.value_f())
    }

    /// HSL saturation (0.0–1.0).
    pub fn hsl_saturation_f(&self) -> f64 {
        self.to_hsl_f().1
    }

    /// HSL saturation (0–255).
    pub fn hsl_saturation(&self) -> u8 {
        to_u8(self.hsl_saturation_f())
    }

    /// HSL lightness (0.0–1.0).
    pub fn lightness_f(&self) -> f64 {
        self.to_hsl_f().2
    }

    /// HSL lightness (0–255).
    pub fn lightness(&self) -> u8 {
        to_u8(self.lightness_f())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

//! Literal parsing: from pattern captures to a [`Color`].
//!
//! Parsing happens in two steps. [`parse_channels`] interprets the numeric
//! captures according to the format's unit conventions and yields
//! [`Channels`]; [`Channels::to_color`] then builds the color. The split keeps
//! the per-format arithmetic observable, e.g. that `hsl(0, 50%, 50%)` carries
//! saturation `127` (`50 * 255 / 100`, truncated).
//!
//! | Format family | Channels | Alpha |
//! |---------------|----------|-------|
//! | `rgb`/`rgba` | integers 0–255 | fraction |
//! | `rgb`/`rgba` percent | `n%` → `n / 100` | fraction |
//! | `hsv`/`hsva` | hue 0–359, s/v 0–255 | integer percent |
//! | `hsl`/`hsla` | hue 0–359, `n%` → `n * 255 / 100` | fraction |
//! | `Qt.rgba`, `vec3`/`vec4` | fractions | fraction |
//! | `Qt.hsla` | fractions, hue included | fraction |
//! | hex | `#RGB`, `#RRGGBB`, `#AARRGGBB` | leading byte |
//!
//! A missing alpha group means fully opaque.

use regex::Captures;

use crate::color::Color;
use crate::error::{ColorError, Result};
use crate::format::Format;

/// Numeric components of a literal, in the units its format uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Channels {
    /// 8-bit RGB.
    Rgb { r: u8, g: u8, b: u8, alpha: f64 },
    /// Fractional RGB.
    RgbF { r: f64, g: f64, b: f64, alpha: f64 },
    /// Hue in degrees, 8-bit saturation and value.
    Hsv { h: u16, s: u8, v: u8, alpha: f64 },
    /// Hue in degrees, 8-bit saturation and lightness.
    Hsl { h: u16, s: u8, l: u8, alpha: f64 },
    /// Fractional HSL, hue included.
    HslF { h: f64, s: f64, l: f64, alpha: f64 },
}

impl Channels {
    /// Builds the color, or `None` if a component is out of range.
    pub fn to_color(&self) -> Option<Color> {
        match *self {
            Channels::Rgb { r, g, b, alpha } => Color::from_rgba(r, g, b, alpha),
            Channels::RgbF { r, g, b, alpha } => Color::from_rgb_f(r, g, b, alpha),
            Channels::Hsv { h, s, v, alpha } => Color::from_hsv(h, s, v, alpha),
            Channels::Hsl { h, s, l, alpha } => Color::from_hsl(h, s, l, alpha),
            Channels::HslF { h, s, l, alpha } => Color::from_hsl_f(h, s, l, alpha),
        }
    }
}

/// Typed access to the numbered groups of one match.
struct Groups<'c, 't> {
    format: Format,
    caps: &'c Captures<'t>,
}

impl Groups<'_, '_> {
    fn literal(&self) -> &str {
        self.caps.get(0).map_or("", |m| m.as_str())
    }

    fn fail(&self, reason: impl Into<String>) -> ColorError {
        ColorError::malformed(self.format, self.literal(), reason)
    }

    fn raw(&self, index: usize) -> Result<&str> {
        self.caps
            .get(index)
            .map(|m| m.as_str().trim_end_matches('%'))
            .ok_or_else(|| self.fail(format!("missing component {}", index)))
    }

    /// Integer component in `0..=max`.
    fn int(&self, index: usize, max: u32) -> Result<u32> {
        let raw = self.raw(index)?;
        let n: u32 = raw
            .parse()
            .map_err(|_| self.fail(format!("'{}' is not an integer", raw)))?;
        if n > max {
            return Err(self.fail(format!("{} out of range (0-{})", n, max)));
        }
        Ok(n)
    }

    fn byte(&self, index: usize) -> Result<u8> {
        Ok(self.int(index, 255)? as u8)
    }

    fn hue(&self, index: usize) -> Result<u16> {
        Ok(self.int(index, 359)? as u16)
    }

    /// Number in `0.0..=max`.
    fn number(&self, index: usize, max: f64) -> Result<f64> {
        let raw = self.raw(index)?;
        let n: f64 = raw
            .parse()
            .map_err(|_| self.fail(format!("'{}' is not a number", raw)))?;
        if !(0.0..=max).contains(&n) {
            return Err(self.fail(format!("{} out of range (0-{})", raw, max)));
        }
        Ok(n)
    }

    fn fraction(&self, index: usize) -> Result<f64> {
        self.number(index, 1.0)
    }

    /// `n%` as a fraction.
    fn percent(&self, index: usize) -> Result<f64> {
        Ok(self.number(index, 100.0)? / 100.0)
    }

    /// Integer `n%` scaled to 0–255 with truncating division.
    fn percent_byte(&self, index: usize) -> Result<u8> {
        Ok((self.int(index, 100)? * 255 / 100) as u8)
    }

    /// Fractional alpha; an absent group means opaque.
    fn alpha(&self, index: usize) -> Result<f64> {
        match self.caps.get(index) {
            Some(_) => self.fraction(index),
            None => Ok(1.0),
        }
    }

    /// Integer percent alpha; an absent group means opaque.
    fn alpha_percent(&self, index: usize) -> Result<f64> {
        match self.caps.get(index) {
            Some(_) => Ok(self.int(index, 100)? as f64 / 100.0),
            None => Ok(1.0),
        }
    }
}

/// Interprets the captures of a `format` match as numeric channels.
pub fn parse_channels(format: Format, caps: &Captures<'_>) -> Result<Channels> {
    let g = Groups { format, caps };
    let channels = match format {
        Format::RgbInt | Format::RgbIntAlpha => Channels::Rgb {
            r: g.byte(1)?,
            g: g.byte(2)?,
            b: g.byte(3)?,
            alpha: g.alpha(4)?,
        },
        Format::RgbPercent | Format::RgbPercentAlpha => Channels::RgbF {
            r: g.percent(1)?,
            g: g.percent(2)?,
            b: g.percent(3)?,
            alpha: g.alpha(4)?,
        },
        Format::Hsv | Format::HsvAlpha => Channels::Hsv {
            h: g.hue(1)?,
            s: g.byte(2)?,
            v: g.byte(3)?,
            alpha: g.alpha_percent(4)?,
        },
        Format::Hsl | Format::HslAlpha => Channels::Hsl {
            h: g.hue(1)?,
            s: g.percent_byte(2)?,
            l: g.percent_byte(3)?,
            alpha: g.alpha(4)?,
        },
        Format::QmlRgba | Format::Vec3 | Format::Vec4 => Channels::RgbF {
            r: g.fraction(1)?,
            g: g.fraction(2)?,
            b: g.fraction(3)?,
            alpha: g.alpha(4)?,
        },
        Format::QmlHsla => Channels::HslF {
            h: g.fraction(1)?,
            s: g.fraction(2)?,
            l: g.fraction(3)?,
            alpha: g.alpha(4)?,
        },
        Format::Hex => {
            let color = Color::from_hex(g.literal())
                .ok_or_else(|| g.fail("not a #RGB, #RRGGBB or #AARRGGBB value"))?;
            Channels::Rgb {
                r: color.red(),
                g: color.green(),
                b: color.blue(),
                alpha: color.alpha_f(),
            }
        }
    };
    Ok(channels)
}

/// Parses the captures of a `format` match into a color.
pub fn parse(format: Format, caps: &Captures<'_>) -> Result<Color> {
    let channels = parse_channels(format, caps)?;
    channels.to_color().ok_or_else(|| {
        let literal = caps.get(0).map_or("", |m| m.as_str());
        ColorError::malformed(format, literal, "component out of range")
    })
}

/// Parses a standalone literal such as `"hsl(120, 50%, 40%)"`.
///
/// The format's pattern must cover the whole text once surrounding whitespace
/// is trimmed.
pub fn parse_literal(format: Format, text: &str) -> Result<Color> {
    let text = text.trim();
    let caps = format
        .pattern()
        .captures(text)
        .filter(|caps| caps.get(0).is_some_and(|m| m.start() == 0 && m.end() == text.len()))
        .ok_or_else(|| ColorError::malformed(format, text, "does not match the format"))?;
    parse(format, &caps)
}

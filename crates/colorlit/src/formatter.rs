//! Literal formatting: from a [`Color`] back to source text.
//!
//! Each format has fixed numeric conventions:
//!
//! - integer channels are plain decimals;
//! - percent channels are `round(fraction * 100)` followed by `%`;
//! - fractional channels use two decimals with one redundant trailing zero
//!   dropped (`0.50` → `0.5`, `1.00` → `1.0`, `0.33` unchanged);
//! - hex is uppercase `#RRGGBB`, or `#AARRGGBB` when the alpha byte is not 255.
//!
//! Paired formats switch to their alpha sibling on their own: an opaque color
//! requested as `rgba` comes out as `rgb(…)` and a translucent one requested
//! as `vec3` comes out as `vec4(…)`. See [`Format::resolve_for`].

use crate::color::Color;
use crate::format::Format;

/// Two-decimal fraction with the trailing zero trimmed.
///
/// `X.00` becomes `X.0` and `X.Y0` becomes `X.Y`; anything else is kept.
pub fn format_fraction(value: f64) -> String {
    let mut s = format!("{:.2}", value);
    if s.ends_with('0') {
        s.pop();
    }
    s
}

fn percent(value: f64) -> String {
    format!("{}%", (value * 100.0).round() as i64)
}

fn join(parts: &[String]) -> String {
    parts.join(", ")
}

/// Renders `color` as a literal of `format`.
///
/// The emitted literal may belong to `format`'s alpha sibling, depending on
/// the color's alpha.
pub fn format_color(color: &Color, format: Format) -> String {
    let target = format.resolve_for(color);
    let alpha = format_fraction(color.alpha_f());

    let mut parts = match target.base() {
        Format::RgbInt => vec![
            color.red().to_string(),
            color.green().to_string(),
            color.blue().to_string(),
        ],
        Format::RgbPercent => vec![
            percent(color.red_f()),
            percent(color.green_f()),
            percent(color.blue_f()),
        ],
        Format::Hsv => vec![
            color.hue().to_string(),
            color.hsv_saturation().to_string(),
            color.value().to_string(),
        ],
        Format::Hsl => vec![
            color.hue().to_string(),
            percent(color.hsl_saturation_f()),
            percent(color.lightness_f()),
        ],
        Format::QmlRgba | Format::Vec3 => vec![
            format_fraction(color.red_f()),
            format_fraction(color.green_f()),
            format_fraction(color.blue_f()),
        ],
        Format::QmlHsla => vec![
            format_fraction(color.hue_f()),
            format_fraction(color.hsl_saturation_f()),
            format_fraction(color.lightness_f()),
        ],
        Format::Hex => return format_hex(color),
        alpha_variant => unreachable!("{} is not a base format", alpha_variant),
    };

    if target.carries_alpha() {
        parts.push(match target {
            Format::HsvAlpha => percent(color.alpha_f()),
            _ => alpha,
        });
    }

    format!("{}({})", prefix(target), join(&parts))
}

fn prefix(format: Format) -> &'static str {
    match format {
        Format::RgbInt | Format::RgbPercent => "rgb",
        Format::RgbIntAlpha | Format::RgbPercentAlpha => "rgba",
        Format::Hsv => "hsv",
        Format::HsvAlpha => "hsva",
        Format::Hsl => "hsl",
        Format::HslAlpha => "hsla",
        Format::QmlRgba => "Qt.rgba",
        Format::QmlHsla => "Qt.hsla",
        Format::Vec3 => "vec3",
        Format::Vec4 => "vec4",
        Format::Hex => "#",
    }
}

fn format_hex(color: &Color) -> String {
    let (r, g, b, a) = (color.red(), color.green(), color.blue(), color.alpha());
    if a == 255 {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", a, r, g, b)
    }
}

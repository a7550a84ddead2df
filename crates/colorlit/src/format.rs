//! The closed set of literal formats and the categories that group them.
//!
//! A [`Format`] is one textual grammar for a color (`rgb(…)`, `hsla(…)`,
//! `Qt.rgba(…)`, `vec4(…)`, `#RRGGBB`, ...). A [`Category`] is the set of
//! formats that make sense in one kind of document:
//!
//! | Category | Formats (priority order) |
//! |----------|--------------------------|
//! | `Css`  | `rgb`/`rgba` (integer, percent), `hsl`/`hsla`, hex |
//! | `Qss`  | `rgb`/`rgba` (integer, percent), `hsv`/`hsva`, hex |
//! | `Qml`  | `Qt.rgba`, `Qt.hsla` |
//! | `Glsl` | `vec3`, `vec4` |
//! | `Any`  | all of the above, in the order of this table |
//!
//! The order is the tie-break used when two literals are equally close to the
//! cursor; it never depends on match length.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ColorError;

/// A textual color grammar.
///
/// [`Format::as_str`] names are used everywhere a format is written out:
/// `Display`, `FromStr` and serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// `rgb(255, 136, 0)`
    #[serde(rename = "rgb")]
    RgbInt,
    /// `rgba(255, 136, 0, 0.5)`
    #[serde(rename = "rgba")]
    RgbIntAlpha,
    /// `rgb(100%, 53%, 0%)`
    #[serde(rename = "rgb-percent")]
    RgbPercent,
    /// `rgba(100%, 53%, 0%, 0.5)`
    #[serde(rename = "rgba-percent")]
    RgbPercentAlpha,
    /// `hsv(32, 255, 255)`
    #[serde(rename = "hsv")]
    Hsv,
    /// `hsva(32, 255, 255, 50%)`
    #[serde(rename = "hsva")]
    HsvAlpha,
    /// `hsl(32, 100%, 50%)`
    #[serde(rename = "hsl")]
    Hsl,
    /// `hsla(32, 100%, 50%, 0.5)`
    #[serde(rename = "hsla")]
    HslAlpha,
    /// `Qt.rgba(1.0, 0.53, 0.0, 1.0)`
    #[serde(rename = "qt-rgba")]
    QmlRgba,
    /// `Qt.hsla(0.09, 1.0, 0.5, 1.0)`
    #[serde(rename = "qt-hsla")]
    QmlHsla,
    /// `vec3(1.0, 0.53, 0.0)`
    #[serde(rename = "vec3")]
    Vec3,
    /// `vec4(1.0, 0.53, 0.0, 0.5)`
    #[serde(rename = "vec4")]
    Vec4,
    /// `#FF8800`, `#80FF8800` or `#f80`
    #[serde(rename = "hex")]
    Hex,
}

/// The kind of document being edited, restricting which formats are looked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Every format.
    #[default]
    Any,
    /// General style sheets.
    Css,
    /// UI-toolkit style sheets (HSV instead of HSL).
    Qss,
    /// Declarative UI documents.
    Qml,
    /// Shader sources.
    Glsl,
}

const ANY_FORMATS: &[Format] = &[
    Format::RgbInt,
    Format::RgbIntAlpha,
    Format::RgbPercent,
    Format::RgbPercentAlpha,
    Format::Hsv,
    Format::HsvAlpha,
    Format::Hsl,
    Format::HslAlpha,
    Format::QmlRgba,
    Format::QmlHsla,
    Format::Vec3,
    Format::Vec4,
    Format::Hex,
];

const CSS_FORMATS: &[Format] = &[
    Format::RgbInt,
    Format::RgbIntAlpha,
    Format::RgbPercent,
    Format::RgbPercentAlpha,
    Format::Hsl,
    Format::HslAlpha,
    Format::Hex,
];

const QSS_FORMATS: &[Format] = &[
    Format::RgbInt,
    Format::RgbIntAlpha,
    Format::RgbPercent,
    Format::RgbPercentAlpha,
    Format::Hsv,
    Format::HsvAlpha,
    Format::Hex,
];

const QML_FORMATS: &[Format] = &[Format::QmlRgba, Format::QmlHsla];

const GLSL_FORMATS: &[Format] = &[Format::Vec3, Format::Vec4];

/// Returns the formats of `category` in priority order.
pub fn formats_for_category(category: Category) -> &'static [Format] {
    match category {
        Category::Any => ANY_FORMATS,
        Category::Css => CSS_FORMATS,
        Category::Qss => QSS_FORMATS,
        Category::Qml => QML_FORMATS,
        Category::Glsl => GLSL_FORMATS,
    }
}

impl Category {
    /// All categories, `Any` first.
    pub const ALL: [Category; 5] = [
        Category::Any,
        Category::Css,
        Category::Qss,
        Category::Qml,
        Category::Glsl,
    ];

    /// Formats of this category in priority order.
    pub fn formats(self) -> &'static [Format] {
        formats_for_category(self)
    }

    /// `true` if `format` is looked for in documents of this category.
    pub fn contains(self, format: Format) -> bool {
        self.formats().contains(&format)
    }

    /// Priority rank of `format` within this category (lower wins).
    pub fn rank(self, format: Format) -> Option<usize> {
        self.formats().iter().position(|f| *f == format)
    }

    /// Lowercase name, as accepted by `FromStr` and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Any => "any",
            Category::Css => "css",
            Category::Qss => "qss",
            Category::Qml => "qml",
            Category::Glsl => "glsl",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ColorError::UnknownCategory(name.to_string()))
    }
}

// ─── Patterns ───────────────────────────────────────────────────────────────

const SEP: &str = r"\s*,\s*";
const INT: &str = r"([0-9]{1,3})";
const FLOAT: &str = r"([0-9]+(?:\.[0-9]*)?|\.[0-9]+)";
const PERCENT: &str = r"([0-9]{1,3}(?:\.[0-9]+)?)%";
const INT_PERCENT: &str = r"([0-9]{1,3})%";

/// Builds `prefix(\s* a , b , c \s*)` from the per-argument capture patterns.
fn call(prefix: &str, args: &[&str]) -> String {
    format!(r"{}\(\s*{}\s*\)", regex::escape(prefix), args.join(SEP))
}

fn source(format: Format) -> String {
    match format {
        Format::RgbInt => call("rgb", &[INT, INT, INT]),
        Format::RgbIntAlpha => call("rgba", &[INT, INT, INT, FLOAT]),
        Format::RgbPercent => call("rgb", &[PERCENT, PERCENT, PERCENT]),
        Format::RgbPercentAlpha => call("rgba", &[PERCENT, PERCENT, PERCENT, FLOAT]),
        Format::Hsv => call("hsv", &[INT, INT, INT]),
        Format::HsvAlpha => call("hsva", &[INT, INT, INT, INT_PERCENT]),
        Format::Hsl => call("hsl", &[INT, INT_PERCENT, INT_PERCENT]),
        Format::HslAlpha => call("hsla", &[INT, INT_PERCENT, INT_PERCENT, FLOAT]),
        Format::QmlRgba => call("Qt.rgba", &[FLOAT, FLOAT, FLOAT, FLOAT]),
        Format::QmlHsla => call("Qt.hsla", &[FLOAT, FLOAT, FLOAT, FLOAT]),
        Format::Vec3 => call("vec3", &[FLOAT, FLOAT, FLOAT]),
        Format::Vec4 => call("vec4", &[FLOAT, FLOAT, FLOAT, FLOAT]),
        // Longest alternative first; the trailing \b rejects #ffff and friends.
        Format::Hex => r"#(?:[0-9a-fA-F]{8}|[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b".to_string(),
    }
}

static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    ANY_FORMATS
        .iter()
        .map(|f| Regex::new(&source(*f)).expect("built-in color pattern must compile"))
        .collect()
});

impl Format {
    /// Every format, in `Any` priority order.
    pub const ALL: &'static [Format] = ANY_FORMATS;

    /// The compiled recognition pattern.
    ///
    /// Capture groups hold the numeric components in literal order, alpha
    /// last for formats that carry one. The hex pattern has no groups.
    pub fn pattern(self) -> &'static Regex {
        let index = self as usize;
        &PATTERNS[index]
    }

    /// `true` for the alpha-bearing sibling of a format pair.
    pub fn is_alpha_variant(self) -> bool {
        matches!(
            self,
            Format::RgbIntAlpha
                | Format::RgbPercentAlpha
                | Format::HsvAlpha
                | Format::HslAlpha
                | Format::Vec4
        )
    }

    /// The sibling without an alpha slot. Formats without a sibling map to
    /// themselves.
    pub fn base(self) -> Format {
        match self {
            Format::RgbIntAlpha => Format::RgbInt,
            Format::RgbPercentAlpha => Format::RgbPercent,
            Format::HsvAlpha => Format::Hsv,
            Format::HslAlpha => Format::Hsl,
            Format::Vec4 => Format::Vec3,
            other => other,
        }
    }

    /// The sibling with an alpha slot; inverse of [`base`](Format::base).
    pub fn alpha_variant(self) -> Format {
        match self {
            Format::RgbInt => Format::RgbIntAlpha,
            Format::RgbPercent => Format::RgbPercentAlpha,
            Format::Hsv => Format::HsvAlpha,
            Format::Hsl => Format::HslAlpha,
            Format::Vec3 => Format::Vec4,
            other => other,
        }
    }

    /// `true` if a literal in this format can express transparency.
    pub fn carries_alpha(self) -> bool {
        self.is_alpha_variant() || matches!(self, Format::QmlRgba | Format::QmlHsla | Format::Hex)
    }

    /// The sibling the formatter emits for `color`: the alpha variant when
    /// the color is translucent at this format's precision, the base otherwise.
    pub fn resolve_for(self, color: &Color) -> Format {
        let translucent = match self.base() {
            // HSV alpha is written as an integer percent.
            Format::Hsv => (color.alpha_f() * 100.0).round() < 100.0,
            _ => !color.is_opaque(),
        };
        if translucent {
            self.alpha_variant()
        } else {
            self.base()
        }
    }

    /// Classifies a standalone literal by trying the formats of `category`
    /// in priority order. The pattern must span the whole trimmed text.
    pub fn detect(literal: &str, category: Category) -> Option<Format> {
        let literal = literal.trim();
        category.formats().iter().copied().find(|f| {
            f.pattern()
                .find(literal)
                .is_some_and(|m| m.start() == 0 && m.end() == literal.len())
        })
    }

    /// Short name used by `Display`, `FromStr` and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::RgbInt => "rgb",
            Format::RgbIntAlpha => "rgba",
            Format::RgbPercent => "rgb-percent",
            Format::RgbPercentAlpha => "rgba-percent",
            Format::Hsv => "hsv",
            Format::HsvAlpha => "hsva",
            Format::Hsl => "hsl",
            Format::HslAlpha => "hsla",
            Format::QmlRgba => "qt-rgba",
            Format::QmlHsla => "qt-hsla",
            Format::Vec3 => "vec3",
            Format::Vec4 => "vec4",
            Format::Hex => "hex",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Format {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Format::ALL
            .iter()
            .copied()
            .find(|f| f.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ColorError::UnknownFormat(name.to_string()))
    }
}

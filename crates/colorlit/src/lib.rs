//! Colorlit - locate, parse and re-serialize color literals in source text.
//!
//! Colorlit recognizes color literals written in style sheets, declarative UI
//! documents and shaders, parses the one under the cursor into a [`Color`],
//! and renders an edited color back into any supported syntax.
//!
//! # Quick Start
//!
//! ```rust
//! use colorlit::{format_color, locate, Category, Format};
//!
//! let doc = "QPushButton { color: rgb(255, 136, 0); }";
//!
//! // Find the literal nearest to the cursor
//! let found = locate(doc, Category::Qss, 22).unwrap();
//! assert_eq!(found.format, Format::RgbInt);
//! assert_eq!(found.color.green(), 136);
//!
//! // Edit it and render it back, here in another syntax
//! let edited = found.color.with_alpha(0.5).unwrap();
//! assert_eq!(format_color(&edited, Format::Hex), "#80FF8800");
//! assert_eq!(found.rewrite(&edited), "rgba(255, 136, 0, 0.5)");
//! ```
//!
//! # Formats and Categories
//!
//! | Category | Formats |
//! |----------|---------|
//! | `Css`  | `rgb(1, 2, 3)`, `rgba(1, 2, 3, 0.5)`, `rgb(10%, 20%, 30%)`, `hsl(120, 50%, 50%)`, `#RRGGBB` |
//! | `Qss`  | the `rgb` family, `hsv(120, 255, 255)`, `hsva(120, 255, 255, 50%)`, `#RRGGBB` |
//! | `Qml`  | `Qt.rgba(1.0, 0.5, 0.0, 1.0)`, `Qt.hsla(0.33, 1.0, 0.5, 1.0)` |
//! | `Glsl` | `vec3(1.0, 0.5, 0.0)`, `vec4(1.0, 0.5, 0.0, 0.5)` |
//! | `Any`  | everything |
//!
//! Paired formats pick their alpha sibling from the color: translucent colors
//! come out as `rgba(…)`, `hsla(…)`, `hsva(…)` or `vec4(…)`, opaque ones
//! without the alpha slot.
//!
//! # Errors
//!
//! Nothing found is `None`, not an error. [`ColorError::MalformedLiteral`]
//! reports a literal that matched a pattern but holds out-of-range values;
//! [`locate`] logs and skips those.

mod color;
mod error;
mod format;
mod formatter;
mod locate;
mod math;
mod parse;
mod settings;

// Re-export public API
pub use color::Color;
pub use error::{ColorError, Result};
pub use format::{formats_for_category, Category, Format};
pub use formatter::{format_color, format_fraction};
pub use locate::{locate, ColorWatcher, LiteralMatch, Span};
pub use parse::{parse, parse_channels, parse_literal, Channels};
pub use settings::Settings;

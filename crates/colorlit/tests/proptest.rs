//! Property-based tests for colorlit using proptest.

use colorlit::{format_color, locate, parse_literal, Category, Color, Format};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

const TOLERANCE: f64 = 1e-6;

fn same_color(a: &Color, b: &Color) -> bool {
    (a.red_f() - b.red_f()).abs() < TOLERANCE
        && (a.green_f() - b.green_f()).abs() < TOLERANCE
        && (a.blue_f() - b.blue_f()).abs() < TOLERANCE
        && (a.alpha_f() - b.alpha_f()).abs() < TOLERANCE
}

/// Parses `literal`, formats the color back in `format` and re-parses the
/// output with the format the formatter actually emitted.
fn check_round_trip(format: Format, literal: &str) -> Result<(), TestCaseError> {
    let color = parse_literal(format, literal)
        .map_err(|e| TestCaseError::fail(format!("{}: {}", literal, e)))?;
    let rendered = format_color(&color, format);
    let emitted = format.resolve_for(&color);
    let back = parse_literal(emitted, &rendered)
        .map_err(|e| TestCaseError::fail(format!("{} -> {}: {}", literal, rendered, e)))?;
    prop_assert!(
        same_color(&color, &back),
        "{} -> {} changed the color: {:?} vs {:?}",
        literal,
        rendered,
        color,
        back
    );
    Ok(())
}

/// Two-decimal fraction literal in `0.00..=1.00`.
fn fraction() -> impl Strategy<Value = String> {
    (0u32..=100).prop_map(|n| format!("{}.{:02}", n / 100, n % 100))
}

fn byte() -> impl Strategy<Value = u8> {
    any::<u8>()
}

fn percent() -> impl Strategy<Value = u32> {
    0u32..=100
}

fn hue() -> impl Strategy<Value = u32> {
    0u32..360
}

// ============================================================================
// Round trips, one property per format
// ============================================================================

proptest! {
    #[test]
    fn rgb_int_round_trip(r in byte(), g in byte(), b in byte()) {
        check_round_trip(Format::RgbInt, &format!("rgb({}, {}, {})", r, g, b))?;
    }

    #[test]
    fn rgb_int_alpha_round_trip(r in byte(), g in byte(), b in byte(), a in fraction()) {
        check_round_trip(Format::RgbIntAlpha, &format!("rgba({}, {}, {}, {})", r, g, b, a))?;
    }

    #[test]
    fn rgb_percent_round_trip(r in percent(), g in percent(), b in percent()) {
        check_round_trip(Format::RgbPercent, &format!("rgb({}%, {}%, {}%)", r, g, b))?;
    }

    #[test]
    fn rgb_percent_alpha_round_trip(
        r in percent(), g in percent(), b in percent(), a in fraction(),
    ) {
        check_round_trip(
            Format::RgbPercentAlpha,
            &format!("rgba({}%, {}%, {}%, {})", r, g, b, a),
        )?;
    }

    #[test]
    fn hsv_round_trip(h in hue(), s in byte(), v in byte()) {
        check_round_trip(Format::Hsv, &format!("hsv({}, {}, {})", h, s, v))?;
    }

    #[test]
    fn hsv_alpha_round_trip(h in hue(), s in byte(), v in byte(), a in percent()) {
        check_round_trip(Format::HsvAlpha, &format!("hsva({}, {}, {}, {}%)", h, s, v, a))?;
    }

    #[test]
    fn hsl_round_trip(h in hue(), s in percent(), l in percent()) {
        check_round_trip(Format::Hsl, &format!("hsl({}, {}%, {}%)", h, s, l))?;
    }

    #[test]
    fn hsl_alpha_round_trip(h in hue(), s in percent(), l in percent(), a in fraction()) {
        check_round_trip(Format::HslAlpha, &format!("hsla({}, {}%, {}%, {})", h, s, l, a))?;
    }

    #[test]
    fn qml_rgba_round_trip(r in fraction(), g in fraction(), b in fraction(), a in fraction()) {
        check_round_trip(Format::QmlRgba, &format!("Qt.rgba({}, {}, {}, {})", r, g, b, a))?;
    }

    #[test]
    fn qml_hsla_round_trip(h in fraction(), s in fraction(), l in fraction(), a in fraction()) {
        check_round_trip(Format::QmlHsla, &format!("Qt.hsla({}, {}, {}, {})", h, s, l, a))?;
    }

    #[test]
    fn vec3_round_trip(r in fraction(), g in fraction(), b in fraction()) {
        check_round_trip(Format::Vec3, &format!("vec3({}, {}, {})", r, g, b))?;
    }

    #[test]
    fn vec4_round_trip(r in fraction(), g in fraction(), b in fraction(), a in fraction()) {
        check_round_trip(Format::Vec4, &format!("vec4({}, {}, {}, {})", r, g, b, a))?;
    }

    #[test]
    fn hex_round_trip(r in byte(), g in byte(), b in byte()) {
        check_round_trip(Format::Hex, &format!("#{:02x}{:02X}{:02x}", r, g, b))?;
    }

    #[test]
    fn hex_alpha_round_trip(a in byte(), r in byte(), g in byte(), b in byte()) {
        check_round_trip(Format::Hex, &format!("#{:02X}{:02X}{:02X}{:02X}", a, r, g, b))?;
    }

    /// RGB integer and hex formats are lossless for any 8-bit color.
    #[test]
    fn byte_formats_are_exact(r in byte(), g in byte(), b in byte()) {
        let color = Color::from_rgb(r, g, b);
        for format in [Format::RgbInt, Format::Hex] {
            let back = parse_literal(format, &format_color(&color, format)).unwrap();
            prop_assert_eq!(back, color);
        }
    }
}

// ============================================================================
// Locator properties
// ============================================================================

fn piece() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "rgb(1, 2, 3)",
        "rgba(10, 20, 30, 0.5)",
        "rgb(10%, 20%, 30%)",
        "hsv(120, 255, 128)",
        "hsla(200, 50%, 50%, 0.25)",
        "Qt.rgba(1.0, 0.5, 0.0, 1.0)",
        "Qt.hsla(0.5, 1.0, 0.5, 1.0)",
        "vec3(1.0, 0.5, 0.0)",
        "vec4(0.1, 0.2, 0.3, 0.4)",
        "#FF8800",
        "#abc",
        "rgb(300, 0, 0)",
        "color:",
        "{",
        "}",
        ";",
        "ivec3(1, 2, 3)",
        "été",
        "text",
    ])
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(piece(), 0..12).prop_map(|pieces| pieces.join(" "))
}

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

proptest! {
    /// Repeated calls return the same answer.
    #[test]
    fn locate_is_deterministic(doc in document(), cat in category(), cursor in 0usize..200) {
        prop_assert_eq!(locate(&doc, cat, cursor), locate(&doc, cat, cursor));
    }

    /// Formats outside the category are never returned.
    #[test]
    fn locate_respects_category(doc in document(), cat in category(), cursor in 0usize..200) {
        if let Some(found) = locate(&doc, cat, cursor) {
            prop_assert!(cat.contains(found.format));
        }
    }

    /// The reported span, byte range and text describe the same literal.
    #[test]
    fn locate_span_matches_text(doc in document(), cursor in 0usize..200) {
        if let Some(found) = locate(&doc, Category::Any, cursor) {
            let by_chars: String = doc.chars().skip(found.span.start).take(found.span.len).collect();
            prop_assert_eq!(&by_chars, &found.text);
            prop_assert_eq!(&doc[found.byte_range.clone()], found.text.as_str());
            prop_assert_eq!(parse_literal(found.format, &found.text).unwrap(), found.color);
        }
    }

    /// A literal containing the cursor is always preferred.
    #[test]
    fn literal_under_cursor_is_found(prefix in document(), suffix in document(), offset in 0usize..12) {
        let doc = format!("{} ; rgb(7, 8, 9) ; {}", prefix, suffix);
        let start = prefix.chars().count() + 3;
        let found = locate(&doc, Category::Css, start + offset).unwrap();
        prop_assert_eq!(found.span.start, start);
        prop_assert_eq!(found.text, "rgb(7, 8, 9)");
    }
}

//! Color-space conversions between RGB, HSV and HSL.
//!
//! Every function works on normalized `f64` values in `0.0..=1.0`, hue
//! included (one full turn is `1.0`). Achromatic colors get hue `0.0`.

/// Hue of an RGB triple given its maximum and chroma, as a fraction of a turn.
fn hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    let h = sector / 6.0;
    // rem_euclid may round up to the modulus itself
    if h >= 1.0 {
        0.0
    } else {
        h
    }
}

/// Builds RGB from a hue, chroma and the amount added to every channel.
fn from_chroma(h: f64, chroma: f64, m: f64) -> (f64, f64, f64) {
    let h6 = (h * 6.0).rem_euclid(6.0);
    let x = chroma * (1.0 - ((h6 % 2.0) - 1.0).abs());
    let (r, g, b) = match h6.floor() as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    (clamp_unit(r + m), clamp_unit(g + m), clamp_unit(b + m))
}

fn clamp_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// RGB → HSV. Returns `(h, s, v)`.
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let s = if max == 0.0 { 0.0 } else { delta / max };
    (hue(r, g, b, max, delta), s, max)
}

/// HSV → RGB.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let chroma = v * s;
    from_chroma(h, chroma, v - chroma)
}

/// RGB → HSL. Returns `(h, s, l)`.
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        (delta / (1.0 - (2.0 * l - 1.0).abs())).min(1.0)
    };
    (hue(r, g, b, max, delta), s, l)
}

/// HSL → RGB.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    from_chroma(h, chroma, l - chroma / 2.0)
}

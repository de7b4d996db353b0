//! Hue/saturation/value conversion and color interpolation.
//!
//! Hue is interpolated channel-wise like saturation and value, so it never
//! wraps around the color wheel: halfway between 350° and 10° is 180°, not 0°.

use crate::draw::model::Color;

/// `h` in degrees `[0, 360)`, `s` and `v` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

pub fn color_to_hsv(color: Color) -> Hsv {
    let (r, g, b) = (color.r as i32, color.g as i32, color.b as i32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = max as f32 / 255.0;
    let delta = max - min;
    if delta == 0 {
        return Hsv { h: 0.0, s: 0.0, v };
    }

    let s = delta as f32 / max as f32;
    let delta = delta as f32;
    let sector = if r == max {
        (g - b) as f32 / delta
    } else if g == max {
        2.0 + (b - r) as f32 / delta
    } else {
        4.0 + (r - g) as f32 / delta
    };
    let mut h = sector * 60.0;
    if h < 0.0 {
        h += 360.0;
    }
    Hsv { h, s, v }
}

/// Converts back to a fully opaque color.
pub fn hsv_to_color(hsv: Hsv) -> Color {
    let s = hsv.s.clamp(0.0, 1.0);
    let v = hsv.v.clamp(0.0, 1.0);
    let to_byte = |x: f32| (x * 255.0).round().clamp(0.0, 255.0) as u8;

    if s <= 0.0 {
        let gray = to_byte(v);
        return Color::rgba(gray, gray, gray, 255);
    }

    let hx = if hsv.h < 0.0 || hsv.h >= 360.0 {
        0.0
    } else {
        hsv.h / 60.0
    };
    let sector = hx.floor();
    let f = hx - sector;
    let p = to_byte((1.0 - s) * v);
    let q = to_byte((1.0 - s * f) * v);
    let t = to_byte((1.0 - s * (1.0 - f)) * v);
    let v = to_byte(v);

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Color::rgba(r, g, b, 255)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn interpolate(a: Color, b: Color, t: f32) -> Color {
    let from = color_to_hsv(a);
    let to = color_to_hsv(b);
    hsv_to_color(Hsv {
        h: lerp(from.h, to.h, t),
        s: lerp(from.s, to.s, t),
        v: lerp(from.v, to.v, t),
    })
}

/// Halfway blend of two colors in HSV space.
pub fn merge(a: Color, b: Color) -> Color {
    // Fixed operand order keeps float rounding identical for (a, b) and (b, a).
    if a.to_argb() <= b.to_argb() {
        interpolate(a, b, 0.5)
    } else {
        interpolate(b, a, 0.5)
    }
}

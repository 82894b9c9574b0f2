//! Floating point HSV to GRB conversion
//!
//! Hue is in degrees, saturation and value in 0.0-1.0. Channels are scaled
//! to 8 bits by truncation, so a component of 0.999999 lands on 254.

use super::GrbWord;

/// Convert an HSV triple into a packed GRB word
///
/// Saturation of exactly `0.0` yields gray at `value`. A hue of exactly 360
/// wraps to 0. Any other hue outside `[0, 360)`, negative hues included,
/// lands in the magenta-to-red sector instead of being rejected, which also
/// absorbs rounding just below the wrap point.
///
/// Inputs are not clamped. Components that scale below zero saturate to 0.
pub fn hsv_to_grb(hue: f32, saturation: f32, value: f32) -> GrbWord {
    let (r, g, b) = hsv_components(hue, saturation, value);
    GrbWord::new(scale_channel(r), scale_channel(g), scale_channel(b))
}

#[allow(clippy::cast_possible_truncation)]
fn hsv_components(hue: f32, s: f32, v: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (v, v, v);
    }

    let hue = if hue == 360.0 { 0.0 } else { hue };
    let h = hue / 60.0;
    let sector = libm::floorf(h);
    let f = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as i32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Scale a 0.0-1.0 component to 8 bits, truncating toward zero
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale_channel(component: f32) -> u8 {
    (component * 255.0) as u8
}

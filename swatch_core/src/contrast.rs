//! Picks black or white label text for a swatch so it stays legible on
//! whatever the swatch actually looks like once composited.

use crate::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    Light,
    Dark,
}

/// `(L + 0.05)^2` above this is light (L ~ 0.3373).
pub const BRIGHTNESS_THRESHOLD: f64 = 0.15;

/// Composite `foreground` over `background`. The background is treated as
/// opaque and the result is always opaque.
pub fn alpha_blend(foreground: Color, background: Color) -> Color {
    let alpha = u32::from(foreground.a);
    if alpha == 0 {
        return background.opaque();
    }
    if alpha == 255 {
        return foreground;
    }

    let inv = 255 - alpha;
    let mix = |f: u8, b: u8| -> u8 {
        // Both terms sum to at most 255 * 255, so the quotient fits a u8.
        ((alpha * u32::from(f) + inv * u32::from(b)) / 255) as u8
    };

    Color::rgb(
        mix(foreground.r, background.r),
        mix(foreground.g, background.g),
        mix(foreground.b, background.b),
    )
}

/// Relative luminance of the opaque RGB channels, 0.0 (black) to 1.0 (white).
pub fn relative_luminance(color: Color) -> f64 {
    fn linearize(c: u8) -> f64 {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

pub fn estimate_brightness(color: Color) -> Brightness {
    let l = relative_luminance(color);
    if (l + 0.05) * (l + 0.05) > BRIGHTNESS_THRESHOLD {
        Brightness::Light
    } else {
        Brightness::Dark
    }
}

/// Black text for light swatches, white text for dark ones, judged on the
/// blended result of `foreground` over `background`.
pub fn resolve_text_color(foreground: Color, background: Color) -> Color {
    match estimate_brightness(alpha_blend(foreground, background)) {
        Brightness::Light => Color::BLACK,
        Brightness::Dark => Color::WHITE,
    }
}

/// WCAG contrast ratio, 1.0 ..= 21.0. Alpha is ignored.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

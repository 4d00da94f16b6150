//schedview/src/color_utils.rs

// Utilities for generating deterministic colors from event titles.
// It intentionally has NO dependencies on ratatui so it can be used from
// non-TUI code (layout, tests, etc).

use std::fmt;

/// Saturation used for every event color, in percent.
pub const EVENT_SATURATION: u8 = 70;
/// Lightness used for every event color, in percent.
pub const EVENT_LIGHTNESS: u8 = 45;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    /// Hue in degrees, 0..360
    pub hue: u16,
    /// Percent, 0..=100
    pub saturation: u8,
    /// Percent, 0..=100
    pub lightness: u8,
}

impl Hsl {
    pub fn to_rgb(self) -> (f32, f32, f32) {
        hsl_to_rgb(
            self.hue as f32,
            self.saturation as f32 / 100.0,
            self.lightness as f32 / 100.0,
        )
    }

    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_rgb();
        (
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }
}

/// CSS color level 4 notation, e.g. `hsl(34 70% 45%)`.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({} {}% {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Sum of the first UTF-16 code unit of every character, modulo 360.
///
/// Characters outside the BMP contribute their high surrogate, which keeps the
/// hue identical to the one a browser computes with `charCodeAt(0)`.
pub fn title_hue(title: &str) -> u16 {
    let mut buf = [0u16; 2];
    let sum: u64 = title
        .chars()
        .map(|ch| ch.encode_utf16(&mut buf)[0] as u64)
        .sum();
    (sum % 360) as u16
}

/// Same title, same color, across runs and sessions.
pub fn title_color(title: &str) -> Hsl {
    Hsl {
        hue: title_hue(title),
        saturation: EVENT_SATURATION,
        lightness: EVENT_LIGHTNESS,
    }
}

/// Helper: HSL to RGB conversion
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r1 + m, g1 + m, b1 + m)
}

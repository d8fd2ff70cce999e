//! Color-space tests for terrain classification.
//!
//! Two primitives: a per-channel RGB brightness threshold (bright sand is
//! navigable ground) and an HSV band test (target samples have a
//! distinctive yellow-green hue). All HSV channels use the 0–255 scale.

use serde::{Deserialize, Serialize};

use super::frame::RgbFrame;
use super::mask::Mask;

/// An inclusive HSV band, all channels on the 0–255 scale.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct HsvBand {
    /// Minimum hue.
    pub h_min: u8,
    /// Maximum hue.
    pub h_max: u8,
    /// Minimum saturation.
    pub s_min: u8,
    /// Maximum saturation.
    pub s_max: u8,
    /// Minimum value (brightness).
    pub v_min: u8,
    /// Maximum value.
    pub v_max: u8,
}

impl HsvBand {
    /// Whether an HSV triple falls inside the band.
    #[inline]
    pub fn contains(&self, h: u8, s: u8, v: u8) -> bool {
        h >= self.h_min
            && h <= self.h_max
            && s >= self.s_min
            && s <= self.s_max
            && v >= self.v_min
            && v <= self.v_max
    }
}

/// Convert an RGB triple to HSV, all channels scaled to 0–255.
///
/// Hue covers the full color circle in 0–255 (so 60° of hue is ~42.5
/// counts). Gray pixels (zero chroma) report hue 0.
pub fn rgb_to_hsv(rgb: [u8; 3]) -> (u8, u8, u8) {
    let r = rgb[0] as f32 / 255.0;
    let g = rgb[1] as f32 / 255.0;
    let b = rgb[2] as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let hue_deg = if chroma <= f32::EPSILON {
        0.0
    } else if max == r {
        60.0 * (((g - b) / chroma).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / chroma + 2.0)
    } else {
        60.0 * ((r - g) / chroma + 4.0)
    };

    let saturation = if max <= f32::EPSILON {
        0.0
    } else {
        chroma / max
    };

    let h = (hue_deg / 360.0 * 255.0).round().clamp(0.0, 255.0) as u8;
    let s = (saturation * 255.0).round().clamp(0.0, 255.0) as u8;
    let v = (max * 255.0).round().clamp(0.0, 255.0) as u8;
    (h, s, v)
}

/// Mark pixels whose three channels all exceed the per-channel
/// thresholds (strictly greater).
pub fn threshold_rgb(frame: &RgbFrame, thresh: [u8; 3]) -> Mask {
    let mut mask = Mask::new(frame.width(), frame.height());
    for row in 0..frame.height() {
        for col in 0..frame.width() {
            let [r, g, b] = frame.get(col, row);
            mask.set(
                col,
                row,
                r > thresh[0] && g > thresh[1] && b > thresh[2],
            );
        }
    }
    mask
}

/// Mark pixels whose HSV value falls inside the band.
pub fn threshold_hsv(frame: &RgbFrame, band: &HsvBand) -> Mask {
    let mut mask = Mask::new(frame.width(), frame.height());
    for row in 0..frame.height() {
        for col in 0..frame.width() {
            let (h, s, v) = rgb_to_hsv(frame.get(col, row));
            mask.set(col, row, band.contains(h, s, v));
        }
    }
    mask
}

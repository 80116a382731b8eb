// THEORY:
// HSV is the working color space of the classifier because hue is far more
// lighting-invariant than raw RGB: a sticker under a dim bulb and the same
// sticker in daylight land on nearly the same hue, while their RGB values
// diverge wildly. The scales here are the OpenCV byte scales (hue 0-180,
// i.e. degrees halved; saturation and value 0-255) because the threshold
// table is expressed on them — converting the table to another scale would
// invite off-by-one drift right at the red wraparound seam.

use crate::core_modules::pixel::pixel::Pixel;
use serde::{Deserialize, Serialize};

/// An HSV triple on the OpenCV byte scales: hue 0-180, saturation and
/// value 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue in half-degrees (0-180). The hue axis is cyclic: 0 and 180 are
    /// both red.
    pub hue: u8,
    /// Saturation (0-255). Zero is gray/white, 255 is fully saturated.
    pub saturation: u8,
    /// Value, i.e. brightness (0-255). Zero is black regardless of hue.
    pub value: u8,
}

impl Hsv {
    pub const fn new(hue: u8, saturation: u8, value: u8) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

impl From<Pixel> for Hsv {
    /// Standard max/min/delta RGB-to-HSV conversion. Alpha is ignored; the
    /// camera never hands us anything translucent.
    fn from(pixel: Pixel) -> Self {
        let r = pixel.red as f32 / 255.0;
        let g = pixel.green as f32 / 255.0;
        let b = pixel.blue as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue_degrees = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };
        let hue_degrees = if hue_degrees < 0.0 {
            hue_degrees + 360.0
        } else {
            hue_degrees
        };

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        Self {
            hue: (hue_degrees / 2.0).round() as u8,
            saturation: (saturation * 255.0).round() as u8,
            value: (max * 255.0).round() as u8,
        }
    }
}

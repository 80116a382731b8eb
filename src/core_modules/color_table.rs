// THEORY:
// The `ColorTable` is the classification layer: an ordered list of named HSV
// bounding boxes, matched first-to-last against a single averaged sample.
// Order is part of the contract — where boxes overlap (white's low-saturation
// band brushes against every hue), the earlier entry wins, so the table
// doubles as a priority list.
//
// Red is the one structural oddity: it straddles the cyclic hue axis, so it
// owns two boxes (one near hue 0, one near hue 180) that both resolve to the
// same label. A sample that matches no box at all classifies as `Unknown`;
// there is no failure mode.
//
// The default thresholds are the empirically tuned values of the original
// capture rig. They are lighting-sensitive, which is exactly why the table is
// plain serde data rather than a hardcoded match: deployments re-tune by
// shipping a different table, not by recompiling.

use crate::core_modules::hsv::Hsv;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six sticker colors of a standard cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StickerColor {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

impl fmt::Display for StickerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StickerColor::White => "white",
            StickerColor::Yellow => "yellow",
            StickerColor::Red => "red",
            StickerColor::Orange => "orange",
            StickerColor::Green => "green",
            StickerColor::Blue => "blue",
        };
        write!(f, "{name}")
    }
}

/// The classification outcome for a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellColor {
    /// The cell's mean color fell inside one of the configured ranges.
    Sticker(StickerColor),
    /// The cell's mean color matched no configured range.
    Unknown,
}

impl CellColor {
    /// A "filled" cell has a definite color. Every cell of a face must be
    /// filled before the face is captured.
    pub fn is_filled(&self) -> bool {
        matches!(self, CellColor::Sticker(_))
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellColor::Sticker(color) => write!(f, "{color}"),
            CellColor::Unknown => write!(f, "unknown"),
        }
    }
}

/// A named HSV bounding box. Bounds are inclusive on every channel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ColorRange {
    pub label: StickerColor,
    pub lower: Hsv,
    pub upper: Hsv,
}

impl ColorRange {
    pub const fn new(label: StickerColor, lower: Hsv, upper: Hsv) -> Self {
        Self {
            label,
            lower,
            upper,
        }
    }

    /// Per-channel inclusive containment check.
    pub fn contains(&self, sample: Hsv) -> bool {
        sample.hue >= self.lower.hue
            && sample.hue <= self.upper.hue
            && sample.saturation >= self.lower.saturation
            && sample.saturation <= self.upper.saturation
            && sample.value >= self.lower.value
            && sample.value <= self.upper.value
    }
}

/// The ordered set of HSV ranges the classifier matches against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorTable {
    ranges: Vec<ColorRange>,
}

impl Default for ColorTable {
    /// The original capture rig's thresholds. Evaluation order:
    /// white, yellow, red (low), red (high), orange, green, blue.
    fn default() -> Self {
        Self {
            ranges: vec![
                ColorRange::new(StickerColor::White, Hsv::new(0, 0, 180), Hsv::new(180, 55, 255)),
                ColorRange::new(
                    StickerColor::Yellow,
                    Hsv::new(20, 100, 100),
                    Hsv::new(30, 255, 255),
                ),
                // Red straddles the hue wraparound, so it gets two boxes.
                ColorRange::new(
                    StickerColor::Red,
                    Hsv::new(0, 110, 110),
                    Hsv::new(10, 255, 255),
                ),
                ColorRange::new(
                    StickerColor::Red,
                    Hsv::new(160, 110, 110),
                    Hsv::new(180, 255, 255),
                ),
                ColorRange::new(
                    StickerColor::Orange,
                    Hsv::new(10, 110, 100),
                    Hsv::new(20, 255, 255),
                ),
                ColorRange::new(
                    StickerColor::Green,
                    Hsv::new(40, 50, 50),
                    Hsv::new(90, 255, 255),
                ),
                ColorRange::new(
                    StickerColor::Blue,
                    Hsv::new(100, 100, 50),
                    Hsv::new(130, 255, 255),
                ),
            ],
        }
    }
}

impl ColorTable {
    /// A custom table. Evaluation order is the order of `ranges`.
    pub fn new(ranges: Vec<ColorRange>) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &[ColorRange] {
        &self.ranges
    }

    /// Classifies one averaged HSV sample. First match wins; no match at all
    /// is `Unknown`. Total over every possible input.
    pub fn classify(&self, sample: Hsv) -> CellColor {
        for range in &self.ranges {
            if range.contains(sample) {
                return CellColor::Sticker(range.label);
            }
        }
        CellColor::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_reference_color_classifies_to_its_own_label() {
        let table = ColorTable::default();
        let cases = [
            (Hsv::new(0, 20, 250), StickerColor::White),
            (Hsv::new(25, 200, 220), StickerColor::Yellow),
            (Hsv::new(3, 200, 200), StickerColor::Red),
            (Hsv::new(15, 220, 210), StickerColor::Orange),
            (Hsv::new(60, 200, 200), StickerColor::Green),
            (Hsv::new(115, 210, 180), StickerColor::Blue),
        ];
        for (sample, expected) in cases {
            assert_eq!(table.classify(sample), CellColor::Sticker(expected));
        }
    }

    #[test]
    fn red_matches_at_both_ends_of_the_hue_axis() {
        let table = ColorTable::default();
        assert_eq!(
            table.classify(Hsv::new(0, 200, 200)),
            CellColor::Sticker(StickerColor::Red)
        );
        assert_eq!(
            table.classify(Hsv::new(179, 200, 200)),
            CellColor::Sticker(StickerColor::Red)
        );
    }

    #[test]
    fn out_of_gamut_sample_is_unknown() {
        let table = ColorTable::default();
        // Pure black: value 0 clears no range's value floor.
        assert_eq!(table.classify(Hsv::new(0, 0, 0)), CellColor::Unknown);
        // Saturated but dim teal, between the green and blue hue bands.
        assert_eq!(table.classify(Hsv::new(95, 200, 40)), CellColor::Unknown);
    }

    #[test]
    fn bounds_are_inclusive_on_every_channel() {
        let table = ColorTable::default();
        assert_eq!(
            table.classify(Hsv::new(20, 100, 100)),
            CellColor::Sticker(StickerColor::Yellow)
        );
        assert_eq!(
            table.classify(Hsv::new(30, 255, 255)),
            CellColor::Sticker(StickerColor::Yellow)
        );
    }

    #[test]
    fn earlier_range_wins_on_overlap() {
        let table = ColorTable::default();
        // Low saturation, bright, green hue: inside both the white box and
        // the green box. White is evaluated first.
        assert_eq!(
            table.classify(Hsv::new(60, 52, 200)),
            CellColor::Sticker(StickerColor::White)
        );
        // Hue 20 sits in both the yellow and orange boxes; yellow is earlier.
        assert_eq!(
            table.classify(Hsv::new(20, 120, 150)),
            CellColor::Sticker(StickerColor::Yellow)
        );
    }
}

// THEORY:
// The `scanner` module is the final, top-level API of the engine. It wraps the
// stateless grid sampler in the one piece of state a cube scan genuinely
// needs: which of the six faces we are waiting for, what has already been
// captured, and whether we are inside the post-capture hold interval that
// gives the operator time to rotate the cube to the next face.
//
// The session never touches a camera. The caller owns frame acquisition and
// pacing (a timed loop, an event-driven capture driver, whatever fits the
// host application) and feeds frames in one at a time. Timestamps are passed
// in explicitly so the hold logic is deterministic and directly testable;
// `process_frame` is a thin convenience wrapper over `process_frame_at`.

use crate::core_modules::grid_sampler::{GridSampler, all_filled};
use crate::error::ScanError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

// Re-export key data structures for the public API.
pub use crate::core_modules::color_table::{CellColor, ColorTable, StickerColor};
pub use crate::core_modules::frame::FrameView;
pub use crate::core_modules::grid_sampler::FaceGeometry;

/// One of the six cube faces, in standard U R F D L B notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceLabel {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

impl FaceLabel {
    /// The order faces are shown to the camera during a scan.
    pub const SCAN_ORDER: [FaceLabel; 6] = [
        FaceLabel::Up,
        FaceLabel::Right,
        FaceLabel::Front,
        FaceLabel::Down,
        FaceLabel::Left,
        FaceLabel::Back,
    ];

    pub fn letter(self) -> char {
        match self {
            FaceLabel::Up => 'U',
            FaceLabel::Right => 'R',
            FaceLabel::Front => 'F',
            FaceLabel::Down => 'D',
            FaceLabel::Left => 'L',
            FaceLabel::Back => 'B',
        }
    }
}

impl fmt::Display for FaceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Configuration for a scan session, allowing for tunable behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Cube size N: 2, 3, or 4.
    pub cube_size: u32,
    /// Border kept between the frame edge and the square scan region,
    /// in pixels.
    pub margin: u32,
    /// Pause after a successful capture before sampling resumes, so the
    /// operator can physically rotate the cube to the next face.
    pub capture_hold_ms: u64,
    /// The HSV threshold table. Lighting-sensitive; re-tune per environment.
    pub color_table: ColorTable,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            cube_size: 3,
            margin: 40,
            capture_hold_ms: 1200,
            color_table: ColorTable::default(),
        }
    }
}

impl ScannerConfig {
    /// Loads a configuration from a TOML file. Missing fields fall back to
    /// their defaults, so a file can override just the thresholds or just
    /// the cube size.
    pub fn load(path: &Path) -> Result<Self, ScanError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn capture_hold(&self) -> Duration {
        Duration::from_millis(self.capture_hold_ms)
    }
}

/// The classification record for one captured face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFace {
    pub label: FaceLabel,
    /// Row-major cell colors (index = row * N + col).
    pub colors: Vec<CellColor>,
}

/// The per-frame outcome of a scan session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanReport {
    /// Inside the post-capture hold interval; the frame was not sampled.
    Holding { face: FaceLabel },
    /// Still waiting for every cell of the current face to classify.
    FaceScanning {
        face: FaceLabel,
        filled: usize,
        total: usize,
    },
    /// Every cell classified; the face was recorded and the session advanced.
    FaceCaptured { face: FaceLabel },
    /// All six faces are captured; nothing left to sample.
    SessionComplete,
}

/// A six-face capture session over a stream of frames.
pub struct ScanSession {
    config: ScannerConfig,
    sampler: GridSampler,
    /// Index into `FaceLabel::SCAN_ORDER` of the face currently awaited.
    face_index: usize,
    captured: Vec<CapturedFace>,
    /// Sampling is suppressed until this instant after each capture.
    hold_until: Option<Instant>,
}

impl ScanSession {
    pub fn new(config: ScannerConfig) -> Result<Self, ScanError> {
        let sampler = GridSampler::new(config.color_table.clone(), config.cube_size)?;
        Ok(Self {
            config,
            sampler,
            face_index: 0,
            captured: Vec::new(),
            hold_until: None,
        })
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// The face the session is currently waiting to see, or `None` once all
    /// six are captured.
    pub fn current_face(&self) -> Option<FaceLabel> {
        FaceLabel::SCAN_ORDER.get(self.face_index).copied()
    }

    pub fn captured_faces(&self) -> &[CapturedFace] {
        &self.captured
    }

    pub fn is_complete(&self) -> bool {
        self.captured.len() == FaceLabel::SCAN_ORDER.len()
    }

    /// The centered square scan region for a frame of the given size: the
    /// largest square that fits inside the frame minus the configured margin.
    pub fn scan_region(&self, frame: &FrameView<'_>) -> FaceGeometry {
        let side = frame
            .width()
            .min(frame.height())
            .saturating_sub(2 * self.config.margin);
        FaceGeometry {
            origin_x: (frame.width() - side) / 2,
            origin_y: (frame.height() - side) / 2,
            size: side,
        }
    }

    /// Processes one frame at the current wall-clock time.
    pub fn process_frame(&mut self, frame: &FrameView<'_>) -> ScanReport {
        self.process_frame_at(frame, Instant::now())
    }

    /// Processes one frame with an explicit timestamp. The timestamp only
    /// drives the post-capture hold interval; sampling itself is pure.
    pub fn process_frame_at(&mut self, frame: &FrameView<'_>, now: Instant) -> ScanReport {
        let Some(face) = self.current_face() else {
            return ScanReport::SessionComplete;
        };

        if let Some(until) = self.hold_until {
            if now < until {
                return ScanReport::Holding { face };
            }
            self.hold_until = None;
        }

        let region = self.scan_region(frame);
        let colors = self.sampler.sample_face(frame, region);

        if !all_filled(&colors) {
            let filled = colors.iter().filter(|c| c.is_filled()).count();
            let total = colors.len();
            debug!("face {face}: {filled}/{total} cells filled");
            return ScanReport::FaceScanning {
                face,
                filled,
                total,
            };
        }

        self.captured.push(CapturedFace {
            label: face,
            colors,
        });
        self.face_index += 1;
        self.hold_until = Some(now + self.config.capture_hold());
        info!(
            "captured face {face} ({}/{})",
            self.captured.len(),
            FaceLabel::SCAN_ORDER.len()
        );
        if self.is_complete() {
            info!("all six faces captured");
        }
        ScanReport::FaceCaptured { face }
    }

    /// Discards every capture and returns to the first face, as if the
    /// session were new.
    pub fn reset(&mut self) {
        self.face_index = 0;
        self.captured.clear();
        self.hold_until = None;
        info!("scan session reset");
    }
}

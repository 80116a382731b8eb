// THEORY:
// The `FrameView` is the crate's only contact with raw camera data: a
// borrowed, dimension-checked window onto one RGBA frame buffer. The buffer
// stays owned by the caller for the duration of a sampling call; the view
// neither copies nor mutates it and holds no state between frames.
//
// Region extraction is deliberately clamping rather than fallible: a request
// that hangs off the edge of the frame yields a smaller (possibly empty)
// patch, so a misplaced scan region degrades to "unknown" cells instead of
// aborting the whole classification pass.

use crate::core_modules::patch::patch::Patch;
use crate::core_modules::pixel::pixel::{CHANNELS, Pixel};
use crate::error::ScanError;

/// A borrowed view over one raw RGBA frame buffer.
#[derive(Debug)]
pub struct FrameView<'a> {
    width: u32,
    height: u32,
    buffer: &'a [u8],
}

impl<'a> FrameView<'a> {
    /// Wraps a raw RGBA buffer, checking that its length matches the
    /// declared dimensions exactly.
    pub fn new(width: u32, height: u32, buffer: &'a [u8]) -> Result<Self, ScanError> {
        let expected = width as usize * height as usize * CHANNELS;
        if buffer.len() != expected {
            return Err(ScanError::FrameBufferMismatch {
                expected,
                actual: buffer.len(),
            });
        }
        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Copies the pixels of a sub-rectangle out of the frame, clamped to the
    /// frame bounds. A region that lies entirely outside the frame (or has
    /// zero area) produces an empty patch.
    pub fn extract_patch(&self, x: u32, y: u32, width: u32, height: u32) -> Patch {
        let x0 = x.min(self.width);
        let y0 = y.min(self.height);
        let x1 = x.saturating_add(width).min(self.width);
        let y1 = y.saturating_add(height).min(self.height);

        let mut pixels = Vec::with_capacity(((x1 - x0) * (y1 - y0)) as usize);
        for row in y0..y1 {
            for col in x0..x1 {
                let byte_index = (row as usize * self.width as usize + col as usize) * CHANNELS;
                pixels.push(Pixel::from(&self.buffer[byte_index..byte_index + CHANNELS]));
            }
        }
        Patch::new(x1 - x0, y1 - y0, pixels)
    }
}

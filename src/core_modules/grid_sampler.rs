// THEORY:
// The `GridSampler` is the bridge between a raw frame and per-sticker
// classification. It partitions a square scan region into an N x N grid of
// equal cells and, for each cell in row-major order, samples only the central
// inset (the middle half of the cell on both axes). The inset matters: the
// outer band of every cell is contaminated by the painted grid overlay and by
// bleed from neighboring stickers, and averaging over it would smear two
// colors together.
//
// Key principles:
// 1.  **Pure and frame-local**: Sampling is a function of (frame, geometry,
//     cube size) and nothing else. There is no memory of prior frames, so
//     identical inputs always produce identical output.
// 2.  **Total, never faulting**: A cell whose inset is degenerate — the scan
//     region is too small for N, has zero size, or hangs off the frame —
//     classifies as `Unknown`. One bad cell can never abort the rest of the
//     face. The output length is always exactly N squared.
// 3.  **Row-major contract**: Result index = row * N + col. The capture layer
//     and any downstream cube-state consumer rely on this ordering.

use crate::core_modules::color_table::{CellColor, ColorTable};
use crate::core_modules::frame::FrameView;
use crate::core_modules::hsv::Hsv;
use crate::error::ScanError;

/// The square scan region for one cube face, in frame pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceGeometry {
    /// X of the region's top-left corner.
    pub origin_x: u32,
    /// Y of the region's top-left corner.
    pub origin_y: u32,
    /// Side length of the square region, in pixels.
    pub size: u32,
}

/// Stateless per-frame sampler for one cube size.
pub struct GridSampler {
    table: ColorTable,
    cube_size: u32,
}

impl GridSampler {
    /// Builds a sampler for cubes of side `cube_size` (2, 3, or 4).
    pub fn new(table: ColorTable, cube_size: u32) -> Result<Self, ScanError> {
        if !(2..=4).contains(&cube_size) {
            return Err(ScanError::InvalidCubeSize(cube_size));
        }
        Ok(Self { table, cube_size })
    }

    pub fn cube_size(&self) -> u32 {
        self.cube_size
    }

    /// Number of cells on one face.
    pub fn cell_count(&self) -> usize {
        (self.cube_size * self.cube_size) as usize
    }

    /// Classifies every cell of the face in row-major order. Always returns
    /// exactly `cell_count()` results.
    pub fn sample_face(&self, frame: &FrameView<'_>, geometry: FaceGeometry) -> Vec<CellColor> {
        let n = self.cube_size;
        let cell = geometry.size / n;
        let mut colors = Vec::with_capacity(self.cell_count());
        for row in 0..n {
            for col in 0..n {
                let x = geometry.origin_x.saturating_add(col * cell);
                let y = geometry.origin_y.saturating_add(row * cell);
                colors.push(self.classify_cell(frame, x, y, cell));
            }
        }
        colors
    }

    /// Samples the central inset of one cell: from a quarter of the cell in
    /// to three quarters, on both axes.
    fn classify_cell(&self, frame: &FrameView<'_>, x: u32, y: u32, cell: u32) -> CellColor {
        let inset = cell / 4;
        let span = cell * 3 / 4 - inset;
        let patch = frame.extract_patch(
            x.saturating_add(inset),
            y.saturating_add(inset),
            span,
            span,
        );
        if patch.is_empty() {
            return CellColor::Unknown;
        }
        self.table.classify(Hsv::from(patch.mean_pixel()))
    }
}

/// The auto-capture trigger: true iff every cell has a definite color.
pub fn all_filled(colors: &[CellColor]) -> bool {
    colors.iter().all(CellColor::is_filled)
}

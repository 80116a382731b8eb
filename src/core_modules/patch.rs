// THEORY:
// The `Patch` module represents a spatial grouping of pixels: the inset region
// sampled from the middle of one grid cell. Its single core operation is
// `mean_pixel`, which summarizes the whole region as one color.
//
// Key principles:
// 1.  **Noise reduction**: Averaging over the inset region cancels out random
//     single-pixel noise (sensor artifacts, sticker glare speckle), so the
//     classifier only ever sees a spatially coherent color.
// 2.  **Dumb data container**: A `Patch` holds a `Vec<Pixel>` and knows how to
//     summarize its own data. It knows nothing about the grid it came from and
//     nothing about color classification.
// 3.  **Degenerate-safe**: A zero-area patch is a legal value, not an error.
//     Callers check `is_empty` and treat such cells as unclassifiable.

pub mod patch {
    use crate::core_modules::pixel::pixel::Pixel;

    /// A "dumb" data container representing a rectangular block of pixels.
    pub struct Patch {
        /// The width of the patch in pixels.
        pub width: u32,
        /// The height of the patch in pixels.
        pub height: u32,
        /// A flattened, row-major vector of all `Pixel` data within this patch.
        pub pixels: Vec<Pixel>,
    }

    impl Patch {
        pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Self {
            Self {
                width,
                height,
                pixels,
            }
        }

        /// A patch extracted from a degenerate or fully off-frame region.
        pub fn is_empty(&self) -> bool {
            self.pixels.is_empty()
        }

        /// Calculates the mean pixel value over the entire patch.
        /// This is the core operation for summarizing the patch's color.
        /// Returns `Pixel::default()` (transparent black) for an empty patch.
        pub fn mean_pixel(&self) -> Pixel {
            let num_pixels = self.pixels.len();
            if num_pixels == 0 {
                return Pixel::default();
            }

            let mut sum_r = 0u64;
            let mut sum_g = 0u64;
            let mut sum_b = 0u64;
            let mut sum_a = 0u64;

            for pixel in &self.pixels {
                sum_r += pixel.red as u64;
                sum_g += pixel.green as u64;
                sum_b += pixel.blue as u64;
                sum_a += pixel.alpha as u64;
            }

            Pixel {
                red: (sum_r / num_pixels as u64) as u8,
                green: (sum_g / num_pixels as u64) as u8,
                blue: (sum_b / num_pixels as u64) as u8,
                alpha: (sum_a / num_pixels as u64) as u8,
            }
        }
    }
}

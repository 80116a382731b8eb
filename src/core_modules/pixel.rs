// THEORY:
// The `Pixel` module is the most fundamental unit of the scanner. It is a
// "dumb" data container for a single RGBA pixel, with no knowledge of its
// neighbors in space or time. Anything that needs more than one pixel
// (averaging, color-space conversion of a region) belongs in higher-level
// modules like `Patch` and `Hsv`.
//
// Key principles:
// 1.  **Single-pixel scope**: No method here ever reads another pixel.
// 2.  **Raw byte fidelity**: Channels are kept as the camera delivered them
//     (0-255). All derived representations are computed on demand elsewhere.
// 3.  **Cheap to move**: A pixel is four bytes and is `Copy`, so the sampler
//     can shuffle them freely without borrow gymnastics.

pub mod pixel {
    pub type Byte = u8;
    pub type Bytes = Vec<Byte>;
    pub type Channel = Byte;

    /// Number of bytes per pixel in the raw frame buffers we accept (RGBA).
    pub const CHANNELS: usize = 4;

    /// A "dumb" data container representing a single RGBA pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Self {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// An opaque pixel from an RGB triple, for callers that do not care
        /// about alpha (the classifier never does).
        pub fn from_rgb(red: Channel, green: Channel, blue: Channel) -> Self {
            Self::new(red, green, blue, Channel::MAX)
        }
    }

    impl From<&[Byte]> for Pixel {
        fn from(bytes: &[Byte]) -> Self {
            if bytes.len() != CHANNELS {
                panic!("Cannot convert {} bytes into pixel.", bytes.len());
            }
            Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])
        }
    }

    impl From<Pixel> for Bytes {
        fn from(pixel: Pixel) -> Self {
            vec![pixel.red, pixel.green, pixel.blue, pixel.alpha]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pixel::*;

    #[test]
    fn pixel_round_trips_through_bytes() {
        let pixel = Pixel::from(&[10u8, 20, 30, 255][..]);
        assert_eq!(pixel, Pixel::new(10, 20, 30, 255));
        let bytes: Bytes = pixel.into();
        assert_eq!(bytes, vec![10, 20, 30, 255]);
    }

    #[test]
    fn from_rgb_is_opaque() {
        assert_eq!(Pixel::from_rgb(1, 2, 3).alpha, 255);
    }
}

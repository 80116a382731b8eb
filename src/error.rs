use thiserror::Error;

/// Errors surfaced while constructing a sampler or session, or while loading
/// configuration. Classification itself is total and never fails; a cell that
/// cannot be classified is reported as `Unknown`, not as an error.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Only 2x2, 3x3, and 4x4 cubes are supported.
    #[error("unsupported cube size {0}: expected 2, 3, or 4")]
    InvalidCubeSize(u32),

    /// The raw frame buffer does not match the declared dimensions.
    #[error("frame buffer holds {actual} bytes but {expected} were expected for the given dimensions")]
    FrameBufferMismatch { expected: usize, actual: usize },

    /// The configuration file could not be read.
    #[error("failed to read configuration file")]
    ConfigIo(#[from] std::io::Error),

    /// The configuration file could not be parsed.
    #[error("failed to parse configuration file")]
    ConfigParse(#[from] toml::de::Error),
}

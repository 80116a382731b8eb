// THEORY:
// This file is the main entry point for the `cube_vision` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the public
// API that will be exposed to external consumers (like a capture-loop host
// application).
//
// The primary goal is to export the `ScanSession` and its associated data
// structures (`ScannerConfig`, `ScanReport`, the color types) as the clean,
// high-level interface for the whole scanner. The layered internals
// (`core_modules`) stay available for consumers that only want the stateless
// sampler or the classifier on their own, but everyday use goes through
// `scanner`.

pub mod core_modules;
pub mod error;
pub mod scanner;

pub use error::ScanError;
pub use scanner::{CapturedFace, FaceLabel, ScanReport, ScanSession, ScannerConfig, StickerColor};

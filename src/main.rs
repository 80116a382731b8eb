// Example runner for the `cube_vision` library: scans a single cube face
// from a still image and prints the classified sticker grid. A real host
// application would feed live camera frames into the same session in a loop.

use anyhow::{Context, Result};
use cube_vision::scanner::{FrameView, ScanReport, ScanSession, ScannerConfig};

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: cube_vision <image-file>")?;
    let rgba = image::open(&path)
        .with_context(|| format!("failed to open {path}"))?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    let frame = FrameView::new(width, height, rgba.as_raw())?;

    let mut session = ScanSession::new(ScannerConfig::default())?;
    let n = session.config().cube_size as usize;

    match session.process_frame(&frame) {
        ScanReport::FaceCaptured { face } => {
            println!("face {face} captured:");
            let captured = session
                .captured_faces()
                .last()
                .expect("a captured face was just recorded");
            for row in captured.colors.chunks(n) {
                let labels: Vec<String> = row.iter().map(|c| c.to_string()).collect();
                println!("  {}", labels.join(" "));
            }
        }
        ScanReport::FaceScanning {
            face,
            filled,
            total,
        } => {
            println!("face {face}: only {filled}/{total} cells classified");
        }
        other => println!("{other:?}"),
    }

    Ok(())
}

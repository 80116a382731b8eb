//! Drives a full six-face scan session over synthetic frames, one uniform
//! face per reference color, the way a capture loop would.

use std::time::{Duration, Instant};

use cube_vision::scanner::{
    CellColor, FaceLabel, FrameView, ScanReport, ScanSession, ScannerConfig, StickerColor,
};

const FRAME_SIZE: u32 = 240;

fn solid_frame(rgb: [u8; 3]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity((FRAME_SIZE * FRAME_SIZE * 4) as usize);
    for _ in 0..FRAME_SIZE * FRAME_SIZE {
        buffer.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
    }
    buffer
}

#[test]
fn full_session_captures_six_faces_in_scan_order() {
    let face_colors = [
        ([255, 255, 255], StickerColor::White),
        ([255, 0, 0], StickerColor::Red),
        ([0, 255, 0], StickerColor::Green),
        ([255, 255, 0], StickerColor::Yellow),
        ([255, 128, 0], StickerColor::Orange),
        ([0, 0, 255], StickerColor::Blue),
    ];

    let mut session = ScanSession::new(ScannerConfig::default()).unwrap();
    let hold = session.config().capture_hold();
    let step = hold + Duration::from_millis(300);
    let t0 = Instant::now();

    for (i, (rgb, _)) in face_colors.iter().enumerate() {
        let buffer = solid_frame(*rgb);
        let frame = FrameView::new(FRAME_SIZE, FRAME_SIZE, &buffer).unwrap();
        let capture_time = t0 + step * i as u32;

        if i > 0 {
            // A frame arriving shortly after the previous capture falls
            // inside the hold interval and is not sampled.
            let previous_capture = t0 + step * (i - 1) as u32;
            assert_eq!(
                session.process_frame_at(&frame, previous_capture + Duration::from_millis(500)),
                ScanReport::Holding {
                    face: FaceLabel::SCAN_ORDER[i]
                }
            );
        }

        assert_eq!(
            session.process_frame_at(&frame, capture_time),
            ScanReport::FaceCaptured {
                face: FaceLabel::SCAN_ORDER[i]
            }
        );
    }

    assert!(session.is_complete());
    let captured = session.captured_faces();
    assert_eq!(captured.len(), 6);
    for (face, (_, expected)) in captured.iter().zip(face_colors.iter()) {
        assert_eq!(face.colors.len(), 9);
        assert!(
            face.colors
                .iter()
                .all(|c| *c == CellColor::Sticker(*expected)),
            "face {} misread: {:?}",
            face.label,
            face.colors
        );
    }

    // The session is terminal once complete.
    let buffer = solid_frame([0, 255, 0]);
    let frame = FrameView::new(FRAME_SIZE, FRAME_SIZE, &buffer).unwrap();
    assert_eq!(
        session.process_frame_at(&frame, t0 + Duration::from_secs(600)),
        ScanReport::SessionComplete
    );
}

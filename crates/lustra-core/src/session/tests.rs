//! Tests for session lifecycle and capture recording.

use super::*;
use crate::models::Phase;
use crate::report::ReportOptions;

fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([120, 140, 160]));
    let mut out = std::io::Cursor::new(Vec::new());
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, 80);
    image::DynamicImage::ImageRgb8(img)
        .write_with_encoder(encoder)
        .unwrap();
    out.into_inner()
}

fn photo(width: u32, height: u32) -> PhotoData {
    PhotoData {
        bytes: jpeg_bytes(width, height),
        width_px: width,
        height_px: height,
    }
}

async fn session_for(ids: &[&str]) -> Session {
    Session::builder()
        .with_catalog(FlowCatalog::builtin())
        .with_selection(ids.iter().map(|id| FlowId::new(*id)))
        .build()
        .await
        .unwrap()
}

#[tokio::test]
async fn builder_rejects_empty_selection() {
    let result = Session::builder()
        .with_catalog(FlowCatalog::builtin())
        .build()
        .await;
    assert!(matches!(result, Err(ReportError::EmptySelection)));
}

#[tokio::test]
async fn builder_rejects_conflicting_flows() {
    let result = Session::builder()
        .with_catalog(FlowCatalog::builtin())
        .with_selection([FlowId::new("interior"), FlowId::new("interior_detailed")])
        .build()
        .await;
    assert!(matches!(result, Err(ReportError::ExclusiveConflict { .. })));
}

#[tokio::test]
async fn record_capture_advances_the_cursor() {
    let mut session = session_for(&["exterior"]).await;
    assert_eq!(session.progress().completed, 0);
    assert_eq!(session.queue().len(), 8);

    let first = session.current_step().unwrap().clone();
    assert_eq!(first.phase, Phase::Before);

    let progress = session.record_capture(photo(64, 48)).unwrap();
    assert_eq!(progress.completed, 1);
    assert_eq!(session.current_step().unwrap().step_index, 1);

    let stored = session
        .store()
        .slot(&first.flow, first.phase, first.step_index)
        .unwrap();
    assert_eq!(stored.captured().unwrap().label, first.label);
}

#[tokio::test]
async fn record_capture_past_the_end_is_refused() {
    let mut session = session_for(&["exterior"]).await;
    for _ in 0..session.queue().len() {
        session.record_capture(photo(64, 48)).unwrap();
    }
    assert!(session.is_complete());
    assert!(matches!(
        session.record_capture(photo(64, 48)),
        Err(ReportError::QueueExhausted)
    ));
}

#[tokio::test]
async fn compose_report_requires_a_complete_queue() {
    let mut session = session_for(&["exterior"]).await;
    session.record_capture(photo(64, 48)).unwrap();

    let result = session.compose_report(ReportOptions::default()).await;
    assert!(matches!(
        result,
        Err(ReportError::IncompleteSession { remaining: 7 })
    ));
}

#[tokio::test]
async fn compose_report_produces_cover_plus_content() {
    let mut session = session_for(&["exterior"]).await;
    session.set_vehicle_info(VehicleInfo::new(
        Some("1234 ABC".to_string()),
        Some("Seat León".to_string()),
    ));
    for _ in 0..session.queue().len() {
        session.record_capture(photo(64, 48)).unwrap();
    }

    let report = session.compose_report(ReportOptions::default()).await.unwrap();
    assert!(report.page_count >= 2);
    assert!(!report.bytes.is_empty());
    assert_eq!(report.sections.len(), 1);
    assert_eq!(report.sections[0].rows_emitted, 4);
    assert_eq!(report.sections[0].rows_skipped, 0);
    assert_eq!(report.placeholder_count(), 0);
}

#[tokio::test]
async fn reselect_preserves_kept_flows_and_restarts_cursor() {
    let mut session = session_for(&["interior", "exterior"]).await;
    let total = session.queue().len();
    for _ in 0..total {
        session.record_capture(photo(64, 48)).unwrap();
    }

    session
        .reselect([FlowId::new("interior"), FlowId::new("exterior_detailed")])
        .unwrap();
    assert_eq!(session.progress().completed, 0);

    let interior = FlowId::new("interior");
    let kept = session.store().slot(&interior, Phase::Before, 0).unwrap();
    assert!(!kept.is_empty());

    let exterior = FlowId::new("exterior");
    assert!(session.store().flow(&exterior).is_none());
}

#[tokio::test]
async fn reselect_keeps_old_state_when_selection_is_invalid() {
    let mut session = session_for(&["interior"]).await;
    session.record_capture(photo(64, 48)).unwrap();

    let result = session.reselect([FlowId::new("no_such_flow")]);
    assert!(matches!(result, Err(ReportError::UnknownFlow { .. })));
    assert_eq!(session.progress().completed, 1);
    assert_eq!(session.selection(), [FlowId::new("interior")]);
}

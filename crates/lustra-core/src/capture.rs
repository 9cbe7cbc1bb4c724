//! Photo ingestion: decode, downscale, and re-encode captured images.
//!
//! Photos are scaled so their larger dimension is at most 1280px and
//! re-encoded as JPEG at quality 80, keeping the final PDF small. Pixel
//! dimensions are captured at decode time for later layout math.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use log::debug;
use tokio::task;

use crate::error::{ReportError, Result, ResultExt};
use crate::models::PhotoData;

/// Larger dimension of an ingested photo is clamped to this.
pub const MAX_DIMENSION_PX: u32 = 1280;

/// JPEG re-encode quality.
pub const JPEG_QUALITY: u8 = 80;

/// Decodes raw image bytes into report-ready photo data.
///
/// CPU-bound; callers on the async path should prefer [`load_photo`],
/// which runs this on the blocking pool.
pub fn decode_photo(bytes: &[u8]) -> Result<PhotoData> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| ReportError::image("failed to decode photo", e))?;

    let scaled = if decoded.width().max(decoded.height()) > MAX_DIMENSION_PX {
        decoded.resize(MAX_DIMENSION_PX, MAX_DIMENSION_PX, FilterType::Triangle)
    } else {
        decoded
    };

    let (width_px, height_px) = (scaled.width(), scaled.height());
    let mut out = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
    DynamicImage::ImageRgb8(scaled.to_rgb8())
        .write_with_encoder(encoder)
        .map_err(|e| ReportError::image("failed to re-encode photo", e))?;

    debug!("Ingested photo: {width_px}x{height_px}px, {} bytes", out.get_ref().len());
    Ok(PhotoData {
        bytes: out.into_inner(),
        width_px,
        height_px,
    })
}

/// Reads and ingests a photo file.
///
/// File read and decode both run on the blocking pool; the await is the
/// suspension point the capture loop sequences on.
pub async fn load_photo(path: &Path) -> Result<PhotoData> {
    let path = path.to_path_buf();
    task::spawn_blocking(move || {
        let bytes = std::fs::read(&path).map_err(|e| ReportError::file_system(&path, e))?;
        decode_photo(&bytes)
    })
    .await
    .with_context("Task join error")?
}

//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage};
use lustra_core::models::PhotoData;

/// Encodes a flat-color JPEG of the given dimensions.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, image::Rgb([90, 110, 130]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_with_encoder(JpegEncoder::new_with_quality(&mut out, 85))
        .expect("encode test jpeg");
    out.into_inner()
}

/// Report-ready photo data produced through the real ingestion path.
pub fn photo(width: u32, height: u32) -> PhotoData {
    lustra_core::capture::decode_photo(&jpeg_bytes(width, height)).expect("decode test jpeg")
}

/// Photo data whose bytes are not a decodable image.
pub fn corrupt_photo() -> PhotoData {
    PhotoData {
        bytes: vec![0xde, 0xad, 0xbe, 0xef],
        width_px: 640,
        height_px: 480,
    }
}

/// Writes a JPEG file into `dir` and returns its path.
pub fn write_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, jpeg_bytes(width, height)).expect("write test jpeg");
    path
}

//! Image store slot types.

use serde::{Deserialize, Serialize};

/// Decoded photo payload: re-encoded JPEG bytes plus pixel dimensions.
///
/// Dimensions are retained from decode time so the report layout can
/// compute aspect ratios without decoding the bytes a second time.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhotoData {
    /// JPEG-encoded image bytes, already downscaled for the report
    #[serde(skip)]
    pub bytes: Vec<u8>,

    /// Natural width in pixels after downscaling
    pub width_px: u32,

    /// Natural height in pixels after downscaling
    pub height_px: u32,
}

impl PhotoData {
    /// Width-to-height ratio of the photo.
    pub fn aspect_ratio(&self) -> f32 {
        self.width_px as f32 / self.height_px as f32
    }
}

impl std::fmt::Debug for PhotoData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoData")
            .field("bytes", &self.bytes.len())
            .field("width_px", &self.width_px)
            .field("height_px", &self.height_px)
            .finish()
    }
}

/// A confirmed capture: the step label it answers plus the photo itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CapturedPhoto {
    /// Label of the step at capture time
    pub label: String,

    /// The photo payload
    pub photo: PhotoData,
}

/// One addressable position in the image store.
///
/// Slots are sparse: an AFTER slot may be empty while its BEFORE
/// counterpart is filled, and vice versa.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub enum Slot {
    /// No photo captured at this position
    #[default]
    Empty,

    /// A confirmed capture
    Filled(CapturedPhoto),
}

impl Slot {
    /// Returns true when no photo has been captured at this position.
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Returns the captured photo, if any.
    pub fn captured(&self) -> Option<&CapturedPhoto> {
        match self {
            Slot::Empty => None,
            Slot::Filled(capture) => Some(capture),
        }
    }
}

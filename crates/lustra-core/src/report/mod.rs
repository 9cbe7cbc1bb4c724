//! Document composer: turns a completed image store into a paginated PDF.
//!
//! Structure of the artifact:
//!
//! 1. **Cover page**: logo (best effort, placeholder block on failure),
//!    title, generation date, optional vehicle line, selected flow titles.
//!    The cover is always page 1, alone.
//! 2. **Content pages**: one section per flow in priority order:
//!    section heading, "ANTES / DESPUÉS" subheading, then side-by-side
//!    comparison rows with automatic page breaks.
//! 3. **Header/footer pass**: after all content pages exist, every
//!    content page (never the cover) is stamped with the running header
//!    and a "Página N de M" footer. This needs the final page count,
//!    hence the second pass.
//!
//! All human-readable strings live in [`ReportStrings`] so the artifact
//! can be localized without touching drawing code.

mod compose;
mod layout;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{FlowId, VehicleInfo};

pub use compose::compose;
pub use layout::{plan_row, PageGeometry, RowPlan};

/// Localizable strings rendered into the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportStrings {
    /// Document title on the cover page
    pub title: String,
    /// Brand mark stamped in the running header
    pub brand: String,
    /// Prefix of the generation date line
    pub date_prefix: String,
    /// Heading above the selected-services list on the cover
    pub services_heading: String,
    /// Prefix of the license plate on the cover vehicle line
    pub plate_prefix: String,
    /// Prefix of the vehicle model on the cover vehicle line
    pub model_prefix: String,
    /// Left column header of a comparison row
    pub before_heading: String,
    /// Right column header of a comparison row
    pub after_heading: String,
    /// Placeholder text for an empty photo slot
    pub no_photo: String,
    /// Inline marker replacing an image that failed to place
    pub image_failed: String,
    /// Caption placeholder when a slot carries no label
    pub empty_caption: String,
    /// Word for "page" in the footer counter
    pub page_word: String,
    /// Word for "of" in the footer counter
    pub of_word: String,
}

impl ReportStrings {
    /// Footer page counter, e.g. "Página 2 de 5".
    pub fn page_label(&self, page: usize, total: usize) -> String {
        format!("{} {page} {} {total}", self.page_word, self.of_word)
    }

    /// Subheading combining both column headers, e.g. "ANTES / DESPUÉS".
    pub fn comparison_heading(&self) -> String {
        format!("{} / {}", self.before_heading, self.after_heading)
    }

    /// Single cover-page vehicle line, or `None` when there is nothing
    /// to show, e.g. "Matrícula: 1234 ABC · Modelo: Seat León".
    pub fn vehicle_line(&self, vehicle: &VehicleInfo) -> Option<String> {
        match (&vehicle.plate, &vehicle.model) {
            (None, None) => None,
            (Some(plate), None) => Some(format!("{}{plate}", self.plate_prefix)),
            (None, Some(model)) => Some(format!("{}{model}", self.model_prefix)),
            (Some(plate), Some(model)) => Some(format!(
                "{}{plate} · {}{model}",
                self.plate_prefix, self.model_prefix
            )),
        }
    }
}

impl Default for ReportStrings {
    fn default() -> Self {
        Self {
            title: "Informe de Detallado".to_string(),
            brand: "Lustra".to_string(),
            date_prefix: "Fecha: ".to_string(),
            services_heading: "Servicios".to_string(),
            plate_prefix: "Matrícula: ".to_string(),
            model_prefix: "Modelo: ".to_string(),
            before_heading: "ANTES".to_string(),
            after_heading: "DESPUÉS".to_string(),
            no_photo: "Sin foto".to_string(),
            image_failed: "[imagen no cargada]".to_string(),
            empty_caption: "—".to_string(),
            page_word: "Página".to_string(),
            of_word: "de".to_string(),
        }
    }
}

/// Composition options: page metrics, logo candidates, and strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportOptions {
    /// Page width in millimeters (A4 portrait by default)
    pub page_width_mm: f32,
    /// Page height in millimeters
    pub page_height_mm: f32,
    /// Uniform page margin in millimeters
    pub margin_mm: f32,
    /// Horizontal gap between the two comparison columns
    pub column_gap_mm: f32,
    /// Cap on the image area height of a comparison row
    pub max_row_height_mm: f32,
    /// Ordered candidate paths for the cover logo; first one that loads
    /// wins, none loading falls back to a drawn placeholder block
    pub logo_candidates: Vec<PathBuf>,
    /// Localizable report strings
    pub strings: ReportStrings,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 15.0,
            column_gap_mm: 6.0,
            max_row_height_mm: 80.0,
            logo_candidates: vec![
                PathBuf::from("assets/logo.png"),
                PathBuf::from("logo.png"),
            ],
            strings: ReportStrings::default(),
        }
    }
}

/// Row accounting for one flow section, reported by the composer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionSummary {
    /// Flow this section documents
    pub flow: FlowId,
    /// Section heading as rendered
    pub title: String,
    /// Comparison rows actually drawn
    pub rows_emitted: usize,
    /// Row indices skipped because both slots were empty
    pub rows_skipped: usize,
    /// Images replaced by an inline failure marker
    pub placeholders: usize,
}

/// A finished, paginated artifact plus the accounting tests verify.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct ComposedReport {
    /// The PDF bytes, ready for export
    #[serde(skip)]
    pub bytes: Vec<u8>,
    /// Total pages including the cover
    pub page_count: usize,
    /// Per-flow row accounting, in section order
    pub sections: Vec<SectionSummary>,
}

impl ComposedReport {
    /// Total inline failure markers across all sections.
    pub fn placeholder_count(&self) -> usize {
        self.sections.iter().map(|s| s.placeholders).sum()
    }
}

impl std::fmt::Debug for ComposedReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposedReport")
            .field("bytes", &self.bytes.len())
            .field("page_count", &self.page_count)
            .field("sections", &self.sections)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_line_joins_both_fields_with_configured_prefixes() {
        let strings = ReportStrings::default();
        let info = VehicleInfo::new(Some("1234 ABC".to_string()), Some("Seat León".to_string()));
        assert_eq!(
            strings.vehicle_line(&info).unwrap(),
            "Matrícula: 1234 ABC · Modelo: Seat León"
        );
    }

    #[test]
    fn vehicle_line_with_single_field_uses_only_its_prefix() {
        let strings = ReportStrings::default();

        let plate_only = VehicleInfo::new(Some("1234 ABC".to_string()), None);
        assert_eq!(strings.vehicle_line(&plate_only).unwrap(), "Matrícula: 1234 ABC");

        let model_only = VehicleInfo::new(None, Some("Seat León".to_string()));
        assert_eq!(strings.vehicle_line(&model_only).unwrap(), "Modelo: Seat León");
    }

    #[test]
    fn vehicle_line_is_absent_when_no_field_is_set() {
        let strings = ReportStrings::default();
        assert!(strings.vehicle_line(&VehicleInfo::default()).is_none());
    }

    #[test]
    fn vehicle_line_follows_localized_prefixes() {
        let strings = ReportStrings {
            plate_prefix: "Plate: ".to_string(),
            model_prefix: "Model: ".to_string(),
            ..ReportStrings::default()
        };
        let info = VehicleInfo::new(Some("AB-123".to_string()), None);
        assert_eq!(strings.vehicle_line(&info).unwrap(), "Plate: AB-123");
    }

    #[test]
    fn page_label_counts_in_configured_words() {
        let strings = ReportStrings::default();
        assert_eq!(strings.page_label(2, 5), "Página 2 de 5");
    }
}

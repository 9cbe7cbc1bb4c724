//! Pure layout math for report pages and comparison rows.
//!
//! Everything here is geometry only, no drawing. The composer asks this
//! module how tall a row will be before committing it to a page, which is
//! what drives the dynamic page breaks.

use super::ReportOptions;

/// Page geometry derived from report options. All values in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub column_gap: f32,
    pub max_row_height: f32,
    /// Vertical zone reserved at the top of content pages for the
    /// running header stamped in the second pass
    pub header_height: f32,
    /// Vertical zone reserved at the bottom for the running footer
    pub footer_height: f32,
}

impl PageGeometry {
    pub fn from_options(options: &ReportOptions) -> Self {
        Self {
            page_width: options.page_width_mm,
            page_height: options.page_height_mm,
            margin: options.margin_mm,
            column_gap: options.column_gap_mm,
            max_row_height: options.max_row_height_mm,
            header_height: 14.0,
            footer_height: 12.0,
        }
    }

    /// Usable width between the margins.
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Fixed width reserved for each comparison column.
    pub fn column_width(&self) -> f32 {
        (self.content_width() - self.column_gap) / 2.0
    }

    /// X origin of the left (ANTES) column.
    pub fn left_column_x(&self) -> f32 {
        self.margin
    }

    /// X origin of the right (DESPUÉS) column.
    pub fn right_column_x(&self) -> f32 {
        self.margin + self.column_width() + self.column_gap
    }

    /// Y where content starts on a fresh content page, below the header.
    pub fn content_top(&self) -> f32 {
        self.page_height - self.margin - self.header_height
    }

    /// Lowest Y content may reach before a page break is required.
    pub fn content_bottom(&self) -> f32 {
        self.margin + self.footer_height
    }
}

/// Planned geometry of one comparison row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPlan {
    /// Final column width after any down-scaling
    pub column_width: f32,

    /// Height of the image area shared by both columns
    pub image_height: f32,
}

impl RowPlan {
    /// Height of the column-header line above the images.
    pub const HEADER_LINE: f32 = 5.0;

    /// Height of the caption line below the images.
    pub const CAPTION_LINE: f32 = 6.0;

    /// Vertical spacing after the row.
    pub const ROW_SPACING: f32 = 4.0;

    /// Total vertical space the row needs on a page.
    pub fn required_height(&self) -> f32 {
        Self::HEADER_LINE + self.image_height + Self::CAPTION_LINE + Self::ROW_SPACING
    }
}

/// Height a placeholder column assumes when a row has no image on one or
/// both sides; keeps rows with a single photo from collapsing.
const PLACEHOLDER_HEIGHT: f32 = 24.0;

/// Plans one comparison row from the aspect ratios of the photos present.
///
/// Each image is scaled to fill the column width preserving aspect ratio;
/// if the tallest image would exceed the row-height limit, both columns
/// shrink by the same factor so the row fits.
pub fn plan_row(geometry: &PageGeometry, before_aspect: Option<f32>, after_aspect: Option<f32>) -> RowPlan {
    let column_width = geometry.column_width();
    let height_for = |aspect: Option<f32>| -> f32 {
        match aspect {
            Some(ratio) if ratio > 0.0 => column_width / ratio,
            _ => PLACEHOLDER_HEIGHT,
        }
    };
    let image_height = height_for(before_aspect).max(height_for(after_aspect));

    if image_height > geometry.max_row_height {
        let scale = geometry.max_row_height / image_height;
        RowPlan {
            column_width: column_width * scale,
            image_height: geometry.max_row_height,
        }
    } else {
        RowPlan {
            column_width,
            image_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> PageGeometry {
        PageGeometry::from_options(&ReportOptions::default())
    }

    #[test]
    fn columns_split_content_width_minus_gap() {
        let geom = geometry();
        // A4 defaults: (210 - 30 - 6) / 2
        assert!((geom.column_width() - 87.0).abs() < f32::EPSILON);
        assert!(geom.right_column_x() > geom.left_column_x() + geom.column_width());
    }

    #[test]
    fn landscape_photo_fits_column_width() {
        let geom = geometry();
        let plan = plan_row(&geom, Some(4.0 / 3.0), None);
        assert!((plan.column_width - geom.column_width()).abs() < f32::EPSILON);
        assert!((plan.image_height - geom.column_width() / (4.0 / 3.0)).abs() < 0.01);
    }

    #[test]
    fn tall_photo_scales_both_columns_down_by_same_factor() {
        let geom = geometry();
        // Portrait 3:4 would be ~116mm tall at full column width
        let plan = plan_row(&geom, Some(3.0 / 4.0), Some(4.0 / 3.0));
        assert!((plan.image_height - geom.max_row_height).abs() < f32::EPSILON);
        assert!(plan.column_width < geom.column_width());

        let expected_scale = geom.max_row_height / (geom.column_width() / (3.0 / 4.0));
        assert!((plan.column_width - geom.column_width() * expected_scale).abs() < 0.01);
    }

    #[test]
    fn row_with_one_empty_side_uses_placeholder_height_floor() {
        let geom = geometry();
        let plan = plan_row(&geom, None, Some(8.0));
        // Very wide photo is short; the placeholder keeps the row readable
        assert!(plan.image_height >= PLACEHOLDER_HEIGHT);
    }
}

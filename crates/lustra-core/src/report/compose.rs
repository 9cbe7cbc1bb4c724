//! PDF drawing: cover page, comparison sections, header/footer pass.

use image::DynamicImage;
use log::{debug, warn};
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject,
    IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfLayerReference, PdfPageIndex, Point, Px, Rgb,
};

use crate::catalog::FlowCatalog;
use crate::error::{ReportError, Result};
use crate::models::{FlowDefinition, FlowId, Phase, Slot, VehicleInfo};
use crate::store::{FlowImages, ImageStore};

use super::layout::{plan_row, PageGeometry, RowPlan};
use super::{ComposedReport, ReportOptions, ReportStrings, SectionSummary};

const TITLE_FONT_SIZE: f32 = 18.0;
const HEADING_FONT_SIZE: f32 = 13.0;
const SUBHEADING_FONT_SIZE: f32 = 10.0;
const BODY_FONT_SIZE: f32 = 10.0;
const COLUMN_HEADER_FONT_SIZE: f32 = 9.0;
const CAPTION_FONT_SIZE: f32 = 8.0;
const FOOTER_FONT_SIZE: f32 = 8.0;

/// Vertical space a section heading block needs before rows can start.
const SECTION_HEADING_BLOCK: f32 = 18.0;

/// Fonts and strings threaded through the drawing passes.
struct DrawContext<'a> {
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    strings: &'a ReportStrings,
    generated_at: String,
}

/// Cursor over content pages with automatic page breaks.
///
/// The cover never goes through this: the writer starts on a fresh page,
/// which is the forced break between cover and content.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    geometry: PageGeometry,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> PageWriter<'a> {
    fn new(doc: &'a PdfDocumentReference, geometry: PageGeometry) -> Self {
        let (page, layer_idx) = doc.add_page(
            Mm(geometry.page_width),
            Mm(geometry.page_height),
            "Layer 1",
        );
        let layer = doc.get_page(page).get_layer(layer_idx);
        Self {
            doc,
            geometry,
            pages: vec![(page, layer_idx)],
            layer,
            y: geometry.content_top(),
        }
    }

    fn break_page(&mut self) {
        let (page, layer_idx) = self.doc.add_page(
            Mm(self.geometry.page_width),
            Mm(self.geometry.page_height),
            "Layer 1",
        );
        self.layer = self.doc.get_page(page).get_layer(layer_idx);
        self.pages.push((page, layer_idx));
        self.y = self.geometry.content_top();
    }

    /// Breaks to a new page unless `needed` millimeters still fit.
    fn ensure(&mut self, needed: f32) {
        if self.y - needed < self.geometry.content_bottom() {
            self.break_page();
        }
    }
}

/// Composes the full report artifact.
///
/// `selection` fixes the section order (priority order from the catalog);
/// flows absent from the store contribute no section. A single image that
/// fails to decode or place is replaced with an inline marker and counted
/// in the section summary. Only a failure of the PDF backend itself
/// aborts composition.
pub fn compose(
    catalog: &FlowCatalog,
    selection: &[FlowId],
    store: &ImageStore,
    vehicle: &VehicleInfo,
    options: &ReportOptions,
) -> Result<ComposedReport> {
    let geometry = PageGeometry::from_options(options);
    let (doc, cover_page, cover_layer) = PdfDocument::new(
        options.strings.title.as_str(),
        Mm(geometry.page_width),
        Mm(geometry.page_height),
        "Layer 1",
    );

    let ctx = DrawContext {
        font: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(ReportError::pdf)?,
        font_bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(ReportError::pdf)?,
        strings: &options.strings,
        generated_at: jiff::Zoned::now().strftime("%d/%m/%Y %H:%M").to_string(),
    };

    let cover = doc.get_page(cover_page).get_layer(cover_layer);
    draw_cover(&cover, &geometry, &ctx, catalog, selection, vehicle, options);

    let mut writer = PageWriter::new(&doc, geometry);
    let mut sections = Vec::new();
    for id in selection {
        let Some(flow) = catalog.get(id) else { continue };
        let Some(images) = store.flow(id) else { continue };
        if !sections.is_empty() {
            draw_section_separator(&mut writer);
        }
        sections.push(draw_section(&mut writer, &ctx, flow, images));
    }

    stamp_headers_and_footers(&doc, &writer.pages, &geometry, &ctx);

    let page_count = writer.pages.len() + 1;
    debug!("Composed report: {page_count} page(s), {} section(s)", sections.len());
    let bytes = doc.save_to_bytes().map_err(ReportError::pdf)?;
    Ok(ComposedReport {
        bytes,
        page_count,
        sections,
    })
}

// ============================================================================
// Cover page
// ============================================================================

fn draw_cover(
    layer: &PdfLayerReference,
    geometry: &PageGeometry,
    ctx: &DrawContext<'_>,
    catalog: &FlowCatalog,
    selection: &[FlowId],
    vehicle: &VehicleInfo,
    options: &ReportOptions,
) {
    let x = geometry.margin;
    let mut y = geometry.page_height - geometry.margin;

    match try_load_logo(options) {
        Some(logo) => {
            let rgb = logo.to_rgb8();
            let aspect = rgb.width() as f32 / rgb.height() as f32;
            let height_mm = 20.0_f32.min(40.0 / aspect);
            let width_mm = height_mm * aspect;
            embed_rgb(layer, &rgb, x, y - height_mm, width_mm);
        }
        None => draw_logo_placeholder(layer, ctx, x, y - 20.0),
    }
    y -= 28.0;

    layer.use_text(ctx.strings.title.as_str(), TITLE_FONT_SIZE, Mm(x), Mm(y), &ctx.font_bold);
    y -= 10.0;

    set_text_gray(layer, 0.4);
    let date_line = format!("{}{}", ctx.strings.date_prefix, ctx.generated_at);
    layer.use_text(date_line, BODY_FONT_SIZE, Mm(x), Mm(y), &ctx.font);
    set_text_gray(layer, 0.0);
    y -= 8.0;

    if let Some(line) = ctx.strings.vehicle_line(vehicle) {
        layer.use_text(line, BODY_FONT_SIZE, Mm(x), Mm(y), &ctx.font);
        y -= 8.0;
    }

    y -= 4.0;
    layer.use_text(
        ctx.strings.services_heading.as_str(),
        HEADING_FONT_SIZE,
        Mm(x),
        Mm(y),
        &ctx.font_bold,
    );
    y -= 8.0;
    for id in selection {
        let Some(flow) = catalog.get(id) else { continue };
        layer.use_text(format!("•  {}", flow.title), BODY_FONT_SIZE, Mm(x + 2.0), Mm(y), &ctx.font);
        y -= 6.5;
    }
}

/// Best-effort logo lookup over the ordered candidate paths.
fn try_load_logo(options: &ReportOptions) -> Option<DynamicImage> {
    for candidate in &options.logo_candidates {
        match image::open(candidate) {
            Ok(img) => {
                debug!("Cover logo loaded from {}", candidate.display());
                return Some(img);
            }
            Err(e) => {
                debug!("Logo candidate {} unavailable: {e}", candidate.display());
            }
        }
    }
    None
}

/// Outlined block with the brand initial, drawn when no logo resolves.
fn draw_logo_placeholder(layer: &PdfLayerReference, ctx: &DrawContext<'_>, x: f32, y: f32) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.06, 0.09, 0.14, None)));
    layer.set_outline_thickness(0.8);
    draw_box(layer, x, y, 20.0, 12.0);
    let initial = ctx.strings.brand.chars().next().unwrap_or('·');
    layer.use_text(initial.to_string(), HEADING_FONT_SIZE, Mm(x + 7.5), Mm(y + 3.5), &ctx.font_bold);
}

// ============================================================================
// Flow sections
// ============================================================================

fn draw_section(
    writer: &mut PageWriter<'_>,
    ctx: &DrawContext<'_>,
    flow: &FlowDefinition,
    images: &FlowImages,
) -> SectionSummary {
    let geometry = writer.geometry;
    writer.ensure(SECTION_HEADING_BLOCK);

    writer.layer.use_text(
        flow.title.as_str(),
        HEADING_FONT_SIZE,
        Mm(geometry.left_column_x()),
        Mm(writer.y),
        &ctx.font_bold,
    );
    writer.y -= 7.0;
    set_text_gray(&writer.layer, 0.35);
    writer.layer.use_text(
        ctx.strings.comparison_heading(),
        SUBHEADING_FONT_SIZE,
        Mm(geometry.left_column_x()),
        Mm(writer.y),
        &ctx.font,
    );
    set_text_gray(&writer.layer, 0.0);
    writer.y -= 7.0;

    let mut summary = SectionSummary {
        flow: flow.id.clone(),
        title: flow.title.clone(),
        rows_emitted: 0,
        rows_skipped: 0,
        placeholders: 0,
    };

    for index in 0..images.comparison_rows() {
        let before = images.phase(Phase::Before).get(index);
        let after = images.phase(Phase::After).get(index);
        let before_filled = before.is_some_and(|s| !s.is_empty());
        let after_filled = after.is_some_and(|s| !s.is_empty());
        if !before_filled && !after_filled {
            summary.rows_skipped += 1;
            continue;
        }

        let plan = plan_row(
            &geometry,
            before.and_then(Slot::captured).map(|c| c.photo.aspect_ratio()),
            after.and_then(Slot::captured).map(|c| c.photo.aspect_ratio()),
        );
        writer.ensure(plan.required_height());
        summary.placeholders += draw_row(writer, ctx, &plan, before, after);
        summary.rows_emitted += 1;
    }

    summary
}

/// Rule between two flow sections. Never drawn after the last section;
/// the final page ends with its last row.
fn draw_section_separator(writer: &mut PageWriter<'_>) {
    let geometry = writer.geometry;
    // Keep the separator on the same page as the heading it introduces
    writer.ensure(12.0 + SECTION_HEADING_BLOCK);
    writer.layer.set_outline_color(Color::Rgb(Rgb::new(0.7, 0.7, 0.7, None)));
    writer.layer.set_outline_thickness(0.3);
    draw_line(
        &writer.layer,
        geometry.margin,
        writer.y,
        geometry.page_width - geometry.margin,
        writer.y,
    );
    writer.y -= 8.0;
}

/// Draws one comparison row; returns the number of failure markers used.
fn draw_row(
    writer: &mut PageWriter<'_>,
    ctx: &DrawContext<'_>,
    plan: &RowPlan,
    before: Option<&Slot>,
    after: Option<&Slot>,
) -> usize {
    let geometry = writer.geometry;
    let y_top = writer.y;
    let columns = [
        (geometry.left_column_x(), ctx.strings.before_heading.as_str(), before),
        (geometry.right_column_x(), ctx.strings.after_heading.as_str(), after),
    ];

    let image_top = y_top - RowPlan::HEADER_LINE;
    let caption_y = image_top - plan.image_height - 4.0;
    let mut placeholders = 0;

    for (x, heading, slot) in columns {
        writer
            .layer
            .use_text(heading, COLUMN_HEADER_FONT_SIZE, Mm(x), Mm(y_top - 3.5), &ctx.font_bold);

        match slot.and_then(Slot::captured) {
            Some(capture) => {
                if let Err(e) = place_photo(&writer.layer, &capture.photo.bytes, x, image_top, plan) {
                    warn!("Image placement failed, substituting marker: {e}");
                    writer.layer.use_text(
                        ctx.strings.image_failed.as_str(),
                        COLUMN_HEADER_FONT_SIZE,
                        Mm(x + 2.0),
                        Mm(image_top - 6.0),
                        &ctx.font,
                    );
                    placeholders += 1;
                }
            }
            None => {
                set_text_gray(&writer.layer, 0.55);
                writer.layer.use_text(
                    ctx.strings.no_photo.as_str(),
                    COLUMN_HEADER_FONT_SIZE,
                    Mm(x + 2.0),
                    Mm(image_top - plan.image_height / 2.0),
                    &ctx.font,
                );
                set_text_gray(&writer.layer, 0.0);
            }
        }

        let caption = slot
            .and_then(Slot::captured)
            .map(|c| c.label.as_str())
            .unwrap_or(ctx.strings.empty_caption.as_str());
        set_text_gray(&writer.layer, 0.35);
        writer
            .layer
            .use_text(caption, CAPTION_FONT_SIZE, Mm(x), Mm(caption_y), &ctx.font);
        set_text_gray(&writer.layer, 0.0);
    }

    writer.y = y_top - plan.required_height();
    placeholders
}

/// Decodes stored JPEG bytes and places them top-aligned in a column.
fn place_photo(
    layer: &PdfLayerReference,
    jpeg_bytes: &[u8],
    x: f32,
    top_y: f32,
    plan: &RowPlan,
) -> Result<()> {
    let decoded = image::load_from_memory(jpeg_bytes)
        .map_err(|e| ReportError::image("stored photo failed to decode", e))?;
    let rgb = decoded.to_rgb8();
    let aspect = rgb.width() as f32 / rgb.height() as f32;
    let width_mm = plan.column_width;
    let height_mm = width_mm / aspect;
    embed_rgb(layer, &rgb, x, top_y - height_mm, width_mm);
    Ok(())
}

// ============================================================================
// Header/footer pass
// ============================================================================

/// Stamps the running header and footer onto every content page.
///
/// A second pass over already-created pages: the footer needs the final
/// total page count, which only exists once all content is drawn.
fn stamp_headers_and_footers(
    doc: &PdfDocumentReference,
    pages: &[(PdfPageIndex, PdfLayerIndex)],
    geometry: &PageGeometry,
    ctx: &DrawContext<'_>,
) {
    let total = pages.len() + 1;
    for (offset, (page, layer_idx)) in pages.iter().enumerate() {
        let layer = doc.get_page(*page).get_layer(*layer_idx);
        let page_number = offset + 2;

        // Header: brand mark and divider
        let header_y = geometry.page_height - geometry.margin;
        layer.use_text(
            ctx.strings.brand.as_str(),
            SUBHEADING_FONT_SIZE,
            Mm(geometry.margin),
            Mm(header_y - 4.0),
            &ctx.font_bold,
        );
        layer.set_outline_color(Color::Rgb(Rgb::new(0.06, 0.09, 0.14, None)));
        layer.set_outline_thickness(0.5);
        draw_line(
            &layer,
            geometry.margin,
            header_y - 7.0,
            geometry.page_width - geometry.margin,
            header_y - 7.0,
        );

        // Footer: date left, page counter right
        let footer_y = geometry.margin - 4.0;
        set_text_gray(&layer, 0.45);
        layer.use_text(
            ctx.generated_at.as_str(),
            FOOTER_FONT_SIZE,
            Mm(geometry.margin),
            Mm(footer_y),
            &ctx.font,
        );
        layer.use_text(
            ctx.strings.page_label(page_number, total),
            FOOTER_FONT_SIZE,
            Mm(geometry.page_width - geometry.margin - 24.0),
            Mm(footer_y),
            &ctx.font,
        );
        set_text_gray(&layer, 0.0);
    }
}

// ============================================================================
// Drawing utilities
// ============================================================================

fn draw_line(layer: &PdfLayerReference, x1: f32, y1: f32, x2: f32, y2: f32) {
    let points = vec![
        (Point::new(Mm(x1), Mm(y1)), false),
        (Point::new(Mm(x2), Mm(y2)), false),
    ];
    layer.add_line(Line {
        points,
        is_closed: false,
    });
}

fn draw_box(layer: &PdfLayerReference, x: f32, y: f32, width: f32, height: f32) {
    draw_line(layer, x, y, x + width, y);
    draw_line(layer, x + width, y, x + width, y + height);
    draw_line(layer, x + width, y + height, x, y + height);
    draw_line(layer, x, y + height, x, y);
}

fn set_text_gray(layer: &PdfLayerReference, level: f32) {
    layer.set_fill_color(Color::Rgb(Rgb::new(level, level, level, None)));
}

/// Embeds an RGB bitmap at a physical width, bottom-left anchored.
fn embed_rgb(layer: &PdfLayerReference, rgb: &image::RgbImage, x: f32, y: f32, width_mm: f32) {
    let (width_px, height_px) = rgb.dimensions();
    let xobject = ImageXObject {
        width: Px(width_px as usize),
        height: Px(height_px as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: rgb.as_raw().clone(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    };
    // DPI chosen so width_px renders at exactly width_mm
    let dpi = width_px as f32 / (width_mm / 25.4);
    Image::from(xobject).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x)),
            translate_y: Some(Mm(y)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );
}

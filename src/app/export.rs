//! PDF export: rasterize every selected page, embed the bitmaps in a
//! multi-page document, and stamp optional vector page numbers.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::RgbImage;
use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, IndirectFontRef, Mm,
    PdfDocument, PdfLayerReference, Px,
};

use super::error::{AppError, Result};
use super::settings::PageSettings;
use super::worksheet::{Page, Worksheet};

/// Default file name offered in the save dialog.
pub const WORKSHEET_FILE_NAME: &str = "math-worksheet.pdf";

const PAGE_NUMBER_SIZE_PT: f64 = 12.0;
/// Page numbers sit this far above the sheet's bottom margin line.
const PAGE_NUMBER_OFFSET_IN: f64 = 0.3;
/// Every Helvetica digit advances 556/1000 em.
const HELVETICA_DIGIT_EM: f64 = 0.556;
const PT_TO_MM: f64 = 0.352_778;
/// Density used for the embed math; any consistent value cancels out.
const EMBED_DPI: f64 = 150.0;

/// Seam between the exporter and whatever produces page bitmaps, so the
/// export sequence is testable without a display.
pub trait PageRasterizer {
    fn rasterize(&mut self, page: &Page, settings: &PageSettings) -> Result<RgbImage>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages_written: usize,
    pub path: PathBuf,
}

/// Export the worksheet to a PDF at `path`.
///
/// Pages are processed strictly in worksheet order, one rasterization at a
/// time. A rasterization failure aborts the whole export and nothing is
/// written.
pub fn export_pdf<R: PageRasterizer>(
    sheet: &Worksheet,
    settings: &PageSettings,
    rasterizer: &mut R,
    path: &Path,
) -> Result<ExportSummary> {
    let selected: Vec<&Page> = sheet
        .pages()
        .iter()
        .filter(|p| settings.pages_to_download.includes(p.display_number))
        .collect();
    if selected.is_empty() {
        return Err(AppError::Pdf("no pages match the export selection".to_string()));
    }

    let (w_mm, h_mm) = {
        let (w, h) = settings.page_size.dims_mm();
        (w as f64, h as f64)
    };
    let (doc, first_page, first_layer) =
        PdfDocument::new("Math Worksheet", Mm(w_mm), Mm(h_mm), "Page 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Pdf(e.to_string()))?;

    for (i, page) in selected.iter().copied().enumerate() {
        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (p, l) = doc.add_page(Mm(w_mm), Mm(h_mm), format!("Page {}", i + 1));
            doc.get_page(p).get_layer(l)
        };

        let bitmap = rasterizer.rasterize(page, settings).map_err(|e| match e {
            AppError::Raster(msg) => {
                AppError::Raster(format!("page {}: {}", page.display_number, msg))
            }
            other => other,
        })?;

        place_page_bitmap(&layer, &bitmap, settings, w_mm, h_mm);

        if settings.numbering.enabled {
            let label = (settings.numbering.start_from + i as u32).to_string();
            draw_page_number(&layer, &font, &label, settings, w_mm);
        }
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| AppError::Pdf(e.to_string()))?;

    Ok(ExportSummary { pages_written: selected.len(), path: path.to_path_buf() })
}

/// Place one page bitmap at the margin origin, scaled to the page width
/// with its aspect ratio preserved.
fn place_page_bitmap(
    layer: &PdfLayerReference,
    bitmap: &RgbImage,
    settings: &PageSettings,
    page_w_mm: f64,
    page_h_mm: f64,
) {
    let px_w = bitmap.width().max(1) as f64;
    let px_h = bitmap.height() as f64;
    let m = &settings.margins;

    let target_w_mm = page_w_mm - in_to_mm(m.left + m.right);
    let scaled_h_mm = px_h * page_w_mm / px_w;
    let target_h_mm = scaled_h_mm - in_to_mm(m.top + m.bottom);

    let native_w_mm = px_w * 25.4 / EMBED_DPI;
    let native_h_mm = px_h * 25.4 / EMBED_DPI;

    let xobject = ImageXObject {
        width: Px(bitmap.width() as usize),
        height: Px(bitmap.height() as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: bitmap.as_raw().clone(),
        image_filter: None,
        smask: None,
        clipping_bbox: None,
    };

    Image::from(xobject).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(in_to_mm(m.left))),
            translate_y: Some(Mm(page_h_mm - in_to_mm(m.top) - target_h_mm)),
            scale_x: Some(target_w_mm / native_w_mm),
            scale_y: Some(target_h_mm / native_h_mm),
            dpi: Some(EMBED_DPI),
            ..Default::default()
        },
    );
}

fn draw_page_number(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    label: &str,
    settings: &PageSettings,
    page_w_mm: f64,
) {
    let (x_mm, y_mm) = page_number_position(settings, page_w_mm, label);
    layer.use_text(label, PAGE_NUMBER_SIZE_PT, Mm(x_mm), Mm(y_mm), font);
}

/// Baseline of a page-number label, in mm from the page's bottom-left
/// corner: centered or right-aligned, just inside the bottom margin band.
fn page_number_position(settings: &PageSettings, page_w_mm: f64, label: &str) -> (f64, f64) {
    let text_w_mm =
        label.chars().count() as f64 * HELVETICA_DIGIT_EM * PAGE_NUMBER_SIZE_PT * PT_TO_MM;
    let x_mm = if settings.numbering.centered {
        (page_w_mm - text_w_mm) / 2.0
    } else {
        page_w_mm - in_to_mm(settings.margins.right) - text_w_mm
    };
    let y_mm = (settings.margins.bottom as f64 - PAGE_NUMBER_OFFSET_IN).max(0.0) * 25.4;
    (x_mm, y_mm)
}

fn in_to_mm(inches: f32) -> f64 {
    inches as f64 * 25.4
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::generator::Operator;
    use crate::app::settings::PageSelection;

    /// Produces a flat white bitmap and records which pages were asked for.
    struct StubRasterizer {
        calls: Vec<u32>,
        fail_on: Option<u32>,
    }

    impl StubRasterizer {
        fn new() -> Self {
            Self { calls: Vec::new(), fail_on: None }
        }
    }

    impl PageRasterizer for StubRasterizer {
        fn rasterize(&mut self, page: &Page, _settings: &PageSettings) -> Result<RgbImage> {
            self.calls.push(page.display_number);
            if self.fail_on == Some(page.display_number) {
                return Err(AppError::Raster("stub failure".to_string()));
            }
            Ok(RgbImage::from_pixel(40, 52, image::Rgb([255, 255, 255])))
        }
    }

    fn three_page_sheet() -> Worksheet {
        let mut sheet = Worksheet::new(Operator::Add, 4);
        sheet.add_page();
        sheet.add_page();
        sheet
    }

    #[test]
    fn test_export_one_pdf_page_per_worksheet_page() {
        let sheet = three_page_sheet();
        let settings = PageSettings::default();
        let mut rasterizer = StubRasterizer::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(WORKSHEET_FILE_NAME);

        let summary = export_pdf(&sheet, &settings, &mut rasterizer, &path).unwrap();

        assert_eq!(summary.pages_written, 3);
        assert_eq!(summary.path, path);
        assert_eq!(rasterizer.calls, vec![1, 2, 3]);

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_export_honors_page_selection() {
        let sheet = three_page_sheet();
        let settings = PageSettings {
            pages_to_download: PageSelection::Pages(vec![1, 3]),
            ..Default::default()
        };
        let mut rasterizer = StubRasterizer::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subset.pdf");

        let summary = export_pdf(&sheet, &settings, &mut rasterizer, &path).unwrap();

        assert_eq!(summary.pages_written, 2);
        assert_eq!(rasterizer.calls, vec![1, 3]);
    }

    #[test]
    fn test_raster_failure_aborts_export() {
        let sheet = three_page_sheet();
        let settings = PageSettings::default();
        let mut rasterizer = StubRasterizer { calls: Vec::new(), fail_on: Some(2) };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aborted.pdf");

        let err = export_pdf(&sheet, &settings, &mut rasterizer, &path).unwrap_err();

        assert!(matches!(err, AppError::Raster(_)));
        assert!(err.to_string().contains("page 2"));
        // Page 3 was never rasterized and no file was written.
        assert_eq!(rasterizer.calls, vec![1, 2]);
        assert!(!path.exists());
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        let sheet = Worksheet::new(Operator::Add, 4);
        let settings = PageSettings {
            pages_to_download: PageSelection::Pages(vec![9]),
            ..Default::default()
        };
        let mut rasterizer = StubRasterizer::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.pdf");

        let err = export_pdf(&sheet, &settings, &mut rasterizer, &path).unwrap_err();

        assert!(matches!(err, AppError::Pdf(_)));
        assert!(rasterizer.calls.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_page_number_centered_in_bottom_margin() {
        let settings = PageSettings::default(); // centered, 0.5in margins, letter
        let (x, y) = page_number_position(&settings, 215.9, "1");

        let text_w = HELVETICA_DIGIT_EM * PAGE_NUMBER_SIZE_PT * PT_TO_MM;
        assert!((x - (215.9 - text_w) / 2.0).abs() < 1e-6);
        // 0.2in above the bottom edge, inside the 0.5in margin band
        assert!((y - 5.08).abs() < 1e-6);
    }

    #[test]
    fn test_page_number_right_aligned() {
        let mut settings = PageSettings::default();
        settings.numbering.centered = false;
        let (x, _) = page_number_position(&settings, 215.9, "12");

        let text_w = 2.0 * HELVETICA_DIGIT_EM * PAGE_NUMBER_SIZE_PT * PT_TO_MM;
        assert!((x - (215.9 - 12.7 - text_w)).abs() < 1e-6);
    }

    #[test]
    fn test_page_number_never_below_the_page() {
        let mut settings = PageSettings::default();
        settings.margins.bottom = 0.1;
        let (_, y) = page_number_position(&settings, 215.9, "1");
        assert_eq!(y, 0.0);
    }

    #[test]
    fn test_numbering_disabled_still_exports() {
        let sheet = Worksheet::new(Operator::Subtract, 4);
        let mut settings = PageSettings::default();
        settings.numbering.enabled = false;
        let mut rasterizer = StubRasterizer::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unnumbered.pdf");

        let summary = export_pdf(&sheet, &settings, &mut rasterizer, &path).unwrap();
        assert_eq!(summary.pages_written, 1);
        assert!(path.exists());
    }
}

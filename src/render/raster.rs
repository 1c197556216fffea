//! Offscreen page rasterization.
//!
//! The exporter only knows the [`PageRasterizer`] seam; this module is the
//! FLTK-backed implementation. A page is painted into an `ImageSurface` at
//! print resolution and handed back as an RGB8 bitmap.

use fltk::enums::ColorDepth;
use fltk::prelude::*;
use fltk::surface::ImageSurface;
use image::RgbImage;

use super::layout::Rect;
use super::painter;
use crate::app::error::{AppError, Result};
use crate::app::export::PageRasterizer;
use crate::app::settings::PageSettings;
use crate::app::worksheet::Page;

/// Resolution the export bitmaps are rendered at.
pub const RASTER_DPI: f32 = 150.0;

pub struct FltkRasterizer;

impl FltkRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Pixel dimensions of one page at [`RASTER_DPI`].
    pub fn pixel_dims(settings: &PageSettings) -> (i32, i32) {
        let (w_in, h_in) = settings.page_size.dims_in();
        ((w_in * RASTER_DPI).round() as i32, (h_in * RASTER_DPI).round() as i32)
    }
}

impl Default for FltkRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRasterizer for FltkRasterizer {
    fn rasterize(&mut self, page: &Page, settings: &PageSettings) -> Result<RgbImage> {
        let (w, h) = Self::pixel_dims(settings);

        let surface = ImageSurface::new(w, h, false);
        ImageSurface::push_current(&surface);
        painter::draw_sheet(page, Rect::new(0, 0, w, h));
        let captured = surface.image();
        ImageSurface::pop_current();

        let captured = captured
            .ok_or_else(|| AppError::Raster("offscreen surface capture failed".to_string()))?;
        let rgb = captured
            .convert(ColorDepth::Rgb8)
            .map_err(|e| AppError::Raster(e.to_string()))?;

        let (out_w, out_h) = (rgb.data_w() as u32, rgb.data_h() as u32);
        RgbImage::from_raw(out_w, out_h, rgb.to_rgb_data())
            .ok_or_else(|| AppError::Raster("captured buffer size mismatch".to_string()))
    }
}

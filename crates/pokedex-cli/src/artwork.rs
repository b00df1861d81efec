//! Artwork decoding and half-block rasterization.
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as
//! the foreground of `▀`, the lower one as the background.
use anyhow::{Context, Result};
use image::{RgbaImage, imageops::FilterType};

/// Pixels with alpha below this are treated as transparent.
const ALPHA_CUTOFF: u8 = 128;

/// Decoded artwork for one URL.
#[derive(Clone, Debug)]
pub struct Artwork {
    pub url: String,
    pub image: RgbaImage,
}

impl Artwork {
    pub fn decode(url: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let url = url.into();
        let image = image::load_from_memory(bytes)
            .with_context(|| format!("failed to decode artwork {url}"))?
            .into_rgba8();
        Ok(Self { url, image })
    }
}

/// One terminal cell worth of pixels; `None` is transparent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HalfCell {
    pub top: Option<[u8; 3]>,
    pub bottom: Option<[u8; 3]>,
}

/// Scaled artwork, centered inside a `cols` x `rows` cell area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    pub offset_x: u16,
    pub offset_y: u16,
    pub width: u16,
    pub height: u16,
    pub cells: Vec<HalfCell>,
}

impl CellGrid {
    pub fn cell(&self, x: u16, y: u16) -> Option<HalfCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

/// Scales `image` to fit the area, preserving aspect ratio.
///
/// Returns `None` when the area or the image is empty.
pub fn fit_cells(image: &RgbaImage, cols: u16, rows: u16) -> Option<CellGrid> {
    let (img_w, img_h) = image.dimensions();
    if cols == 0 || rows == 0 || img_w == 0 || img_h == 0 {
        return None;
    }

    let max_w = cols as f64;
    let max_h = rows as f64 * 2.0;
    let scale = (max_w / img_w as f64).min(max_h / img_h as f64);
    let px_w = ((img_w as f64 * scale).round() as u32).clamp(1, cols as u32);
    let px_h = ((img_h as f64 * scale).round() as u32).clamp(1, rows as u32 * 2);

    let scaled = image::imageops::resize(image, px_w, px_h, FilterType::Triangle);

    let width = px_w as u16;
    let height = px_h.div_ceil(2) as u16;
    let sample = |x: u32, y: u32| -> Option<[u8; 3]> {
        if y >= px_h {
            return None;
        }
        let [r, g, b, a] = scaled.get_pixel(x, y).0;
        (a >= ALPHA_CUTOFF).then_some([r, g, b])
    };

    let mut cells = Vec::with_capacity(width as usize * height as usize);
    for row in 0..height as u32 {
        for x in 0..px_w {
            cells.push(HalfCell {
                top: sample(x, row * 2),
                bottom: sample(x, row * 2 + 1),
            });
        }
    }

    Some(CellGrid {
        offset_x: (cols - width) / 2,
        offset_y: (rows - height) / 2,
        width,
        height,
        cells,
    })
}

//! Bitmap big-text backend: rasterize the text onto a pixel grid and feed it
//! through the half-block renderer
//!
//! Tries a fixed list of known bold TTF paths with `fontdue`; when none
//! resolve, falls back to a small built-in 5x7 dot-matrix font so the stage
//! still succeeds on fontless systems. The text is drawn red on a black
//! canvas, so the half-block output inherits red-on-black per-pixel styling.

use std::fs;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use fontdue::{Font, FontSettings};

use super::BannerBackend;
use crate::canvas::halfblock;
use crate::canvas::pixmap::{PixelGrid, Rgb};
use crate::errors::{FetchError, Result};

/// Known bold system fonts, probed in order
const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
];

/// Canvas margin around the drawn text, in pixels
const MARGIN: u32 = 5;

/// Rasterizes text into a pixel grid and renders it as half blocks.
#[derive(Debug, Default)]
pub struct BitmapBackend;

impl BitmapBackend {
    pub fn new() -> Self {
        Self
    }
}

impl BannerBackend for BitmapBackend {
    fn name(&self) -> &'static str {
        "bitmap"
    }

    fn render(&self, text: &str, size_hint: f32) -> Option<Vec<String>> {
        let grid = match load_system_font() {
            Some(font) => rasterize_truetype(&font, text, size_hint)?,
            None => rasterize_builtin(text)?,
        };
        let lines = halfblock::render(&grid);
        if lines.is_empty() {
            None
        } else {
            Some(lines)
        }
    }
}

/// Load the first readable font from the known path list.
fn load_system_font() -> Option<Font> {
    for path in FONT_PATHS {
        match load_font_file(path) {
            Ok(font) => {
                tracing::debug!("bitmap backend using font {}", path);
                return Some(font);
            }
            Err(e) => tracing::debug!("{}", e),
        }
    }
    None
}

fn load_font_file(path: &str) -> Result<Font> {
    let bytes = fs::read(path)?;
    Font::from_bytes(bytes, FontSettings::default()).map_err(|message| FetchError::FontLoad {
        path: path.into(),
        message: message.to_string(),
    })
}

/// Draw `text` at `px` points in red on a black canvas sized to the text
/// extent plus margin. `None` when the text has no visible glyphs.
fn rasterize_truetype(font: &Font, text: &str, px: f32) -> Option<PixelGrid> {
    let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings::default());
    layout.append(&[font], &TextStyle::new(text, px, 0));

    // Text extent over visible glyph boxes
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for glyph in layout.glyphs() {
        if glyph.width == 0 || glyph.height == 0 {
            continue;
        }
        min_x = min_x.min(glyph.x);
        min_y = min_y.min(glyph.y);
        max_x = max_x.max(glyph.x + glyph.width as f32);
        max_y = max_y.max(glyph.y + glyph.height as f32);
    }
    if min_x > max_x {
        return None;
    }

    let width = (max_x - min_x).ceil() as u32 + 2 * MARGIN;
    let height = (max_y - min_y).ceil() as u32 + 2 * MARGIN;
    let mut grid = PixelGrid::filled(width, height, Rgb::BLACK);

    for glyph in layout.glyphs() {
        if glyph.width == 0 || glyph.height == 0 {
            continue;
        }
        let (metrics, coverage) = font.rasterize_config(glyph.key);
        let origin_x = (glyph.x - min_x) as u32 + MARGIN;
        let origin_y = (glyph.y - min_y) as u32 + MARGIN;
        for (index, alpha) in coverage.iter().enumerate() {
            if *alpha == 0 {
                continue;
            }
            let dx = (index % metrics.width) as u32;
            let dy = (index / metrics.width) as u32;
            grid.set(origin_x + dx, origin_y + dy, Rgb::new(*alpha, 0, 0));
        }
    }

    Some(grid)
}

/// Render `text` with the built-in 5x7 font, one pixel per dot.
///
/// Uppercases the input; characters outside A-Z/0-9 advance as blanks.
fn rasterize_builtin(text: &str) -> Option<PixelGrid> {
    const CELL_W: u32 = 6; // 5 columns + 1 spacing
    const CELL_H: u32 = 7;

    let upper = text.to_uppercase();
    let count = upper.chars().count() as u32;
    if count == 0 {
        return None;
    }

    let width = count * CELL_W + 1;
    let height = CELL_H + 2;
    let mut grid = PixelGrid::filled(width, height, Rgb::BLACK);

    for (index, ch) in upper.chars().enumerate() {
        let Some(rows) = builtin_glyph(ch) else {
            continue;
        };
        let origin_x = 1 + index as u32 * CELL_W;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..5u32 {
                if bits & (0x10 >> col) != 0 {
                    grid.set(origin_x + col, 1 + row as u32, Rgb::RED);
                }
            }
        }
    }

    Some(grid)
}

/// 5x7 dot-matrix rows for the built-in font, MSB of the low 5 bits leftmost.
#[rustfmt::skip]
fn builtin_glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        _ => return None,
    };
    Some(rows)
}

//! Half-block renderer - packs two vertical pixels into one terminal cell
//!
//! Each output row covers two pixel rows: the upper pixel becomes the
//! foreground color and the lower pixel the background color of a `▀`
//! (upper half block) cell. This doubles the effective vertical resolution
//! per terminal row, at the cost of requiring an even pixel height.

use super::ansi::sgr;
use super::pixmap::{PixelGrid, Rgb};

/// Upper half block: top = fg, bottom = bg
const UPPER_HALF: char = '▀';
/// Full block, used when the grid is too short to pair rows
const FULL: char = '█';

/// Convert a pixel grid into printable glyph lines.
///
/// Rows are processed in pairs (0,1), (2,3), ... stopping before any row
/// without a partner, so an even height H yields exactly H/2 lines and an
/// odd height H >= 3 yields (H-1)/2. A grid with H < 2 cannot be paired and
/// collapses to a single line of full blocks colored from row 0. Every line
/// is terminated with a style reset.
///
/// An empty grid (W == 0 or H == 0) yields no lines.
pub fn render(grid: &PixelGrid) -> Vec<String> {
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return Vec::new();
    }

    if height < 2 {
        let mut line = String::new();
        for x in 0..width {
            let Rgb { r, g, b } = grid.get(x, 0).unwrap_or(Rgb::BLACK);
            line.push_str(&sgr::fg_color_rgb(r, g, b));
            line.push(FULL);
        }
        line.push_str(sgr::RESET);
        return vec![line];
    }

    let mut lines = Vec::with_capacity((height / 2) as usize);
    for y in (0..height - 1).step_by(2) {
        let mut line = String::new();
        for x in 0..width {
            let top = grid.get(x, y).unwrap_or(Rgb::BLACK);
            let bot = grid.get(x, y + 1).unwrap_or(Rgb::BLACK);
            line.push_str(&sgr::fg_color_rgb(top.r, top.g, top.b));
            line.push_str(&sgr::bg_color_rgb(bot.r, bot.g, bot.b));
            line.push(UPPER_HALF);
        }
        line.push_str(sgr::RESET);
        lines.push(line);
    }
    lines
}

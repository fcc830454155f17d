//! In-process FIGfont backend, the preferred big-text renderer

use figlet_rs::FIGfont;

use super::{stylize_block_lines, BannerBackend};

/// Renders block letters with the bundled FIGlet "standard" font.
#[derive(Debug, Default)]
pub struct FigFontBackend;

impl FigFontBackend {
    pub fn new() -> Self {
        Self
    }
}

impl BannerBackend for FigFontBackend {
    fn name(&self) -> &'static str {
        "figfont"
    }

    fn render(&self, text: &str, _size_hint: f32) -> Option<Vec<String>> {
        let font = FIGfont::standard().ok()?;
        let figure = font.convert(text)?;
        stylize_block_lines(&figure.to_string())
    }
}

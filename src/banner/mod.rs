//! Big-text banner rendering with an ordered backend fallback chain
//!
//! Hierarchical rendering, first success wins:
//! 1. FIGfont (in-process figlet font) - best quality block letters
//! 2. External `figlet` command - same output via subprocess
//! 3. Bitmap rasterization (TTF or built-in font) through the half-block renderer
//! 4. Plain uppercase text - cannot fail
//!
//! Backend unavailability is never an error: each stage answers `None` and
//! the chain moves on, so rendering as a whole is total.

mod bitmap;
mod command;
mod figfont;
mod plain;

pub use bitmap::BitmapBackend;
pub use command::FigletCommandBackend;
pub use figfont::FigFontBackend;
pub use plain::PlainTextBackend;

use crate::canvas::ansi::sgr;

/// A big-text rendering strategy.
///
/// `render` returns `None` when the backend's capability is unavailable or
/// produced nothing usable; the caller then tries the next backend.
pub trait BannerBackend {
    /// Name of this backend, for trace output
    fn name(&self) -> &'static str;

    /// Render `text` into styled logo lines, or `None` to fall through
    fn render(&self, text: &str, size_hint: f32) -> Option<Vec<String>>;
}

/// The default backend chain, in priority order.
pub fn default_backends() -> Vec<Box<dyn BannerBackend>> {
    vec![
        Box::new(FigFontBackend::new()),
        Box::new(FigletCommandBackend::new()),
        Box::new(BitmapBackend::new()),
        Box::new(PlainTextBackend::new()),
    ]
}

/// Render `text` as a large banner using the default backend chain.
///
/// Always produces at least one non-empty line for non-empty input.
pub fn render_big_text(text: &str, size_hint: f32) -> Vec<String> {
    render_with(&default_backends(), text, size_hint)
}

/// Render `text` with an explicit backend chain, first success wins.
pub fn render_with(
    backends: &[Box<dyn BannerBackend>],
    text: &str,
    size_hint: f32,
) -> Vec<String> {
    for backend in backends {
        match backend.render(text, size_hint) {
            Some(lines) => {
                tracing::debug!("banner backend '{}' produced {} lines", backend.name(), lines.len());
                return lines;
            }
            None => {
                tracing::debug!("banner backend '{}' unavailable, trying next", backend.name());
            }
        }
    }
    // Only reachable with an explicitly empty chain; the plain backend never fails.
    vec![stylize_plain(text)]
}

/// Bold red single line, the shape of the last-resort fallback.
pub(crate) fn stylize_plain(text: &str) -> String {
    format!("{}{}{}{}", sgr::BOLD, sgr::RED, text.to_uppercase(), sgr::RESET)
}

/// Split figlet-style output into lines, drop trailing blank lines, and wrap
/// each line in bold red with a reset. `None` when nothing printable remains.
pub(crate) fn stylize_block_lines(rendered: &str) -> Option<Vec<String>> {
    let mut lines: Vec<&str> = rendered.trim_end_matches('\n').lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return None;
    }
    Some(
        lines
            .into_iter()
            .map(|line| format!("{}{}{}{}", sgr::BOLD, sgr::RED, line, sgr::RESET))
            .collect(),
    )
}

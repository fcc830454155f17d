//! ANSI terminal code definitions and width math
//!
//! Constants and helpers for the escape sequences glyphfetch emits: 24-bit
//! SGR color codes for the half-block renderer and the fixed style table used
//! by the banner and info panel. Also strips sequences back out to compute
//! the visible width of a styled line, which is all the layout code needs.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

lazy_static! {
    /// Precompiled regex for ANSI escape sequences
    static ref ANSI_REGEX: Regex =
        Regex::new(r"\x1B\[[0-9;]*[A-Za-z]").unwrap();
}

/// SGR (Select Graphic Rendition) sequences used for output styling
pub mod sgr {
    /// Reset all attributes
    pub const RESET: &str = "\x1B[0m";

    /// Bold
    pub const BOLD: &str = "\x1B[1m";

    /// Red foreground (basic palette)
    pub const RED: &str = "\x1B[31m";

    /// Green foreground (basic palette)
    pub const GREEN: &str = "\x1B[32m";

    /// 24-bit Foreground Color (RGB)
    pub fn fg_color_rgb(r: u8, g: u8, b: u8) -> String {
        format!("\x1B[38;2;{};{};{}m", r, g, b)
    }

    /// 24-bit Background Color (RGB)
    pub fn bg_color_rgb(r: u8, g: u8, b: u8) -> String {
        format!("\x1B[48;2;{};{};{}m", r, g, b)
    }
}

/// Strip all ANSI escape sequences from text
///
/// Handles zero, one, or many embedded sequences; stripping twice equals
/// stripping once.
pub fn strip_ansi_codes(text: &str) -> String {
    ANSI_REGEX.replace_all(text, "").to_string()
}

/// Visible width of a styled line: the terminal columns the text occupies
/// once every escape sequence is removed.
///
/// Used for column alignment, never for correctness-critical parsing.
pub fn visible_width(text: &str) -> usize {
    strip_ansi_codes(text).width()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fg_color_rgb() {
        assert_eq!(sgr::fg_color_rgb(255, 0, 10), "\x1B[38;2;255;0;10m");
    }

    #[test]
    fn test_bg_color_rgb() {
        assert_eq!(sgr::bg_color_rgb(0, 128, 255), "\x1B[48;2;0;128;255m");
    }

    #[test]
    fn test_strip_plain_text() {
        assert_eq!(strip_ansi_codes("hello"), "hello");
    }

    #[test]
    fn test_strip_single_sequence() {
        let styled = format!("{}hello{}", sgr::RED, sgr::RESET);
        assert_eq!(strip_ansi_codes(&styled), "hello");
    }

    #[test]
    fn test_strip_many_sequences() {
        let styled = format!(
            "{}{}a{}b{}",
            sgr::BOLD,
            sgr::fg_color_rgb(1, 2, 3),
            sgr::bg_color_rgb(4, 5, 6),
            sgr::RESET
        );
        assert_eq!(strip_ansi_codes(&styled), "ab");
    }

    #[test]
    fn test_strip_is_idempotent() {
        let styled = format!("{}x{}y{}", sgr::GREEN, sgr::BOLD, sgr::RESET);
        let once = strip_ansi_codes(&styled);
        let twice = strip_ansi_codes(&once);
        assert_eq!(once, twice);
        assert_eq!(visible_width(&styled), visible_width(&once));
    }

    #[test]
    fn test_visible_width_counts_half_blocks() {
        let line = format!(
            "{}{}▀▀▀{}",
            sgr::fg_color_rgb(255, 0, 0),
            sgr::bg_color_rgb(0, 0, 0),
            sgr::RESET
        );
        assert_eq!(visible_width(&line), 3);
    }

    #[test]
    fn test_visible_width_empty() {
        assert_eq!(visible_width(""), 0);
        assert_eq!(visible_width(sgr::RESET), 0);
    }
}

//! Last-resort banner backend: a single uppercase line

use super::{stylize_plain, BannerBackend};

/// Uppercases the input and styles it bold red. Never fails, which keeps the
/// whole banner chain total.
#[derive(Debug, Default)]
pub struct PlainTextBackend;

impl PlainTextBackend {
    pub fn new() -> Self {
        Self
    }
}

impl BannerBackend for PlainTextBackend {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn render(&self, text: &str, _size_hint: f32) -> Option<Vec<String>> {
        Some(vec![stylize_plain(text)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ansi::sgr;

    #[test]
    fn test_uppercases_and_styles() {
        let backend = PlainTextBackend::new();
        let lines = backend.render("hello", 80.0).unwrap();
        assert_eq!(
            lines,
            vec![format!("{}{}HELLO{}", sgr::BOLD, sgr::RED, sgr::RESET)]
        );
    }
}

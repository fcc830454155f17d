//! External `figlet` subprocess backend

use std::process::Command;

use super::{stylize_block_lines, BannerBackend};

/// Invokes a figlet-style external command and styles its output.
///
/// Spawn failure, a non-zero exit, or non-UTF-8 output all mean "try the
/// next backend" - detection failure never propagates as an error.
#[derive(Debug)]
pub struct FigletCommandBackend {
    program: &'static str,
}

impl FigletCommandBackend {
    pub fn new() -> Self {
        Self { program: "figlet" }
    }

    /// Probe a different program name; used by tests
    pub fn with_program(program: &'static str) -> Self {
        Self { program }
    }
}

impl Default for FigletCommandBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl BannerBackend for FigletCommandBackend {
    fn name(&self) -> &'static str {
        "figlet-command"
    }

    fn render(&self, text: &str, _size_hint: f32) -> Option<Vec<String>> {
        let output = Command::new(self.program).arg(text).output().ok()?;
        if !output.status.success() {
            return None;
        }
        let rendered = String::from_utf8(output.stdout).ok()?;
        stylize_block_lines(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_falls_through() {
        let backend = FigletCommandBackend::with_program("glyphfetch-no-such-figlet");
        assert!(backend.render("AB", 80.0).is_none());
    }

    #[test]
    fn test_failing_program_falls_through() {
        // `false` exists on any POSIX system and always exits non-zero
        let backend = FigletCommandBackend::with_program("false");
        assert!(backend.render("AB", 80.0).is_none());
    }
}

//! Best-effort external command probes
//!
//! Each probe is an independent capability check returning `Option<String>`,
//! composed by first-success selection. A missing tool, a failing exit, or
//! unparsable output all answer `None`; nothing here raises.
//!
//! Probes block without a timeout, matching the rest of the synchronous
//! pipeline; a hung tool stalls the run (known limitation).

use std::process::Command;

/// Run a command and capture trimmed stdout, `None` unless it exits zero
/// with non-empty UTF-8 output.
fn run_capture(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        tracing::debug!("probe '{}' exited with {}", program, output.status);
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Installed package count from the pacman database.
pub fn package_count() -> Option<String> {
    run_capture("pacman", &["-Qq"]).map(|list| list.lines().count().to_string())
}

/// GPU controller name from lspci, enriched with a VRAM hint when a vendor
/// tool answers.
pub fn gpu_name() -> Option<String> {
    let lspci = run_capture("lspci", &[])?;
    let line = lspci.lines().find(|line| {
        let lower = line.to_lowercase();
        lower.contains("vga") || lower.contains("3d") || lower.contains("2d")
    })?;
    let name = line.split_once(": ").map_or(line, |(_, rest)| rest);
    let name = name.split("(rev").next().unwrap_or(name).trim();
    if name.is_empty() {
        return None;
    }
    match vram_hint() {
        Some(vram) => Some(format!("{name} {vram}")),
        None => Some(name.to_string()),
    }
}

fn vram_hint() -> Option<String> {
    nvidia_vram().or_else(rocm_vram)
}

fn nvidia_vram() -> Option<String> {
    let raw = run_capture(
        "nvidia-smi",
        &["--query-gpu=memory.total", "--format=csv,noheader,nounits"],
    )?;
    let mib: u64 = raw.lines().next()?.trim().parse().ok()?;
    Some(format!("({}GB)", mib / 1024))
}

fn rocm_vram() -> Option<String> {
    let raw = run_capture("rocm-smi", &["--showmeminfo", "vram"])?;
    raw.lines()
        .find(|line| line.to_lowercase().contains("vram total"))
        .map(|line| line.trim().to_string())
}

/// CPU model from `lscpu`, the fallback of last resort for the CPU fact.
pub fn lscpu_model() -> Option<String> {
    let raw = run_capture("lscpu", &[])?;
    raw.lines()
        .find_map(|line| line.strip_prefix("Model name:"))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_answers_none() {
        assert_eq!(run_capture("glyphfetch-no-such-tool", &[]), None);
    }

    #[test]
    fn test_failing_program_answers_none() {
        assert_eq!(run_capture("false", &[]), None);
    }

    #[test]
    fn test_capture_trims_output() {
        // `echo` is universally available in test environments
        assert_eq!(run_capture("echo", &["  hi  "]).as_deref(), Some("hi"));
    }

    #[test]
    fn test_empty_output_answers_none() {
        assert_eq!(run_capture("echo", &[""]), None);
    }

    #[test]
    fn test_probes_never_panic() {
        // Results depend on the host; only totality is asserted here
        let _ = package_count();
        let _ = gpu_name();
        let _ = lscpu_model();
    }
}

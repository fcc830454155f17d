//! Host fact collection
//!
//! Fills the ten-field info record shown beside the logo. Every lookup is
//! best-effort: a failed source degrades to the next one and finally to a
//! fixed sentinel string, so `collect` is total and the record never holds
//! an absent value.

pub mod probes;

use std::env;
use std::fs;

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, System};

use crate::canvas::ansi::sgr;

/// Sentinel for facts whose source is unavailable
pub const UNAVAILABLE: &str = "N/A";
/// Sentinel for facts that could not be identified
pub const UNKNOWN: &str = "Unknown";

/// The ten host facts rendered in the info column.
#[derive(Debug, Clone)]
pub struct HostInfo {
    pub user: String,
    pub host: String,
    pub os: String,
    pub kernel: String,
    pub shell: String,
    pub gpu: String,
    pub packages: String,
    pub uptime: String,
    pub memory: String,
    pub cpu: String,
}

impl HostInfo {
    /// Gather all facts. Never fails; unavailable sources become sentinels.
    pub fn collect() -> Self {
        let mut system = System::new();
        system.refresh_memory_specifics(MemoryRefreshKind::everything());
        system.refresh_cpu_specifics(CpuRefreshKind::everything());

        let kernel = System::kernel_version().unwrap_or_else(|| UNKNOWN.to_string());

        Self {
            user: user_name(),
            host: host_name(),
            os: os_name(&kernel),
            kernel: kernel.clone(),
            shell: shell_name_from(env::var("SHELL").ok()),
            gpu: probes::gpu_name().unwrap_or_else(|| UNAVAILABLE.to_string()),
            packages: probes::package_count().unwrap_or_else(|| UNAVAILABLE.to_string()),
            uptime: uptime_line(),
            memory: memory_line(&system),
            cpu: cpu_model(&system),
        }
    }

    /// The styled right-hand column: bold `user@host` header, separator, and
    /// one green-labeled line per fact. Sentinel values render verbatim.
    pub fn info_lines(&self) -> Vec<String> {
        let label =
            |name: &str, value: &str| format!("{}{}:{} {}", sgr::GREEN, name, sgr::RESET, value);
        vec![
            format!("{}{}@{}{}", sgr::BOLD, self.user, self.host, sgr::RESET),
            "-----------------".to_string(),
            label("OS", &self.os),
            label("Kernel", &self.kernel),
            label("Uptime", &self.uptime),
            label("Packages", &self.packages),
            label("Shell", &self.shell),
            label("Memory", &self.memory),
            label("GPU", &self.gpu),
            label("CPU", &self.cpu),
        ]
    }
}

fn user_name() -> String {
    env::var("USER")
        .or_else(|_| env::var("LOGNAME"))
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn host_name() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .or_else(System::host_name)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn os_name(kernel: &str) -> String {
    System::name().map_or_else(|| UNKNOWN.to_string(), |name| format!("{name} {kernel}"))
}

/// Basename of `$SHELL`, "sh" when unset or unparsable.
fn shell_name_from(shell_var: Option<String>) -> String {
    shell_var
        .as_deref()
        .and_then(|path| path.rsplit('/').next())
        .filter(|name| !name.is_empty())
        .map_or_else(|| "sh".to_string(), str::to_string)
}

fn uptime_line() -> String {
    proc_uptime_seconds()
        .or_else(|| {
            let secs = System::uptime();
            (secs > 0).then_some(secs as f64)
        })
        .map_or_else(|| UNAVAILABLE.to_string(), format_uptime)
}

fn proc_uptime_seconds() -> Option<f64> {
    let content = fs::read_to_string("/proc/uptime").ok()?;
    content.split_whitespace().next()?.parse().ok()
}

fn format_uptime(seconds: f64) -> String {
    let hours = (seconds / 3600.0) as u64;
    let minutes = ((seconds % 3600.0) / 60.0) as u64;
    format!("{hours}h {minutes}m")
}

fn memory_line(system: &System) -> String {
    let total = system.total_memory();
    if total == 0 {
        return UNAVAILABLE.to_string();
    }
    let mib = |bytes: u64| bytes / (1024 * 1024);
    format!("{}MiB / {}MiB", mib(system.used_memory()), mib(total))
}

fn cpu_model(system: &System) -> String {
    if let Some(brand) = system.cpus().first().map(|cpu| cpu.brand().trim().to_string()) {
        if !brand.is_empty() {
            return brand;
        }
    }
    if let Some(model) = proc_cpuinfo_model() {
        return model;
    }
    probes::lscpu_model().unwrap_or_else(|| UNKNOWN.to_string())
}

fn proc_cpuinfo_model() -> Option<String> {
    let content = fs::read_to_string("/proc/cpuinfo").ok()?;
    content
        .lines()
        .find(|line| line.starts_with("model name"))
        .and_then(|line| line.split_once(':'))
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ansi::strip_ansi_codes;

    fn sentinel_info() -> HostInfo {
        HostInfo {
            user: "unknown".to_string(),
            host: UNKNOWN.to_string(),
            os: UNKNOWN.to_string(),
            kernel: UNKNOWN.to_string(),
            shell: "sh".to_string(),
            gpu: UNAVAILABLE.to_string(),
            packages: UNAVAILABLE.to_string(),
            uptime: UNAVAILABLE.to_string(),
            memory: "512MiB / 1024MiB".to_string(),
            cpu: UNKNOWN.to_string(),
        }
    }

    #[test]
    fn test_info_lines_shape() {
        let lines = sentinel_info().info_lines();
        // header + separator + eight labeled facts
        assert_eq!(lines.len(), 10);
        assert_eq!(strip_ansi_codes(&lines[0]), "unknown@Unknown");
        assert_eq!(lines[1], "-----------------");
    }

    #[test]
    fn test_sentinels_render_verbatim() {
        let lines = sentinel_info().info_lines();
        let stripped: Vec<String> = lines.iter().map(|l| strip_ansi_codes(l)).collect();
        assert!(stripped.contains(&"GPU: N/A".to_string()));
        assert!(stripped.contains(&"CPU: Unknown".to_string()));
        assert!(stripped.contains(&"Memory: 512MiB / 1024MiB".to_string()));
    }

    #[test]
    fn test_collect_is_total() {
        let info = HostInfo::collect();
        // Every field degrades to a non-empty sentinel at worst
        for value in [
            &info.user,
            &info.host,
            &info.os,
            &info.kernel,
            &info.shell,
            &info.gpu,
            &info.packages,
            &info.uptime,
            &info.memory,
            &info.cpu,
        ] {
            assert!(!value.is_empty());
        }
    }

    #[test]
    fn test_shell_name_from() {
        assert_eq!(shell_name_from(Some("/usr/bin/zsh".to_string())), "zsh");
        assert_eq!(shell_name_from(Some("bash".to_string())), "bash");
        assert_eq!(shell_name_from(Some(String::new())), "sh");
        assert_eq!(shell_name_from(None), "sh");
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0.0), "0h 0m");
        assert_eq!(format_uptime(3661.0), "1h 1m");
        assert_eq!(format_uptime(7322.5), "2h 2m");
    }
}

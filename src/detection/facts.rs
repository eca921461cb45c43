//! Immutable machine facts.

use std::path::Path;

use super::package_manager::PackageManagerKind;

/// Sentinel device id meaning "no device-specific scope".
pub const UNKNOWN_DEVICE: &str = "unknown";

/// Facts about the machine being provisioned.
///
/// Constructed once at startup and passed by value into every component;
/// nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Facts {
    /// Operating system ("linux", "macos", ...).
    pub platform: String,

    /// CPU architecture ("x86_64", "aarch64", ...).
    pub architecture: String,

    /// Linux distribution id ("debian", "arch", ...); empty when unknown
    /// or not applicable.
    pub distribution: String,

    /// Device identity, usually the hostname; [`UNKNOWN_DEVICE`] when
    /// nothing identifies this machine.
    pub device_id: String,

    /// System package manager kind.
    pub package_manager: PackageManagerKind,
}

impl Facts {
    /// Classify the current machine.
    ///
    /// `device_override` takes precedence over the hostname; it comes from
    /// the `--device` flag (or its `RIGUP_DEVICE` env backing).
    pub fn classify(device_override: Option<&str>) -> Self {
        Self {
            platform: std::env::consts::OS.to_string(),
            architecture: std::env::consts::ARCH.to_string(),
            distribution: detect_distribution(),
            device_id: detect_device_id(device_override),
            package_manager: PackageManagerKind::detect(),
        }
    }

    /// Whether a device-specific scope applies.
    pub fn has_device(&self) -> bool {
        !self.device_id.is_empty() && self.device_id != UNKNOWN_DEVICE
    }

    /// One-line rendering for the run log header and debug output.
    pub fn summary(&self) -> String {
        format!(
            "platform={} arch={} distro={} device={} pkg={}",
            self.platform,
            self.architecture,
            if self.distribution.is_empty() {
                "-"
            } else {
                &self.distribution
            },
            self.device_id,
            self.package_manager
        )
    }
}

fn detect_distribution() -> String {
    if std::env::consts::OS != "linux" {
        return String::new();
    }

    std::fs::read_to_string("/etc/os-release")
        .ok()
        .and_then(|contents| parse_os_release_id(&contents))
        .unwrap_or_default()
}

/// Extract the `ID=` field from os-release contents.
fn parse_os_release_id(contents: &str) -> Option<String> {
    contents.lines().find_map(|line| {
        let value = line.strip_prefix("ID=")?;
        let value = value.trim().trim_matches('"');
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    })
}

fn detect_device_id(device_override: Option<&str>) -> String {
    if let Some(device) = device_override {
        let device = device.trim();
        if !device.is_empty() {
            return device.to_string();
        }
    }

    read_hostname(Path::new("/etc/hostname")).unwrap_or_else(|| UNKNOWN_DEVICE.to_string())
}

fn read_hostname(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let hostname = contents.trim();
    if hostname.is_empty() {
        None
    } else {
        Some(hostname.to_string())
    }
}

//! Package manager and privilege escalation detection.

use super::command_detection::command_succeeds;

/// Detected system package manager kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManagerKind {
    Homebrew,
    Apt,
    Dnf,
    Pacman,
    Zypper,
    Apk,
    Unknown,
}

impl PackageManagerKind {
    /// Detect the system package manager by probing known tools.
    ///
    /// The first tool that answers `--version` wins; probe order favors
    /// the platform's native manager over secondary installs.
    pub fn detect() -> Self {
        #[cfg(target_os = "macos")]
        let probes: &[(&str, PackageManagerKind)] =
            &[("brew --version", PackageManagerKind::Homebrew)];

        #[cfg(not(target_os = "macos"))]
        let probes: &[(&str, PackageManagerKind)] = &[
            ("apt --version", PackageManagerKind::Apt),
            ("dnf --version", PackageManagerKind::Dnf),
            ("pacman --version", PackageManagerKind::Pacman),
            ("zypper --version", PackageManagerKind::Zypper),
            ("apk --version", PackageManagerKind::Apk),
            ("brew --version", PackageManagerKind::Homebrew),
        ];

        for (probe, kind) in probes {
            if command_succeeds(probe) {
                return *kind;
            }
        }

        PackageManagerKind::Unknown
    }

    /// Stable lowercase name, as passed to steps.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManagerKind::Homebrew => "brew",
            PackageManagerKind::Apt => "apt",
            PackageManagerKind::Dnf => "dnf",
            PackageManagerKind::Pacman => "pacman",
            PackageManagerKind::Zypper => "zypper",
            PackageManagerKind::Apk => "apk",
            PackageManagerKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check if the process already runs with elevated privileges.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}

/// Determine the privilege escalation handle passed to steps.
///
/// Empty when already root (steps escalate with a bare command), `"sudo"`
/// when sudo is available, otherwise empty and steps needing root will
/// fail on their own terms.
pub fn sudo_handle() -> String {
    if is_elevated() {
        String::new()
    } else if command_succeeds("sudo --version") {
        "sudo".to_string()
    } else {
        String::new()
    }
}

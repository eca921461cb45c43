//! Scope enumeration.
//!
//! Turns machine [`Facts`] into the ordered chain of directories that may
//! contribute step implementations, least specific first. The chain order
//! is the sole source of override precedence: a later directory always
//! beats an earlier one for the same logical step name, so it must never
//! be reordered or made data-driven.

use std::fs;
use std::path::{Path, PathBuf};

use crate::detection::Facts;

/// Precedence rank of a scope directory, least specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScopeTier {
    /// The steps root itself.
    Generic,

    /// `<root>/<platform>`.
    Platform,

    /// `<root>/<platform>/<distro>`.
    PlatformDistro,

    /// `<root>/<platform>/arch/<architecture>`.
    PlatformArch,

    /// `<root>/devices/<device-id>`.
    Device,
}

impl ScopeTier {
    /// Stable lowercase name for display and list output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeTier::Generic => "generic",
            ScopeTier::Platform => "platform",
            ScopeTier::PlatformDistro => "distro",
            ScopeTier::PlatformArch => "arch",
            ScopeTier::Device => "device",
        }
    }
}

impl std::fmt::Display for ScopeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate scope directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeDir {
    pub tier: ScopeTier,
    pub path: PathBuf,
}

/// Build the ordered scope chain for the given facts.
///
/// Pure path construction; nothing here touches the filesystem. Tiers
/// whose facts are unknown are left out entirely:
/// distro and arch tiers need a known platform, the device tier needs a
/// device id other than the "unknown" sentinel.
pub fn scope_chain(root: &Path, facts: &Facts) -> Vec<ScopeDir> {
    let mut chain = vec![ScopeDir {
        tier: ScopeTier::Generic,
        path: root.to_path_buf(),
    }];

    if !facts.platform.is_empty() {
        let platform_dir = root.join(&facts.platform);

        if !facts.distribution.is_empty() {
            chain.push(ScopeDir {
                tier: ScopeTier::PlatformDistro,
                path: platform_dir.join(&facts.distribution),
            });
        }

        if !facts.architecture.is_empty() {
            chain.push(ScopeDir {
                tier: ScopeTier::PlatformArch,
                path: platform_dir.join("arch").join(&facts.architecture),
            });
        }

        chain.insert(
            1,
            ScopeDir {
                tier: ScopeTier::Platform,
                path: platform_dir,
            },
        );
    }

    if facts.has_device() {
        chain.push(ScopeDir {
            tier: ScopeTier::Device,
            path: root.join("devices").join(&facts.device_id),
        });
    }

    chain
}

/// Directory listing seam.
///
/// The registry builder only ever asks "what file names does this
/// directory hold", so precedence logic can be exercised against an
/// in-memory fake while production uses [`FsScanner`].
pub trait DirScanner {
    /// List immediate file names in `dir`, or `None` if the directory is
    /// absent. A directory that disappears mid-run scans as absent, never
    /// as an error.
    fn scan(&self, dir: &Path) -> Option<Vec<String>>;
}

/// Filesystem-backed [`DirScanner`].
pub struct FsScanner;

impl DirScanner for FsScanner {
    fn scan(&self, dir: &Path) -> Option<Vec<String>> {
        let entries = fs::read_dir(dir).ok()?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();

        names.sort();
        Some(names)
    }
}

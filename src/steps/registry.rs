//! Step registry construction.
//!
//! Scans the scope chain for step files and folds them into a single
//! logical-name → implementation mapping. Directories are visited in
//! ascending specificity, and every match unconditionally overwrites any
//! prior entry with the same logical name, so the most specific tier that
//! defines a name always wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::detection::Facts;
use crate::error::{Result, RigupError};
use crate::steps::scope::{scope_chain, DirScanner, ScopeTier};

/// Step filename convention: `<numeric-prefix>-<logical-name>.<ext>`.
///
/// The numeric prefix only carries sort position; the logical name is the
/// identity key for overriding and CLI selection.
fn step_file_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\d+-([A-Za-z0-9][A-Za-z0-9_-]*)\.(?:sh|bash)$").expect("valid step pattern")
    })
}

/// Derive the logical step name from a file name, if it matches the
/// convention. Non-matching files are ignored by the registry.
pub fn logical_name(file_name: &str) -> Option<String> {
    step_file_pattern()
        .captures(file_name)
        .map(|caps| caps[1].to_string())
}

/// A step implementation after tier resolution.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedStep {
    /// Logical step name.
    pub name: String,

    /// Resolved file's basename; the ordering key for `plan_all`.
    pub file_name: String,

    /// Path relative to the steps root.
    pub path: PathBuf,

    /// Tier that contributed this implementation.
    #[serde(serialize_with = "serialize_tier")]
    pub tier: ScopeTier,
}

fn serialize_tier<S: serde::Serializer>(tier: &ScopeTier, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(tier.as_str())
}

/// The resolved logical-name → implementation mapping.
#[derive(Debug, Default)]
pub struct StepRegistry {
    root: PathBuf,
    entries: HashMap<String, ResolvedStep>,
}

impl StepRegistry {
    /// Build the registry for the given root and facts.
    ///
    /// The root directory must exist; scoped directories that are absent
    /// (or that vanish between chain construction and scan) are silently
    /// treated as empty.
    pub fn build(root: &Path, facts: &Facts, scanner: &dyn DirScanner) -> Result<Self> {
        if scanner.scan(root).is_none() {
            return Err(RigupError::MissingStepsRoot {
                path: root.to_path_buf(),
            });
        }

        let mut entries: HashMap<String, ResolvedStep> = HashMap::new();

        for scope in scope_chain(root, facts) {
            let Some(mut names) = scanner.scan(&scope.path) else {
                continue;
            };

            // Fold in sorted order so a duplicate logical name within one
            // directory (invalid input) resolves to the last file
            // deterministically.
            names.sort();

            for file_name in names {
                let Some(name) = logical_name(&file_name) else {
                    continue;
                };

                let relative = scope
                    .path
                    .strip_prefix(root)
                    .unwrap_or(&scope.path)
                    .join(&file_name);

                tracing::debug!(step = %name, tier = %scope.tier, file = %relative.display(), "registering step");

                entries.insert(
                    name.clone(),
                    ResolvedStep {
                        name,
                        file_name,
                        path: relative,
                        tier: scope.tier,
                    },
                );
            }
        }

        Ok(Self {
            root: root.to_path_buf(),
            entries,
        })
    }

    /// The steps root this registry was built from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Look up a logical step name.
    pub fn get(&self, name: &str) -> Option<&ResolvedStep> {
        self.entries.get(name)
    }

    /// Absolute path of a resolved step.
    pub fn absolute_path(&self, step: &ResolvedStep) -> PathBuf {
        self.root.join(&step.path)
    }

    /// Iterate over all entries (order unspecified).
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedStep> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

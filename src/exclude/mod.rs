//! Path exclusion
//!
//! Builds the predicate deciding which candidate paths are skipped before
//! any checker sees them. Two pattern lists feed it:
//! - `names`: matched against every component of the path
//! - `paths`: matched against the path and each of its ancestors, so a
//!   pattern naming a directory excludes everything below it

mod file;

pub use file::{exclude_override_json, read_exclude_file, ExcludeFileError};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Errors for exclusion patterns
#[derive(Debug, thiserror::Error)]
pub enum ExcludeError {
    #[error("invalid exclude pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("failed to build exclude matcher: {0}")]
    Build(#[source] globset::Error),
}

/// An exclude block as declared in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawExcludeSpec {
    #[serde(default)]
    pub names: Vec<String>,

    #[serde(default)]
    pub paths: Vec<String>,
}

impl RawExcludeSpec {
    /// True when neither list carries a pattern.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.paths.is_empty()
    }
}

/// Compiled exclusion predicate
#[derive(Debug, Clone)]
pub struct ExcludeMatcher {
    spec: RawExcludeSpec,
    names: GlobSet,
    paths: GlobSet,
}

impl Default for ExcludeMatcher {
    fn default() -> Self {
        Self {
            spec: RawExcludeSpec::default(),
            names: GlobSet::empty(),
            paths: GlobSet::empty(),
        }
    }
}

impl ExcludeMatcher {
    /// Check if a path should be excluded
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        if self.spec.is_empty() {
            return false;
        }

        let normalized: PathBuf = path
            .as_ref()
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part),
                _ => None,
            })
            .collect();

        if normalized
            .components()
            .any(|part| self.names.is_match(part.as_os_str()))
        {
            return true;
        }

        normalized
            .ancestors()
            .filter(|p| !p.as_os_str().is_empty())
            .any(|p| self.paths.is_match(p))
    }

    /// Name patterns this matcher was built from.
    pub fn names(&self) -> &[String] {
        &self.spec.names
    }

    /// Path patterns this matcher was built from.
    pub fn paths(&self) -> &[String] {
        &self.spec.paths
    }

    /// The declaration this matcher was built from.
    pub fn spec(&self) -> &RawExcludeSpec {
        &self.spec
    }

    pub fn is_empty(&self) -> bool {
        self.spec.is_empty()
    }
}

/// Build the exclusion predicate for an exclude block.
pub fn build_exclude_matcher(spec: &RawExcludeSpec) -> Result<ExcludeMatcher, ExcludeError> {
    Ok(ExcludeMatcher {
        spec: spec.clone(),
        names: build_globset(&spec.names)?,
        paths: build_globset(&spec.paths)?,
    })
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, ExcludeError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| ExcludeError::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(ExcludeError::Build)
}

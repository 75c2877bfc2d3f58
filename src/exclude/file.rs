//! Standalone exclude files (`exclude.yml`)

use super::RawExcludeSpec;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors reading an exclude file
#[derive(Debug, thiserror::Error)]
pub enum ExcludeFileError {
    #[error("failed to read file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to unmarshal file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to render exclude JSON: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct OverridePayload<'a> {
    exclude: &'a RawExcludeSpec,
}

/// Read an exclude file. A missing file is an empty exclude block.
pub fn read_exclude_file(path: &Path) -> Result<RawExcludeSpec, ExcludeFileError> {
    if !path.exists() {
        return Ok(RawExcludeSpec::default());
    }

    let contents = fs::read_to_string(path).map_err(|source| ExcludeFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if contents.trim().is_empty() {
        return Ok(RawExcludeSpec::default());
    }

    serde_yaml::from_str(&contents).map_err(|source| ExcludeFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Render an exclude file as an override payload for the config loader.
pub fn exclude_override_json(path: &Path) -> Result<String, ExcludeFileError> {
    let exclude = read_exclude_file(path)?;
    Ok(serde_json::to_string(&OverridePayload { exclude: &exclude })?)
}

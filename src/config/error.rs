//! Configuration load errors

use okcheck_registry::UnknownChecker;
use std::io;
use std::path::PathBuf;

use crate::exclude::ExcludeError;
use crate::filter::FilterError;

/// Errors from resolving a check configuration. Every variant aborts the load.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The base file exists but could not be read or decoded.
    #[error("failed to parse {}: {source}", .path.display())]
    BaseParse {
        path: PathBuf,
        #[source]
        source: BaseSourceError,
    },

    /// The override payload is not valid JSON of the expected shape.
    #[error("failed to parse JSON {payload}: {reason}")]
    OverrideParse { payload: String, reason: String },

    /// A filter declaration has an unknown kind or a malformed pattern.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// A checker name has no registry entry.
    #[error(transparent)]
    UnknownChecker(#[from] UnknownChecker),

    /// An exclude pattern could not be compiled.
    #[error(transparent)]
    Exclude(#[from] ExcludeError),
}

/// Why the base file could not be used
#[derive(Debug, thiserror::Error)]
pub enum BaseSourceError {
    #[error("failed to read file: {0}")]
    Read(#[from] io::Error),

    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Toml(#[from] toml::de::Error),
}

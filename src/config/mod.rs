//! Check configuration
//!
//! Resolves a base file and an optional override payload into the
//! configuration a check run consumes:
//! - which checkers run, and with what arguments
//! - which output lines of each checker are suppressed
//! - which paths are excluded from checking entirely
//!
//! Only the override's exclude block is consulted, and when it carries any
//! pattern it replaces the base exclude block rather than merging with it.

mod error;
mod json;
mod loader;
mod raw;

pub use error::{BaseSourceError, ConfigError};
pub use loader::{load, load_with_registry};
pub use raw::{BaseFormat, RawCheckerConfig, RawConfig};

use okcheck_registry::CheckerCmd;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::exclude::ExcludeMatcher;
use crate::filter::{LineFilter, OutputLine};

/// Settings for a single checker.
#[derive(Debug, Clone, Default)]
pub struct CheckerConfig {
    args: Vec<String>,
    line_filters: Vec<LineFilter>,
}

impl CheckerConfig {
    /// Arguments passed verbatim to the checker.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn line_filters(&self) -> &[LineFilter] {
        &self.line_filters
    }

    /// Whether any of this checker's filters suppresses the line.
    pub fn filters_out(&self, line: &OutputLine) -> bool {
        self.line_filters.iter().any(|f| f.matches(line))
    }
}

/// A fully validated check configuration.
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    checks: BTreeMap<CheckerCmd, CheckerConfig>,
    exclude: ExcludeMatcher,
}

impl ResolvedConfig {
    pub fn checks(&self) -> &BTreeMap<CheckerCmd, CheckerConfig> {
        &self.checks
    }

    pub fn exclude(&self) -> &ExcludeMatcher {
        &self.exclude
    }

    /// Look up a checker's settings by command name.
    pub fn checker(&self, name: &str) -> Option<&CheckerConfig> {
        self.checks
            .iter()
            .find(|(cmd, _)| cmd.name() == name)
            .map(|(_, config)| config)
    }

    /// Whether a path is excluded from checking.
    pub fn is_excluded(&self, path: impl AsRef<Path>) -> bool {
        self.exclude.matches(path)
    }

    /// Whether an output line of `cmd` should be dropped, either because its
    /// path is excluded or because one of the checker's filters matches it.
    pub fn suppresses(&self, cmd: &CheckerCmd, line: &OutputLine) -> bool {
        if self.exclude.matches(&line.path) {
            return true;
        }
        self.checks
            .get(cmd)
            .is_some_and(|config| config.filters_out(line))
    }

    /// Render a JSON summary of the configuration.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&ConfigSummary::from(self))
    }
}

#[derive(Serialize)]
struct ConfigSummary<'a> {
    checks: BTreeMap<&'a CheckerCmd, CheckerSummary<'a>>,
    exclude: &'a crate::exclude::RawExcludeSpec,
}

#[derive(Serialize)]
struct CheckerSummary<'a> {
    args: &'a [String],
    filters: Vec<String>,
}

impl<'a> From<&'a ResolvedConfig> for ConfigSummary<'a> {
    fn from(config: &'a ResolvedConfig) -> Self {
        let checks = config
            .checks
            .iter()
            .map(|(cmd, checker)| {
                let summary = CheckerSummary {
                    args: &checker.args,
                    filters: checker.line_filters.iter().map(|f| f.to_string()).collect(),
                };
                (cmd, summary)
            })
            .collect();
        Self {
            checks,
            exclude: config.exclude.spec(),
        }
    }
}

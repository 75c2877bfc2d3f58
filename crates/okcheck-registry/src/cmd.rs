//! Checker command identifiers.

use serde::Serialize;
use std::fmt;

/// Opaque identifier for an executable checker.
///
/// Two identifiers are equal when they name the same checker command.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CheckerCmd(String);

impl CheckerCmd {
    /// Create an identifier for the named command.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The command name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CheckerCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

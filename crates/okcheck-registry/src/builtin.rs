//! The built-in checker table.

use crate::{CheckerCmd, CheckerRegistry};
use std::collections::BTreeMap;

/// Names of the checkers shipped with okcheck.
pub const BUILTIN_CHECKERS: &[&str] = &[
    "compiles",
    "deadcode",
    "errcheck",
    "extimport",
    "golint",
    "govet",
    "importalias",
    "ineffassign",
    "nobadfuncs",
    "novendor",
    "outparamcheck",
    "unconvert",
    "varcheck",
];

/// Registry backed by the built-in checker table.
#[derive(Debug, Clone)]
pub struct BuiltinRegistry {
    commands: BTreeMap<&'static str, CheckerCmd>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let commands = BUILTIN_CHECKERS
            .iter()
            .map(|name| (*name, CheckerCmd::new(*name)))
            .collect();
        Self { commands }
    }

    /// All registered checker names (sorted).
    pub fn names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl CheckerRegistry for BuiltinRegistry {
    fn lookup(&self, name: &str) -> Option<CheckerCmd> {
        self.commands.get(name).cloned()
    }
}

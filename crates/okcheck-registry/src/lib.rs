//! Registry of known checkers.
//!
//! Maps the checker names used in configuration files to opaque command
//! identifiers. Lookups are read-only, so a registry can be shared freely
//! between concurrent configuration loads.

mod builtin;
mod cmd;

pub use builtin::{BuiltinRegistry, BUILTIN_CHECKERS};
pub use cmd::CheckerCmd;

/// Error returned when a checker name has no registry entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown checker: {name}")]
pub struct UnknownChecker {
    /// The name that failed to resolve.
    pub name: String,
}

/// A source of checker command identifiers.
pub trait CheckerRegistry: Send + Sync {
    /// Look up a checker by its configuration name.
    fn lookup(&self, name: &str) -> Option<CheckerCmd>;

    /// Resolve a checker name, failing if the registry has no entry for it.
    fn resolve(&self, name: &str) -> Result<CheckerCmd, UnknownChecker> {
        self.lookup(name).ok_or_else(|| UnknownChecker {
            name: name.to_string(),
        })
    }
}

impl<R: CheckerRegistry + ?Sized> CheckerRegistry for &R {
    fn lookup(&self, name: &str) -> Option<CheckerCmd> {
        (**self).lookup(name)
    }
}

//! okcheck - check-run configuration
//!
//! This crate resolves the configuration for a static-analysis run: which
//! checkers to run and with what arguments, which of their output lines to
//! suppress, and which paths to leave out of the run entirely.

pub mod config;
pub mod discover;
pub mod exclude;
pub mod filter;
pub mod layout;

pub use config::{load, load_with_registry, CheckerConfig, ConfigError, ResolvedConfig};
pub use exclude::{build_exclude_matcher, ExcludeMatcher, RawExcludeSpec};
pub use filter::{parse_filter, FilterKind, LineFilter, OutputLine, RawFilterSpec};
pub use okcheck_registry::{BuiltinRegistry, CheckerCmd, CheckerRegistry, UnknownChecker};

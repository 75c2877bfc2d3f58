//! Resolution of the base file and override payload into a `ResolvedConfig`.

use okcheck_registry::{BuiltinRegistry, CheckerRegistry};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::error::{BaseSourceError, ConfigError};
use super::json::describe_json_error;
use super::raw::{BaseFormat, OverrideDoc, RawConfig};
use super::{CheckerConfig, ResolvedConfig};
use crate::exclude::{build_exclude_matcher, RawExcludeSpec};
use crate::filter::parse_filter;

/// Load a check configuration using the built-in checker registry.
///
/// `base_path` names the base file; an empty path or a missing file is an
/// empty document. `override_json` is an inline JSON payload whose exclude
/// block, when it carries any pattern, replaces the base exclude block. An
/// empty string means no override.
pub fn load(base_path: impl AsRef<Path>, override_json: &str) -> Result<ResolvedConfig, ConfigError> {
    load_with_registry(&BuiltinRegistry::new(), base_path, override_json)
}

/// Load a check configuration, resolving checker names through `registry`.
pub fn load_with_registry<R>(
    registry: &R,
    base_path: impl AsRef<Path>,
    override_json: &str,
) -> Result<ResolvedConfig, ConfigError>
where
    R: CheckerRegistry + ?Sized,
{
    let base_path = base_path.as_ref();
    let mut raw = read_base(base_path)?;

    if let Some(exclude) = parse_override(override_json)? {
        if exclude.is_empty() {
            debug!("override exclude block is empty, keeping base exclude block");
        } else {
            debug!(
                names = ?exclude.names,
                paths = ?exclude.paths,
                "override exclude block replaces base exclude block"
            );
            raw.exclude = exclude;
        }
    }

    let mut checks = BTreeMap::new();
    for (name, decl) in raw.checks {
        let cmd = registry.resolve(&name)?;
        let line_filters = decl
            .filters
            .iter()
            .map(parse_filter)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            checker = %cmd,
            args = decl.args.len(),
            filters = line_filters.len(),
            "resolved checker"
        );
        checks.insert(
            cmd,
            CheckerConfig {
                args: decl.args,
                line_filters,
            },
        );
    }

    let exclude = build_exclude_matcher(&raw.exclude)?;

    Ok(ResolvedConfig { checks, exclude })
}

fn read_base(path: &Path) -> Result<RawConfig, ConfigError> {
    if path.as_os_str().is_empty() || !path.exists() {
        debug!(path = %path.display(), "no base config, using empty document");
        return Ok(RawConfig::default());
    }

    debug!(path = %path.display(), "reading base config");
    let base_err = |source: BaseSourceError| ConfigError::BaseParse {
        path: path.to_path_buf(),
        source,
    };

    let contents = fs::read_to_string(path).map_err(|e| base_err(e.into()))?;
    match BaseFormat::for_path(path) {
        BaseFormat::Yaml => RawConfig::from_yaml_str(&contents).map_err(|e| base_err(e.into())),
        BaseFormat::Toml => RawConfig::from_toml_str(&contents).map_err(|e| base_err(e.into())),
    }
}

fn parse_override(payload: &str) -> Result<Option<RawExcludeSpec>, ConfigError> {
    if payload.is_empty() {
        return Ok(None);
    }

    let override_err = |reason: String| ConfigError::OverrideParse {
        payload: payload.to_string(),
        reason,
    };

    // Syntax first, so shape mismatches are reported separately.
    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|e| override_err(describe_json_error(payload, &e)))?;
    if value.is_null() {
        return Ok(None);
    }

    // Derived structs also decode from sequences; only objects are accepted here.
    expect_object(&value, "override document").map_err(override_err)?;
    match value.get("exclude") {
        None | Some(serde_json::Value::Null) => return Ok(Some(RawExcludeSpec::default())),
        Some(exclude) => expect_object(exclude, "exclude block").map_err(override_err)?,
    }

    let doc: OverrideDoc = serde_json::from_value(value).map_err(|e| override_err(e.to_string()))?;
    Ok(Some(doc.exclude))
}

fn expect_object(value: &serde_json::Value, what: &str) -> Result<(), String> {
    let found = match value {
        serde_json::Value::Object(_) => return Ok(()),
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
    };
    Err(format!("cannot unmarshal {found} into {what}"))
}

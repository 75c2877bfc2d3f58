//! Declarative configuration documents, before validation.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::path::Path;

use crate::exclude::RawExcludeSpec;
use crate::filter::RawFilterSpec;

/// The base document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawConfig {
    /// Checker declarations keyed by checker name.
    #[serde(default, deserialize_with = "checks_or_empty")]
    pub checks: BTreeMap<String, RawCheckerConfig>,

    #[serde(default)]
    pub exclude: RawExcludeSpec,
}

/// One checker declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawCheckerConfig {
    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default)]
    pub filters: Vec<RawFilterSpec>,
}

/// The override document. Only its exclude block is consulted.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct OverrideDoc {
    #[serde(default)]
    pub exclude: RawExcludeSpec,
}

/// Encoding of a base file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseFormat {
    Yaml,
    Toml,
}

impl BaseFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => BaseFormat::Toml,
            _ => BaseFormat::Yaml,
        }
    }
}

impl RawConfig {
    /// Parse a YAML base document. Blank input is an empty document.
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(s)
    }

    /// Parse a TOML base document.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

// `errcheck:` with no body declares the checker with no args and no filters.
fn checks_or_empty<'de, D>(de: D) -> Result<BTreeMap<String, RawCheckerConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    let checks: Option<BTreeMap<String, Option<RawCheckerConfig>>> = Option::deserialize(de)?;
    Ok(checks
        .unwrap_or_default()
        .into_iter()
        .map(|(name, decl)| (name, decl.unwrap_or_default()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_full_document() {
        let raw = RawConfig::from_yaml_str(
            r#"
checks:
  errcheck:
    args:
      - "-ignore"
      - "github.com/seelog:(Info|Warn|Error|Critical)f?"
    filters:
      - type: "message"
        value: "\\w+"
exclude:
  names:
    - "m?cks"
  paths:
    - "vendor"
"#,
        )
        .unwrap();

        let errcheck = &raw.checks["errcheck"];
        assert_eq!(errcheck.args.len(), 2);
        assert_eq!(errcheck.filters, vec![RawFilterSpec::message(r"\w+")]);
        assert_eq!(raw.exclude.names, vec!["m?cks"]);
        assert_eq!(raw.exclude.paths, vec!["vendor"]);
    }

    #[test]
    fn test_yaml_blank_document() {
        assert_eq!(RawConfig::from_yaml_str("").unwrap(), RawConfig::default());
        assert_eq!(RawConfig::from_yaml_str("  \n").unwrap(), RawConfig::default());
    }

    #[test]
    fn test_yaml_checker_without_body() {
        let raw = RawConfig::from_yaml_str("checks:\n  golint:\n").unwrap();
        assert_eq!(raw.checks["golint"], RawCheckerConfig::default());
    }

    #[test]
    fn test_yaml_null_checks() {
        let raw = RawConfig::from_yaml_str("checks:\n").unwrap();
        assert!(raw.checks.is_empty());
    }

    #[test]
    fn test_toml_document() {
        let raw = RawConfig::from_toml_str(
            r#"
[checks.govet]
args = ["-shadow"]
filters = [{ value = "composite literal" }]

[exclude]
paths = ["vendor"]
"#,
        )
        .unwrap();

        assert_eq!(raw.checks["govet"].args, vec!["-shadow"]);
        assert_eq!(raw.checks["govet"].filters[0].kind, "message");
        assert!(raw.exclude.names.is_empty());
        assert_eq!(raw.exclude.paths, vec!["vendor"]);
    }

    #[test]
    fn test_format_for_path() {
        assert_eq!(BaseFormat::for_path(Path::new("check.toml")), BaseFormat::Toml);
        assert_eq!(BaseFormat::for_path(Path::new("check.TOML")), BaseFormat::Toml);
        assert_eq!(BaseFormat::for_path(Path::new("check.yml")), BaseFormat::Yaml);
        assert_eq!(BaseFormat::for_path(Path::new("check")), BaseFormat::Yaml);
    }
}

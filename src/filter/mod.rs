//! Output line filters
//!
//! A filter decides whether one line of checker output is suppressed.
//! Filters are declared as a kind tag plus a value and compiled once when
//! the configuration is loaded.

use regex_lite::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Filter kind used when a declaration omits `type`.
pub const DEFAULT_FILTER_KIND: &str = "message";

/// Errors from compiling a filter declaration
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("failed to parse filter: {spec}: unknown filter type: {kind}")]
    UnknownKind { spec: RawFilterSpec, kind: String },

    #[error("failed to parse filter: {spec}: {source}")]
    MalformedPattern {
        spec: RawFilterSpec,
        #[source]
        source: regex_lite::Error,
    },
}

/// A filter as declared in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFilterSpec {
    /// Filter kind tag. Null or empty means the default kind.
    #[serde(rename = "type", default = "default_kind", deserialize_with = "kind_or_default")]
    pub kind: String,

    /// Kind-specific value; for `message` filters, a regular expression.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub value: String,
}

fn default_kind() -> String {
    DEFAULT_FILTER_KIND.to_string()
}

fn kind_or_default<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let kind = string_or_empty(de)?;
    Ok(if kind.is_empty() { default_kind() } else { kind })
}

// YAML `~` and bare keys decode as null, which reads as the empty string.
fn string_or_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

impl RawFilterSpec {
    /// A `message` filter with the given pattern.
    pub fn message(value: impl Into<String>) -> Self {
        Self {
            kind: default_kind(),
            value: value.into(),
        }
    }
}

impl fmt::Display for RawFilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.kind, self.value)
    }
}

/// The closed set of filter kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Regular expression matched against the message of a line.
    Message,
}

impl FilterKind {
    /// Look up a kind by its declared tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "message" => Some(FilterKind::Message),
            _ => None,
        }
    }

    /// The tag this kind is declared with.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Message => "message",
        }
    }
}

/// One line of checker output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    pub path: String,
    pub line: u32,
    pub column: u32,
    pub message: String,
}

impl OutputLine {
    pub fn new(path: impl Into<String>, line: u32, column: u32, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line,
            column,
            message: message.into(),
        }
    }
}

/// A compiled filter.
#[derive(Debug, Clone)]
pub enum LineFilter {
    /// Suppresses lines whose message contains a match for the pattern.
    Message(Regex),
}

impl LineFilter {
    pub fn kind(&self) -> FilterKind {
        match self {
            LineFilter::Message(_) => FilterKind::Message,
        }
    }

    /// Whether this filter suppresses the given line.
    pub fn matches(&self, line: &OutputLine) -> bool {
        match self {
            LineFilter::Message(re) => re.is_match(&line.message),
        }
    }

    /// The declared value this filter was compiled from.
    pub fn value(&self) -> &str {
        match self {
            LineFilter::Message(re) => re.as_str(),
        }
    }
}

impl fmt::Display for LineFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind().as_str(), self.value())
    }
}

/// Compile a filter declaration.
pub fn parse_filter(spec: &RawFilterSpec) -> Result<LineFilter, FilterError> {
    let kind = FilterKind::from_tag(&spec.kind).ok_or_else(|| FilterError::UnknownKind {
        spec: spec.clone(),
        kind: spec.kind.clone(),
    })?;

    match kind {
        FilterKind::Message => {
            let re = Regex::new(&spec.value).map_err(|source| FilterError::MalformedPattern {
                spec: spec.clone(),
                source,
            })?;
            Ok(LineFilter::Message(re))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(message: &str) -> OutputLine {
        OutputLine::new("pkg/foo.go", 10, 2, message)
    }

    #[test]
    fn test_message_filter_matches_anywhere() {
        let filter = parse_filter(&RawFilterSpec::message("should have comment")).unwrap();
        assert!(filter.matches(&line("exported func Foo should have comment or be unexported")));
        assert!(!filter.matches(&line("error return value not checked")));
    }

    #[test]
    fn test_message_filter_ignores_path() {
        let filter = parse_filter(&RawFilterSpec::message("foo")).unwrap();
        assert!(!filter.matches(&line("unused variable")));
    }

    #[test]
    fn test_missing_type_defaults_to_message() {
        let spec: RawFilterSpec = serde_json::from_str(r#"{"value": "\\w+"}"#).unwrap();
        assert_eq!(spec.kind, "message");
        let filter = parse_filter(&spec).unwrap();
        assert_eq!(filter.kind(), FilterKind::Message);
        assert!(filter.matches(&line("word")));
        assert!(!filter.matches(&line("  ")));
    }

    #[test]
    fn test_null_and_empty_fields_read_as_absent() {
        let spec: RawFilterSpec = serde_json::from_str(r#"{"type": null, "value": "x"}"#).unwrap();
        assert_eq!(spec, RawFilterSpec::message("x"));

        let spec: RawFilterSpec = serde_json::from_str(r#"{"type": "", "value": "x"}"#).unwrap();
        assert_eq!(spec, RawFilterSpec::message("x"));

        let spec: RawFilterSpec = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(spec, RawFilterSpec::message(""));
    }

    #[test]
    fn test_unknown_kind() {
        let spec = RawFilterSpec {
            kind: "unknown".to_string(),
            value: String::new(),
        };
        let err = parse_filter(&spec).unwrap_err();
        assert!(matches!(err, FilterError::UnknownKind { ref kind, .. } if kind == "unknown"));
        assert_eq!(
            err.to_string(),
            "failed to parse filter: {unknown }: unknown filter type: unknown"
        );
    }

    #[test]
    fn test_malformed_pattern() {
        let err = parse_filter(&RawFilterSpec::message("(unclosed")).unwrap_err();
        assert!(matches!(err, FilterError::MalformedPattern { .. }));
        assert!(err
            .to_string()
            .starts_with("failed to parse filter: {message (unclosed}: "));
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let filter = parse_filter(&RawFilterSpec::message("")).unwrap();
        assert!(filter.matches(&line("")));
        assert!(filter.matches(&line("anything")));
    }

    #[test]
    fn test_display() {
        let filter = parse_filter(&RawFilterSpec::message(r"\w+")).unwrap();
        assert_eq!(filter.to_string(), r"message: \w+");
        assert_eq!(RawFilterSpec::message("x").to_string(), "{message x}");
    }
}

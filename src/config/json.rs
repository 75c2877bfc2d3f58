//! Stable descriptions of override payload decode errors.
//!
//! Tooling matches on these strings, so syntax errors are reported by the
//! offending character and where it appeared rather than by decoder
//! position.

use serde_json::error::Category;

pub(crate) fn describe_json_error(payload: &str, err: &serde_json::Error) -> String {
    match err.classify() {
        Category::Eof => "unexpected end of JSON input".to_string(),
        Category::Syntax => describe_syntax(payload, err).unwrap_or_else(|| bare_message(err)),
        Category::Data | Category::Io => bare_message(err),
    }
}

fn describe_syntax(payload: &str, err: &serde_json::Error) -> Option<String> {
    let context = match bare_message(err).as_str() {
        "expected value" => "looking for beginning of value",
        "expected `,` or `]`" => "after array element",
        "expected `,` or `}`" => "after object key:value pair",
        "expected `:`" => "after object key",
        "key must be a string" => "looking for beginning of object key string",
        "trailing characters" => "after top-level value",
        _ => return None,
    };
    let ch = offending_char(payload, err.line(), err.column())?;
    Some(format!("invalid character {} {}", quote_char(ch), context))
}

/// The decoder message without its trailing position.
fn bare_message(err: &serde_json::Error) -> String {
    let full = err.to_string();
    let position = format!(" at line {} column {}", err.line(), err.column());
    match full.strip_suffix(&position) {
        Some(message) => message.to_string(),
        None => full,
    }
}

// Positions are 1-based and the column names the offending byte.
fn offending_char(payload: &str, line: usize, column: usize) -> Option<char> {
    let text = payload.split('\n').nth(line.checked_sub(1)?)?;
    text.get(column.checked_sub(1)?..)?.chars().next()
}

fn quote_char(ch: char) -> String {
    match ch {
        '\'' => r"'\''".to_string(),
        '"' => r#"'"'"#.to_string(),
        c if c.is_control() => format!("'{}'", c.escape_default()),
        c => format!("'{c}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(payload: &str) -> String {
        let err = serde_json::from_str::<serde_json::Value>(payload).unwrap_err();
        describe_json_error(payload, &err)
    }

    #[test]
    fn test_unexpected_close_brace() {
        assert_eq!(
            describe("[}"),
            "invalid character '}' looking for beginning of value"
        );
    }

    #[test]
    fn test_bare_word() {
        assert_eq!(
            describe("exclude"),
            "invalid character 'e' looking for beginning of value"
        );
    }

    #[test]
    fn test_trailing_characters() {
        assert_eq!(describe("{} x"), "invalid character 'x' after top-level value");
    }

    #[test]
    fn test_missing_colon() {
        assert_eq!(
            describe(r#"{"exclude" 1}"#),
            "invalid character '1' after object key"
        );
    }

    #[test]
    fn test_non_string_key() {
        assert_eq!(
            describe("{1: 2}"),
            "invalid character '1' looking for beginning of object key string"
        );
    }

    #[test]
    fn test_truncated_input() {
        assert_eq!(describe(r#"{"exclude": {"#), "unexpected end of JSON input");
        assert_eq!(describe("   "), "unexpected end of JSON input");
    }

    #[test]
    fn test_quote_char() {
        assert_eq!(quote_char('}'), "'}'");
        assert_eq!(quote_char('\''), r"'\''");
        assert_eq!(quote_char('"'), r#"'"'"#);
        assert_eq!(quote_char('\t'), r"'\t'");
    }
}

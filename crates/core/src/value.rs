//! Leaf value model: literal scalars vs `{a.b.c}` value references.
//!
//! The `{a.b.c}` syntax is a parsing concern at the boundary only. A value
//! is classified exactly once, when the tree is built; downstream code
//! works with [`TokenValue`] and never re-parses strings.

use crate::config::Config;

/// A leaf value after boundary parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// A terminal scalar, emitted as-is (modulo unit normalization).
    Literal(String),
    /// A path into the token tree, e.g. `{base.color.1}` as
    /// `["base", "color", "1"]`.
    Reference(Vec<String>),
}

impl TokenValue {
    /// Classify a raw scalar string. `{a.b.c}` with at least two
    /// dot-separated segments of word/dash characters is a reference;
    /// everything else is a literal, even if it contains braces elsewhere.
    pub fn parse(raw: &str) -> TokenValue {
        match parse_reference(raw) {
            Some(path) => TokenValue::Reference(path),
            None => TokenValue::Literal(raw.to_owned()),
        }
    }

    /// Classify a JSON scalar. Non-string scalars (numbers, booleans) are
    /// always literals in their JSON string form.
    pub fn from_json(value: &serde_json::Value) -> TokenValue {
        match value {
            serde_json::Value::String(s) => TokenValue::parse(s),
            other => TokenValue::Literal(other.to_string()),
        }
    }

    /// Render for reference-mode emission: references become
    /// `var(--<prefix>-<path>)`, literals pass through unchanged.
    pub fn to_css(&self, config: &Config) -> String {
        match self {
            TokenValue::Literal(s) => s.clone(),
            TokenValue::Reference(path) => css_var(&config.prefix, path),
        }
    }

    /// The raw source form: references regain their `{a.b.c}` braces.
    pub fn to_source(&self) -> String {
        match self {
            TokenValue::Literal(s) => s.clone(),
            TokenValue::Reference(path) => format!("{{{}}}", path.join(".")),
        }
    }
}

/// `var(--<prefix>-<segments joined with dashes, lower-cased>)`.
pub fn css_var(prefix: &str, path: &[String]) -> String {
    format!("var(--{}-{})", prefix, path.join("-").to_lowercase())
}

fn parse_reference(raw: &str) -> Option<Vec<String>> {
    let inner = raw.strip_prefix('{')?.strip_suffix('}')?;
    if !inner
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return None;
    }
    let segments: Vec<String> = inner.split('.').map(str::to_owned).collect();
    if segments.len() < 2 || segments.iter().any(String::is_empty) {
        return None;
    }
    Some(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_braced_path_is_a_reference() {
        assert_eq!(
            TokenValue::parse("{base.color.1}"),
            TokenValue::Reference(vec![
                "base".to_owned(),
                "color".to_owned(),
                "1".to_owned()
            ])
        );
    }

    #[test]
    fn single_segment_is_a_literal() {
        assert_eq!(
            TokenValue::parse("{base}"),
            TokenValue::Literal("{base}".to_owned())
        );
    }

    #[test]
    fn braces_elsewhere_stay_literal() {
        assert_eq!(
            TokenValue::parse("calc({a.b} + 1px)"),
            TokenValue::Literal("calc({a.b} + 1px)".to_owned())
        );
        assert_eq!(
            TokenValue::parse("{a b.c}"),
            TokenValue::Literal("{a b.c}".to_owned())
        );
    }

    #[test]
    fn empty_segments_stay_literal() {
        assert_eq!(
            TokenValue::parse("{a..b}"),
            TokenValue::Literal("{a..b}".to_owned())
        );
    }

    #[test]
    fn non_string_json_scalars_are_literals() {
        assert_eq!(
            TokenValue::from_json(&serde_json::json!(400)),
            TokenValue::Literal("400".to_owned())
        );
    }

    #[test]
    fn reference_renders_as_lowercased_css_var() {
        let config = Config::default();
        let value = TokenValue::parse("{base.Color.Primary-1}");
        assert_eq!(value.to_css(&config), "var(--ids-base-color-primary-1)");
    }

    #[test]
    fn source_form_round_trips() {
        let value = TokenValue::parse("{a.b.c}");
        assert_eq!(value.to_source(), "{a.b.c}");
    }
}

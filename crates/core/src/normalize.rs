//! Numeric value normalization: decimal rounding and unit fix-ups.

use crate::error::TokenError;
use crate::tree::{TokenNode, TokenType};
use crate::value::TokenValue;

/// Round to at most `precision` fractional digits, dropping trailing
/// zeros. `50.0` renders as `50`, `1.5` as `1.5`.
pub fn round_decimals(value: f64, precision: u32) -> String {
    let formatted = format!("{:.*}", precision as usize, value);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_owned()
    } else {
        formatted
    }
}

/// Normalize a leaf's literal for base-value emission. `parent_kind` is
/// the second-to-last path segment, which the token source uses as the
/// unit domain for numeric leaves (`dimension`, `percentage`, `em`).
pub fn base_value(
    raw: &str,
    token_type: &TokenType,
    parent_kind: Option<&str>,
    precision: u32,
) -> String {
    if *token_type == TokenType::Text && raw.contains(' ') {
        return format!("\"{}\"", raw);
    }

    if *token_type == TokenType::Number {
        match parent_kind {
            Some("dimension") => return with_unit(raw, "px", precision, |v| v),
            Some("percentage") => return with_unit(raw, "%", precision, |v| v),
            // em values are exported as percentages of the font size
            Some("em") => return with_unit(raw, "em", precision, |v| v / 100.0),
            _ => {}
        }
    }

    raw.to_owned()
}

/// Pre-pass over a working copy of one group: rewrite every child leaf's
/// literal value to `<rounded><unit>`, applying `transform` first. The
/// exporter emits some branches with missing or wrong units; callers run
/// this on those branches before flattening.
pub fn fix_unit(
    node: &mut TokenNode,
    unit: &str,
    precision: u32,
    transform: impl Fn(f64) -> f64,
) -> Result<(), TokenError> {
    let TokenNode::Group(children) = node else {
        return Err(TokenError::SchemaViolation {
            path: String::new(),
            message: "fix_unit expects a group node".to_owned(),
        });
    };

    for child in children.values_mut() {
        if let TokenNode::Leaf(leaf) = child {
            if let TokenValue::Literal(raw) = &leaf.value {
                let rounded = round_decimals(transform(leading_float(raw)), precision);
                leaf.value = TokenValue::Literal(format!("{}{}", rounded, unit));
            }
        }
    }
    Ok(())
}

fn with_unit(raw: &str, unit: &str, precision: u32, transform: impl Fn(f64) -> f64) -> String {
    format!(
        "{}{}",
        round_decimals(transform(leading_float(raw)), precision),
        unit
    )
}

/// Parse the leading float of a string, ignoring a trailing unit
/// (`"50px"` parses as `50.0`).
fn leading_float(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let mut end = 0;
    for (i, c) in trimmed.char_indices() {
        let numeric = c.is_ascii_digit() || c == '.' || (i == 0 && matches!(c, '-' | '+'));
        if !numeric {
            break;
        }
        end = i + c.len_utf8();
    }
    trimmed[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rounding_drops_trailing_zeros() {
        assert_eq!(round_decimals(50.0, 4), "50");
        assert_eq!(round_decimals(1.5, 4), "1.5");
        assert_eq!(round_decimals(0.123456, 4), "0.1235");
    }

    #[test]
    fn spaced_text_is_quoted() {
        assert_eq!(
            base_value("IBM Plex Sans", &TokenType::Text, Some("family"), 4),
            "\"IBM Plex Sans\""
        );
        assert_eq!(
            base_value("monospace", &TokenType::Text, Some("family"), 4),
            "monospace"
        );
    }

    #[test]
    fn dimension_numbers_gain_px() {
        assert_eq!(
            base_value("4", &TokenType::Number, Some("dimension"), 4),
            "4px"
        );
    }

    #[test]
    fn percentage_numbers_gain_percent() {
        assert_eq!(
            base_value("50", &TokenType::Number, Some("percentage"), 4),
            "50%"
        );
    }

    #[test]
    fn em_numbers_divide_by_hundred() {
        assert_eq!(base_value("150", &TokenType::Number, Some("em"), 4), "1.5em");
    }

    #[test]
    fn other_kinds_pass_through() {
        assert_eq!(
            base_value("400", &TokenType::Number, Some("weight"), 4),
            "400"
        );
        assert_eq!(base_value("#fff", &TokenType::Color, Some("color"), 4), "#fff");
    }

    #[test]
    fn fix_unit_rewrites_child_leaves() {
        let mut node = crate::tree::TokenNode::from_json(&json!({
            "25": { "value": "25", "type": "number" },
            "50": { "value": "50.5", "type": "number" }
        }))
        .unwrap();
        fix_unit(&mut node, "%", 4, |v| v).unwrap();
        let value = node
            .leaf_value_at(&["50".to_owned()])
            .unwrap();
        assert_eq!(*value, TokenValue::Literal("50.5%".to_owned()));
    }

    #[test]
    fn fix_unit_rejects_leaves() {
        let mut node = crate::tree::TokenNode::from_json(&json!({
            "value": "4", "type": "number"
        }))
        .unwrap();
        let err = fix_unit(&mut node, "px", 4, |v| v).unwrap_err();
        assert!(matches!(err, TokenError::SchemaViolation { .. }));
    }
}

//! Alphanumeric key ordering.
//!
//! Generated CSS is regenerated wholesale from token exports; a stable,
//! numeric-aware order keeps diffs reviewable regardless of traversal
//! order (`item2` before `item10`).

use std::cmp::Ordering;

/// Compare two keys by their leading non-digit run (case-sensitively),
/// then by the first embedded integer run numerically, then by the numeric
/// substrings themselves.
pub fn compare_alphanumeric(a: &str, b: &str) -> Ordering {
    let prefix_a = non_numeric_prefix(a);
    let prefix_b = non_numeric_prefix(b);
    if prefix_a != prefix_b {
        return prefix_a.cmp(prefix_b);
    }

    let (raw_a, parsed_a) = first_number(a);
    let (raw_b, parsed_b) = first_number(b);
    match parsed_a.cmp(&parsed_b) {
        Ordering::Equal => raw_a.cmp(raw_b),
        unequal => unequal,
    }
}

fn non_numeric_prefix(s: &str) -> &str {
    let end = s.find(|c: char| c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}

/// First digit run as (original substring, parsed value); keys without
/// digits count as "0".
fn first_number(s: &str) -> (&str, u64) {
    let Some(start) = s.find(|c: char| c.is_ascii_digit()) else {
        return ("0", 0);
    };
    let rest = &s[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let raw = &rest[..end];
    (raw, raw.parse().unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_runs_compare_numerically() {
        let mut keys = vec!["item2", "item10", "item1"];
        keys.sort_by(|a, b| compare_alphanumeric(a, b));
        assert_eq!(keys, vec!["item1", "item2", "item10"]);
    }

    #[test]
    fn non_numeric_prefix_wins() {
        assert_eq!(compare_alphanumeric("alpha9", "beta1"), Ordering::Less);
    }

    #[test]
    fn equal_values_fall_back_to_numeric_substring() {
        // 01 and 1 parse equal; the original substrings break the tie
        assert_eq!(compare_alphanumeric("a01", "a1"), Ordering::Less);
    }

    #[test]
    fn keys_without_digits_compare_by_prefix_only() {
        assert_eq!(compare_alphanumeric("color", "color"), Ordering::Equal);
        assert_eq!(compare_alphanumeric("color", "colour"), Ordering::Less);
    }

    #[test]
    fn digitless_key_counts_as_zero() {
        assert_eq!(compare_alphanumeric("size", "size2"), Ordering::Less);
    }
}

//! Tree Flattener: nested token trees to flat path-key artifacts.
//!
//! Walks a [`TokenNode`] tree depth-first, emitting one record per leaf.
//! The path key is the lower-cased dash-join of the path segments (plus an
//! optional suffix). Leaves carrying mode extensions branch once, here:
//! a mode set equal to the configured theme modes emits per-theme
//! overrides at the same key, any other mode set emits mode-suffixed keys
//! into the default artifact.
//!
//! The accumulator is scoped to one invocation; traversal order does not
//! leak into the output because emission order is fixed by the
//! alphanumeric comparator when an artifact is turned into declarations.

use std::collections::{BTreeMap, BTreeSet};

use crate::artifact::FlatMap;
use crate::config::Config;
use crate::error::TokenError;
use crate::normalize;
use crate::tree::{TokenLeaf, TokenNode};

/// How scalar leaves are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlattenMode {
    /// Emit normalized literal values (the base token set).
    BaseValue,
    /// Emit `var(--...)` references for reference-valued leaves.
    Reference,
}

/// Flattener output: the default artifact plus one artifact per
/// configured theme mode. Theme artifacts stay empty unless some leaf
/// branched into them.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FlattenOutput {
    pub root: FlatMap,
    pub themes: BTreeMap<String, FlatMap>,
}

/// Flatten one token tree. Duplicate path keys are collected and the walk
/// continues; a non-empty error list means the run failed as a whole.
pub fn flatten(
    tree: &TokenNode,
    config: &Config,
    mode: FlattenMode,
    suffix: Option<&str>,
) -> Result<FlattenOutput, Vec<TokenError>> {
    let mut output = FlattenOutput::default();
    for mode_name in &config.theme_modes {
        output.themes.insert(mode_name.clone(), FlatMap::new());
    }

    let mut errors = Vec::new();
    let mut path = Vec::new();
    walk(tree, config, mode, suffix, &mut path, &mut output, &mut errors);

    if errors.is_empty() {
        Ok(output)
    } else {
        Err(errors)
    }
}

fn walk(
    node: &TokenNode,
    config: &Config,
    mode: FlattenMode,
    suffix: Option<&str>,
    path: &mut Vec<String>,
    output: &mut FlattenOutput,
    errors: &mut Vec<TokenError>,
) {
    match node {
        TokenNode::Group(children) => {
            for (key, child) in children {
                path.push(key.clone());
                walk(child, config, mode, suffix, path, output, errors);
                path.pop();
            }
        }
        TokenNode::Leaf(leaf) => emit_leaf(leaf, config, mode, suffix, path, output, errors),
    }
}

fn emit_leaf(
    leaf: &TokenLeaf,
    config: &Config,
    mode: FlattenMode,
    suffix: Option<&str>,
    path: &[String],
    output: &mut FlattenOutput,
    errors: &mut Vec<TokenError>,
) {
    let key = path_key(path, suffix);
    let source = path.join(".");

    if !leaf.modes.is_empty() {
        let mode_names: BTreeSet<&str> = leaf.modes.keys().map(String::as_str).collect();
        let theme_names: BTreeSet<&str> = config.theme_modes.iter().map(String::as_str).collect();

        if mode_names == theme_names {
            // the default artifact keeps the leaf's own value; each theme
            // artifact gets its override at the same key
            record(
                &mut output.root,
                key.clone(),
                emit_value(leaf, config, mode, path),
                &source,
                errors,
            );
            for (mode_name, value) in &leaf.modes {
                let theme = output
                    .themes
                    .entry(mode_name.clone())
                    .or_default();
                record(theme, key.clone(), value.to_css(config), &source, errors);
            }
        } else {
            for (mode_name, value) in &leaf.modes {
                let suffixed = format!("{}-{}", key, mode_name.to_lowercase());
                record(
                    &mut output.root,
                    suffixed,
                    value.to_css(config),
                    &source,
                    errors,
                );
            }
        }
        return;
    }

    record(
        &mut output.root,
        key,
        emit_value(leaf, config, mode, path),
        &source,
        errors,
    );
}

fn emit_value(leaf: &TokenLeaf, config: &Config, mode: FlattenMode, path: &[String]) -> String {
    match mode {
        FlattenMode::BaseValue => {
            let parent_kind = path
                .len()
                .checked_sub(2)
                .map(|i| path[i].as_str());
            normalize::base_value(
                &leaf.value.to_source(),
                &leaf.token_type,
                parent_kind,
                config.decimal_precision,
            )
        }
        FlattenMode::Reference => leaf.value.to_css(config),
    }
}

fn path_key(path: &[String], suffix: Option<&str>) -> String {
    let mut segments: Vec<&str> = path.iter().map(String::as_str).collect();
    if let Some(suffix) = suffix {
        segments.push(suffix);
    }
    segments.join("-").to_lowercase()
}

fn record(
    map: &mut FlatMap,
    key: String,
    value: String,
    source: &str,
    errors: &mut Vec<TokenError>,
) {
    if let Err(e) = map.insert(key, value, source) {
        errors.push(e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TokenNode;
    use serde_json::json;

    fn tree(json: serde_json::Value) -> TokenNode {
        TokenNode::from_json(&json).unwrap()
    }

    #[test]
    fn reference_mode_emits_css_vars() {
        let tree = tree(json!({
            "smc": { "color": { "bg": { "value": "{base.color.1}", "type": "color" } } }
        }));
        let output = flatten(&tree, &Config::default(), FlattenMode::Reference, None).unwrap();
        assert_eq!(
            output.root.get("smc-color-bg"),
            Some("var(--ids-base-color-1)")
        );
    }

    #[test]
    fn base_mode_normalizes_units_by_parent_segment() {
        let tree = tree(json!({
            "base": {
                "dimension": { "4": { "value": "4", "type": "number" } },
                "percentage": { "50": { "value": "50", "type": "number" } },
                "em": { "150": { "value": "150", "type": "number" } }
            }
        }));
        let output = flatten(&tree, &Config::default(), FlattenMode::BaseValue, None).unwrap();
        assert_eq!(output.root.get("base-dimension-4"), Some("4px"));
        assert_eq!(output.root.get("base-percentage-50"), Some("50%"));
        assert_eq!(output.root.get("base-em-150"), Some("1.5em"));
    }

    #[test]
    fn suffix_lands_in_every_key() {
        let tree = tree(json!({
            "smc": { "gap": { "value": "{base.dimension.4}", "type": "number" } }
        }));
        let output =
            flatten(&tree, &Config::default(), FlattenMode::Reference, Some("compact")).unwrap();
        assert!(output.root.get("smc-gap-compact").is_some());
        assert!(output.root.get("smc-gap").is_none());
    }

    #[test]
    fn theme_mode_set_branches_into_theme_artifacts() {
        let tree = tree(json!({
            "smc": { "color": { "bg": {
                "value": "{base.color.1}",
                "type": "color",
                "$extensions": { "mode": {
                    "light": "{base.color.1}",
                    "dark": "{base.color.2}"
                } }
            } } }
        }));
        let output = flatten(&tree, &Config::default(), FlattenMode::Reference, None).unwrap();

        // default keeps the leaf's own reference
        assert_eq!(
            output.root.get("smc-color-bg"),
            Some("var(--ids-base-color-1)")
        );
        // both themes override the identical key
        assert_eq!(
            output.themes["light"].get("smc-color-bg"),
            Some("var(--ids-base-color-1)")
        );
        assert_eq!(
            output.themes["dark"].get("smc-color-bg"),
            Some("var(--ids-base-color-2)")
        );
    }

    #[test]
    fn non_theme_mode_set_suffixes_keys_in_the_default_artifact() {
        let tree = tree(json!({
            "smc": { "gap": {
                "value": "{base.dimension.4}",
                "type": "number",
                "$extensions": { "mode": {
                    "compact": "{base.dimension.2}",
                    "spacious": "{base.dimension.8}"
                } }
            } }
        }));
        let output = flatten(&tree, &Config::default(), FlattenMode::Reference, None).unwrap();

        assert_eq!(
            output.root.get("smc-gap-compact"),
            Some("var(--ids-base-dimension-2)")
        );
        assert_eq!(
            output.root.get("smc-gap-spacious"),
            Some("var(--ids-base-dimension-8)")
        );
        assert!(output.root.get("smc-gap").is_none());
        assert!(output.themes["light"].is_empty());
    }

    #[test]
    fn colliding_path_keys_are_reported_not_overwritten() {
        // "Gap" and "gap" lower-case to the same key
        let tree = tree(json!({
            "smc": {
                "Gap": { "value": "{base.dimension.4}", "type": "number" },
                "gap": { "value": "{base.dimension.2}", "type": "number" }
            }
        }));
        let errors = flatten(&tree, &Config::default(), FlattenMode::Reference, None).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            TokenError::DuplicateKey { key, .. } if key == "smc-gap"
        ));
    }

    #[test]
    fn flattening_is_deterministic() {
        let source = json!({
            "b": { "2": { "value": "{x.y}", "type": "color" } },
            "a": { "10": { "value": "{x.y}", "type": "color" },
                    "2": { "value": "{x.y}", "type": "color" } }
        });
        let config = Config::default();
        let first = flatten(&tree(source.clone()), &config, FlattenMode::Reference, None).unwrap();
        let second = flatten(&tree(source), &config, FlattenMode::Reference, None).unwrap();
        let names: Vec<String> = first
            .root
            .clone()
            .into_declarations(&config)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(first, second);
        assert_eq!(
            names,
            vec!["--ids-a-2", "--ids-a-10", "--ids-b-2"]
        );
    }
}

//! Reference Resolver: cross-artifact `var(...)` substitution and
//! single-pass tree resolution.
//!
//! Cross-artifact mode merges every artifact's declarations into one
//! global dictionary, then rewrites each value until no `var(--name)`
//! span remains. Substitution is a bounded loop, not recursion: a chain
//! that is still producing references after the configured depth is a
//! reference cycle and is reported with every name visited. Failures are
//! isolated per declaration; unrelated declarations still resolve.
//!
//! All artifacts that reference each other must be passed to a single
//! [`resolve_artifacts`] call -- resolving piecemeal leaves the
//! dictionary incomplete and changes results.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

use crate::artifact::Declaration;
use crate::config::Config;
use crate::error::TokenError;
use crate::tree::{TokenLeaf, TokenNode};
use crate::value::TokenValue;

/// Build the global symbol dictionary for one resolution run: full
/// custom-property name to raw (possibly still-referencing) value, merged
/// across every artifact. Later artifacts shadow earlier ones on
/// duplicate names.
pub fn build_dictionary(artifacts: &[(String, Vec<Declaration>)]) -> HashMap<String, String> {
    let mut dictionary = HashMap::new();
    for (_, declarations) in artifacts {
        for declaration in declarations {
            dictionary.insert(declaration.name.clone(), declaration.value.clone());
        }
    }
    dictionary
}

/// Resolve every artifact's values to terminal literals against the
/// merged dictionary, preserving declaration order.
pub fn resolve_artifacts(
    artifacts: &[(String, Vec<Declaration>)],
    config: &Config,
) -> Result<Vec<(String, Vec<Declaration>)>, Vec<TokenError>> {
    let dictionary = build_dictionary(artifacts);
    let mut resolved = Vec::with_capacity(artifacts.len());
    let mut errors = Vec::new();

    for (name, declarations) in artifacts {
        let mut out = Vec::with_capacity(declarations.len());
        for declaration in declarations {
            match resolve_value(
                &declaration.name,
                &declaration.value,
                &dictionary,
                config.cycle_depth_limit,
            ) {
                Ok(value) => out.push(Declaration {
                    name: declaration.name.clone(),
                    value,
                }),
                Err(e) => errors.push(e),
            }
        }
        resolved.push((name.clone(), out));
    }

    if errors.is_empty() {
        Ok(resolved)
    } else {
        Err(errors)
    }
}

/// Merge two fully resolved theme artifacts into `light-dark()`
/// composites, pairing declarations by identical name. Both sides must
/// declare exactly the same name set; the light side's order is kept.
pub fn merge_light_dark(
    light: &[Declaration],
    dark: &[Declaration],
) -> Result<Vec<Declaration>, TokenError> {
    let light_names: BTreeMap<&str, &str> = light
        .iter()
        .map(|d| (d.name.as_str(), d.value.as_str()))
        .collect();
    let dark_names: BTreeMap<&str, &str> = dark
        .iter()
        .map(|d| (d.name.as_str(), d.value.as_str()))
        .collect();

    let mut missing: Vec<String> = Vec::new();
    for name in light_names.keys() {
        if !dark_names.contains_key(name) {
            missing.push(format!("{} (missing in dark)", name));
        }
    }
    for name in dark_names.keys() {
        if !light_names.contains_key(name) {
            missing.push(format!("{} (missing in light)", name));
        }
    }
    if !missing.is_empty() {
        return Err(TokenError::ThemeKeySetMismatch { missing });
    }

    Ok(light
        .iter()
        .map(|declaration| {
            // name sets were verified equal above
            let dark_value = dark_names[declaration.name.as_str()];
            Declaration {
                name: declaration.name.clone(),
                value: format!("light-dark({}, {})", declaration.value, dark_value),
            }
        })
        .collect())
}

/// One substitution pass target: a `var( --name )` span inside a value.
struct VarRef {
    start: usize,
    end: usize,
    name: String,
}

/// Find every `var( --name )` span. The name is everything up to the
/// closing parenthesis, trimmed; custom-property names contain no
/// parentheses.
fn scan_var_refs(value: &str) -> Vec<VarRef> {
    let mut refs = Vec::new();
    let mut offset = 0;
    while let Some(found) = value[offset..].find("var(") {
        let start = offset + found;
        let inner_start = start + "var(".len();
        let Some(close) = value[inner_start..].find(')') else {
            break;
        };
        let end = inner_start + close + 1;
        let name = value[inner_start..inner_start + close].trim();
        if name.starts_with("--") {
            refs.push(VarRef {
                start,
                end,
                name: name.to_owned(),
            });
        }
        offset = end;
    }
    refs
}

/// Substitute `var(--name)` spans until none remain or the depth bound
/// trips. Values without references are returned unchanged, so resolving
/// an already-resolved artifact is the identity.
fn resolve_value(
    referrer: &str,
    raw: &str,
    dictionary: &HashMap<String, String>,
    depth_limit: u32,
) -> Result<String, TokenError> {
    let mut current = raw.to_owned();
    let mut chain = vec![referrer.to_owned()];

    for _ in 0..depth_limit {
        let refs = scan_var_refs(&current);
        if refs.is_empty() {
            return Ok(current);
        }

        // substitute right-to-left so earlier spans keep their offsets
        for var_ref in refs.iter().rev() {
            let Some(replacement) = dictionary.get(&var_ref.name) else {
                return Err(TokenError::UnresolvedReference {
                    referrer: referrer.to_owned(),
                    missing: var_ref.name.clone(),
                });
            };
            current.replace_range(var_ref.start..var_ref.end, replacement);
        }
        for var_ref in &refs {
            chain.push(var_ref.name.clone());
        }
    }

    Err(TokenError::ReferenceCycle { chain })
}

// ── Single-pass tree resolution ──────────────────────────────────────

/// Resolve a token tree against itself into nested JSON of final literal
/// values (the exporter's test-data shape). Reference chains are followed
/// through the raw tree with the same depth bound as cross-artifact
/// resolution; mode extensions become child keys of their leaf's path.
pub fn resolve_tree(tree: &TokenNode, config: &Config) -> Result<Value, Vec<TokenError>> {
    let mut output = Value::Object(Map::new());
    let mut errors = Vec::new();
    let mut path = Vec::new();
    walk_tree(tree, tree, config, &mut path, &mut output, &mut errors);

    if errors.is_empty() {
        Ok(output)
    } else {
        Err(errors)
    }
}

fn walk_tree(
    node: &TokenNode,
    root: &TokenNode,
    config: &Config,
    path: &mut Vec<String>,
    output: &mut Value,
    errors: &mut Vec<TokenError>,
) {
    match node {
        TokenNode::Group(children) => {
            for (key, child) in children {
                path.push(key.clone());
                walk_tree(child, root, config, path, output, errors);
                path.pop();
            }
        }
        TokenNode::Leaf(leaf) => emit_resolved_leaf(leaf, root, config, path, output, errors),
    }
}

fn emit_resolved_leaf(
    leaf: &TokenLeaf,
    root: &TokenNode,
    config: &Config,
    path: &[String],
    output: &mut Value,
    errors: &mut Vec<TokenError>,
) {
    let referrer = path.join(".");

    if matches!(leaf.value, TokenValue::Reference(_)) && !leaf.modes.is_empty() {
        for (mode_name, value) in &leaf.modes {
            match resolve_leaf_value(value, root, output, config, &referrer) {
                Ok(resolved) => {
                    let mut mode_path = path.to_vec();
                    mode_path.push(mode_name.clone());
                    set_prop(output, &mode_path, resolved);
                }
                Err(e) => errors.push(e),
            }
        }
        return;
    }

    match resolve_leaf_value(&leaf.value, root, output, config, &referrer) {
        Ok(resolved) => set_prop(output, path, resolved),
        Err(e) => errors.push(e),
    }
}

/// Follow one value to its terminal literal. Values already resolved into
/// the output win over raw definitions, so chains shorten as the walk
/// progresses.
fn resolve_leaf_value(
    value: &TokenValue,
    root: &TokenNode,
    output: &Value,
    config: &Config,
    referrer: &str,
) -> Result<Value, TokenError> {
    let first = match value {
        TokenValue::Literal(s) => return Ok(Value::String(s.clone())),
        TokenValue::Reference(path) => path,
    };

    let mut chain = vec![referrer.to_owned()];
    let mut target = first.clone();
    for _ in 0..config.cycle_depth_limit {
        chain.push(target.join("."));

        if let Some(cached) = prop_at(output, &target) {
            return Ok(cached.clone());
        }
        match root.leaf_value_at(&target) {
            Some(TokenValue::Literal(s)) => return Ok(Value::String(s.clone())),
            Some(TokenValue::Reference(next)) => target = next.clone(),
            None => {
                return Err(TokenError::UnresolvedReference {
                    referrer: referrer.to_owned(),
                    missing: format!("{{{}}}", target.join(".")),
                })
            }
        }
    }

    Err(TokenError::ReferenceCycle { chain })
}

fn set_prop(output: &mut Value, path: &[String], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut node = output;
    for segment in parents {
        let Value::Object(map) = node else { return };
        node = map
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }
    if let Value::Object(map) = node {
        map.insert(last.clone(), value);
    }
}

fn prop_at<'a>(output: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut node = output;
    for segment in path {
        node = node.as_object()?.get(segment)?;
    }
    Some(node)
}

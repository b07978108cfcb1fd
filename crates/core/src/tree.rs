//! Token tree model: tagged leaf/group nodes built from design-tool JSON.
//!
//! The exporter format is duck-typed: an object carrying both `value` and
//! `type` keys is a token definition, anything else is a grouping level.
//! That probe happens exactly once, here, when the JSON is classified into
//! an explicit [`TokenNode`]; the rest of the pipeline only ever matches
//! on the tagged variants.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::TokenError;
use crate::value::TokenValue;

/// Declared token type. Only `number` and `text` change emission
/// behavior; every other declared type passes its value through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenType {
    Number,
    Text,
    Color,
    Other(String),
}

impl TokenType {
    fn parse(raw: &str) -> TokenType {
        match raw {
            "number" => TokenType::Number,
            "text" => TokenType::Text,
            "color" => TokenType::Color,
            other => TokenType::Other(other.to_owned()),
        }
    }
}

/// One token definition: a value, its declared type, and optional
/// per-mode alternate values (from `$extensions.mode` in the source).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLeaf {
    pub value: TokenValue,
    pub token_type: TokenType,
    pub modes: BTreeMap<String, TokenValue>,
}

/// A node of the token tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    Leaf(TokenLeaf),
    Group(BTreeMap<String, TokenNode>),
}

impl TokenNode {
    /// Build a tree from design-tool JSON.
    ///
    /// An object with both `value` and `type` keys is a leaf; any other
    /// object is a group whose object-valued entries are walked
    /// recursively. Scalar entries inside a group are skipped, matching
    /// the exporter format (metadata keys next to nested groups). A node
    /// with a partial leaf shape and no nested groups is ambiguous and
    /// reported as a schema violation with its path.
    pub fn from_json(root: &Value) -> Result<TokenNode, TokenError> {
        let mut path = Vec::new();
        classify(root, &mut path)
    }

    /// Follow a dotted reference path through the tree.
    pub fn node_at(&self, path: &[String]) -> Option<&TokenNode> {
        let mut node = self;
        for segment in path {
            match node {
                TokenNode::Group(children) => node = children.get(segment)?,
                TokenNode::Leaf(_) => return None,
            }
        }
        Some(node)
    }

    /// The value of the leaf at `path`, if the path lands on a leaf.
    pub fn leaf_value_at(&self, path: &[String]) -> Option<&TokenValue> {
        match self.node_at(path)? {
            TokenNode::Leaf(leaf) => Some(&leaf.value),
            TokenNode::Group(_) => None,
        }
    }
}

fn classify(value: &Value, path: &mut Vec<String>) -> Result<TokenNode, TokenError> {
    let Some(object) = value.as_object() else {
        return Err(TokenError::SchemaViolation {
            path: path.join("."),
            message: "expected an object node".to_owned(),
        });
    };

    let has_value = object.contains_key("value");
    let has_type = object.contains_key("type");
    if has_value && has_type {
        return Ok(TokenNode::Leaf(leaf_from(object)));
    }

    let mut children = BTreeMap::new();
    for (key, child) in object {
        if child.is_object() {
            path.push(key.clone());
            let node = classify(child, path)?;
            path.pop();
            children.insert(key.clone(), node);
        }
    }

    if children.is_empty() && (has_value || has_type) {
        return Err(TokenError::SchemaViolation {
            path: path.join("."),
            message: "node has a partial leaf shape ('value' or 'type') and no nested groups"
                .to_owned(),
        });
    }

    Ok(TokenNode::Group(children))
}

fn leaf_from(object: &serde_json::Map<String, Value>) -> TokenLeaf {
    // presence of both keys was checked by the caller
    let value = TokenValue::from_json(&object["value"]);
    let token_type = match &object["type"] {
        Value::String(s) => TokenType::parse(s),
        other => TokenType::Other(other.to_string()),
    };

    let mut modes = BTreeMap::new();
    if let Some(mode_map) = object
        .get("$extensions")
        .and_then(|e| e.get("mode"))
        .and_then(Value::as_object)
    {
        for (mode_name, mode_value) in mode_map {
            modes.insert(mode_name.clone(), TokenValue::from_json(mode_value));
        }
    }

    TokenLeaf {
        value,
        token_type,
        modes,
    }
}

//! Error taxonomy for flattening and resolution.
//!
//! Flattening and resolution are batch operations: failures are isolated
//! per record, collected, and reported together. Callers receive
//! `Result<_, Vec<TokenError>>` from the batch entry points and must treat
//! a non-empty error list as a failed run.

use serde::Serialize;

/// All errors produced by the flattener and the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TokenError {
    /// A tree node is neither a usable leaf (`value` + `type`) nor an
    /// interior node with nested groups.
    #[error("schema violation at '{path}': {message}")]
    SchemaViolation { path: String, message: String },

    /// A `var(--name)` or `{a.b.c}` reference names a declaration that
    /// does not exist in the dictionary/tree.
    #[error("unresolved reference in '{referrer}': '{missing}' is not declared")]
    UnresolvedReference { referrer: String, missing: String },

    /// Substitution exceeded the depth bound; the chain lists every name
    /// visited, starting at the referring declaration.
    #[error("reference cycle detected: {}", .chain.join(" \u{2192} "))]
    ReferenceCycle { chain: Vec<String> },

    /// Light/dark artifacts disagree on their declared key sets. Each
    /// entry names one key of the symmetric difference and the side it is
    /// missing from.
    #[error("theme key sets differ: {}", .missing.join(", "))]
    ThemeKeySetMismatch { missing: Vec<String> },

    /// Two leaves flattened to the same path key within one artifact.
    /// Overwriting would silently lose a token, so this is surfaced.
    #[error("duplicate key '{key}' produced by '{path}'")]
    DuplicateKey { key: String, path: String },
}

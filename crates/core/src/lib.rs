//! tokencss-core: design-token flattening and reference resolution.
//!
//! Two cooperating stages, both pure, synchronous transformations over
//! in-memory mappings:
//!
//! 1. The flattener ([`flatten()`]) walks a nested [`TokenNode`] tree and
//!    emits flat path-key artifacts, applying unit normalization and
//!    theme-mode branching. Leaves first.
//! 2. The resolver ([`resolve_artifacts()`]) takes one or more flattened
//!    artifacts, builds a global name dictionary across all of them, and
//!    substitutes every `var(--name)` reference until only literal values
//!    remain, with bounded chain following and per-declaration failure
//!    isolation.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`flatten()`] -- flatten one token tree into artifacts
//! - [`resolve_artifacts()`] -- cross-artifact reference resolution
//! - [`resolve_tree()`] -- single-pass resolution of a tree against itself
//! - [`merge_light_dark()`] -- pair two resolved theme artifacts into
//!   `light-dark()` composites
//! - [`TokenNode`] -- the tagged token tree
//! - [`Config`] -- recognized compilation options
//! - [`TokenError`] -- the error taxonomy
//!
//! All artifact sets that must resolve against each other have to be
//! supplied to a single [`resolve_artifacts()`] call; the dictionary is
//! rebuilt per invocation and never shared.

pub mod artifact;
pub mod config;
pub mod error;
pub mod flatten;
pub mod normalize;
pub mod ordering;
pub mod resolve;
pub mod tree;
pub mod value;

// ── Convenience re-exports: key types ────────────────────────────────

pub use artifact::{Declaration, FlatMap};
pub use config::Config;
pub use error::TokenError;
pub use tree::{TokenLeaf, TokenNode, TokenType};
pub use value::TokenValue;

// ── Convenience re-exports: pipeline entry points ────────────────────

pub use flatten::{flatten, FlattenMode, FlattenOutput};
pub use resolve::{build_dictionary, merge_light_dark, resolve_artifacts, resolve_tree};

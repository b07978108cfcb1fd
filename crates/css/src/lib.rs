//! tokencss-css: the CSS-writing collaborator.
//!
//! Renders resolved/flattened artifacts as custom-property rule blocks
//! and extracts such declarations back out of generated files. This is
//! deliberately not a CSS parser: it understands exactly the subset the
//! emitter produces.

pub mod emit;
pub mod parse;

pub use emit::{render, RuleBlock};
pub use parse::custom_properties;

//! Recognized compilation options.

use std::collections::BTreeSet;

/// Default custom-property namespace.
pub const DEFAULT_PREFIX: &str = "ids";
/// Maximum fractional digits kept when normalizing numeric values.
pub const DEFAULT_DECIMAL_PRECISION: u32 = 4;
/// Substitution iterations allowed per value before a reference chain is
/// declared cyclic.
pub const DEFAULT_CYCLE_DEPTH_LIMIT: u32 = 32;

/// Options shared by the flattener and the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Custom-property namespace: `ids` yields `--ids-...` declarations.
    pub prefix: String,
    /// Mode names that branch a leaf into per-theme artifacts. A leaf whose
    /// mode-extension name set equals this set emits theme overrides; any
    /// other mode set emits mode-suffixed keys into the default artifact.
    pub theme_modes: BTreeSet<String>,
    /// Maximum fractional digits for normalized numeric values.
    pub decimal_precision: u32,
    /// Depth bound for reference substitution.
    pub cycle_depth_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prefix: DEFAULT_PREFIX.to_owned(),
            theme_modes: ["light", "dark"].iter().map(|m| (*m).to_owned()).collect(),
            decimal_precision: DEFAULT_DECIMAL_PRECISION,
            cycle_depth_limit: DEFAULT_CYCLE_DEPTH_LIMIT,
        }
    }
}

use std::path::Path;

use tokencss_core::{flatten, Config, FlatMap, FlattenMode};
use tokencss_css::{render, RuleBlock};

use super::{read_tree, write_output, Failure};

/// Flatten several `<name>.json` sources into one `:root` block, each
/// name doubling as the key suffix (e.g. small/medium/large size sets).
/// Colliding keys across the sources are reported, not overwritten.
pub(crate) fn run(
    dir: &Path,
    names: &[String],
    out: Option<&Path>,
    config: &Config,
) -> Result<(), Failure> {
    let mut combined = FlatMap::new();
    let mut errors = Vec::new();

    for name in names {
        let source = dir.join(format!("{}.json", name));
        let tree = read_tree(&source)?;
        match flatten(&tree, config, FlattenMode::Reference, Some(name)) {
            Ok(output) => {
                if let Err(collisions) = combined.merge(output.root, name) {
                    errors.extend(collisions);
                }
            }
            Err(flatten_errors) => errors.extend(flatten_errors),
        }
    }

    if !errors.is_empty() {
        return Err(Failure::collected("combining sources failed", errors));
    }

    let block = RuleBlock::new(":root", combined.into_declarations(config));
    write_output(out, &render(&[block]))
}

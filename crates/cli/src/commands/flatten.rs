use std::path::Path;

use tokencss_core::{flatten, Config, FlattenMode};
use tokencss_css::{render, RuleBlock};

use super::{read_tree, write_output, Failure};

pub(crate) fn run(
    source: &Path,
    out: Option<&Path>,
    base: bool,
    suffix: Option<&str>,
    selector: &str,
    config: &Config,
) -> Result<(), Failure> {
    let tree = read_tree(source)?;
    let mode = if base {
        FlattenMode::BaseValue
    } else {
        FlattenMode::Reference
    };
    let output = flatten(&tree, config, mode, suffix)
        .map_err(|errors| Failure::collected("flattening failed", errors))?;

    let mut blocks = vec![RuleBlock::new(
        selector,
        output.root.into_declarations(config),
    )];
    for (mode_name, map) in output.themes {
        if !map.is_empty() {
            blocks.push(RuleBlock::new(
                format!(".{}-theme-{}", config.prefix, mode_name),
                map.into_declarations(config),
            ));
        }
    }

    write_output(out, &render(&blocks))
}

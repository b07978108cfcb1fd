use std::path::Path;

use tokencss_core::{flatten, Config, FlattenMode};
use tokencss_css::{render, RuleBlock};

use super::{read_tree, write_output, Failure};

/// Flatten one `<mode>.json` per configured theme mode into theme-class
/// rule blocks, all in one file.
pub(crate) fn run(dir: &Path, out: Option<&Path>, config: &Config) -> Result<(), Failure> {
    let mut blocks = Vec::with_capacity(config.theme_modes.len());

    for mode_name in &config.theme_modes {
        let source = dir.join(format!("{}.json", mode_name));
        let tree = read_tree(&source)?;
        let output = flatten(&tree, config, FlattenMode::Reference, None)
            .map_err(|errors| {
                Failure::collected(&format!("flattening {} failed", source.display()), errors)
            })?;
        blocks.push(RuleBlock::new(
            format!(".{}-theme-{}", config.prefix, mode_name),
            output.root.into_declarations(config),
        ));
    }

    write_output(out, &render(&blocks))
}

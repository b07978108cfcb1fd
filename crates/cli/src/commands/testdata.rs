use std::path::Path;

use tokencss_core::{resolve_tree, Config};

use super::{read_tree, write_output, Failure};

/// Resolve a token tree against itself and emit the nested JSON of final
/// literal values, for test fixtures.
pub(crate) fn run(source: &Path, out: Option<&Path>, config: &Config) -> Result<(), Failure> {
    let tree = read_tree(source)?;
    let data = resolve_tree(&tree, config)
        .map_err(|errors| Failure::collected("tree resolution failed", errors))?;
    let pretty = serde_json::to_string_pretty(&data)
        .map_err(|e| Failure::message(format!("serializing test data: {}", e)))?;
    write_output(out, &pretty)
}

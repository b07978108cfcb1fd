use std::fs;
use std::path::{Path, PathBuf};

use tokencss_core::{merge_light_dark, resolve_artifacts, Config, Declaration};
use tokencss_css::{custom_properties, render, RuleBlock};

use super::{write_output, Failure};

/// Resolve every `var()` reference across the given flattened CSS files
/// against their merged dictionary. With `--light-dark`, exactly two
/// inputs (light first) are paired into `light-dark()` composites.
pub(crate) fn run(
    files: &[PathBuf],
    out_dir: Option<&Path>,
    light_dark: bool,
    selector: &str,
    config: &Config,
) -> Result<(), Failure> {
    if light_dark && files.len() != 2 {
        return Err(Failure::message(
            "--light-dark expects exactly two inputs: the light file, then the dark file",
        ));
    }

    let mut artifacts: Vec<(String, Vec<Declaration>)> = Vec::with_capacity(files.len());
    for file in files {
        let css = fs::read_to_string(file)
            .map_err(|e| Failure::io(&format!("reading {}", file.display()), e))?;
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        artifacts.push((name, custom_properties(&css, selector)));
    }

    let resolved = resolve_artifacts(&artifacts, config)
        .map_err(|errors| Failure::collected("resolution failed", errors))?;

    if light_dark {
        let merged = merge_light_dark(&resolved[0].1, &resolved[1].1)
            .map_err(|e| Failure::single("merging theme artifacts", e))?;
        let css = render(&[RuleBlock::new(selector, merged)]);
        let out = out_dir.map(|dir| dir.join("light-dark.css"));
        return write_output(out.as_deref(), &css);
    }

    for (name, declarations) in resolved {
        let css = render(&[RuleBlock::new(selector, declarations)]);
        let out = out_dir.map(|dir| dir.join(&name));
        write_output(out.as_deref(), &css)?;
    }
    Ok(())
}

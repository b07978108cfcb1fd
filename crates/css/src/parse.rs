//! Custom-property extraction from generated rule blocks.

use tokencss_core::Declaration;

/// Extract `--`-prefixed declarations from every rule block whose
/// selector matches `selector` exactly. Other selectors, non-custom
/// properties, and anything outside a rule block are skipped.
pub fn custom_properties(css: &str, selector: &str) -> Vec<Declaration> {
    let mut declarations = Vec::new();
    let mut rest = css;

    while let Some(open) = rest.find('{') {
        let block_selector = rest[..open].trim();
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            break;
        };

        if block_selector == selector {
            for entry in after_open[..close].split(';') {
                let Some((name, value)) = entry.split_once(':') else {
                    continue;
                };
                let name = name.trim();
                if name.starts_with("--") {
                    declarations.push(Declaration {
                        name: name.to_owned(),
                        value: value.trim().to_owned(),
                    });
                }
            }
        }
        rest = &after_open[close + 1..];
    }

    declarations
}

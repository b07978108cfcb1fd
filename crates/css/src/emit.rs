//! Rule-block rendering for generated token CSS.

use tokencss_core::Declaration;

/// One CSS rule block: a selector plus its ordered declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl RuleBlock {
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> RuleBlock {
        RuleBlock {
            selector: selector.into(),
            declarations,
        }
    }
}

/// Render rule blocks as `selector { --name: value; }`, two-space
/// indent, one blank line between blocks.
pub fn render(blocks: &[RuleBlock]) -> String {
    blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_block(block: &RuleBlock) -> String {
    let mut lines = Vec::with_capacity(block.declarations.len() + 2);
    lines.push(format!("{} {{", block.selector));
    for declaration in &block.declarations {
        lines.push(format!("  {}: {};", declaration.name, declaration.value));
    }
    lines.push("}".to_owned());
    lines.join("\n")
}

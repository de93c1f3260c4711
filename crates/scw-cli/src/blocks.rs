//! # Blocks Subcommand
//!
//! Lists the wizard catalogue, or the field rules of one block.

use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;

use scw_rules::Block;

/// Arguments for `scw blocks`.
#[derive(Args, Debug)]
pub struct BlocksArgs {
    /// Show the field rules of this block instead of the catalogue.
    #[arg(long)]
    pub block: Option<u32>,
}

/// Execute the blocks subcommand.
pub fn run_blocks(args: &BlocksArgs) -> Result<u8> {
    let output = match args.block {
        Some(n) => render_rules(crate::block_by_number(n)?),
        None => render_catalogue(),
    };
    print!("{output}");
    Ok(0)
}

fn render_catalogue() -> String {
    let mut out = String::new();
    for block in Block::ALL {
        let detail = match block.rule_set() {
            Some(rules) => format!("{} fields", rules.len()),
            None => "read-only".to_string(),
        };
        let _ = writeln!(out, "{:<36} {detail}", block.to_string());
    }
    out
}

fn render_rules(block: Block) -> String {
    let mut out = format!("{}: {}\n", block, block.screen_title());
    let Some(rules) = block.rule_set() else {
        out.push_str("  (read-only)\n");
        return out;
    };
    for rule in rules.rules() {
        let _ = writeln!(
            out,
            "  {:<44} {:<8} {}",
            rule.field,
            rule.kind.as_str(),
            rule.class.as_str()
        );
    }
    out
}

//! # Validate Subcommand
//!
//! Validates a saved wizard record block by block. Exits 1 when any
//! selected block has errors.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use scw_core::FormRecord;
use scw_rules::{Block, ErrorMap};
use scw_state::{FormStore, JsonFileStore, WizardConfig};

/// Arguments for `scw validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Saved record (JSON). Defaults to the configured store path.
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Validate only this block.
    #[arg(long)]
    pub block: Option<u32>,

    /// Print the error maps as JSON keyed by block number.
    #[arg(long)]
    pub json: bool,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, config: &WizardConfig) -> Result<u8> {
    let path = crate::resolve_record_path(args.record.as_deref(), config)?;
    let record = load_saved_record(&path)?;
    let blocks = crate::selected_blocks(args.block)?;

    let reports = validate_blocks(&blocks, &record);
    let failing = reports.iter().filter(|(_, errors)| !errors.is_empty()).count();
    tracing::info!(
        record = %path.display(),
        blocks = reports.len(),
        failing,
        "record validated"
    );

    if args.json {
        let by_number: BTreeMap<u32, &ErrorMap> = reports
            .iter()
            .map(|(block, errors)| (block.number().get(), errors))
            .collect();
        println!("{}", serde_json::to_string_pretty(&by_number)?);
    } else {
        print!("{}", render_reports(&reports));
    }

    Ok(if failing == 0 { 0 } else { 1 })
}

/// Load a record that must already exist on disk.
pub(crate) fn load_saved_record(path: &Path) -> Result<FormRecord> {
    if !path.is_file() {
        bail!("record file not found: {}", path.display());
    }
    JsonFileStore::new(path)
        .load()
        .with_context(|| format!("failed to load record {}", path.display()))
}

fn validate_blocks(blocks: &[Block], record: &FormRecord) -> Vec<(Block, ErrorMap)> {
    blocks
        .iter()
        .map(|block| {
            let errors = block
                .rule_set()
                .map(|rules| rules.validate(record))
                .unwrap_or_default();
            (*block, errors)
        })
        .collect()
}

fn render_reports(reports: &[(Block, ErrorMap)]) -> String {
    let mut out = String::new();
    for (block, errors) in reports {
        if errors.is_empty() {
            let _ = writeln!(out, "{block}: ok");
            continue;
        }
        let _ = writeln!(out, "{block}: {} error(s)", errors.len());
        for (field, message) in errors.iter() {
            let _ = writeln!(out, "  {field}: {message}");
        }
    }
    out
}

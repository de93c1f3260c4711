//! # Set Subcommand
//!
//! Applies one field change to a saved record through the conditional
//! resolver, writes the record back, and prints the block's new errors.
//!
//! `--value` is read as JSON (`true`, `3`, `"Other"`, `["a", "b"]`,
//! `null`) when the result has the field's declared kind. Anything else is
//! interpreted according to that kind, so `--value Other`, `--value yes`
//! and `--value 2` on a text field also work.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use scw_core::FieldValue;
use scw_rules::Block;
use scw_state::{JsonFileStore, WizardConfig, WizardSession};

/// Arguments for `scw set`.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Record file (JSON). Created if missing. Defaults to the configured
    /// store path.
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Block the field belongs to.
    #[arg(long)]
    pub block: u32,

    /// Field identifier, e.g. `block4_proxyAllowed`.
    #[arg(long)]
    pub field: String,

    /// New value.
    #[arg(long, allow_hyphen_values = true)]
    pub value: String,
}

/// Execute the set subcommand.
pub fn run_set(args: &SetArgs, config: &WizardConfig) -> Result<u8> {
    let path = crate::resolve_record_path(args.record.as_deref(), config)?;
    let block = crate::block_by_number(args.block)?;
    let value = parse_value(block, &args.field, &args.value);

    let mut session = WizardSession::load(JsonFileStore::new(&path), config)
        .with_context(|| format!("failed to open record {}", path.display()))?;
    let errors = session
        .update_form_data(block, &args.field, value)
        .with_context(|| format!("cannot set {}", args.field))?;
    session
        .request_save(block)
        .with_context(|| format!("failed to write record {}", path.display()))?;

    if errors.is_empty() {
        println!("{block}: ok");
    } else {
        println!("{block}: {} error(s)", errors.len());
        for (field, message) in errors.iter() {
            println!("  {field}: {message}");
        }
    }
    Ok(0)
}

fn parse_value(block: Block, field: &str, raw: &str) -> FieldValue {
    let json = serde_json::from_str::<FieldValue>(raw).ok();
    let Some(rule) = block.rule_set().and_then(|rules| rules.rule(field)) else {
        return json.unwrap_or_else(|| FieldValue::text(raw));
    };
    match json {
        Some(value) if value.kind().map_or(true, |kind| kind == rule.kind) => value,
        // A value of the wrong kind is passed on when the raw text does not
        // read as the declared kind either, so the record rejects it.
        Some(value) => match rule.coerce(raw) {
            FieldValue::Absent => value,
            coerced => coerced,
        },
        None => rule.coerce(raw),
    }
}

//! # Progress Subcommand
//!
//! Prints `N. Title (x/y Mandatory)` for every block of a saved record.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use scw_state::{BlockOverview, JsonFileStore, WizardConfig, WizardSession};

/// Arguments for `scw progress`.
#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Saved record (JSON). Defaults to the configured store path.
    #[arg(long)]
    pub record: Option<PathBuf>,
}

/// Execute the progress subcommand.
pub fn run_progress(args: &ProgressArgs, config: &WizardConfig) -> Result<u8> {
    let path = crate::resolve_record_path(args.record.as_deref(), config)?;
    crate::validate::load_saved_record(&path)?;
    let session = WizardSession::load(JsonFileStore::new(&path), config)
        .with_context(|| format!("failed to open record {}", path.display()))?;
    print!("{}", render_overview(&session.overview()));
    Ok(0)
}

fn render_overview(rows: &[BlockOverview]) -> String {
    let mut out = String::new();
    for row in rows {
        match row.progress {
            Some(progress) if progress.total > 0 => {
                let _ = writeln!(out, "{} {}", row.block, progress);
            }
            _ => {
                let _ = writeln!(out, "{}", row.block);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use scw_core::{FieldValue, FormRecord};
    use scw_state::MemoryStore;

    #[test]
    fn overview_renders_counts() {
        let record = FormRecord::from_iter([(
            "block10_isReplacingConstitution",
            FieldValue::Boolean(true),
        )]);
        let session =
            WizardSession::load(MemoryStore::with_record(record), &WizardConfig::default())
                .unwrap();
        let out = render_overview(&session.overview());
        assert_eq!(out.lines().count(), 10);
        assert!(out.contains("9. Transitional Provisions (1/2 Mandatory)\n"));
        assert!(out.ends_with("10. Review & Generate\n"));
    }

    #[test]
    fn run_reads_record_from_config_store_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wizard.json");
        std::fs::write(&path, "{}").unwrap();
        let config = WizardConfig::from_yaml_str(&format!("store:\n  path: {}\n", path.display()))
            .unwrap();
        let code = run_progress(&ProgressArgs { record: None }, &config).unwrap();
        assert_eq!(code, 0);
    }
}

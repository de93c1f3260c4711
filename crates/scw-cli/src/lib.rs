//! # scw-cli: Society Constitution Wizard Command-Line Interface
//!
//! Inspects the block catalogue and works with saved wizard records
//! without a UI host.
//!
//! ## Subcommands
//!
//! - `scw blocks`: List the wizard blocks and their rule tables.
//! - `scw validate`: Print each block's errors for a saved record.
//! - `scw progress`: Print mandatory progress per block.
//! - `scw set`: Apply one field change, clearing stale dependents, and
//!   write the record back.
//!
//! ```bash
//! scw validate --record wizard.json --block 3
//! scw set --record wizard.json --block 4 --field block4_proxyAllowed --value false
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; rules and lifecycle live in
//!   `scw-rules` and `scw-state`.
//! - Handlers return an exit code; errors carry context for the user.

pub mod blocks;
pub mod progress;
pub mod set;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use scw_core::BlockNumber;
use scw_rules::Block;
use scw_state::WizardConfig;

/// Load the configuration file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<WizardConfig> {
    match path {
        Some(path) => WizardConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(WizardConfig::default()),
    }
}

/// The record file to work on: `--record` if given, else the configured
/// store path.
pub fn resolve_record_path(record: Option<&Path>, config: &WizardConfig) -> Result<PathBuf> {
    match record.or(config.store.path.as_deref()) {
        Some(path) => Ok(path.to_path_buf()),
        None => bail!("no record file: pass --record or set store.path in the config"),
    }
}

/// Look up a block by its wizard number.
pub fn block_by_number(number: u32) -> Result<Block> {
    match Block::from_number(BlockNumber(number)) {
        Some(block) => Ok(block),
        None => bail!("no block {number}: blocks are numbered 1 to {}", Block::ALL.len()),
    }
}

/// The selected block, or every editable block.
pub fn selected_blocks(number: Option<u32>) -> Result<Vec<Block>> {
    match number {
        Some(n) => Ok(vec![block_by_number(n)?]),
        None => Ok(Block::ALL
            .into_iter()
            .filter(|block| !block.is_read_only())
            .collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_flag_wins_over_config() {
        let config = WizardConfig::from_yaml_str("store:\n  path: saved.json\n").unwrap();
        let path = resolve_record_path(Some(Path::new("other.json")), &config).unwrap();
        assert_eq!(path, PathBuf::from("other.json"));
        let path = resolve_record_path(None, &config).unwrap();
        assert_eq!(path, PathBuf::from("saved.json"));
    }

    #[test]
    fn missing_record_path_is_an_error() {
        let err = resolve_record_path(None, &WizardConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--record"));
    }

    #[test]
    fn block_numbers_are_checked() {
        assert_eq!(block_by_number(4).unwrap(), Block::Meetings);
        assert!(block_by_number(0).is_err());
        assert!(block_by_number(11).is_err());
    }

    #[test]
    fn default_selection_skips_review() {
        let blocks = selected_blocks(None).unwrap();
        assert_eq!(blocks.len(), 9);
        assert!(!blocks.contains(&Block::Review));
        assert_eq!(selected_blocks(Some(10)).unwrap(), vec![Block::Review]);
    }

    #[test]
    fn missing_config_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("scw.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("scw.yaml"));
    }
}

//! Wizard flows through sessions, controllers, and the JSON file store.

use proptest::prelude::*;

use scw_core::{BlockNumber, FieldValue, FormRecord};
use scw_rules::Block;
use scw_state::{
    BlockController, BlockStatus, EventLog, HostEvent, JsonFileStore, MemoryStore, ReopenPolicy,
    WizardConfig, WizardError, WizardSession,
};

fn file_config(path: &std::path::Path) -> WizardConfig {
    let yaml = format!("store:\n  path: {}\n", path.display());
    WizardConfig::from_yaml_str(&yaml).unwrap()
}

#[test]
fn refused_completion_does_not_notify_host() {
    let rules = Block::Meetings.rule_set().unwrap();
    let block = Block::Meetings.number();
    let mut controller = BlockController::new(block, rules, FormRecord::new(), EventLog::new());
    controller
        .update_form_data("block4_proxyAllowed", FieldValue::Boolean(true))
        .unwrap();

    let outcome = controller.request_complete().unwrap();
    assert!(!outcome.errors().unwrap().is_empty());
    assert_eq!(controller.status(), BlockStatus::InProgress);
    assert_eq!(controller.host().count(HostEvent::Complete(block)), 0);
}

#[test]
fn save_emits_exactly_one_callback() {
    let rules = Block::Finances.rule_set().unwrap();
    let block = Block::Finances.number();
    let mut controller = BlockController::new(block, rules, FormRecord::new(), EventLog::new());
    let before = controller.status();

    controller.request_save().unwrap();
    assert_eq!(controller.host().events(), &[HostEvent::SaveProgress(block)]);
    assert_eq!(controller.status(), before);
}

#[test]
fn block_number_is_forwarded_unchanged() {
    let rules = Block::Transitional.rule_set().unwrap();
    let mut controller =
        BlockController::new(BlockNumber(42), rules, FormRecord::new(), EventLog::new());
    controller
        .update_form_data("block10_isReplacingConstitution", FieldValue::Boolean(false))
        .unwrap();
    controller.request_save().unwrap();
    controller.request_complete().unwrap();
    assert_eq!(
        controller.host().events(),
        &[
            HostEvent::SaveProgress(BlockNumber(42)),
            HostEvent::Complete(BlockNumber(42)),
        ]
    );
}

#[test]
fn session_round_trips_through_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wizard.json");
    let config = file_config(&path);

    let mut session = WizardSession::new(config.store.open(), &config);
    session
        .update_form_data(
            Block::WindingUp,
            "block5_windingUpDistribution",
            FieldValue::text("specified_charity"),
        )
        .unwrap();
    session
        .update_form_data(
            Block::WindingUp,
            "block5_windingUpDistributionOther",
            FieldValue::text("Coastal Food Bank"),
        )
        .unwrap();
    session
        .update_form_data(
            Block::WindingUp,
            "block8_dissolutionProcedureReference",
            FieldValue::Boolean(false),
        )
        .unwrap();
    assert!(session
        .request_complete(Block::WindingUp)
        .unwrap()
        .is_completed());

    let reloaded = WizardSession::load(JsonFileStore::new(&path), &config).unwrap();
    assert_eq!(reloaded.record(), session.record());
    assert_eq!(reloaded.status(Block::WindingUp), BlockStatus::NotStarted);
    assert!(reloaded.errors(Block::WindingUp).is_empty());
}

#[test]
fn cross_block_keys_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wizard.json");
    let config = file_config(&path);

    let mut session = WizardSession::new(JsonFileStore::new(&path), &config);
    session
        .update_form_data(Block::Amendments, "block5_commonSeal", FieldValue::Boolean(true))
        .unwrap();
    session.request_save(Block::Amendments).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("\"block5_commonSeal\": true"));

    let reloaded = WizardSession::load(JsonFileStore::new(&path), &config).unwrap();
    assert!(reloaded
        .errors(Block::Amendments)
        .contains("block6_commonSealCustody"));
}

#[test]
fn corrupt_store_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wizard.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = WizardSession::load(JsonFileStore::new(&path), &WizardConfig::default())
        .unwrap_err();
    assert!(matches!(err, WizardError::Store(_)));
}

#[test]
fn config_file_selects_reopen_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wizard.yaml");
    std::fs::write(&path, "reopen_policy: reopen_on_edit\n").unwrap();
    let config = WizardConfig::load(&path).unwrap();
    assert_eq!(config.reopen_policy, ReopenPolicy::ReopenOnEdit);

    let mut session = WizardSession::new(MemoryStore::new(), &config);
    session
        .update_form_data(
            Block::Transitional,
            "block10_isReplacingConstitution",
            FieldValue::Boolean(false),
        )
        .unwrap();
    session.request_complete(Block::Transitional).unwrap();
    session
        .update_form_data(
            Block::Transitional,
            "block10_isReplacingConstitution",
            FieldValue::Boolean(false),
        )
        .unwrap();
    assert_eq!(session.status(Block::Transitional), BlockStatus::InProgress);
}

proptest! {
    #[test]
    fn saves_never_change_any_status(
        ops in prop::collection::vec((0usize..9, any::<bool>()), 1..24),
    ) {
        let mut session = WizardSession::new(MemoryStore::new(), &WizardConfig::default());
        let editable: Vec<Block> = Block::ALL.into_iter().filter(|b| !b.is_read_only()).collect();

        for (i, save) in &ops {
            let block = editable[*i];
            if *save {
                let before: Vec<_> = Block::ALL.iter().map(|b| session.status(*b)).collect();
                session.request_save(block).unwrap();
                let after: Vec<_> = Block::ALL.iter().map(|b| session.status(*b)).collect();
                prop_assert_eq!(before, after);
            } else {
                session.request_complete(block).unwrap();
            }
        }
        let saves = ops.iter().filter(|(_, save)| *save).count();
        prop_assert!(session.store().saves() >= saves);
    }

    #[test]
    fn complete_requires_empty_error_map(block in 0usize..9) {
        let mut session = WizardSession::new(MemoryStore::new(), &WizardConfig::default());
        let block = Block::ALL[block];
        let completion = session.request_complete(block).unwrap();
        prop_assert_eq!(
            completion.is_completed(),
            session.errors(block).is_empty()
        );
        prop_assert_eq!(
            session.status(block).is_complete(),
            completion.is_completed()
        );
    }
}

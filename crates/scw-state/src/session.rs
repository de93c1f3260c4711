//! # Wizard Session
//!
//! Hosts all ten blocks for one drafting session. The session owns the
//! single wizard record, shared by every block because some keys cross
//! block namespaces, and a status per block.
//!
//! Each operation lends the record to a short-lived [`BlockController`]
//! for the target block and takes it back afterwards, so exactly one
//! controller owns the record at any time. Save and completion callbacks
//! persist the record through the session's [`FormStore`].
//!
//! ## Failure semantics
//!
//! - A rejected field change leaves the record and statuses untouched.
//! - A failed save surfaces as [`WizardError::Store`]. Field changes that
//!   were already accepted stay in memory; no status changes.
//! - Operations on the read-only review block fail with
//!   [`WizardError::ReadOnlyBlock`].

use std::collections::BTreeMap;

use serde::Serialize;

use scw_core::{FieldValue, FormRecord, SessionId, Timestamp};
use scw_rules::{Block, ErrorMap, MandatoryProgress};

use crate::config::{ReopenPolicy, WizardConfig};
use crate::controller::{BlockController, Completion, ControllerParts};
use crate::error::WizardError;
use crate::host::StoreHost;
use crate::status::{BlockStatus, StatusTransition};
use crate::store::FormStore;

/// One row of [`WizardSession::overview`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockOverview {
    /// The block this row describes.
    pub block: Block,
    /// Lifecycle status in this session.
    pub status: BlockStatus,
    /// `None` for the read-only review block.
    pub progress: Option<MandatoryProgress>,
    /// Number of fields currently in error.
    pub errors: usize,
}

/// A drafting session over all wizard blocks.
#[derive(Debug)]
pub struct WizardSession<S> {
    id: SessionId,
    started_at: Timestamp,
    record: FormRecord,
    statuses: BTreeMap<Block, BlockStatus>,
    history: Vec<StatusTransition>,
    policy: ReopenPolicy,
    store: S,
}

impl<S: FormStore> WizardSession<S> {
    /// A session with an empty record.
    pub fn new(store: S, config: &WizardConfig) -> Self {
        Self::with_record(store, config, FormRecord::new())
    }

    /// A session pre-populated from `store`. Every block starts
    /// `NotStarted`.
    pub fn load(store: S, config: &WizardConfig) -> Result<Self, WizardError> {
        let record = store.load()?;
        Ok(Self::with_record(store, config, record))
    }

    fn with_record(store: S, config: &WizardConfig, record: FormRecord) -> Self {
        let session = Self {
            id: SessionId::new(),
            started_at: Timestamp::now(),
            record,
            statuses: BTreeMap::new(),
            history: Vec::new(),
            policy: config.reopen_policy,
            store,
        };
        tracing::info!(
            session = %session.id,
            fields = session.record.len(),
            policy = ?session.policy,
            "wizard session started"
        );
        session
    }

    /// Identifier logged with every session event.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// When the session was opened.
    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// The shared record all blocks read and write.
    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// The store saves and completions are written to.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Status changes across all blocks, oldest first.
    pub fn history(&self) -> &[StatusTransition] {
        &self.history
    }

    /// Status of `block`. `NotStarted` until the block is first touched.
    pub fn status(&self, block: Block) -> BlockStatus {
        self.statuses.get(&block).copied().unwrap_or_default()
    }

    /// Current errors of `block`. Empty for the review block.
    pub fn errors(&self, block: Block) -> ErrorMap {
        block
            .rule_set()
            .map(|rules| rules.validate(&self.record))
            .unwrap_or_default()
    }

    /// Status, progress, and error count of every block in wizard order.
    pub fn overview(&self) -> Vec<BlockOverview> {
        Block::ALL
            .into_iter()
            .map(|block| {
                let rules = block.rule_set();
                BlockOverview {
                    block,
                    status: self.status(block),
                    progress: rules.map(|r| r.progress(&self.record)),
                    errors: rules.map_or(0, |r| r.validate(&self.record).len()),
                }
            })
            .collect()
    }

    /// Change one field of `block` and return the block's new errors.
    ///
    /// Under [`ReopenPolicy::ReopenOnEdit`] an edit to a completed block
    /// moves it back to in-progress.
    pub fn update_form_data(
        &mut self,
        block: Block,
        field: &str,
        value: FieldValue,
    ) -> Result<ErrorMap, WizardError> {
        let reopen = self.policy == ReopenPolicy::ReopenOnEdit;
        let mut controller = self.lend(block)?;
        let was_complete = controller.status().is_complete();

        let result = match controller.update_form_data(field, value) {
            Ok((_, errors)) => Ok(errors.clone()),
            Err(e) => Err(e),
        };
        let result = result.and_then(|errors| {
            if was_complete && reopen {
                controller.reopen()?;
            }
            Ok(errors)
        });

        let parts = controller.into_parts();
        self.restore(block, parts);
        Ok(result?)
    }

    /// Request completion of `block`, persisting the record on success.
    pub fn request_complete(&mut self, block: Block) -> Result<Completion, WizardError> {
        let mut controller = self.lend(block)?;
        let result = controller.request_complete();
        let parts = controller.into_parts();
        self.restore(block, parts);
        Ok(result?)
    }

    /// Persist the record on behalf of `block`.
    pub fn request_save(&mut self, block: Block) -> Result<(), WizardError> {
        let mut controller = self.lend(block)?;
        let result = controller.request_save();
        let parts = controller.into_parts();
        self.restore(block, parts);
        Ok(result?)
    }

    /// Move a completed block back to in-progress.
    pub fn reopen(&mut self, block: Block) -> Result<(), WizardError> {
        let mut controller = self.lend(block)?;
        let result = controller.reopen();
        let parts = controller.into_parts();
        self.restore(block, parts);
        Ok(result?)
    }

    /// End the session and return the store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn lend(
        &mut self,
        block: Block,
    ) -> Result<BlockController<'static, StoreHost<'_, S>>, WizardError> {
        let rules = block.rule_set().ok_or_else(|| WizardError::ReadOnlyBlock {
            block: block.to_string(),
        })?;
        let status = self.status(block);
        let record = std::mem::take(&mut self.record);
        Ok(BlockController::resume(
            block.number(),
            rules,
            record,
            status,
            StoreHost::new(&mut self.store),
        ))
    }

    fn restore(&mut self, block: Block, parts: ControllerParts) {
        self.record = parts.record;
        self.statuses.insert(block, parts.status);
        self.history.extend(parts.transitions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn keep_complete() -> WizardConfig {
        WizardConfig::default()
    }

    fn reopen_on_edit() -> WizardConfig {
        WizardConfig {
            reopen_policy: ReopenPolicy::ReopenOnEdit,
            ..WizardConfig::default()
        }
    }

    fn complete_transitional(session: &mut WizardSession<MemoryStore>) {
        session
            .update_form_data(
                Block::Transitional,
                "block10_isReplacingConstitution",
                FieldValue::Boolean(false),
            )
            .unwrap();
        assert!(session
            .request_complete(Block::Transitional)
            .unwrap()
            .is_completed());
    }

    #[test]
    fn test_refused_completion_keeps_in_progress() {
        let mut session = WizardSession::new(MemoryStore::new(), &keep_complete());
        session
            .update_form_data(
                Block::Committee,
                "block3_committeeMinSize",
                FieldValue::number(2.0),
            )
            .unwrap();

        let outcome = session.request_complete(Block::Committee).unwrap();
        let errors = outcome.errors().unwrap();
        assert!(errors
            .get("block3_committeeMinSize")
            .is_some_and(|m| m.contains("at least 3")));
        assert_eq!(session.status(Block::Committee), BlockStatus::InProgress);
        assert_eq!(session.store().saves(), 0);
    }

    #[test]
    fn test_save_does_not_change_status() {
        let mut session = WizardSession::new(MemoryStore::new(), &keep_complete());
        session.request_save(Block::Finances).unwrap();
        assert_eq!(session.status(Block::Finances), BlockStatus::NotStarted);
        assert_eq!(session.store().saves(), 1);
    }

    #[test]
    fn test_completion_persists_record() {
        let mut session = WizardSession::new(MemoryStore::new(), &keep_complete());
        complete_transitional(&mut session);
        assert_eq!(session.status(Block::Transitional), BlockStatus::Complete);
        assert_eq!(session.store().saves(), 1);
        assert_eq!(
            session.store().record().flag("block10_isReplacingConstitution"),
            Some(false)
        );
    }

    #[test]
    fn test_keep_complete_policy() {
        let mut session = WizardSession::new(MemoryStore::new(), &keep_complete());
        complete_transitional(&mut session);
        let errors = session
            .update_form_data(
                Block::Transitional,
                "block10_isReplacingConstitution",
                FieldValue::Boolean(true),
            )
            .unwrap();
        assert!(errors.contains("block10_includeTransitionalProvisions"));
        assert_eq!(session.status(Block::Transitional), BlockStatus::Complete);
    }

    #[test]
    fn test_reopen_on_edit_policy() {
        let mut session = WizardSession::new(MemoryStore::new(), &reopen_on_edit());
        complete_transitional(&mut session);
        session
            .update_form_data(
                Block::Transitional,
                "block10_isReplacingConstitution",
                FieldValue::Boolean(true),
            )
            .unwrap();
        assert_eq!(session.status(Block::Transitional), BlockStatus::InProgress);
        let last = session.history().last().unwrap();
        assert_eq!(
            (last.from, last.to),
            (BlockStatus::Complete, BlockStatus::InProgress)
        );
    }

    #[test]
    fn test_failed_save_keeps_memory_state() {
        let mut session = WizardSession::new(MemoryStore::failing(), &keep_complete());
        session
            .update_form_data(
                Block::Transitional,
                "block10_isReplacingConstitution",
                FieldValue::Boolean(false),
            )
            .unwrap();

        let err = session.request_complete(Block::Transitional).unwrap_err();
        assert!(matches!(err, WizardError::Store(_)));
        assert_eq!(session.status(Block::Transitional), BlockStatus::InProgress);
        assert_eq!(
            session.record().flag("block10_isReplacingConstitution"),
            Some(false)
        );
    }

    #[test]
    fn test_review_block_is_read_only() {
        let mut session = WizardSession::new(MemoryStore::new(), &keep_complete());
        let err = session
            .update_form_data(Block::Review, "anything", FieldValue::text("x"))
            .unwrap_err();
        assert!(matches!(err, WizardError::ReadOnlyBlock { .. }));
        assert!(session.request_complete(Block::Review).is_err());
        assert!(session.errors(Block::Review).is_empty());
    }

    #[test]
    fn test_kind_mismatch_surfaces_as_record_error() {
        let mut session = WizardSession::new(MemoryStore::new(), &keep_complete());
        let err = session
            .update_form_data(
                Block::Meetings,
                "block4_proxyAllowed",
                FieldValue::text("yes"),
            )
            .unwrap_err();
        assert!(matches!(err, WizardError::Record(_)));
        assert_eq!(session.status(Block::Meetings), BlockStatus::NotStarted);
        assert!(session.record().is_empty());
    }

    #[test]
    fn test_load_prepopulates_record() {
        let stored = FormRecord::from_iter([(
            "block1_societyName",
            FieldValue::text("Harbourside Tenants Society"),
        )]);
        let session = WizardSession::load(MemoryStore::with_record(stored), &keep_complete())
            .unwrap();
        assert_eq!(
            session.record().text("block1_societyName"),
            Some("Harbourside Tenants Society")
        );
        assert!(session
            .overview()
            .iter()
            .all(|row| row.status == BlockStatus::NotStarted));
    }

    #[test]
    fn test_overview_covers_every_block() {
        let session = WizardSession::new(MemoryStore::new(), &keep_complete());
        let overview = session.overview();
        assert_eq!(overview.len(), 10);
        assert_eq!(overview[9].block, Block::Review);
        assert_eq!(overview[9].progress, None);
        assert!(overview[..9].iter().all(|row| row.errors > 0));
    }
}

//! # Block Controller
//!
//! Orchestrates one block's lifecycle over a record it exclusively owns.
//! Every field change goes through the conditional resolver and is
//! followed by a full re-validation; the host sees the new record and
//! error map after each change.
//!
//! ## Lifecycle
//!
//! - `NotStarted → InProgress` on the first successful field change.
//! - `* → Complete` only through [`BlockController::request_complete`]
//!   with an empty error map, after the host has accepted `on_complete`.
//! - `Complete → InProgress` only through [`BlockController::reopen`].
//!   Edits to a completed block never reopen it on their own; whether
//!   they should is the host's policy.
//!
//! A refused completion leaves the status as it was and does not call the
//! host. A save request always calls the host and never changes the
//! status.

use scw_core::{BlockNumber, FieldValue, FormRecord};
use scw_rules::{ErrorMap, MandatoryProgress, RuleSet};

use crate::error::ControllerError;
use crate::host::BlockHost;
use crate::status::{BlockStatus, StatusTransition};

/// Outcome of a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The block is complete and the host was notified.
    Completed,
    /// The block has errors; nothing changed.
    Refused(ErrorMap),
}

impl Completion {
    /// Whether the block was completed.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// The errors that refused completion, if any.
    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            Self::Completed => None,
            Self::Refused(errors) => Some(errors),
        }
    }
}

/// What a controller hands back when it is done.
#[derive(Debug, Clone)]
pub struct ControllerParts {
    /// The record, including every accepted change.
    pub record: FormRecord,
    /// Final status.
    pub status: BlockStatus,
    /// Status changes made while the controller was alive.
    pub transitions: Vec<StatusTransition>,
}

/// Controller for one block.
pub struct BlockController<'r, H> {
    block: BlockNumber,
    rule_set: &'r RuleSet,
    record: FormRecord,
    status: BlockStatus,
    errors: ErrorMap,
    transitions: Vec<StatusTransition>,
    host: H,
}

impl<'r, H: BlockHost> BlockController<'r, H> {
    /// A fresh controller over an empty or externally loaded record.
    pub fn new(block: BlockNumber, rule_set: &'r RuleSet, record: FormRecord, host: H) -> Self {
        Self::resume(block, rule_set, record, BlockStatus::NotStarted, host)
    }

    /// A controller continuing from a previously reached status.
    pub fn resume(
        block: BlockNumber,
        rule_set: &'r RuleSet,
        record: FormRecord,
        status: BlockStatus,
        host: H,
    ) -> Self {
        let errors = rule_set.validate(&record);
        Self {
            block,
            rule_set,
            record,
            status,
            errors,
            transitions: Vec::new(),
            host,
        }
    }

    /// The block this controller drives.
    pub fn block(&self) -> BlockNumber {
        self.block
    }

    /// Current lifecycle status.
    pub fn status(&self) -> BlockStatus {
        self.status
    }

    /// The record with every accepted change applied.
    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Errors as of the last change.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Mandatory fields answered so far.
    pub fn progress(&self) -> MandatoryProgress {
        self.rule_set.progress(&self.record)
    }

    /// Status changes made by this controller, oldest first.
    pub fn transitions(&self) -> &[StatusTransition] {
        &self.transitions
    }

    /// The host receiving save and completion callbacks.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Apply `field = value`, clear stale dependents, and re-validate.
    ///
    /// # Errors
    ///
    /// [`ControllerError::Record`] if the value's kind does not match the
    /// field. The record, errors, and status are left unchanged.
    pub fn update_form_data(
        &mut self,
        field: &str,
        value: FieldValue,
    ) -> Result<(&FormRecord, &ErrorMap), ControllerError> {
        let cleared = scw_rules::apply_in_place(self.rule_set, &mut self.record, field, value)
            .map_err(|e| {
                tracing::warn!(block = %self.block, field, error = %e, "field change rejected");
                e
            })?;
        tracing::debug!(block = %self.block, field, ?cleared, "field changed");

        if self.status == BlockStatus::NotStarted {
            self.transition(BlockStatus::InProgress);
        }
        self.errors = self.rule_set.validate(&self.record);
        Ok((&self.record, &self.errors))
    }

    /// Complete the block if its error map is empty.
    ///
    /// The host is notified before the status changes, so a host failure
    /// leaves the status untouched.
    pub fn request_complete(&mut self) -> Result<Completion, ControllerError> {
        self.errors = self.rule_set.validate(&self.record);
        if !self.errors.is_empty() {
            tracing::warn!(
                block = %self.block,
                errors = self.errors.len(),
                "completion refused"
            );
            return Ok(Completion::Refused(self.errors.clone()));
        }

        self.host.on_complete(self.block, &self.record)?;
        if self.status != BlockStatus::Complete {
            self.transition(BlockStatus::Complete);
        }
        tracing::info!(block = %self.block, "block completed");
        Ok(Completion::Completed)
    }

    /// Hand the record to the host for saving. Never changes the status.
    pub fn request_save(&mut self) -> Result<(), ControllerError> {
        self.host.on_save_progress(self.block, &self.record)?;
        Ok(())
    }

    /// Move a completed block back to `InProgress`.
    pub fn reopen(&mut self) -> Result<(), ControllerError> {
        if self.status != BlockStatus::Complete {
            return Err(ControllerError::InvalidTransition {
                from: self.status,
                to: BlockStatus::InProgress,
            });
        }
        self.transition(BlockStatus::InProgress);
        tracing::info!(block = %self.block, "block reopened");
        Ok(())
    }

    /// Give back the record, the status, and the recorded transitions.
    pub fn into_parts(self) -> ControllerParts {
        ControllerParts {
            record: self.record,
            status: self.status,
            transitions: self.transitions,
        }
    }

    fn transition(&mut self, to: BlockStatus) {
        self.transitions
            .push(StatusTransition::now(self.block, self.status, to));
        self.status = to;
    }
}

impl<H> std::fmt::Debug for BlockController<'_, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockController")
            .field("block", &self.block)
            .field("rule_set", &self.rule_set.name())
            .field("status", &self.status)
            .field("errors", &self.errors.len())
            .finish()
    }
}

//! The host side of a block controller.
//!
//! A host receives `on_save_progress` and `on_complete` with the block
//! number, which it treats as opaque, and the current record. A host
//! error aborts the operation before any status change.

use scw_core::{BlockNumber, FormRecord};

use crate::error::StoreError;
use crate::store::FormStore;

/// Callbacks a [`crate::BlockController`] emits to its host.
pub trait BlockHost {
    /// Called on every save request, valid or not.
    fn on_save_progress(
        &mut self,
        block: BlockNumber,
        record: &FormRecord,
    ) -> Result<(), StoreError>;

    /// Called once per successful completion request.
    fn on_complete(&mut self, block: BlockNumber, record: &FormRecord) -> Result<(), StoreError>;
}

impl<H: BlockHost + ?Sized> BlockHost for &mut H {
    fn on_save_progress(
        &mut self,
        block: BlockNumber,
        record: &FormRecord,
    ) -> Result<(), StoreError> {
        (**self).on_save_progress(block, record)
    }

    fn on_complete(&mut self, block: BlockNumber, record: &FormRecord) -> Result<(), StoreError> {
        (**self).on_complete(block, record)
    }
}

/// A callback received by an [`EventLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// `on_save_progress(block)`.
    SaveProgress(BlockNumber),
    /// `on_complete(block)`.
    Complete(BlockNumber),
}

/// A host that records every callback and persists nothing.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<HostEvent>,
}

impl EventLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Callbacks in the order they were received.
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Number of times `event` was received.
    pub fn count(&self, event: HostEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }
}

impl BlockHost for EventLog {
    fn on_save_progress(
        &mut self,
        block: BlockNumber,
        _record: &FormRecord,
    ) -> Result<(), StoreError> {
        self.events.push(HostEvent::SaveProgress(block));
        Ok(())
    }

    fn on_complete(&mut self, block: BlockNumber, _record: &FormRecord) -> Result<(), StoreError> {
        self.events.push(HostEvent::Complete(block));
        Ok(())
    }
}

/// A host that persists the record through a [`FormStore`] on every
/// callback.
#[derive(Debug)]
pub struct StoreHost<'s, S: ?Sized> {
    store: &'s mut S,
}

impl<'s, S: FormStore + ?Sized> StoreHost<'s, S> {
    /// Wrap a store.
    pub fn new(store: &'s mut S) -> Self {
        Self { store }
    }

    fn persist(&mut self, block: BlockNumber, record: &FormRecord) -> Result<(), StoreError> {
        self.store.save(record).map_err(|e| {
            tracing::warn!(%block, error = %e, "failed to persist wizard record");
            e
        })
    }
}

impl<S: FormStore + ?Sized> BlockHost for StoreHost<'_, S> {
    fn on_save_progress(
        &mut self,
        block: BlockNumber,
        record: &FormRecord,
    ) -> Result<(), StoreError> {
        self.persist(block, record)?;
        tracing::info!(%block, fields = record.len(), "progress saved");
        Ok(())
    }

    fn on_complete(&mut self, block: BlockNumber, record: &FormRecord) -> Result<(), StoreError> {
        self.persist(block, record)?;
        tracing::info!(%block, "completed block saved");
        Ok(())
    }
}

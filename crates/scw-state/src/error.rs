//! Error types for block controllers, stores, configuration, and sessions.
//!
//! Validation failures are not errors; they are reported through
//! [`scw_rules::ErrorMap`]. The types here cover the remaining failures:
//! rejected writes, persistence, and misuse of the lifecycle.

use thiserror::Error;

use scw_core::CoreError;

use crate::status::BlockStatus;

/// Persistence failure reported by a [`crate::FormStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("store I/O error for '{path}': {source}")]
    Io {
        /// Path of the backing file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing file does not hold a valid form record.
    #[error("store at '{path}' holds an invalid form record: {source}")]
    Format {
        /// Path of the backing file.
        path: String,
        /// Parse or serialization failure.
        #[source]
        source: CoreError,
    },

    /// The store refused the operation.
    #[error("store unavailable: {reason}")]
    Unavailable {
        /// Why the store refused.
        reason: String,
    },
}

/// Failure of a [`crate::BlockController`] operation.
#[derive(Error, Debug)]
pub enum ControllerError {
    /// The field change was rejected and the record left untouched.
    #[error(transparent)]
    Record(#[from] CoreError),

    /// The host callback failed to persist the record.
    #[error("host callback failed: {0}")]
    Host(#[from] StoreError),

    /// The requested status change is not valid from the current status.
    #[error("invalid block transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status.
        from: BlockStatus,
        /// Attempted target status.
        to: BlockStatus,
    },
}

/// Failure loading a [`crate::WizardConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config '{path}': {source}")]
    Io {
        /// Path of the configuration file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for this schema.
    #[error("invalid config '{path}': {source}")]
    Parse {
        /// Path of the configuration file.
        path: String,
        /// YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}

/// Failure of a [`crate::WizardSession`] operation.
#[derive(Error, Debug)]
pub enum WizardError {
    /// The block only displays answers and accepts no operations.
    #[error("block {block} is read-only")]
    ReadOnlyBlock {
        /// Display name of the block.
        block: String,
    },

    /// A field change was rejected.
    #[error(transparent)]
    Record(#[from] CoreError),

    /// Persisting the record failed. The in-memory record and statuses are
    /// unchanged.
    #[error("failed to persist the wizard record: {0}")]
    Store(#[from] StoreError),

    /// The requested status change is not valid from the current status.
    #[error("invalid block transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status.
        from: BlockStatus,
        /// Attempted target status.
        to: BlockStatus,
    },
}

impl From<ControllerError> for WizardError {
    fn from(err: ControllerError) -> Self {
        match err {
            ControllerError::Record(e) => Self::Record(e),
            ControllerError::Host(e) => Self::Store(e),
            ControllerError::InvalidTransition { from, to } => {
                Self::InvalidTransition { from, to }
            }
        }
    }
}

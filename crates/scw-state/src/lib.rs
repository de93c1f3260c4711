//! # scw-state: Block Lifecycle and Wizard Sessions
//!
//! Drives the constitution wizard's blocks through their lifecycle and
//! hands the shared record to an external store.
//!
//! ## Components
//!
//! - **Status** (`status.rs`): `NotStarted → InProgress → Complete`, with
//!   a timestamped record of every change.
//!
//! - **Controller** (`controller.rs`): one block over a record it owns.
//!   Runs the conditional resolver and the validator on every change and
//!   gates completion on an empty error map.
//!
//! - **Host** (`host.rs`): the `on_save_progress` / `on_complete`
//!   callbacks, with a recording host and a store-backed host.
//!
//! - **Store** (`store.rs`): the load/save persistence contract, with
//!   in-memory and JSON-file implementations.
//!
//! - **Config** (`config.rs`): YAML configuration, including the policy
//!   for edits to completed blocks.
//!
//! - **Session** (`session.rs`): all ten blocks over one shared record.
//!
//! ## Design
//!
//! Everything is synchronous and single-threaded. A record has exactly one
//! owner at a time: the session, or the controller it is lent to.

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod session;
pub mod status;
pub mod store;

pub use config::{ReopenPolicy, StoreConfig, WizardConfig};
pub use controller::{BlockController, Completion, ControllerParts};
pub use error::{ConfigError, ControllerError, StoreError, WizardError};
pub use host::{BlockHost, EventLog, HostEvent, StoreHost};
pub use session::{BlockOverview, WizardSession};
pub use status::{BlockStatus, StatusTransition};
pub use store::{FormStore, JsonFileStore, MemoryStore};

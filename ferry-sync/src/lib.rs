//! Ferry Sync
//!
//! The engine that keeps a local directory of batch-input files and a remote
//! batch service in agreement.
//!
//! Architecture:
//! - Configuration: Load settings from environment or defaults
//! - Inventory: Scan the source directory for candidate input files
//! - Reconciliation: Decide which files are newer than their remote batches
//! - Remote: Trait seam over the batch service client
//! - Services: Submission and retrieval cycles built on the above
//!
//! A submission cycle uploads every file the reconciliation selects and
//! creates one batch job per upload. A retrieval cycle downloads the results
//! of every completed batch into the target directory.

pub mod config;
pub mod error;
pub mod inventory;
pub mod reconcile;
pub mod remote;
pub mod seed;
pub mod service;

pub use config::Config;
pub use error::CycleError;

//! Core domain types
//!
//! This module contains the core domain structures used across Ferry crates.
//! These types represent the fundamental entities of a sync cycle and are
//! shared between the client (wire snapshots) and the sync engine
//! (reconciliation and pipelines).

pub mod batch;
pub mod inventory;

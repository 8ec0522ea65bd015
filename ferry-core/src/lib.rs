//! Ferry Core
//!
//! Core types and abstractions for the Ferry batch synchronization system.
//!
//! This crate contains:
//! - Domain types: Core business entities (Batch, LocalFile, etc.)
//! - DTOs: Data transfer objects exchanged with the remote batch service

pub mod domain;
pub mod dto;

//! Data Transfer Objects for the remote batch service
//!
//! This module contains the wire-level payloads Ferry exchanges with the
//! batch service: requests the client sends and response envelopes it
//! decodes. DTOs mirror the service schema exactly; domain logic lives in
//! [`crate::domain`].

pub mod batch;
pub mod file;

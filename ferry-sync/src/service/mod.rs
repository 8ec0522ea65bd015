//! Cycle services
//!
//! Services contain the business logic of a sync cycle. The submission
//! service pushes due local files to the batch service; the retrieval
//! service pulls results of completed batches back down. Both consume the
//! [`crate::remote::RemoteBatchService`] seam so they can be tested against
//! an in-memory service.

mod retrieval;
mod submission;

// Re-export services
pub use retrieval::RetrievalService;
pub use submission::SubmissionService;

// Re-export cycle reports
pub use retrieval::{RetrievalOutcome, RetrievalReport};
pub use submission::{SubmissionOutcome, SubmissionReport};

//! Job postings and the ordered store that owns them.

pub mod domain;
pub mod store;

pub use domain::{JobDraft, JobField, JobFormError, JobId, JobPosting, JobStatus};
pub use store::{JobListing, JobStore, JobStoreError, SaveOutcome};

//! Job management: postings, applicants, and the admin screen over them.

pub mod applicants;
pub mod background;
pub mod jobs;
pub mod page;
pub mod router;
pub mod screen;
pub mod seed;
pub mod view;

#[cfg(test)]
mod tests;

pub use applicants::{
    Applicant, ApplicantId, ApplicantPanel, ApplicantSource, ApplicantSourceError,
    ApplicantStatus, PanelState, SeededApplicantSource,
};
pub use jobs::{
    JobDraft, JobField, JobFormError, JobId, JobListing, JobPosting, JobStatus, JobStore,
    JobStoreError, SaveOutcome,
};
pub use router::hiring_router;
pub use screen::{AdminScreen, FormRejection, SharedScreen};
pub use seed::{SeedData, SeedError};
pub use view::{DialogKind, DialogState, FormTarget, ScreenView};

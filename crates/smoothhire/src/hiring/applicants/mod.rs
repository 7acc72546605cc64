//! Applicants per job and the lazily loaded panel that lists them.

pub mod domain;
pub mod panel;
pub mod source;

pub use domain::{Applicant, ApplicantId, ApplicantStatus};
pub use panel::{ApplicantPanel, PanelState};
pub use source::{ApplicantSource, ApplicantSourceError, SeededApplicantSource};

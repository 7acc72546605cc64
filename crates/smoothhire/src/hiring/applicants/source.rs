use std::collections::BTreeMap;

use crate::hiring::jobs::JobId;

use super::domain::Applicant;

/// Backing collection the panel fetches applicants from.
pub trait ApplicantSource: Send + Sync {
    fn applicants_for(&self, job_id: JobId) -> Result<Vec<Applicant>, ApplicantSourceError>;
}

/// Fetch failure. The seeded source never produces one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplicantSourceError {
    #[error("applicant source unavailable: {0}")]
    Unavailable(String),
}

/// Read-only applicants keyed by job, taken from seed data.
///
/// Entries for deleted jobs stay here untouched.
#[derive(Debug, Clone, Default)]
pub struct SeededApplicantSource {
    applicants: BTreeMap<JobId, Vec<Applicant>>,
}

impl SeededApplicantSource {
    pub fn new(applicants: BTreeMap<JobId, Vec<Applicant>>) -> Self {
        Self { applicants }
    }

    pub fn count_for(&self, job_id: JobId) -> usize {
        self.applicants.get(&job_id).map_or(0, Vec::len)
    }
}

impl ApplicantSource for SeededApplicantSource {
    fn applicants_for(&self, job_id: JobId) -> Result<Vec<Applicant>, ApplicantSourceError> {
        Ok(self.applicants.get(&job_id).cloned().unwrap_or_default())
    }
}

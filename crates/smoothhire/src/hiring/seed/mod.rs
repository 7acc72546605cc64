//! Static jobs and applicants used to initialise the stores at start-up.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::hiring::applicants::{Applicant, ApplicantId, SeededApplicantSource};
use crate::hiring::jobs::{JobId, JobPosting, JobStore};

const BUILTIN_SEED: &str = include_str!("default.json");

/// Jobs plus applicants keyed by job id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub applicants: BTreeMap<JobId, Vec<Applicant>>,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("unable to read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed seed data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("job id {0} appears more than once")]
    DuplicateJob(JobId),
    #[error("job id {0} leaves no room for new postings")]
    NoIdentifierHeadroom(JobId),
    #[error("applicant id {applicant_id} appears more than once for job {job_id}")]
    DuplicateApplicant {
        job_id: JobId,
        applicant_id: ApplicantId,
    },
}

impl SeedData {
    /// The mock data the admin screen ships with.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(BUILTIN_SEED)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        let seed: Self = serde_json::from_str(raw)?;
        seed.check_identifiers()?;
        Ok(seed)
    }

    /// Load from `path` when given, otherwise fall back to the built-in data.
    pub fn load(path: Option<&Path>) -> Result<Self, SeedError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    pub fn job_store(&self) -> JobStore {
        JobStore::new(self.jobs.clone())
    }

    pub fn applicant_source(&self) -> SeededApplicantSource {
        SeededApplicantSource::new(self.applicants.clone())
    }

    fn check_identifiers(&self) -> Result<(), SeedError> {
        let mut jobs = HashSet::new();
        for job in &self.jobs {
            if !jobs.insert(job.id) {
                return Err(SeedError::DuplicateJob(job.id));
            }
            if job.id == JobId(u64::MAX) {
                return Err(SeedError::NoIdentifierHeadroom(job.id));
            }
        }

        for (job_id, applicants) in &self.applicants {
            let mut seen = HashSet::new();
            for applicant in applicants {
                if !seen.insert(applicant.id) {
                    return Err(SeedError::DuplicateApplicant {
                        job_id: *job_id,
                        applicant_id: applicant.id,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hiring::applicants::{ApplicantSource, ApplicantStatus};
    use crate::hiring::jobs::JobStatus;

    #[test]
    fn builtin_seed_matches_the_mock_listing() {
        let seed = SeedData::builtin().expect("builtin seed parses");

        let titles: Vec<_> = seed.jobs.iter().map(|job| job.title.as_str()).collect();
        assert_eq!(titles, vec!["Software Engineer", "Product Manager"]);
        assert!(seed.jobs.iter().all(|job| job.status == JobStatus::Open));

        let source = seed.applicant_source();
        let first = source.applicants_for(JobId(1)).expect("seeded source");
        assert_eq!(first.len(), 2);
        assert_eq!(first[1].status, ApplicantStatus::Reviewing);
        assert_eq!(first[0].applied_at.to_rfc3339(), "2023-05-15T10:30:00+00:00");
        assert_eq!(source.count_for(JobId(2)), 1);
    }

    #[test]
    fn duplicate_job_ids_are_rejected() {
        let raw = r#"{
            "jobs": [
                {"id": 4, "title": "A", "description": "a", "requirements": "a", "status": "open"},
                {"id": 4, "title": "B", "description": "b", "requirements": "b", "status": "closed"}
            ]
        }"#;

        match SeedData::from_json(raw) {
            Err(SeedError::DuplicateJob(JobId(4))) => {}
            other => panic!("expected duplicate job error, got {other:?}"),
        }
    }

    #[test]
    fn applicants_section_is_optional() {
        let raw = r#"{"jobs": []}"#;
        let seed = SeedData::from_json(raw).expect("seed parses");
        assert!(seed.applicants.is_empty());
        assert!(seed.job_store().is_empty());
    }

    #[test]
    fn missing_file_reports_its_path() {
        let error = SeedData::from_path("/definitely/not/here.json").expect_err("missing file");
        assert!(error.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn duplicate_applicant_ids_within_a_job_are_rejected() {
        let raw = r#"{
            "jobs": [
                {"id": 1, "title": "A", "description": "a", "requirements": "a", "status": "open"}
            ],
            "applicants": {
                "1": [
                    {"id": 7, "name": "Ada", "email": "ada@example.com", "status": "applied",
                     "resume": "ada.pdf", "application_letter": "Hello",
                     "applied_at": "2023-05-15T10:30:00Z"},
                    {"id": 7, "name": "Grace", "email": "grace@example.com", "status": "reviewing",
                     "resume": "grace.pdf", "application_letter": "Hi",
                     "applied_at": "2023-05-16T10:30:00Z"}
                ]
            }
        }"#;

        match SeedData::from_json(raw) {
            Err(SeedError::DuplicateApplicant {
                job_id: JobId(1),
                applicant_id: ApplicantId(7),
            }) => {}
            other => panic!("expected duplicate applicant error, got {other:?}"),
        }
    }

    #[test]
    fn largest_job_id_is_rejected() {
        let raw = r#"{
            "jobs": [
                {"id": 18446744073709551615, "title": "A", "description": "a",
                 "requirements": "a", "status": "open"}
            ]
        }"#;

        match SeedData::from_json(raw) {
            Err(SeedError::NoIdentifierHeadroom(JobId(u64::MAX))) => {}
            other => panic!("expected headroom error, got {other:?}"),
        }
    }
}

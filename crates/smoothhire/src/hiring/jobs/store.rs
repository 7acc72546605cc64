use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::domain::{JobDraft, JobId, JobPosting, JobStatus};

/// Ordered collection of job postings.
///
/// Every effective mutation swaps in a fresh collection and bumps `revision`,
/// which is what the screen watches to know it must re-render. Operations on
/// identifiers that are no longer present are silent no-ops.
#[derive(Debug, Clone)]
pub struct JobStore {
    jobs: Arc<[JobPosting]>,
    revision: u64,
}

/// Serializable snapshot of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobListing {
    pub revision: u64,
    pub jobs: Vec<JobPosting>,
}

/// Result of a form submission against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(JobPosting),
    Updated(JobPosting),
}

/// Store-level failures. Absent identifiers are not errors; they are no-ops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobStoreError {
    #[error("no job identifier is left above {}", .0)]
    IdentifiersExhausted(JobId),
}

impl SaveOutcome {
    pub fn posting(&self) -> &JobPosting {
        match self {
            Self::Created(posting) | Self::Updated(posting) => posting,
        }
    }

    pub fn into_posting(self) -> JobPosting {
        match self {
            Self::Created(posting) | Self::Updated(posting) => posting,
        }
    }
}

impl Default for JobStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl JobStore {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self {
            jobs: jobs.into(),
            revision: 0,
        }
    }

    pub fn snapshot(&self) -> Arc<[JobPosting]> {
        Arc::clone(&self.jobs)
    }

    pub fn listing(&self) -> JobListing {
        JobListing {
            revision: self.revision,
            jobs: self.jobs.to_vec(),
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: JobId) -> Option<&JobPosting> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Identifier the next created posting receives: `max(ids, 0) + 1`, or
    /// `None` once the current maximum is `u64::MAX`.
    pub fn next_id(&self) -> Option<JobId> {
        let max = self.jobs.iter().map(|job| job.id.0).max().unwrap_or(0);
        max.checked_add(1).map(JobId)
    }

    /// Replace the posting whose id matches the draft in place, or append a
    /// new posting under a freshly generated id.
    ///
    /// The store performs no validation of its own; blank fields are the form
    /// layer's concern.
    pub fn create_or_update(&mut self, draft: JobDraft) -> Result<SaveOutcome, JobStoreError> {
        let JobDraft {
            id,
            title,
            description,
            requirements,
            status,
        } = draft;

        let existing = id.and_then(|id| self.jobs.iter().position(|job| job.id == id));

        match existing {
            Some(index) => {
                let mut jobs = self.jobs.to_vec();
                let current = &mut jobs[index];
                current.title = title;
                current.description = description;
                current.requirements = requirements;
                if let Some(status) = status {
                    current.status = status;
                }
                let updated = current.clone();
                self.replace(jobs);
                debug!(job_id = %updated.id, "job posting updated");
                Ok(SaveOutcome::Updated(updated))
            }
            None => {
                let id = self
                    .next_id()
                    .ok_or(JobStoreError::IdentifiersExhausted(JobId(u64::MAX)))?;
                let created = JobPosting {
                    id,
                    title,
                    description,
                    requirements,
                    status: status.unwrap_or_default(),
                };
                let mut jobs = self.jobs.to_vec();
                jobs.push(created.clone());
                self.replace(jobs);
                debug!(job_id = %created.id, "job posting created");
                Ok(SaveOutcome::Created(created))
            }
        }
    }

    /// Remove the matching posting. Applicants seeded for it are left alone.
    pub fn delete(&mut self, id: JobId) -> Option<JobPosting> {
        let index = self.jobs.iter().position(|job| job.id == id);
        let Some(index) = index else {
            debug!(job_id = %id, "delete ignored for unknown job");
            return None;
        };

        let mut jobs = self.jobs.to_vec();
        let removed = jobs.remove(index);
        self.replace(jobs);
        debug!(job_id = %id, "job posting deleted");
        Some(removed)
    }

    /// Flip open and closed, returning the new status.
    pub fn toggle_status(&mut self, id: JobId) -> Option<JobStatus> {
        if self.get(id).is_none() {
            debug!(job_id = %id, "toggle ignored for unknown job");
            return None;
        }

        let mut toggled = None;
        let jobs = self
            .jobs
            .iter()
            .cloned()
            .map(|mut job| {
                if job.id == id {
                    job.status = job.status.toggled();
                    toggled = Some(job.status);
                }
                job
            })
            .collect();
        self.replace(jobs);
        debug!(job_id = %id, status = ?toggled, "job status toggled");
        toggled
    }

    fn replace(&mut self, jobs: Vec<JobPosting>) {
        self.jobs = jobs.into();
        self.revision += 1;
    }
}

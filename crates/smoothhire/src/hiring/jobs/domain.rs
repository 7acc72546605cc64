use std::fmt;

use serde::{Deserialize, Serialize};

use super::store::JobStoreError;

/// Store-assigned identifier for a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a posting accepts applications. Independent of applicant state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
}

impl JobStatus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Caption for the button that flips this status.
    pub fn toggle_action(self) -> &'static str {
        match self {
            Self::Open => "Close",
            Self::Closed => "Open",
        }
    }
}

/// A role advertised on the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub status: JobStatus,
}

/// Payload submitted by the job form, for both creation and edits.
///
/// An `id` matching a stored posting turns the submission into a replacement;
/// anything else creates a new posting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDraft {
    #[serde(default)]
    pub id: Option<JobId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub status: Option<JobStatus>,
}

impl JobDraft {
    /// Prefill a draft from an existing posting, as the edit dialog does.
    pub fn from_posting(posting: &JobPosting) -> Self {
        Self {
            id: Some(posting.id),
            title: posting.title.clone(),
            description: posting.description.clone(),
            requirements: posting.requirements.clone(),
            status: Some(posting.status),
        }
    }

    /// Reject drafts with an empty required field, checked in form order.
    /// Any non-empty text is accepted, whitespace included.
    pub fn validate(&self) -> Result<(), JobFormError> {
        let fields = [
            (JobField::Title, &self.title),
            (JobField::Description, &self.description),
            (JobField::Requirements, &self.requirements),
        ];
        for (field, value) in fields {
            if value.is_empty() {
                return Err(JobFormError::MissingField(field));
            }
        }
        Ok(())
    }
}

/// Required text fields of the job form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobField {
    Title,
    Description,
    Requirements,
}

impl JobField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Job Title",
            Self::Description => "Job Description",
            Self::Requirements => "Job Requirements",
        }
    }
}

/// Why a job form submission was not stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JobFormError {
    #[error("{} is required", .0.label())]
    MissingField(JobField),
    #[error(transparent)]
    Store(#[from] JobStoreError),
}

impl JobFormError {
    /// The offending form field, if the failure is tied to one.
    pub fn field(&self) -> Option<JobField> {
        match self {
            Self::MissingField(field) => Some(*field),
            Self::Store(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> JobDraft {
        JobDraft {
            id: None,
            title: "Data Analyst".to_string(),
            description: "Own the reporting stack.".to_string(),
            requirements: "SQL".to_string(),
            status: None,
        }
    }

    #[test]
    fn validate_accepts_complete_drafts() {
        assert_eq!(draft().validate(), Ok(()));
    }

    #[test]
    fn validate_reports_first_blank_field() {
        let mut incomplete = draft();
        incomplete.description.clear();
        incomplete.requirements.clear();

        let error = incomplete.validate().expect_err("blank description rejected");
        assert_eq!(error.field(), Some(JobField::Description));
        assert_eq!(error.to_string(), "Job Description is required");
    }

    #[test]
    fn validate_accepts_whitespace_only_text() {
        let mut spaced = draft();
        spaced.title = "   ".to_string();
        spaced.requirements = "\t".to_string();

        assert_eq!(spaced.validate(), Ok(()));
    }

    #[test]
    fn default_status_is_open() {
        assert_eq!(JobStatus::default(), JobStatus::Open);
    }

    #[test]
    fn toggled_flips_between_open_and_closed() {
        assert_eq!(JobStatus::Open.toggled(), JobStatus::Closed);
        assert_eq!(JobStatus::Closed.toggled().toggled(), JobStatus::Closed);
        assert_eq!(JobStatus::Open.toggle_action(), "Close");
    }

    #[test]
    fn status_serializes_as_lowercase_label() {
        let value = serde_json::to_value(JobStatus::Closed).expect("serializes");
        assert_eq!(value, serde_json::json!("closed"));
    }
}

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper, unique within one job's applicant collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicantId(pub u64);

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review pipeline position.
///
/// The order reflects the usual progression but is not enforced: any status
/// may be replaced by any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantStatus {
    Applied,
    Reviewing,
    Interviewed,
    Offered,
    Rejected,
}

impl ApplicantStatus {
    pub const ALL: [ApplicantStatus; 5] = [
        ApplicantStatus::Applied,
        ApplicantStatus::Reviewing,
        ApplicantStatus::Interviewed,
        ApplicantStatus::Offered,
        ApplicantStatus::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Reviewing => "reviewing",
            Self::Interviewed => "interviewed",
            Self::Offered => "offered",
            Self::Rejected => "rejected",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Reviewing => "Reviewing",
            Self::Interviewed => "Interviewed",
            Self::Offered => "Offered",
            Self::Rejected => "Rejected",
        }
    }
}

/// A candidate's submission against one job posting.
///
/// The owning job is implied by where the record is stored, not by a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    pub name: String,
    pub email: String,
    pub status: ApplicantStatus,
    pub resume: String,
    pub application_letter: String,
    pub applied_at: DateTime<Utc>,
}

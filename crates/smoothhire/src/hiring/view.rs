//! Dialog state for the admin screen.
//!
//! Each dialog kind is either closed or open for exactly one target, so a
//! stale target can never outlive a dismissal.

use serde::Serialize;

use crate::hiring::applicants::ApplicantId;
use crate::hiring::jobs::JobId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "dialog", content = "target", rename_all = "snake_case")]
pub enum DialogState<T> {
    Closed,
    Open(T),
}

impl<T> Default for DialogState<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T: Copy + PartialEq> DialogState<T> {
    /// Open for `target`, replacing whatever this dialog showed before.
    pub fn open(&mut self, target: T) {
        *self = Self::Open(target);
    }

    pub fn dismiss(&mut self) {
        *self = Self::Closed;
    }

    pub fn target(&self) -> Option<T> {
        match self {
            Self::Closed => None,
            Self::Open(target) => Some(*target),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn is_open_for(&self, target: T) -> bool {
        self.target() == Some(target)
    }

    /// Close only when currently open for `target`.
    pub fn dismiss_if(&mut self, target: T) {
        if self.is_open_for(target) {
            self.dismiss();
        }
    }
}

/// What the job form is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormTarget {
    New,
    Existing(JobId),
}

/// Dialog kinds, used when dismissing from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogKind {
    JobForm,
    JobDetail,
    Applicants,
    ApplicantDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScreenView {
    pub job_form: DialogState<FormTarget>,
    pub job_detail: DialogState<JobId>,
    pub applicants: DialogState<JobId>,
    pub applicant_detail: DialogState<ApplicantId>,
}

impl ScreenView {
    pub fn dismiss(&mut self, kind: DialogKind) {
        match kind {
            DialogKind::JobForm => self.job_form.dismiss(),
            DialogKind::JobDetail => self.job_detail.dismiss(),
            DialogKind::Applicants => {
                self.applicants.dismiss();
                self.applicant_detail.dismiss();
            }
            DialogKind::ApplicantDetail => self.applicant_detail.dismiss(),
        }
    }

    /// Close every dialog that belongs to a job's row.
    pub fn forget_job(&mut self, job_id: JobId) {
        self.job_form.dismiss_if(FormTarget::Existing(job_id));
        self.job_detail.dismiss_if(job_id);
        if self.applicants.is_open_for(job_id) {
            self.dismiss(DialogKind::Applicants);
        }
    }
}

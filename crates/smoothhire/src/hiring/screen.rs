use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info};

use crate::hiring::applicants::{
    Applicant, ApplicantId, ApplicantPanel, ApplicantSource, ApplicantStatus, PanelState,
    SeededApplicantSource,
};
use crate::hiring::jobs::{JobDraft, JobFormError, JobId, JobPosting, JobStatus, JobStore, SaveOutcome};
use crate::hiring::seed::SeedData;
use crate::hiring::view::{DialogKind, FormTarget, ScreenView};

/// Screen handle shared between request handlers.
pub type SharedScreen<S> = Arc<Mutex<AdminScreen<S>>>;

pub fn lock_screen<S>(screen: &Mutex<AdminScreen<S>>) -> MutexGuard<'_, AdminScreen<S>> {
    screen.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A rejected form submission kept so the form can be shown again with the
/// values the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRejection {
    pub draft: JobDraft,
    pub error: JobFormError,
}

/// The job management screen: listing, applicant panel and open dialogs.
pub struct AdminScreen<S> {
    jobs: JobStore,
    panel: ApplicantPanel<S>,
    view: ScreenView,
    rejection: Option<FormRejection>,
}

impl AdminScreen<SeededApplicantSource> {
    pub fn from_seed(seed: &SeedData, fetch_delay: Duration) -> Self {
        info!(
            jobs = seed.jobs.len(),
            applicant_groups = seed.applicants.len(),
            "admin screen seeded"
        );
        Self::new(
            seed.job_store(),
            Arc::new(seed.applicant_source()),
            fetch_delay,
        )
    }
}

impl<S> AdminScreen<S>
where
    S: ApplicantSource + 'static,
{
    pub fn new(jobs: JobStore, source: Arc<S>, fetch_delay: Duration) -> Self {
        Self {
            jobs,
            panel: ApplicantPanel::new(source, fetch_delay),
            view: ScreenView::default(),
            rejection: None,
        }
    }

    pub fn into_shared(self) -> SharedScreen<S> {
        Arc::new(Mutex::new(self))
    }

    pub fn jobs(&self) -> &JobStore {
        &self.jobs
    }

    pub fn view(&self) -> &ScreenView {
        &self.view
    }

    pub fn panel(&self) -> PanelState {
        self.panel.state()
    }

    pub fn applicant_source(&self) -> &S {
        self.panel.source()
    }

    pub fn rejection(&self) -> Option<&FormRejection> {
        self.rejection.as_ref()
    }

    /// Open the empty job form.
    pub fn add_job(&mut self) {
        self.rejection = None;
        self.view.job_form.open(FormTarget::New);
    }

    /// Open the job form prefilled with an existing posting.
    pub fn edit_job(&mut self, id: JobId) -> bool {
        if self.jobs.get(id).is_none() {
            debug!(job_id = %id, "edit ignored for unknown job");
            return false;
        }
        self.rejection = None;
        self.view.job_form.open(FormTarget::Existing(id));
        true
    }

    pub fn show_job(&mut self, id: JobId) -> bool {
        if self.jobs.get(id).is_none() {
            return false;
        }
        self.view.job_detail.open(id);
        true
    }

    /// Validate and store a draft without touching any dialog.
    pub fn save_job(&mut self, draft: JobDraft) -> Result<SaveOutcome, JobFormError> {
        draft.validate()?;
        Ok(self.jobs.create_or_update(draft)?)
    }

    /// Form submission: like [`Self::save_job`], but closes the form on
    /// success and keeps it open with the rejected values otherwise.
    pub fn submit_job(&mut self, draft: JobDraft) -> Result<SaveOutcome, JobFormError> {
        match self.save_job(draft.clone()) {
            Ok(outcome) => {
                self.rejection = None;
                self.view.job_form.dismiss();
                Ok(outcome)
            }
            Err(error) => {
                debug!(field = ?error.field(), %error, "job form rejected");
                let target = match draft.id {
                    Some(id) if self.jobs.get(id).is_some() => FormTarget::Existing(id),
                    _ => FormTarget::New,
                };
                self.view.job_form.open(target);
                self.rejection = Some(FormRejection {
                    draft,
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }

    /// Delete a posting along with every dialog on its row.
    pub fn delete_job(&mut self, id: JobId) -> Option<JobPosting> {
        let removed = self.jobs.delete(id)?;
        if self.rejection.as_ref().and_then(|rejection| rejection.draft.id) == Some(id) {
            self.rejection = None;
        }
        self.view.forget_job(id);
        if self.panel.job_id() == Some(id) {
            self.panel.dismiss();
        }
        Some(removed)
    }

    pub fn toggle_job(&mut self, id: JobId) -> Option<JobStatus> {
        self.jobs.toggle_status(id)
    }

    /// Show the applicant list for a job and start the simulated fetch.
    pub fn open_applicants(&mut self, job_id: JobId) -> bool {
        if self.jobs.get(job_id).is_none() {
            debug!(job_id = %job_id, "applicant list ignored for unknown job");
            return false;
        }
        self.view.applicant_detail.dismiss();
        self.view.applicants.open(job_id);
        self.panel.open(job_id);
        true
    }

    pub fn set_applicant_status(&mut self, applicant_id: ApplicantId, status: ApplicantStatus) -> bool {
        self.panel.update_status(applicant_id, status)
    }

    pub fn applicant(&self, applicant_id: ApplicantId) -> Option<Applicant> {
        self.panel.applicant(applicant_id)
    }

    pub fn show_applicant(&mut self, applicant_id: ApplicantId) -> bool {
        if self.panel.applicant(applicant_id).is_none() {
            return false;
        }
        self.view.applicant_detail.open(applicant_id);
        true
    }

    pub fn dismiss(&mut self, kind: DialogKind) {
        self.view.dismiss(kind);
        match kind {
            DialogKind::JobForm => self.rejection = None,
            DialogKind::Applicants => self.panel.dismiss(),
            DialogKind::JobDetail | DialogKind::ApplicantDetail => {}
        }
    }
}

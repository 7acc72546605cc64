use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::hiring::jobs::JobId;

use super::domain::{Applicant, ApplicantId, ApplicantStatus};
use super::source::ApplicantSource;

/// What the applicant list dialog currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PanelState {
    #[default]
    Closed,
    Loading {
        job_id: JobId,
    },
    Ready {
        job_id: JobId,
        applicants: Vec<Applicant>,
    },
    Failed {
        job_id: JobId,
        message: String,
    },
}

impl PanelState {
    pub fn job_id(&self) -> Option<JobId> {
        match self {
            Self::Closed => None,
            Self::Loading { job_id }
            | Self::Ready { job_id, .. }
            | Self::Failed { job_id, .. } => Some(*job_id),
        }
    }

    pub fn applicants(&self) -> &[Applicant] {
        match self {
            Self::Ready { applicants, .. } => applicants,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

#[derive(Debug, Default)]
struct PanelSlot {
    generation: u64,
    state: PanelState,
}

/// One applicant list view-session.
///
/// Opening the panel fetches from the source after a fixed latency. Status
/// edits only touch the session's copy, so reopening the panel reloads from
/// the source and drops them. A fetch belonging to a dismissed or replaced
/// session is aborted, and its result is discarded if it still lands.
pub struct ApplicantPanel<S> {
    source: Arc<S>,
    latency: Duration,
    slot: Arc<Mutex<PanelSlot>>,
    pending: Option<JoinHandle<()>>,
}

fn lock(slot: &Mutex<PanelSlot>) -> MutexGuard<'_, PanelSlot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<S> ApplicantPanel<S>
where
    S: ApplicantSource + 'static,
{
    pub fn new(source: Arc<S>, latency: Duration) -> Self {
        Self {
            source,
            latency,
            slot: Arc::new(Mutex::new(PanelSlot::default())),
            pending: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Start a new session for `job_id`. Must be called inside a tokio runtime.
    pub fn open(&mut self, job_id: JobId) {
        self.abort_pending();

        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation += 1;
            slot.state = PanelState::Loading { job_id };
            slot.generation
        };

        let source = Arc::clone(&self.source);
        let slot = Arc::clone(&self.slot);
        let latency = self.latency;
        debug!(job_id = %job_id, generation, "applicant fetch started");

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            let fetched = source.applicants_for(job_id);

            let mut slot = lock(&slot);
            if slot.generation != generation {
                debug!(job_id = %job_id, generation, "stale applicant fetch discarded");
                return;
            }
            slot.state = match fetched {
                Ok(applicants) => {
                    debug!(job_id = %job_id, count = applicants.len(), "applicants loaded");
                    PanelState::Ready { job_id, applicants }
                }
                Err(err) => {
                    warn!(job_id = %job_id, error = %err, "applicant fetch failed");
                    PanelState::Failed {
                        job_id,
                        message: err.to_string(),
                    }
                }
            };
        }));
    }

    /// Close the session, cancelling an in-flight fetch.
    pub fn dismiss(&mut self) {
        self.abort_pending();
        let mut slot = lock(&self.slot);
        slot.generation += 1;
        slot.state = PanelState::Closed;
    }

    pub fn state(&self) -> PanelState {
        lock(&self.slot).state.clone()
    }

    pub fn job_id(&self) -> Option<JobId> {
        lock(&self.slot).state.job_id()
    }

    pub fn applicant(&self, applicant_id: ApplicantId) -> Option<Applicant> {
        lock(&self.slot)
            .state
            .applicants()
            .iter()
            .find(|applicant| applicant.id == applicant_id)
            .cloned()
    }

    /// Set any status on a loaded applicant. Returns `false` when there is no
    /// such applicant in the current session.
    pub fn update_status(&self, applicant_id: ApplicantId, status: ApplicantStatus) -> bool {
        let mut slot = lock(&self.slot);
        let PanelState::Ready { applicants, job_id } = &mut slot.state else {
            debug!(applicant_id = %applicant_id, "status update ignored while panel not ready");
            return false;
        };

        match applicants
            .iter_mut()
            .find(|applicant| applicant.id == applicant_id)
        {
            Some(applicant) => {
                applicant.status = status;
                debug!(
                    job_id = %job_id,
                    applicant_id = %applicant_id,
                    status = status.label(),
                    "applicant status updated"
                );
                true
            }
            None => {
                debug!(applicant_id = %applicant_id, "status update ignored for unknown applicant");
                false
            }
        }
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!("pending applicant fetch aborted");
            }
            handle.abort();
        }
    }
}

impl<S> Drop for ApplicantPanel<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post, put},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::applicants::{ApplicantId, ApplicantSource, ApplicantStatus};
use super::jobs::{JobDraft, JobFormError, JobId, SaveOutcome};
use super::page;
use super::screen::{lock_screen, SharedScreen};
use super::view::DialogKind;

/// Router exposing the admin screen as HTML and every command as JSON.
pub fn hiring_router<S>(screen: SharedScreen<S>) -> Router
where
    S: ApplicantSource + 'static,
{
    Router::new()
        .route("/", get(page_handler::<S>))
        .route("/screen/jobs", post(submit_form_handler::<S>))
        .route("/screen/jobs/new", post(add_job_handler::<S>))
        .route("/screen/jobs/:job_id/:action", post(job_action_handler::<S>))
        .route(
            "/screen/applicants/:applicant_id/status",
            post(applicant_status_form_handler::<S>),
        )
        .route(
            "/screen/applicants/:applicant_id/details",
            post(applicant_details_handler::<S>),
        )
        .route("/screen/dismiss/:dialog", post(dismiss_handler::<S>))
        .route("/api/v1/screen", get(view_handler::<S>))
        .route(
            "/api/v1/jobs",
            get(list_jobs_handler::<S>).post(save_job_handler::<S>),
        )
        .route(
            "/api/v1/jobs/:job_id",
            get(get_job_handler::<S>).delete(delete_job_handler::<S>),
        )
        .route("/api/v1/jobs/:job_id/toggle", post(toggle_job_handler::<S>))
        .route(
            "/api/v1/jobs/:job_id/applicants",
            post(open_applicants_handler::<S>),
        )
        .route(
            "/api/v1/applicants",
            get(panel_handler::<S>).delete(dismiss_panel_handler::<S>),
        )
        .route("/api/v1/applicants/:applicant_id", get(applicant_handler::<S>))
        .route(
            "/api/v1/applicants/:applicant_id/status",
            put(applicant_status_handler::<S>),
        )
        .with_state(screen)
}

/// Body for applicant status changes, from JSON or the status selector.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: ApplicantStatus,
}

fn form_error_response(error: &JobFormError) -> Response {
    let status = match error {
        JobFormError::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
        JobFormError::Store(_) => StatusCode::CONFLICT,
    };
    let payload = json!({
        "error": error.to_string(),
        "field": error.field(),
    });
    (status, Json(payload)).into_response()
}

fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
}

pub(crate) async fn page_handler<S>(State(screen): State<SharedScreen<S>>) -> Html<String>
where
    S: ApplicantSource + 'static,
{
    let screen = lock_screen(&screen);
    Html(page::render(&screen))
}

pub(crate) async fn add_job_handler<S>(State(screen): State<SharedScreen<S>>) -> Redirect
where
    S: ApplicantSource + 'static,
{
    lock_screen(&screen).add_job();
    Redirect::to("/")
}

pub(crate) async fn submit_form_handler<S>(
    State(screen): State<SharedScreen<S>>,
    Form(draft): Form<JobDraft>,
) -> Response
where
    S: ApplicantSource + 'static,
{
    let mut screen = lock_screen(&screen);
    match screen.submit_job(draft) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(JobFormError::Store(_)) => {
            (StatusCode::CONFLICT, Html(page::render(&screen))).into_response()
        }
        Err(JobFormError::MissingField(_)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Html(page::render(&screen))).into_response()
        }
    }
}

pub(crate) async fn job_action_handler<S>(
    State(screen): State<SharedScreen<S>>,
    Path((job_id, action)): Path<(u64, String)>,
) -> Response
where
    S: ApplicantSource + 'static,
{
    let id = JobId(job_id);
    let mut screen = lock_screen(&screen);
    match action.as_str() {
        "details" => {
            screen.show_job(id);
        }
        "edit" => {
            screen.edit_job(id);
        }
        "delete" => {
            screen.delete_job(id);
        }
        "toggle" => {
            screen.toggle_job(id);
        }
        "applicants" => {
            screen.open_applicants(id);
        }
        _ => return StatusCode::NOT_FOUND.into_response(),
    }
    Redirect::to("/").into_response()
}

pub(crate) async fn applicant_status_form_handler<S>(
    State(screen): State<SharedScreen<S>>,
    Path(applicant_id): Path<u64>,
    Form(update): Form<StatusUpdate>,
) -> Redirect
where
    S: ApplicantSource + 'static,
{
    lock_screen(&screen).set_applicant_status(ApplicantId(applicant_id), update.status);
    Redirect::to("/")
}

pub(crate) async fn applicant_details_handler<S>(
    State(screen): State<SharedScreen<S>>,
    Path(applicant_id): Path<u64>,
) -> Redirect
where
    S: ApplicantSource + 'static,
{
    lock_screen(&screen).show_applicant(ApplicantId(applicant_id));
    Redirect::to("/")
}

pub(crate) async fn dismiss_handler<S>(
    State(screen): State<SharedScreen<S>>,
    Path(dialog): Path<DialogKind>,
) -> Redirect
where
    S: ApplicantSource + 'static,
{
    lock_screen(&screen).dismiss(dialog);
    Redirect::to("/")
}

pub(crate) async fn view_handler<S>(State(screen): State<SharedScreen<S>>) -> Response
where
    S: ApplicantSource + 'static,
{
    let screen = lock_screen(&screen);
    Json(screen.view().clone()).into_response()
}

pub(crate) async fn list_jobs_handler<S>(State(screen): State<SharedScreen<S>>) -> Response
where
    S: ApplicantSource + 'static,
{
    let listing = lock_screen(&screen).jobs().listing();
    Json(listing).into_response()
}

pub(crate) async fn save_job_handler<S>(
    State(screen): State<SharedScreen<S>>,
    Json(draft): Json<JobDraft>,
) -> Response
where
    S: ApplicantSource + 'static,
{
    let outcome = lock_screen(&screen).save_job(draft);
    match outcome {
        Ok(SaveOutcome::Created(job)) => (StatusCode::CREATED, Json(job)).into_response(),
        Ok(SaveOutcome::Updated(job)) => (StatusCode::OK, Json(job)).into_response(),
        Err(error) => form_error_response(&error),
    }
}

pub(crate) async fn get_job_handler<S>(
    State(screen): State<SharedScreen<S>>,
    Path(job_id): Path<u64>,
) -> Response
where
    S: ApplicantSource + 'static,
{
    let job = lock_screen(&screen).jobs().get(JobId(job_id)).cloned();
    match job {
        Some(job) => Json(job).into_response(),
        None => not_found("job not found"),
    }
}

pub(crate) async fn delete_job_handler<S>(
    State(screen): State<SharedScreen<S>>,
    Path(job_id): Path<u64>,
) -> Response
where
    S: ApplicantSource + 'static,
{
    let mut screen = lock_screen(&screen);
    screen.delete_job(JobId(job_id));
    Json(screen.jobs().listing()).into_response()
}

pub(crate) async fn toggle_job_handler<S>(
    State(screen): State<SharedScreen<S>>,
    Path(job_id): Path<u64>,
) -> Response
where
    S: ApplicantSource + 'static,
{
    let mut screen = lock_screen(&screen);
    screen.toggle_job(JobId(job_id));
    Json(screen.jobs().listing()).into_response()
}

pub(crate) async fn open_applicants_handler<S>(
    State(screen): State<SharedScreen<S>>,
    Path(job_id): Path<u64>,
) -> Response
where
    S: ApplicantSource + 'static,
{
    let mut screen = lock_screen(&screen);
    if !screen.open_applicants(JobId(job_id)) {
        return not_found("job not found");
    }
    (StatusCode::ACCEPTED, Json(screen.panel())).into_response()
}

pub(crate) async fn panel_handler<S>(State(screen): State<SharedScreen<S>>) -> Response
where
    S: ApplicantSource + 'static,
{
    let panel = lock_screen(&screen).panel();
    Json(panel).into_response()
}

pub(crate) async fn dismiss_panel_handler<S>(State(screen): State<SharedScreen<S>>) -> Response
where
    S: ApplicantSource + 'static,
{
    let mut screen = lock_screen(&screen);
    screen.dismiss(DialogKind::Applicants);
    Json(screen.panel()).into_response()
}

pub(crate) async fn applicant_handler<S>(
    State(screen): State<SharedScreen<S>>,
    Path(applicant_id): Path<u64>,
) -> Response
where
    S: ApplicantSource + 'static,
{
    let applicant = lock_screen(&screen).applicant(ApplicantId(applicant_id));
    match applicant {
        Some(applicant) => Json(applicant).into_response(),
        None => not_found("applicant not loaded"),
    }
}

pub(crate) async fn applicant_status_handler<S>(
    State(screen): State<SharedScreen<S>>,
    Path(applicant_id): Path<u64>,
    Json(update): Json<StatusUpdate>,
) -> Response
where
    S: ApplicantSource + 'static,
{
    let mut screen = lock_screen(&screen);
    screen.set_applicant_status(ApplicantId(applicant_id), update.status);
    Json(screen.panel()).into_response()
}

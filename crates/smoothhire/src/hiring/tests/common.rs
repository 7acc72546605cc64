use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use crate::hiring::applicants::SeededApplicantSource;
use crate::hiring::jobs::{JobId, JobPosting, JobStatus, JobStore};
use crate::hiring::router::hiring_router;
use crate::hiring::screen::{AdminScreen, SharedScreen};
use crate::hiring::seed::SeedData;

pub(super) const LATENCY: Duration = Duration::from_millis(500);

pub(super) fn shared_screen() -> SharedScreen<SeededApplicantSource> {
    let seed = SeedData::builtin().expect("builtin seed parses");
    AdminScreen::from_seed(&seed, LATENCY).into_shared()
}

pub(super) fn router() -> Router {
    hiring_router(shared_screen())
}

/// A screen whose only posting already holds the largest identifier.
pub(super) fn exhausted_router() -> Router {
    let jobs = JobStore::new(vec![JobPosting {
        id: JobId(u64::MAX),
        title: "Archivist".to_string(),
        description: "Keep records.".to_string(),
        requirements: "Patience".to_string(),
        status: JobStatus::Open,
    }]);
    let source = SeededApplicantSource::new(Default::default());
    hiring_router(AdminScreen::new(jobs, Arc::new(source), LATENCY).into_shared())
}

pub(super) async fn send(router: &Router, request: Request<Body>) -> Response {
    router
        .clone()
        .oneshot(request)
        .await
        .expect("route executes")
}

pub(super) fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

pub(super) fn json_request(method: Method, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).expect("payload serializes")))
        .expect("request builds")
}

pub(super) fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) async fn read_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn settle() {
    tokio::time::sleep(LATENCY + Duration::from_millis(10)).await;
}

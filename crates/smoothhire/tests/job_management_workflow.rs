use std::time::Duration;

use smoothhire::hiring::{
    AdminScreen, ApplicantId, ApplicantStatus, DialogKind, JobDraft, JobId, JobStatus, JobStore,
    PanelState, SeedData, SeededApplicantSource,
};

const LATENCY: Duration = Duration::from_millis(500);

fn seeded_screen() -> AdminScreen<SeededApplicantSource> {
    let seed = SeedData::builtin().expect("builtin seed parses");
    AdminScreen::from_seed(&seed, LATENCY)
}

fn draft(title: &str) -> JobDraft {
    JobDraft {
        title: title.to_string(),
        description: format!("About the {title} role"),
        requirements: "Relevant experience".to_string(),
        ..JobDraft::default()
    }
}

#[test]
fn identifiers_restart_from_one_when_the_listing_empties() {
    let mut store = JobStore::default();
    let a = store.create_or_update(draft("A")).expect("identifier available").into_posting();
    assert_eq!(a.id, JobId(1));

    store.delete(a.id);
    let b = store.create_or_update(draft("B")).expect("identifier available").into_posting();
    assert_eq!(b.id, JobId(1));

    let c = store.create_or_update(draft("C")).expect("identifier available").into_posting();
    assert_eq!(c.id, JobId(2));
}

#[test]
fn seeded_job_survives_toggles_and_a_description_edit() {
    let mut screen = seeded_screen();

    screen.toggle_job(JobId(1));
    assert_eq!(
        screen.jobs().get(JobId(1)).map(|job| job.status),
        Some(JobStatus::Closed)
    );
    screen.toggle_job(JobId(1));

    let current = screen.jobs().get(JobId(1)).cloned().expect("seeded job");
    let mut edit = JobDraft::from_posting(&current);
    edit.description = "Ship features end to end.".to_string();
    screen.submit_job(edit).expect("edit accepted");

    let job = screen.jobs().get(JobId(1)).cloned().expect("job still present");
    assert_eq!(job.id, JobId(1));
    assert_eq!(job.title, "Software Engineer");
    assert_eq!(job.requirements, current.requirements);
    assert_eq!(job.description, "Ship features end to end.");
    assert_eq!(job.status, JobStatus::Open);
    assert_eq!(screen.jobs().snapshot()[0].id, JobId(1));
}

#[test]
fn absent_identifiers_change_nothing() {
    let mut screen = seeded_screen();
    let before = screen.jobs().listing();

    assert_eq!(screen.toggle_job(JobId(77)), None);
    assert_eq!(screen.delete_job(JobId(77)), None);

    assert_eq!(screen.jobs().listing(), before);
}

#[tokio::test(start_paused = true)]
async fn pending_fetch_for_one_job_does_not_leak_into_another() {
    let mut screen = seeded_screen();

    screen.open_applicants(JobId(2));
    tokio::time::sleep(Duration::from_millis(250)).await;
    screen.dismiss(DialogKind::Applicants);
    screen.open_applicants(JobId(1));

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(screen.panel(), PanelState::Loading { job_id: JobId(1) });

    tokio::time::sleep(LATENCY).await;
    let panel = screen.panel();
    assert_eq!(panel.job_id(), Some(JobId(1)));
    let ids: Vec<_> = panel.applicants().iter().map(|applicant| applicant.id).collect();
    assert_eq!(ids, vec![ApplicantId(1), ApplicantId(2)]);
}

#[tokio::test(start_paused = true)]
async fn offered_applicant_can_return_to_applied() {
    let mut screen = seeded_screen();
    screen.open_applicants(JobId(1));
    tokio::time::sleep(LATENCY * 2).await;

    for status in [
        ApplicantStatus::Offered,
        ApplicantStatus::Applied,
        ApplicantStatus::Interviewed,
        ApplicantStatus::Rejected,
        ApplicantStatus::Reviewing,
    ] {
        assert!(screen.set_applicant_status(ApplicantId(1), status));
        let applicant = screen.applicant(ApplicantId(1)).expect("applicant loaded");
        assert_eq!(applicant.status, status);
    }
}

#[tokio::test(start_paused = true)]
async fn deleted_jobs_leave_their_applicants_orphaned() {
    let mut screen = seeded_screen();
    screen.delete_job(JobId(1)).expect("job deleted");

    assert!(!screen.open_applicants(JobId(1)));
    assert_eq!(screen.applicant_source().count_for(JobId(1)), 2);
}

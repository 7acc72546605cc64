//! Server-rendered HTML for the admin screen.
//!
//! Every control is a small form posting back to `/screen/...`; the handlers
//! answer with a redirect to `/`, so the page always reflects the current
//! store and dialog state.

use std::fmt::Write;

use chrono::Local;

use crate::hiring::applicants::{Applicant, ApplicantSource, ApplicantStatus, PanelState};
use crate::hiring::background;
use crate::hiring::jobs::{JobDraft, JobPosting, JobStatus};
use crate::hiring::screen::AdminScreen;
use crate::hiring::view::{DialogKind, FormTarget};

const BASE_STYLES: &str = "\
body { margin: 0; font-family: system-ui, sans-serif; min-height: 100vh; \
background: linear-gradient(to bottom right, #f3f4f6, #d1d5db); }
.content { position: relative; z-index: 10; max-width: 64rem; margin: 0 auto; padding: 1rem; }
header, footer { background: #000; color: #fff; padding: 1rem; text-align: center; }
header h1 { margin: 0; font-size: 1.875rem; }
.card { background: rgba(255,255,255,0.8); border-radius: 0.5rem; padding: 1rem; \
box-shadow: 0 10px 15px rgba(0,0,0,0.1); }
.card-header { display: flex; justify-content: space-between; align-items: center; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 0.5rem; border-bottom: 1px solid #e5e7eb; }
.actions { display: flex; gap: 0.5rem; }
form.inline { display: inline; }
.badge { padding: 0.25rem 0.5rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 600; }
.badge-green { background: #dcfce7; color: #166534; }
.badge-red { background: #fee2e2; color: #991b1b; }
.badge-blue { background: #dbeafe; color: #1e40af; }
.badge-yellow { background: #fef9c3; color: #854d0e; }
.badge-purple { background: #f3e8ff; color: #6b21a8; }
.overlay { position: fixed; inset: 0; z-index: 20; background: rgba(0,0,0,0.5); \
display: flex; align-items: center; justify-content: center; }
.dialog { background: #fff; border-radius: 0.5rem; padding: 1.5rem; max-width: 425px; width: 100%; }
.dialog.wide { max-width: 768px; }
.dialog label { display: block; font-weight: 600; margin-top: 0.75rem; }
.dialog input, .dialog textarea { width: 100%; box-sizing: border-box; }
.error { color: #991b1b; }
";

pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn job_badge(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Open => "badge-green",
        JobStatus::Closed => "badge-red",
    }
}

fn applicant_badge(status: ApplicantStatus) -> &'static str {
    match status {
        ApplicantStatus::Applied => "badge-blue",
        ApplicantStatus::Reviewing => "badge-yellow",
        ApplicantStatus::Interviewed => "badge-purple",
        ApplicantStatus::Offered => "badge-green",
        ApplicantStatus::Rejected => "badge-red",
    }
}

fn dismiss_path(kind: DialogKind) -> &'static str {
    match kind {
        DialogKind::JobForm => "/screen/dismiss/job_form",
        DialogKind::JobDetail => "/screen/dismiss/job_detail",
        DialogKind::Applicants => "/screen/dismiss/applicants",
        DialogKind::ApplicantDetail => "/screen/dismiss/applicant_detail",
    }
}

fn button(out: &mut String, action: &str, label: &str) {
    let _ = write!(
        out,
        "<form class=\"inline\" method=\"post\" action=\"{action}\"><button type=\"submit\">{label}</button></form>"
    );
}

/// Render the whole screen.
pub fn render<S>(screen: &AdminScreen<S>) -> String
where
    S: ApplicantSource + 'static,
{
    let panel = screen.panel();
    let mut out = String::with_capacity(8 * 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>SmoothHire Job Management</title>\n");
    if panel.is_loading() {
        out.push_str("<meta http-equiv=\"refresh\" content=\"1\">\n");
    }
    out.push_str("<style>\n");
    out.push_str(BASE_STYLES);
    out.push_str(&background::stylesheet());
    out.push_str("</style>\n</head>\n<body>\n<div class=\"backdrop\"></div>\n");
    out.push_str("<div class=\"content\">\n<header><h1>SmoothHire Job Management</h1></header>\n");

    render_listing(&mut out, &screen.jobs().snapshot());
    render_dialogs(&mut out, screen, &panel);

    out.push_str("</div>\n<footer><p>&copy; 2023 SmoothHire. All rights reserved.</p></footer>\n");
    out.push_str("</body>\n</html>\n");
    out
}

fn render_listing(out: &mut String, jobs: &[JobPosting]) {
    out.push_str("<section class=\"card\">\n<div class=\"card-header\"><h2>Job Listings</h2>");
    button(out, "/screen/jobs/new", "Add Job");
    out.push_str("</div>\n<table>\n<thead><tr><th>Title</th><th>Status</th><th>Actions</th></tr></thead>\n<tbody>\n");

    for job in jobs {
        let id = job.id;
        out.push_str("<tr><td>");
        button(out, &format!("/screen/jobs/{id}/details"), &escape(&job.title));
        let _ = write!(
            out,
            "</td><td><span class=\"badge {}\">{}</span></td><td><div class=\"actions\">",
            job_badge(job.status),
            job.status.label()
        );
        button(out, &format!("/screen/jobs/{id}/edit"), "Edit");
        button(out, &format!("/screen/jobs/{id}/delete"), "Delete");
        button(out, &format!("/screen/jobs/{id}/toggle"), job.status.toggle_action());
        button(out, &format!("/screen/jobs/{id}/applicants"), "Applicants");
        out.push_str("</div></td></tr>\n");
    }

    out.push_str("</tbody>\n</table>\n</section>\n");
}

fn open_dialog(out: &mut String, title: &str, wide: bool) {
    let class = if wide { "dialog wide" } else { "dialog" };
    let _ = write!(
        out,
        "<div class=\"overlay\"><div class=\"{class}\" role=\"dialog\"><h3>{}</h3>\n",
        escape(title)
    );
}

fn close_dialog(out: &mut String, kind: DialogKind) {
    button(out, dismiss_path(kind), "Close");
    out.push_str("</div></div>\n");
}

fn render_dialogs<S>(out: &mut String, screen: &AdminScreen<S>, panel: &PanelState)
where
    S: ApplicantSource + 'static,
{
    let view = screen.view();

    if let Some(id) = view.job_detail.target() {
        if let Some(job) = screen.jobs().get(id) {
            open_dialog(out, &job.title, false);
            let _ = write!(
                out,
                "<h4>Job Description:</h4><p>{}</p><h4>Requirements:</h4><p>{}</p>\n",
                escape(&job.description),
                escape(&job.requirements)
            );
            close_dialog(out, DialogKind::JobDetail);
        }
    }

    if let Some(target) = view.job_form.target() {
        render_job_form(out, screen, target);
    }

    if let Some(job_id) = view.applicants.target() {
        let title = screen
            .jobs()
            .get(job_id)
            .map(|job| job.title.as_str())
            .unwrap_or_default();
        open_dialog(out, &format!("Applicants for {title}"), true);
        render_panel(out, panel);
        close_dialog(out, DialogKind::Applicants);
    }

    if let Some(applicant_id) = view.applicant_detail.target() {
        if let Some(applicant) = screen.applicant(applicant_id) {
            render_applicant_detail(out, &applicant);
        }
    }
}

fn render_job_form<S>(out: &mut String, screen: &AdminScreen<S>, target: FormTarget)
where
    S: ApplicantSource + 'static,
{
    let existing = match target {
        FormTarget::New => None,
        FormTarget::Existing(id) => screen.jobs().get(id),
    };
    let rejection = screen.rejection();
    let draft = match (rejection, existing) {
        (Some(rejection), _) => rejection.draft.clone(),
        (None, Some(job)) => JobDraft::from_posting(job),
        (None, None) => JobDraft::default(),
    };

    let (title, submit) = if existing.is_some() {
        ("Edit Job", "Update Job")
    } else {
        ("Add New Job", "Create Job")
    };
    open_dialog(out, title, false);

    if let Some(rejection) = rejection {
        let _ = write!(
            out,
            "<p class=\"error\">{}</p>\n",
            escape(&rejection.error.to_string())
        );
    }

    out.push_str("<form method=\"post\" action=\"/screen/jobs\">\n");
    if let Some(job) = existing {
        let _ = write!(
            out,
            "<input type=\"hidden\" name=\"id\" value=\"{}\"><input type=\"hidden\" name=\"status\" value=\"{}\">\n",
            job.id,
            job.status.label()
        );
    }
    let _ = write!(
        out,
        "<label for=\"title\">Job Title</label><input id=\"title\" name=\"title\" placeholder=\"Enter job title\" value=\"{}\" required>\n\
<label for=\"description\">Job Description</label><textarea id=\"description\" name=\"description\" placeholder=\"Enter job description\" required>{}</textarea>\n\
<label for=\"requirements\">Job Requirements</label><textarea id=\"requirements\" name=\"requirements\" placeholder=\"Enter job requirements\" required>{}</textarea>\n\
<p><button type=\"submit\">{submit}</button></p>\n</form>\n",
        escape(&draft.title),
        escape(&draft.description),
        escape(&draft.requirements),
    );
    button(out, dismiss_path(DialogKind::JobForm), "Cancel");
    out.push_str("</div></div>\n");
}

fn render_panel(out: &mut String, panel: &PanelState) {
    match panel {
        PanelState::Closed => {}
        PanelState::Loading { .. } => out.push_str("<p>Loading applicants&hellip;</p>\n"),
        PanelState::Failed { message, .. } => {
            let _ = write!(out, "<p class=\"error\">{}</p>\n", escape(message));
        }
        PanelState::Ready { applicants, .. } => {
            out.push_str("<table>\n<thead><tr><th>Name</th><th>Email</th><th>Status</th><th>Actions</th></tr></thead>\n<tbody>\n");
            for applicant in applicants {
                render_applicant_row(out, applicant);
            }
            out.push_str("</tbody>\n</table>\n");
        }
    }
}

fn render_applicant_row(out: &mut String, applicant: &Applicant) {
    let id = applicant.id;
    let _ = write!(
        out,
        "<tr><td>{}</td><td>{}</td><td><span class=\"badge {}\">{}</span></td><td><div class=\"actions\">",
        escape(&applicant.name),
        escape(&applicant.email),
        applicant_badge(applicant.status),
        applicant.status.label()
    );

    let _ = write!(
        out,
        "<form class=\"inline\" method=\"post\" action=\"/screen/applicants/{id}/status\"><select name=\"status\" onchange=\"this.form.submit()\">"
    );
    for status in ApplicantStatus::ALL {
        let selected = if status == applicant.status {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            out,
            "<option value=\"{}\"{selected}>{}</option>",
            status.label(),
            status.title()
        );
    }
    out.push_str("</select><noscript><button type=\"submit\">Set</button></noscript></form>");
    button(out, &format!("/screen/applicants/{id}/details"), "Details");
    out.push_str("</div></td></tr>\n");
}

fn render_applicant_detail(out: &mut String, applicant: &Applicant) {
    open_dialog(out, &format!("Applicant Details: {}", applicant.name), false);
    let applied = applicant
        .applied_at
        .with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p");
    let _ = write!(
        out,
        "<h4>Resume:</h4><p>{}</p><h4>Application Letter:</h4><p>{}</p>\
<h4>Application Time:</h4><p><time datetime=\"{}\">{applied}</time></p>\n",
        escape(&applicant.resume),
        escape(&applicant.application_letter),
        applicant.applied_at.to_rfc3339(),
    );
    close_dialog(out, DialogKind::ApplicantDetail);
}

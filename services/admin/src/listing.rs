use chrono::{DateTime, Utc};
use clap::Args;
use smoothhire::error::AppError;
use smoothhire::hiring::{ApplicantStatus, JobId, SeedData};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ListingArgs {
    /// JSON seed file to inspect instead of the built-in data
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
}

/// One row of the listing report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct JobSummary {
    pub(crate) id: JobId,
    pub(crate) title: String,
    pub(crate) status: &'static str,
    pub(crate) pipeline: Vec<(ApplicantStatus, usize)>,
    pub(crate) latest_application: Option<DateTime<Utc>>,
}

impl JobSummary {
    pub(crate) fn applicants(&self) -> usize {
        self.pipeline.iter().map(|(_, count)| count).sum()
    }
}

pub(crate) fn run_listing(args: ListingArgs) -> Result<(), AppError> {
    let seed = SeedData::load(args.seed.as_deref())?;
    for line in render_listing(&summarize(&seed)) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn summarize(seed: &SeedData) -> Vec<JobSummary> {
    seed.jobs
        .iter()
        .map(|job| {
            let applicants = seed.applicants.get(&job.id).map(Vec::as_slice).unwrap_or(&[]);
            let pipeline = ApplicantStatus::ALL
                .iter()
                .map(|status| {
                    let count = applicants
                        .iter()
                        .filter(|applicant| applicant.status == *status)
                        .count();
                    (*status, count)
                })
                .filter(|(_, count)| *count > 0)
                .collect();
            JobSummary {
                id: job.id,
                title: job.title.clone(),
                status: job.status.label(),
                pipeline,
                latest_application: applicants.iter().map(|applicant| applicant.applied_at).max(),
            }
        })
        .collect()
}

pub(crate) fn render_listing(summaries: &[JobSummary]) -> Vec<String> {
    let mut lines = vec!["SmoothHire job listing".to_string()];
    if summaries.is_empty() {
        lines.push("No job postings.".to_string());
        return lines;
    }

    for summary in summaries {
        lines.push(format!(
            "#{} {} [{}]: {} applicant(s)",
            summary.id,
            summary.title,
            summary.status,
            summary.applicants()
        ));
        if !summary.pipeline.is_empty() {
            let tallies: Vec<String> = summary
                .pipeline
                .iter()
                .map(|(status, count)| format!("{} {count}", status.label()))
                .collect();
            lines.push(format!("    pipeline: {}", tallies.join(", ")));
        }
        if let Some(latest) = summary.latest_application {
            lines.push(format!(
                "    latest application: {}",
                latest.format("%Y-%m-%d %H:%M UTC")
            ));
        }
    }
    lines
}

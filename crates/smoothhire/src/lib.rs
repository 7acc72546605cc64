//! Job postings, applicant pipelines, and the admin screen that manages them.

pub mod config;
pub mod error;
pub mod hiring;
pub mod telemetry;

use metrics_exporter_prometheus::PrometheusHandle;
use smoothhire::config::HiringConfig;
use smoothhire::hiring::{AdminScreen, SeedData, SeedError, SeededApplicantSource, SharedScreen};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the shared screen from the configured seed, or the built-in data.
pub(crate) fn build_screen(
    config: &HiringConfig,
) -> Result<SharedScreen<SeededApplicantSource>, SeedError> {
    let seed = SeedData::load(config.seed_path.as_deref())?;
    Ok(AdminScreen::from_seed(&seed, config.applicant_fetch_delay).into_shared())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smoothhire::hiring::screen::lock_screen;

    #[test]
    fn builtin_seed_is_used_without_a_path() {
        let screen = build_screen(&HiringConfig::default()).expect("screen builds");
        let screen = lock_screen(&screen);
        assert_eq!(screen.jobs().len(), 2);
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        let config = HiringConfig {
            seed_path: Some("/nonexistent/seed.json".into()),
            ..HiringConfig::default()
        };
        assert!(matches!(build_screen(&config), Err(SeedError::Io { .. })));
    }
}

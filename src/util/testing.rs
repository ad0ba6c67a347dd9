//! Shared setup for unit and integration tests

use std::sync::Once;

use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::application::services::QueryService;
use crate::application::{seed_bank, ApplicationResult, DEMO_BANK_NAME};

static TEST_SETUP: Once = Once::new();

/// Install a global tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; falls back to `demobank=debug`.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("demobank=debug"));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_filter(env_filter),
        );

        if tracing::dispatcher::has_been_set() {
            debug!("Tracing subscriber already set");
        } else if let Err(e) = subscriber.try_init() {
            eprintln!("Error: Failed to set up logging: {}", e);
        }
    });
}

/// Query service over the demo bank with the default 12-month horizon.
pub fn seeded_service() -> ApplicationResult<QueryService> {
    Ok(QueryService::new(seed_bank(DEMO_BANK_NAME)?))
}

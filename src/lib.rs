//! Medibook — doctor discovery and appointment booking core.
//!
//! In-memory only: the doctor directory is seeded once at startup and
//! appointments live for the lifetime of the process. The view layer
//! drives everything through [`ClinicState`].

pub mod availability; // date → weekday → slot resolution
pub mod booking; // candidate validation
pub mod clock; // injectable time source
pub mod config;
pub mod confirmation; // booking summary + PDF export
pub mod core_state; // shared application state
pub mod directory; // seeded doctor records
pub mod models;
pub mod registry; // append-only appointment store

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

pub use core_state::{BookingOutcome, ClinicState, CoreError};

/// Initialize tracing and build the seeded application state.
///
/// Called once by the embedding view layer; tests construct
/// [`ClinicState`] directly instead.
pub fn bootstrap() -> Result<Arc<ClinicState>, CoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Medibook core starting v{}", config::APP_VERSION);

    let state = Arc::new(ClinicState::new()?);
    tracing::info!(doctors = state.list_doctors().len(), "Doctor directory seeded");
    Ok(state)
}

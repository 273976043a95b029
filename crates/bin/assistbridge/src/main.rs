//! # assistbridge — exposure report tool
//!
//! Composition root that wires the snapshot adapter into the exposure service.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging (stderr, so stdout carries only the report)
//! - Load the host snapshot (adapter)
//! - Construct the exposure service, injecting registries via port traits
//! - Print the exposure report for the configured assistant as JSON
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::io::Write;

use assistbridge_adapter_snapshot::Snapshot;
use assistbridge_app::services::exposure_service::ExposureService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let assistant = config.assistant();
    let options = config.exposure_options()?;

    // Snapshot
    let snapshot = Snapshot::load(&config.snapshot.path)?;
    tracing::debug!(
        assistant = %assistant,
        listed = snapshot.exposed.count(&assistant),
        "exposure list"
    );
    for entry in snapshot.registry.owned_config_entries() {
        tracing::debug!(entry = %entry.id, title = %entry.title, "config entry");
    }

    // Service
    let service = ExposureService::new(
        &snapshot.registry,
        &snapshot.registry,
        &snapshot.registry,
        snapshot.exposed,
    )
    .with_options(options);

    let report = service.build_report(&snapshot.states, &assistant);
    tracing::info!(assistant = %assistant, exposed = report.len(), "exposure report ready");

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)?;
    writeln!(stdout)?;

    Ok(())
}

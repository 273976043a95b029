//! # assistbridge-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** the host (or an adapter) must implement:
//!   - `EntityMetadataLookup`, `AreaLookup`, `DeviceLookup` — read-only registries
//!   - `ExposurePolicy` — whether an assistant may see an entity
//!   - `ConfigEntryLookup` — configured plugin instances
//!   - `ImageGenerator`, `ModelCatalog` — the conversational-AI vendor API
//! - Define **use-cases**:
//!   - `ExposureService` — build the exposure report for one assistant
//!   - `ImageService` — handle the `generate_image` service call
//!   - `readiness::check_entry` — timeout-guarded API key check
//!
//! ## Dependency rule
//! Depends on `assistbridge-domain` only (plus `tokio::time` for the readiness deadline).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

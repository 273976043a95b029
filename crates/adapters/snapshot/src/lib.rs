//! # assistbridge-adapter-snapshot
//!
//! Read-only registries backed by a JSON snapshot of the host.
//!
//! ## Responsibilities
//! - Parse and validate a snapshot file (states, entity/area/device registries,
//!   config entries, per-assistant exposure lists)
//! - Implement the registry and config-entry lookup ports from `assistbridge-app::ports`
//! - Implement the `ExposurePolicy` port from the per-assistant exposure lists
//!
//! ## Dependency rule
//! Depends on `assistbridge-app` (for port traits) and `assistbridge-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod exposed;
mod registry;
mod snapshot;

pub use error::SnapshotError;
pub use exposed::ExposedSet;
pub use registry::Registry;
pub use snapshot::Snapshot;

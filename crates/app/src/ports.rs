//! Port definitions — traits that the host or adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod config_entries;
pub mod exposure_policy;
pub mod registry;
pub mod vendor;

pub use config_entries::ConfigEntryLookup;
pub use exposure_policy::ExposurePolicy;
pub use registry::{AreaLookup, DeviceLookup, EntityMetadataLookup};
pub use vendor::{ImageGenerator, ModelCatalog};

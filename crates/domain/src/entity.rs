//! Entity — the host's view of a single tracked state holder.
//!
//! Two records describe an entity: the live [`EntityState`] (state string plus
//! typed attributes) and the optional registry [`EntityMetadata`] (aliases,
//! area and device assignment).

mod attribute_value;
mod metadata;
mod state;

pub use attribute_value::AttributeValue;
pub use metadata::EntityMetadata;
pub use state::{EntityState, EntityStateBuilder};

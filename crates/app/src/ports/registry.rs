//! Registry ports — read-only lookups into the host's area, device and
//! entity registries.
//!
//! A miss is `None`, never an error. Maps keyed by identifier implement the
//! traits directly so tests can hand in plain `HashMap`s.

use std::collections::HashMap;

use assistbridge_domain::area::Area;
use assistbridge_domain::device::Device;
use assistbridge_domain::entity::EntityMetadata;
use assistbridge_domain::id::{AreaId, DeviceId, EntityId};

/// Entity registry: aliases and area/device assignment by entity id.
pub trait EntityMetadataLookup {
    fn entity_metadata(&self, entity_id: &EntityId) -> Option<&EntityMetadata>;
}

/// Area registry.
pub trait AreaLookup {
    fn area(&self, area_id: &AreaId) -> Option<&Area>;
}

/// Device registry.
pub trait DeviceLookup {
    fn device(&self, device_id: &DeviceId) -> Option<&Device>;
}

impl<T: EntityMetadataLookup + ?Sized> EntityMetadataLookup for &T {
    fn entity_metadata(&self, entity_id: &EntityId) -> Option<&EntityMetadata> {
        (**self).entity_metadata(entity_id)
    }
}

impl<T: AreaLookup + ?Sized> AreaLookup for &T {
    fn area(&self, area_id: &AreaId) -> Option<&Area> {
        (**self).area(area_id)
    }
}

impl<T: DeviceLookup + ?Sized> DeviceLookup for &T {
    fn device(&self, device_id: &DeviceId) -> Option<&Device> {
        (**self).device(device_id)
    }
}

impl<S: std::hash::BuildHasher> EntityMetadataLookup for HashMap<EntityId, EntityMetadata, S> {
    fn entity_metadata(&self, entity_id: &EntityId) -> Option<&EntityMetadata> {
        self.get(entity_id)
    }
}

impl<S: std::hash::BuildHasher> AreaLookup for HashMap<AreaId, Area, S> {
    fn area(&self, area_id: &AreaId) -> Option<&Area> {
        self.get(area_id)
    }
}

impl<S: std::hash::BuildHasher> DeviceLookup for HashMap<DeviceId, Device, S> {
    fn device(&self, device_id: &DeviceId) -> Option<&Device> {
        self.get(device_id)
    }
}

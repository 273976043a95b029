//! In-memory registries keyed by identifier.

use std::collections::HashMap;

use assistbridge_app::ports::{AreaLookup, ConfigEntryLookup, DeviceLookup, EntityMetadataLookup};
use assistbridge_domain::area::Area;
use assistbridge_domain::config_entry::ConfigEntry;
use assistbridge_domain::device::Device;
use assistbridge_domain::entity::EntityMetadata;
use assistbridge_domain::id::{AreaId, ConfigEntryId, DeviceId, EntityId};

/// Entity, area, device and config-entry registries.
///
/// Inserting a record whose identifier is already present replaces it.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entities: HashMap<EntityId, EntityMetadata>,
    areas: HashMap<AreaId, Area>,
    devices: HashMap<DeviceId, Device>,
    config_entries: HashMap<ConfigEntryId, ConfigEntry>,
}

impl Registry {
    pub fn insert_entity(&mut self, metadata: EntityMetadata) {
        self.entities.insert(metadata.entity_id.clone(), metadata);
    }

    pub fn insert_area(&mut self, area: Area) {
        self.areas.insert(area.id.clone(), area);
    }

    pub fn insert_device(&mut self, device: Device) {
        self.devices.insert(device.id.clone(), device);
    }

    pub fn insert_config_entry(&mut self, entry: ConfigEntry) {
        self.config_entries.insert(entry.id.clone(), entry);
    }

    /// Config entries owned by this plugin.
    pub fn owned_config_entries(&self) -> impl Iterator<Item = &ConfigEntry> {
        self.config_entries.values().filter(|entry| entry.is_owned())
    }

    #[must_use]
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    #[must_use]
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }
}

impl EntityMetadataLookup for Registry {
    fn entity_metadata(&self, entity_id: &EntityId) -> Option<&EntityMetadata> {
        self.entities.get(entity_id)
    }
}

impl AreaLookup for Registry {
    fn area(&self, area_id: &AreaId) -> Option<&Area> {
        self.areas.get(area_id)
    }
}

impl DeviceLookup for Registry {
    fn device(&self, device_id: &DeviceId) -> Option<&Device> {
        self.devices.get(device_id)
    }
}

impl ConfigEntryLookup for Registry {
    fn config_entry(&self, id: &ConfigEntryId) -> Option<&ConfigEntry> {
        self.config_entries.get(id)
    }
}

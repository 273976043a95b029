//! Entity registry metadata.

use serde::{Deserialize, Serialize};

use crate::id::{AreaId, DeviceId, EntityId};

/// Registry record for an entity: user aliases plus area/device assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub entity_id: EntityId,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub area_id: Option<AreaId>,
    #[serde(default)]
    pub device_id: Option<DeviceId>,
}

impl EntityMetadata {
    /// Metadata with no aliases and no assignment.
    #[must_use]
    pub fn new(entity_id: impl Into<EntityId>) -> Self {
        Self {
            entity_id: entity_id.into(),
            aliases: Vec::new(),
            area_id: None,
            device_id: None,
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    #[must_use]
    pub fn with_area(mut self, area_id: impl Into<AreaId>) -> Self {
        self.area_id = Some(area_id.into());
        self
    }

    #[must_use]
    pub fn with_device(mut self, device_id: impl Into<DeviceId>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }
}

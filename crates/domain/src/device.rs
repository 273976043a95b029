//! Device — a physical or virtual thing that exposes one or more entities.

use serde::{Deserialize, Serialize};

use crate::id::{AreaId, DeviceId};

/// A registered device. Only the fields the exposure filter reads are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    #[serde(default)]
    pub area_id: Option<AreaId>,
}

impl Device {
    /// Create a device with no area.
    #[must_use]
    pub fn new(id: impl Into<DeviceId>) -> Self {
        Self {
            id: id.into(),
            area_id: None,
        }
    }

    #[must_use]
    pub fn with_area(mut self, area_id: impl Into<AreaId>) -> Self {
        self.area_id = Some(area_id.into());
        self
    }
}

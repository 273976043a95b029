//! Snapshot loading — parse, validate and index a host snapshot file.

use std::collections::HashMap;
use std::path::Path;

use assistbridge_domain::area::Area;
use assistbridge_domain::config_entry::ConfigEntry;
use assistbridge_domain::device::Device;
use assistbridge_domain::entity::{EntityMetadata, EntityState};
use assistbridge_domain::id::{AssistantId, EntityId};
use serde::Deserialize;

use crate::error::SnapshotError;
use crate::exposed::ExposedSet;
use crate::registry::Registry;

/// On-disk layout. Only `states` is mandatory.
#[derive(Debug, Deserialize)]
struct SnapshotFile {
    states: Vec<EntityState>,
    #[serde(default)]
    entities: Vec<EntityMetadata>,
    #[serde(default)]
    areas: Vec<Area>,
    #[serde(default)]
    devices: Vec<Device>,
    #[serde(default)]
    config_entries: Vec<ConfigEntry>,
    #[serde(default)]
    exposed: HashMap<AssistantId, Vec<EntityId>>,
}

/// A validated host snapshot: the state list plus everything needed to
/// resolve it.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Entity states in file order.
    pub states: Vec<EntityState>,
    pub registry: Registry,
    pub exposed: ExposedSet,
}

impl Snapshot {
    /// Read and parse the snapshot at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] if the file cannot be read, and the
    /// errors of [`from_json`](Self::from_json) otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            states = snapshot.states.len(),
            areas = snapshot.registry.area_count(),
            devices = snapshot.registry.device_count(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Parse a snapshot document.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Parse`] on malformed JSON and
    /// [`SnapshotError::Domain`] when a state has an empty id or an area an
    /// empty name.
    pub fn from_json(content: &str) -> Result<Self, SnapshotError> {
        let file: SnapshotFile = serde_json::from_str(content)?;

        for state in &file.states {
            state.validate().map_err(SnapshotError::Domain)?;
        }

        let mut registry = Registry::default();
        for metadata in file.entities {
            registry.insert_entity(metadata);
        }
        for area in file.areas {
            area.validate().map_err(SnapshotError::Domain)?;
            registry.insert_area(area);
        }
        for device in file.devices {
            registry.insert_device(device);
        }
        for entry in file.config_entries {
            registry.insert_config_entry(entry);
        }

        let exposed = file
            .exposed
            .into_iter()
            .flat_map(|(assistant, entities)| {
                entities
                    .into_iter()
                    .map(move |entity_id| (assistant.clone(), entity_id))
            })
            .collect();

        Ok(Self {
            states: file.states,
            registry,
            exposed,
        })
    }
}

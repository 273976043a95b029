//! Entity state — one entry of the host's state machine snapshot.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::entity::AttributeValue;
use crate::error::{AssistError, ValidationError};
use crate::id::EntityId;

/// Snapshot of a tracked entity: its current state string and attributes.
///
/// Attributes keep the order in which the host reported them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub entity_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub state: String,
    #[serde(default)]
    pub attributes: IndexMap<String, AttributeValue>,
}

impl EntityState {
    /// Create a builder for constructing an [`EntityState`].
    #[must_use]
    pub fn builder() -> EntityStateBuilder {
        EntityStateBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AssistError::Validation`] when `entity_id` is empty.
    pub fn validate(&self) -> Result<(), AssistError> {
        if self.entity_id.is_empty() {
            return Err(ValidationError::EmptyEntityId.into());
        }
        Ok(())
    }

    /// Entity domain, derived from the identifier.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.entity_id.domain()
    }

    /// Display name: the explicit name, else the `friendly_name` attribute,
    /// else the object id with underscores turned into spaces.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        if let Some(AttributeValue::String(name)) = self.attributes.get("friendly_name") {
            return name.clone();
        }
        let id = self.entity_id.as_str();
        let object_id = id.split_once('.').map_or(id, |(_, object_id)| object_id);
        object_id.replace('_', " ")
    }
}

/// Step-by-step builder for [`EntityState`].
#[derive(Debug, Default)]
pub struct EntityStateBuilder {
    entity_id: Option<EntityId>,
    name: Option<String>,
    state: Option<String>,
    attributes: IndexMap<String, AttributeValue>,
}

impl EntityStateBuilder {
    #[must_use]
    pub fn entity_id(mut self, entity_id: impl Into<EntityId>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Consume the builder, validate, and return an [`EntityState`].
    ///
    /// The state defaults to `unknown`.
    ///
    /// # Errors
    ///
    /// Returns [`AssistError::Validation`] if `entity_id` is missing or empty.
    pub fn build(self) -> Result<EntityState, AssistError> {
        let state = EntityState {
            entity_id: self.entity_id.unwrap_or_else(|| EntityId::new("")),
            name: self.name,
            state: self.state.unwrap_or_else(|| "unknown".to_string()),
            attributes: self.attributes,
        };
        state.validate()?;
        Ok(state)
    }
}

//! Area — a logical grouping (room, floor, zone) for devices and entities.

use serde::{Deserialize, Serialize};

use crate::error::{AssistError, ValidationError};
use crate::id::AreaId;

/// A logical grouping such as a room, floor, or zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Area {
    /// Create a builder for constructing an [`Area`].
    #[must_use]
    pub fn builder() -> AreaBuilder {
        AreaBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AssistError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), AssistError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// The area name followed by its aliases, in stored order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Step-by-step builder for [`Area`].
#[derive(Debug, Default)]
pub struct AreaBuilder {
    id: Option<AreaId>,
    name: Option<String>,
    aliases: Vec<String>,
}

impl AreaBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<AreaId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Consume the builder, validate, and return an [`Area`].
    ///
    /// When no id is given, the name is used as the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AssistError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Area, AssistError> {
        let name = self.name.unwrap_or_default();
        let area = Area {
            id: self.id.unwrap_or_else(|| AreaId::new(name.clone())),
            name,
            aliases: self.aliases,
        };
        area.validate()?;
        Ok(area)
    }
}

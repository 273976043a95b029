//! Per-assistant exposure lists.

use std::collections::{HashMap, HashSet};

use assistbridge_app::ports::ExposurePolicy;
use assistbridge_domain::id::{AssistantId, EntityId};

/// Entities explicitly exposed to each assistant. Anything unlisted is hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExposedSet {
    by_assistant: HashMap<AssistantId, HashSet<EntityId>>,
}

impl ExposedSet {
    /// Expose `entity_id` to `assistant`.
    pub fn expose(&mut self, assistant: AssistantId, entity_id: EntityId) {
        self.by_assistant
            .entry(assistant)
            .or_default()
            .insert(entity_id);
    }

    /// Number of entities exposed to `assistant`.
    #[must_use]
    pub fn count(&self, assistant: &AssistantId) -> usize {
        self.by_assistant.get(assistant).map_or(0, HashSet::len)
    }
}

impl FromIterator<(AssistantId, EntityId)> for ExposedSet {
    fn from_iter<T: IntoIterator<Item = (AssistantId, EntityId)>>(iter: T) -> Self {
        let mut set = Self::default();
        for (assistant, entity_id) in iter {
            set.expose(assistant, entity_id);
        }
        set
    }
}

impl ExposurePolicy for ExposedSet {
    fn should_expose(&self, assistant: &AssistantId, entity_id: &EntityId) -> bool {
        self.by_assistant
            .get(assistant)
            .is_some_and(|entities| entities.contains(entity_id))
    }
}

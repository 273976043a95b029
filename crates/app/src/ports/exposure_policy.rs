//! Exposure policy port — the host decides which entities an assistant sees.

use assistbridge_domain::id::{AssistantId, EntityId};

/// Decides whether `entity_id` is visible to `assistant`.
///
/// Must be pure: the same inputs always give the same answer. Any
/// `Fn(&AssistantId, &EntityId) -> bool` closure is a policy.
pub trait ExposurePolicy {
    fn should_expose(&self, assistant: &AssistantId, entity_id: &EntityId) -> bool;
}

impl<F> ExposurePolicy for F
where
    F: Fn(&AssistantId, &EntityId) -> bool,
{
    fn should_expose(&self, assistant: &AssistantId, entity_id: &EntityId) -> bool {
        self(assistant, entity_id)
    }
}

//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`AssistError`]
//! via `#[from]` (or an explicit `into_domain` for adapter errors).

/// Top-level error returned across port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("upstream error")]
    Upstream(#[from] UpstreamError),

    /// The upstream API is unreachable for now; the host should retry later.
    #[error("config entry not ready")]
    NotReady(#[source] UpstreamError),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("entity_id must not be empty")]
    EmptyEntityId,

    #[error("prompt must not be empty")]
    EmptyPrompt,

    #[error("assistant must not be empty")]
    EmptyAssistant,

    #[error("invalid config entry: {0}")]
    InvalidConfigEntry(String),

    #[error("domain {0:?} collides with the reserved catch-all key")]
    ReservedDomain(String),
}

/// A failure reported by the conversational-AI vendor API.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The API key was refused.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The call did not complete before its deadline.
    #[error("request timed out")]
    Timeout,

    /// Any other API failure.
    #[error("{0}")]
    Api(String),
}

impl UpstreamError {
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_with_from() {
        let err: AssistError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            AssistError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_display_reserved_domain_with_name() {
        let err = ValidationError::ReservedDomain("entities".to_string());
        assert_eq!(
            err.to_string(),
            "domain \"entities\" collides with the reserved catch-all key"
        );
    }

    #[test]
    fn should_display_upstream_api_message_verbatim() {
        let err = UpstreamError::Api("rate limited".to_string());
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn should_flag_authentication_errors() {
        assert!(UpstreamError::Authentication("bad key".to_string()).is_authentication());
        assert!(!UpstreamError::Timeout.is_authentication());
    }
}

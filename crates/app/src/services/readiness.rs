//! Readiness check — is a config entry's API key usable right now?
//!
//! Runs one authenticated model listing under a deadline. A refused key is a
//! permanent failure, anything else is transient and the host retries.

use std::time::Duration;

use assistbridge_domain::config_entry::ConfigEntry;
use assistbridge_domain::error::{AssistError, UpstreamError};

use crate::ports::ModelCatalog;

/// Deadline applied to the probe when the caller has no preference.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of a readiness probe that reached a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// The key works; the entry can be set up.
    Ready,
    /// The key was refused; setting up the entry must not be retried.
    Rejected,
}

/// Probe `entry` against the vendor's model listing.
///
/// # Errors
///
/// Returns [`AssistError::NotReady`] when the call fails for any reason other
/// than authentication, or does not complete within `timeout`.
pub async fn check_entry<C: ModelCatalog>(
    catalog: &C,
    entry: &ConfigEntry,
    timeout: Duration,
) -> Result<Readiness, AssistError> {
    match tokio::time::timeout(timeout, catalog.list_models(entry)).await {
        Ok(Ok(models)) => {
            tracing::debug!(entry = %entry.id, models = models.len(), "config entry ready");
            Ok(Readiness::Ready)
        }
        Ok(Err(err)) if err.is_authentication() => {
            tracing::error!(entry = %entry.id, error = %err, "Invalid API key");
            Ok(Readiness::Rejected)
        }
        Ok(Err(err)) => {
            tracing::warn!(entry = %entry.id, error = %err, "config entry not ready");
            Err(AssistError::NotReady(err))
        }
        Err(_) => {
            tracing::warn!(entry = %entry.id, ?timeout, "model listing timed out");
            Err(AssistError::NotReady(UpstreamError::Timeout))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum FakeCatalog {
        Models(Vec<String>),
        Fails(fn() -> UpstreamError),
        Hangs,
    }

    impl ModelCatalog for FakeCatalog {
        async fn list_models(&self, _entry: &ConfigEntry) -> Result<Vec<String>, UpstreamError> {
            match self {
                Self::Models(models) => Ok(models.clone()),
                Self::Fails(make) => Err(make()),
                Self::Hangs => std::future::pending().await,
            }
        }
    }

    fn entry() -> ConfigEntry {
        ConfigEntry::new("abc", "OpenAI", "sk-test")
    }

    #[tokio::test]
    async fn should_report_ready_when_models_listed() {
        let catalog = FakeCatalog::Models(vec!["gpt-4o-mini".to_string()]);
        let result = check_entry(&catalog, &entry(), DEFAULT_TIMEOUT).await;
        assert_eq!(result.unwrap(), Readiness::Ready);
    }

    #[tokio::test]
    async fn should_reject_entry_when_key_refused() {
        let catalog =
            FakeCatalog::Fails(|| UpstreamError::Authentication("Incorrect API key".to_string()));
        let result = check_entry(&catalog, &entry(), DEFAULT_TIMEOUT).await;
        assert_eq!(result.unwrap(), Readiness::Rejected);
    }

    #[tokio::test]
    async fn should_report_not_ready_on_other_failures() {
        let catalog = FakeCatalog::Fails(|| UpstreamError::Api("connection reset".to_string()));
        let result = check_entry(&catalog, &entry(), DEFAULT_TIMEOUT).await;
        assert!(matches!(
            result,
            Err(AssistError::NotReady(UpstreamError::Api(_)))
        ));
    }

    #[tokio::test]
    async fn should_report_not_ready_when_probe_times_out() {
        let result = check_entry(&FakeCatalog::Hangs, &entry(), Duration::from_millis(10)).await;
        assert!(matches!(
            result,
            Err(AssistError::NotReady(UpstreamError::Timeout))
        ));
    }
}

//! Config entry — one configured instance of the plugin.

use serde::{Deserialize, Serialize};

use crate::id::ConfigEntryId;

/// Domain under which the plugin registers its entries and services.
pub const PLUGIN_DOMAIN: &str = "openai_conversation";

/// A configured plugin instance holding the vendor API key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub id: ConfigEntryId,
    /// Integration domain that owns the entry.
    pub domain: String,
    pub title: String,
    pub api_key: String,
}

impl ConfigEntry {
    /// A new entry owned by this plugin.
    #[must_use]
    pub fn new(
        id: impl Into<ConfigEntryId>,
        title: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            domain: PLUGIN_DOMAIN.to_string(),
            title: title.into(),
            api_key: api_key.into(),
        }
    }

    /// Whether this entry belongs to the plugin (and not another integration).
    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.domain == PLUGIN_DOMAIN
    }
}

impl std::fmt::Debug for ConfigEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigEntry")
            .field("id", &self.id)
            .field("domain", &self.domain)
            .field("title", &self.title)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

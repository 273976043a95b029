//! Config entry port — lookup of configured plugin instances.

use std::collections::HashMap;

use assistbridge_domain::config_entry::ConfigEntry;
use assistbridge_domain::id::ConfigEntryId;

/// Host registry of config entries (of every integration, not only ours).
pub trait ConfigEntryLookup {
    fn config_entry(&self, id: &ConfigEntryId) -> Option<&ConfigEntry>;
}

impl<T: ConfigEntryLookup + ?Sized> ConfigEntryLookup for &T {
    fn config_entry(&self, id: &ConfigEntryId) -> Option<&ConfigEntry> {
        (**self).config_entry(id)
    }
}

impl<S: std::hash::BuildHasher> ConfigEntryLookup for HashMap<ConfigEntryId, ConfigEntry, S> {
    fn config_entry(&self, id: &ConfigEntryId) -> Option<&ConfigEntry> {
        self.get(id)
    }
}

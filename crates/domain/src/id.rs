//! Typed identifier newtypes backed by the host's string identifiers.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing host identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Access the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the identifier is the empty string.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a tracked entity, e.g. `light.living_room`.
    EntityId
);

define_id!(
    /// Identifier of a [`Device`](crate::device::Device).
    DeviceId
);

define_id!(
    /// Identifier of an [`Area`](crate::area::Area).
    AreaId
);

define_id!(
    /// Identifier of an assistant configuration whose exposure rules apply.
    AssistantId
);

define_id!(
    /// Identifier of a [`ConfigEntry`](crate::config_entry::ConfigEntry).
    ConfigEntryId
);

impl EntityId {
    /// The entity domain: everything before the first `.`.
    ///
    /// An identifier without a dot is its own domain.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split_once('.').map_or(self.0.as_str(), |(domain, _)| domain)
    }
}

/*!
 * Entry Metadata
 * Metadata record returned by entry metadata lookups
 */

use crate::core::serde::{is_none, optional_system_time_micros};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Metadata for a composite or native entry
///
/// Virtual entries populate only the fields they can answer; a fully empty
/// record is valid and is what placeholder roots return.
/// Timestamps are serialized as microseconds since UNIX epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct EntryMetadata {
    #[serde(
        with = "optional_system_time_micros",
        skip_serializing_if = "is_none",
        default
    )]
    pub modification_time: Option<SystemTime>,
    #[serde(skip_serializing_if = "is_none", default)]
    pub size: Option<u64>,
}

impl EntryMetadata {
    /// Record with no populated fields
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            modification_time: None,
            size: None,
        }
    }

    /// Record carrying only a current-time modification timestamp
    #[must_use]
    pub fn modified_now() -> Self {
        Self {
            modification_time: Some(SystemTime::now()),
            size: None,
        }
    }

    /// Record for a backend node with a known timestamp
    #[must_use]
    pub const fn modified_at(time: SystemTime) -> Self {
        Self {
            modification_time: Some(time),
            size: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.modification_time.is_none() && self.size.is_none()
    }
}

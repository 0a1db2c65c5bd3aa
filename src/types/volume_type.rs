/*!
 * Volume Type Enum
 * Identifies the kind of storage backing a mounted volume
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of storage/namespace a volume descriptor represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeType {
    Downloads,
    Drive,
    Removable,
    Archive,
    Provided,
    Mtp,
    Smb,
    #[serde(rename = "media_view")]
    MediaView,
    Crostini,
    #[serde(rename = "android_files")]
    AndroidFiles,
}

impl VolumeType {
    /// Wire form, also used as the icon name of a volume entry
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            VolumeType::Downloads => "downloads",
            VolumeType::Drive => "drive",
            VolumeType::Removable => "removable",
            VolumeType::Archive => "archive",
            VolumeType::Provided => "provided",
            VolumeType::Mtp => "mtp",
            VolumeType::Smb => "smb",
            VolumeType::MediaView => "media_view",
            VolumeType::Crostini => "crostini",
            VolumeType::AndroidFiles => "android_files",
        }
    }
}

impl fmt::Display for VolumeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opaque source classifier carried by placeholder roots
///
/// Consumed by external filtering logic only; this crate just stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceRestriction {
    #[serde(rename = "any_source")]
    AnySource,
    #[serde(rename = "native_source")]
    NativeSource,
}

/*!
 * Root Type Enum
 * Classifies the kind of top-level grouping an entry represents
 */

use super::volume_type::VolumeType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of top-level grouping shown in the directory tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootType {
    MyFiles,
    Downloads,
    Drive,
    Crostini,
    #[serde(rename = "android_files")]
    AndroidFiles,
    Removable,
    Archive,
    Provided,
    Mtp,
    Smb,
    #[serde(rename = "media_view")]
    MediaView,
    Recent,
    Trash,
}

impl RootType {
    /// Wire form, also used as URL host and icon name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            RootType::MyFiles => "my_files",
            RootType::Downloads => "downloads",
            RootType::Drive => "drive",
            RootType::Crostini => "crostini",
            RootType::AndroidFiles => "android_files",
            RootType::Removable => "removable",
            RootType::Archive => "archive",
            RootType::Provided => "provided",
            RootType::Mtp => "mtp",
            RootType::Smb => "smb",
            RootType::MediaView => "media_view",
            RootType::Recent => "recent",
            RootType::Trash => "trash",
        }
    }
}

impl From<VolumeType> for RootType {
    /// Root classification of an entry that presents a whole volume
    fn from(volume_type: VolumeType) -> Self {
        match volume_type {
            VolumeType::Downloads => RootType::Downloads,
            VolumeType::Drive => RootType::Drive,
            VolumeType::Removable => RootType::Removable,
            VolumeType::Archive => RootType::Archive,
            VolumeType::Provided => RootType::Provided,
            VolumeType::Mtp => RootType::Mtp,
            VolumeType::Smb => RootType::Smb,
            VolumeType::MediaView => RootType::MediaView,
            VolumeType::Crostini => RootType::Crostini,
            VolumeType::AndroidFiles => RootType::AndroidFiles,
        }
    }
}

impl fmt::Display for RootType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

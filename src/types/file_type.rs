/*!
 * File Type Enum
 * Defines the type of nodes in a backend tree
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Node type in a native backend tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    File,
    Directory,
}

impl FileType {
    #[inline]
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self, FileType::Directory)
    }

    #[inline]
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, FileType::File)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FileType::File => write!(f, "file"),
            FileType::Directory => write!(f, "directory"),
        }
    }
}

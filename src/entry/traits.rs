/*!
 * Entry Traits
 * Capability set exposed to the tree-view layer
 */

use crate::backend::NativeEntry;
use crate::reader::DirReader;
use crate::types::{EntryMetadata, RootType, VfsResult};
use crate::volume::VolumeInfo;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Options for `get_file`/`get_directory` lookups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct GetOptions {
    #[serde(default)]
    pub create: bool,
    #[serde(default)]
    pub exclusive: bool,
}

impl GetOptions {
    /// Lookup-only: fail if the target does not exist
    #[must_use]
    pub const fn existing() -> Self {
        Self {
            create: false,
            exclusive: false,
        }
    }

    /// Create the target when it is missing
    #[must_use]
    pub const fn create() -> Self {
        Self {
            create: true,
            exclusive: false,
        }
    }
}

/// Node in the composite directory tree
///
/// Implemented by the virtual variants in this crate and by backend
/// entries, so one reader page can mix both. Capabilities a variant does
/// not have default to `None`/`false`; callers dispatch on these answers
/// instead of probing for properties at runtime.
#[async_trait]
pub trait FsEntry: Send + Sync {
    /// Name shown in path components; virtual entries use their label
    fn name(&self) -> String;

    /// Human-readable label
    fn label(&self) -> String {
        self.name()
    }

    fn is_directory(&self) -> bool;

    fn is_file(&self) -> bool {
        !self.is_directory()
    }

    /// Stable identifying URL
    fn to_url(&self) -> String;

    /// Root classification for top-level groupings
    fn root_type(&self) -> Option<RootType> {
        None
    }

    /// Descriptor of the volume backing this entry
    fn volume_info(&self) -> Option<Arc<VolumeInfo>> {
        None
    }

    /// Whether this entry wraps a native filesystem root
    fn is_native_type(&self) -> bool {
        false
    }

    /// The resolved backend entry, when one exists
    fn native_entry(&self) -> Option<Arc<dyn NativeEntry>> {
        None
    }

    /// Icon identifier for the tree view; empty when the variant has no
    /// dedicated icon
    fn icon_name(&self) -> String {
        String::new()
    }

    /// New reader over this entry's children as of now
    fn create_reader(&self) -> Box<dyn DirReader>;

    /// Parent lookup; roots resolve to themselves
    async fn parent(self: Arc<Self>) -> VfsResult<Arc<dyn FsEntry>>;

    /// Metadata lookup; virtual entries never fail
    async fn metadata(&self) -> VfsResult<EntryMetadata>;
}

impl std::fmt::Debug for dyn FsEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsEntry")
            .field("name", &self.name())
            .finish()
    }
}

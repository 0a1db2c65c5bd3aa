/*!
 * Backend Traits
 * Interface consumed from native volume backends
 */

use crate::entry::GetOptions;
use crate::reader::DirReader;
use crate::types::{EntryMetadata, VfsResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Handle describing the filesystem a native entry belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileSystemHandle {
    pub name: String,
    pub root_url: String,
}

impl FileSystemHandle {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let root_url = format!("filesystem:{name}/");
        Self { name, root_url }
    }
}

/// Entry of a real, mounted volume
///
/// Provided by the volume backend; this crate only consumes it. All
/// implementations must answer navigation and lookup without blocking the
/// caller's thread.
#[async_trait]
pub trait NativeEntry: Send + Sync {
    fn name(&self) -> String;

    /// Absolute path inside the backing filesystem
    fn full_path(&self) -> String;

    fn is_directory(&self) -> bool;

    /// Stable identifying URL
    fn to_url(&self) -> String;

    /// Handle of the filesystem this entry belongs to
    fn filesystem(&self) -> Arc<FileSystemHandle>;

    /// New paginated reader over this directory's children
    fn create_reader(&self) -> Box<dyn DirReader>;

    /// Parent directory; the filesystem root resolves to itself
    async fn parent(self: Arc<Self>) -> VfsResult<Arc<dyn NativeEntry>>;

    async fn metadata(&self) -> VfsResult<EntryMetadata>;

    /// Look up (or create) a file relative to this directory
    async fn get_file(
        &self,
        path: &str,
        options: GetOptions,
    ) -> VfsResult<Arc<dyn NativeEntry>>;

    /// Look up (or create) a directory relative to this directory
    async fn get_directory(
        &self,
        path: &str,
        options: GetOptions,
    ) -> VfsResult<Arc<dyn NativeEntry>>;
}

impl std::fmt::Debug for dyn NativeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeEntry")
            .field("full_path", &self.full_path())
            .finish()
    }
}

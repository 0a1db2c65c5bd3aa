/*!
 * Entry List
 * Virtual directory node grouping several volumes under one root
 */

use super::children;
use super::traits::FsEntry;
use crate::reader::{DirReader, Page, StaticReader};
use crate::types::{EntryMetadata, RootType, VfsResult, VolumeType};
use crate::volume::VolumeInfo;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Virtual grouping root with an explicit, ordered child list
///
/// Not backed by any filesystem. Used for roots like "My files" that
/// present several volumes as one node in the tree. Insertion order is
/// significant; duplicates by identity are not prevented at this layer.
pub struct EntryList {
    label: String,
    root_type: RootType,
    children: RwLock<Vec<Arc<dyn FsEntry>>>,
}

impl EntryList {
    pub fn new(label: impl Into<String>, root_type: RootType) -> Self {
        Self {
            label: label.into(),
            root_type,
            children: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the current children, in insertion order
    pub fn children(&self) -> Page {
        self.children.read().clone()
    }

    /// Append a child
    ///
    /// A volume-backed child records this list as the prefix owner of its
    /// volume descriptor.
    pub fn add_entry(self: &Arc<Self>, entry: Arc<dyn FsEntry>) {
        if let Some(info) = entry.volume_info() {
            let owner: Arc<dyn FsEntry> = Arc::clone(self) as Arc<dyn FsEntry>;
            info.set_prefix_entry(&owner);
        }
        self.children.write().push(entry);
    }

    /// Index of the first child backed by the given descriptor
    pub fn find_index_by_volume_info(&self, info: &Arc<VolumeInfo>) -> Option<usize> {
        children::index_by_volume_info(&self.children.read(), info)
    }

    /// Index of the first child whose volume has the given type
    pub fn find_index_by_volume_type(&self, volume_type: VolumeType) -> Option<usize> {
        children::index_by_volume_type(&self.children.read(), volume_type)
    }

    /// Remove the first child whose volume has the given type
    pub fn remove_by_volume_type(&self, volume_type: VolumeType) -> bool {
        children::remove_by_volume_type(&mut self.children.write(), volume_type)
    }

    /// Remove the first child with the given root type
    pub fn remove_by_root_type(&self, root_type: RootType) -> bool {
        children::remove_by_root_type(&mut self.children.write(), root_type)
    }
}

#[async_trait]
impl FsEntry for EntryList {
    fn name(&self) -> String {
        self.label.clone()
    }

    fn is_directory(&self) -> bool {
        true
    }

    fn is_file(&self) -> bool {
        false
    }

    fn to_url(&self) -> String {
        format!("entry-list://{}", self.root_type)
    }

    fn root_type(&self) -> Option<RootType> {
        Some(self.root_type)
    }

    fn icon_name(&self) -> String {
        self.root_type.to_string()
    }

    fn create_reader(&self) -> Box<dyn DirReader> {
        // Snapshot at call time; later child mutations are not reflected
        // in an already-created reader.
        Box::new(StaticReader::new(self.children()))
    }

    async fn parent(self: Arc<Self>) -> VfsResult<Arc<dyn FsEntry>> {
        // Roots are their own parent, per the web filesystem contract.
        Ok(self)
    }

    async fn metadata(&self) -> VfsResult<EntryMetadata> {
        Ok(EntryMetadata::modified_now())
    }
}

impl fmt::Debug for EntryList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("EntryList")
            .field("label", &self.label)
            .field("root_type", &self.root_type)
            .field("children", &self.children.read().len())
            .finish()
    }
}

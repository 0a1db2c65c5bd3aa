/*!
 * Fake Entry
 * Static placeholder root with no backend and no children
 */

use super::traits::FsEntry;
use crate::reader::{DirReader, StaticReader};
use crate::types::{EntryMetadata, RootType, SourceRestriction, VfsResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Placeholder root shown before a real volume exists
///
/// Fully static: label and root type only, no backend, no children, no
/// mutation after construction.
#[derive(Debug)]
pub struct FakeEntry {
    label: String,
    root_type: RootType,
    source_restriction: Option<SourceRestriction>,
}

impl FakeEntry {
    pub fn new(label: impl Into<String>, root_type: RootType) -> Self {
        Self {
            label: label.into(),
            root_type,
            source_restriction: None,
        }
    }

    /// Placeholder carrying a source classifier for external filters
    pub fn with_source_restriction(
        label: impl Into<String>,
        root_type: RootType,
        restriction: SourceRestriction,
    ) -> Self {
        Self {
            label: label.into(),
            root_type,
            source_restriction: Some(restriction),
        }
    }

    pub fn source_restriction(&self) -> Option<SourceRestriction> {
        self.source_restriction
    }
}

#[async_trait]
impl FsEntry for FakeEntry {
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
        format!("fake-entry://{}", self.root_type)
    }

    fn root_type(&self) -> Option<RootType> {
        Some(self.root_type)
    }

    fn icon_name(&self) -> String {
        self.root_type.to_string()
    }

    fn create_reader(&self) -> Box<dyn DirReader> {
        // Terminal node: nothing to enumerate.
        Box::new(StaticReader::empty())
    }

    async fn parent(self: Arc<Self>) -> VfsResult<Arc<dyn FsEntry>> {
        Ok(self)
    }

    async fn metadata(&self) -> VfsResult<EntryMetadata> {
        Ok(EntryMetadata::empty())
    }
}

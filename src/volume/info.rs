/*!
 * Volume Descriptor
 * Describes one mounted or virtual volume to the entry layer
 */

use crate::backend::NativeEntry;
use crate::entry::FsEntry;
use crate::types::{VfsResult, VolumeType};
use futures::future::BoxFuture;
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, Weak};

/// Deferred root-resolution capability supplied by the volume layer
pub type RootResolver =
    Box<dyn Fn() -> BoxFuture<'static, VfsResult<Arc<dyn NativeEntry>>> + Send + Sync>;

/// Descriptor for one mounted or virtual volume
///
/// The display root may be absent at construction time and become
/// available later through the resolver. The prefix back-reference points
/// at the composite entry that presents this volume in the tree; it is
/// weak so a child list never owns its own parent.
pub struct VolumeInfo {
    label: String,
    volume_type: VolumeType,
    display_root: Option<Arc<dyn NativeEntry>>,
    resolver: Option<RootResolver>,
    prefix: RwLock<Option<Weak<dyn FsEntry>>>,
}

impl VolumeInfo {
    pub fn new(volume_type: VolumeType, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            volume_type,
            display_root: None,
            resolver: None,
            prefix: RwLock::new(None),
        }
    }

    /// Descriptor with an already-available display root
    #[must_use]
    pub fn with_display_root(mut self, root: Arc<dyn NativeEntry>) -> Self {
        self.display_root = Some(root);
        self
    }

    /// Descriptor whose root becomes available asynchronously
    #[must_use]
    pub fn with_resolver(mut self, resolver: RootResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn volume_type(&self) -> VolumeType {
        self.volume_type
    }

    pub fn display_root(&self) -> Option<Arc<dyn NativeEntry>> {
        self.display_root.clone()
    }

    pub(crate) fn resolver(&self) -> Option<&RootResolver> {
        self.resolver.as_ref()
    }

    /// The composite entry currently presenting this volume, if any
    pub fn prefix_entry(&self) -> Option<Arc<dyn FsEntry>> {
        self.prefix.read().as_ref().and_then(Weak::upgrade)
    }

    /// Record the composite entry that presents this volume
    pub fn set_prefix_entry(&self, entry: &Arc<dyn FsEntry>) {
        *self.prefix.write() = Some(Arc::downgrade(entry));
    }
}

impl fmt::Debug for VolumeInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("VolumeInfo")
            .field("label", &self.label)
            .field("volume_type", &self.volume_type)
            .field("has_display_root", &self.display_root.is_some())
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryList;
    use crate::types::RootType;

    #[test]
    fn test_prefix_entry_starts_unset() {
        let info = VolumeInfo::new(VolumeType::Downloads, "Downloads");
        assert!(info.prefix_entry().is_none());
    }

    #[test]
    fn test_prefix_entry_is_weak() {
        let info = VolumeInfo::new(VolumeType::Downloads, "Downloads");
        {
            let owner: Arc<dyn FsEntry> =
                Arc::new(EntryList::new("My files", RootType::MyFiles));
            info.set_prefix_entry(&owner);
            assert!(info.prefix_entry().is_some());
        }
        // Owner dropped; the back-reference must not keep it alive.
        assert!(info.prefix_entry().is_none());
    }
}

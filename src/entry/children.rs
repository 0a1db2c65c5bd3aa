/*!
 * Child List Helpers
 * Shared scans over heterogeneous child sequences
 */

use super::traits::FsEntry;
use crate::types::{RootType, VolumeType};
use crate::volume::VolumeInfo;
use std::sync::Arc;

pub(super) fn index_by_volume_info(
    children: &[Arc<dyn FsEntry>],
    info: &Arc<VolumeInfo>,
) -> Option<usize> {
    children.iter().position(|child| {
        child
            .volume_info()
            .is_some_and(|candidate| Arc::ptr_eq(&candidate, info))
    })
}

pub(super) fn index_by_volume_type(
    children: &[Arc<dyn FsEntry>],
    volume_type: VolumeType,
) -> Option<usize> {
    children.iter().position(|child| {
        child
            .volume_info()
            .is_some_and(|info| info.volume_type() == volume_type)
    })
}

/// Remove the first child matching `predicate`, preserving order
pub(super) fn remove_first(
    children: &mut Vec<Arc<dyn FsEntry>>,
    predicate: impl FnMut(&Arc<dyn FsEntry>) -> bool,
) -> bool {
    match children.iter().position(predicate) {
        Some(index) => {
            children.remove(index);
            true
        }
        None => false,
    }
}

pub(super) fn remove_by_volume_type(
    children: &mut Vec<Arc<dyn FsEntry>>,
    volume_type: VolumeType,
) -> bool {
    remove_first(children, |child| {
        child
            .volume_info()
            .is_some_and(|info| info.volume_type() == volume_type)
    })
}

pub(super) fn remove_by_root_type(
    children: &mut Vec<Arc<dyn FsEntry>>,
    root_type: RootType,
) -> bool {
    remove_first(children, |child| child.root_type() == Some(root_type))
}

/*!
 * Volume Entry
 * Directory node wrapping a real volume root plus injected virtual children
 */

use super::children;
use super::traits::{FsEntry, GetOptions};
use crate::backend::{FileSystemHandle, NativeEntry};
use crate::reader::{CombinedReader, DirReader, Page, StaticReader};
use crate::types::{EntryMetadata, RootType, VfsError, VfsResult, VolumeType};
use crate::volume::VolumeInfo;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Resolution state of the backend root
///
/// `Resolved` is write-once; `Failed` is terminal and never retried by
/// this layer.
#[derive(Clone)]
enum RootState {
    Unresolved,
    Resolving,
    Resolved(Arc<dyn NativeEntry>),
    Failed(VfsError),
}

impl RootState {
    const fn label(&self) -> &'static str {
        match self {
            RootState::Unresolved => "unresolved",
            RootState::Resolving => "resolving",
            RootState::Resolved(_) => "resolved",
            RootState::Failed(_) => "failed",
        }
    }
}

/// Directory node for one mounted volume
///
/// Wraps the volume's display root (possibly not yet resolved) and an
/// ordered list of extra virtual children layered over the native
/// children. While the root is unresolved, native-delegated accessors
/// report empty defaults instead of blocking or failing.
pub struct VolumeEntry {
    info: Arc<VolumeInfo>,
    root: RwLock<RootState>,
    resolve_gate: Mutex<()>,
    children: RwLock<Vec<Arc<dyn FsEntry>>>,
}

impl VolumeEntry {
    /// Wrap a volume descriptor
    ///
    /// A display root already present on the descriptor is taken eagerly.
    /// Otherwise, if the descriptor can resolve one, resolution starts in
    /// the background; this requires a running Tokio runtime.
    pub fn new(info: Arc<VolumeInfo>) -> Arc<Self> {
        let state = match info.display_root() {
            Some(root) => RootState::Resolved(root),
            None => RootState::Unresolved,
        };
        let needs_resolution =
            matches!(state, RootState::Unresolved) && info.resolver().is_some();
        let entry = Arc::new(Self {
            info,
            root: RwLock::new(state),
            resolve_gate: Mutex::new(()),
            children: RwLock::new(Vec::new()),
        });
        if needs_resolution {
            let background = Arc::clone(&entry);
            tokio::spawn(async move {
                // Outcome is cached on the entry; only explicit awaiters
                // observe the error.
                let _ = background.await_display_root().await;
            });
        }
        entry
    }

    pub fn volume_info(&self) -> &Arc<VolumeInfo> {
        &self.info
    }

    fn resolved_root(&self) -> Option<Arc<dyn NativeEntry>> {
        match &*self.root.read() {
            RootState::Resolved(root) => Some(Arc::clone(root)),
            _ => None,
        }
    }

    /// Resolved backend root, or `None` until resolution completes
    pub fn native_entry(&self) -> Option<Arc<dyn NativeEntry>> {
        self.resolved_root()
    }

    /// Wait for the backend root, driving resolution if needed
    ///
    /// Resolution runs at most once; its outcome (root or error) is
    /// cached for the lifetime of the entry.
    pub async fn await_display_root(&self) -> VfsResult<Arc<dyn NativeEntry>> {
        let _gate = self.resolve_gate.lock().await;
        match self.root.read().clone() {
            RootState::Resolved(root) => return Ok(root),
            RootState::Failed(err) => return Err(err),
            // The gate serializes resolution; anything else means it is
            // ours to run.
            RootState::Unresolved | RootState::Resolving => {}
        }
        let Some(resolver) = self.info.resolver() else {
            return Err(self.not_available());
        };
        *self.root.write() = RootState::Resolving;
        match resolver().await {
            Ok(root) => {
                debug!(volume = %self.info.label(), "display root resolved");
                *self.root.write() = RootState::Resolved(Arc::clone(&root));
                Ok(root)
            }
            Err(err) => {
                warn!(volume = %self.info.label(), error = %err, "display root resolution failed");
                *self.root.write() = RootState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Full path of the backend root; empty while unresolved
    pub fn full_path(&self) -> String {
        self.resolved_root()
            .map(|root| root.full_path())
            .unwrap_or_default()
    }

    /// Filesystem handle of the backend root; `None` while unresolved
    pub fn filesystem(&self) -> Option<Arc<FileSystemHandle>> {
        self.resolved_root().map(|root| root.filesystem())
    }

    /// Extra virtual children injected over the native listing
    pub fn ui_children(&self) -> Page {
        self.children.read().clone()
    }

    /// Append an extra child
    ///
    /// A volume-backed child records this entry as the prefix owner of
    /// its volume descriptor.
    pub fn add_entry(self: &Arc<Self>, entry: Arc<dyn FsEntry>) {
        if let Some(info) = entry.volume_info() {
            let owner: Arc<dyn FsEntry> = Arc::clone(self) as Arc<dyn FsEntry>;
            info.set_prefix_entry(&owner);
        }
        self.children.write().push(entry);
    }

    /// Index of the first extra child backed by the given descriptor
    pub fn find_index_by_volume_info(&self, info: &Arc<VolumeInfo>) -> Option<usize> {
        children::index_by_volume_info(&self.children.read(), info)
    }

    /// Index of the first extra child whose volume has the given type
    pub fn find_index_by_volume_type(&self, volume_type: VolumeType) -> Option<usize> {
        children::index_by_volume_type(&self.children.read(), volume_type)
    }

    /// Remove the first extra child whose volume has the given type
    pub fn remove_by_volume_type(&self, volume_type: VolumeType) -> bool {
        children::remove_by_volume_type(&mut self.children.write(), volume_type)
    }

    /// Remove the first extra child with the given root type
    pub fn remove_by_root_type(&self, root_type: RootType) -> bool {
        children::remove_by_root_type(&mut self.children.write(), root_type)
    }

    /// Delegate a file lookup to the backend root
    ///
    /// Fails fast with `NotAvailable` while the root is unresolved rather
    /// than queueing the call.
    pub async fn get_file(
        &self,
        path: &str,
        options: GetOptions,
    ) -> VfsResult<Arc<dyn NativeEntry>> {
        match self.resolved_root() {
            Some(root) => root.get_file(path, options).await,
            None => Err(self.not_available()),
        }
    }

    /// Delegate a directory lookup to the backend root
    ///
    /// Same fail-fast contract as `get_file`.
    pub async fn get_directory(
        &self,
        path: &str,
        options: GetOptions,
    ) -> VfsResult<Arc<dyn NativeEntry>> {
        match self.resolved_root() {
            Some(root) => root.get_directory(path, options).await,
            None => Err(self.not_available()),
        }
    }

    fn not_available(&self) -> VfsError {
        VfsError::NotAvailable(format!(
            "volume '{}' root is not resolved",
            self.info.label()
        ))
    }
}

#[async_trait]
impl FsEntry for VolumeEntry {
    fn name(&self) -> String {
        self.info.label().to_string()
    }

    fn is_directory(&self) -> bool {
        true
    }

    fn is_file(&self) -> bool {
        false
    }

    /// Backend root URL once resolved, empty until then
    fn to_url(&self) -> String {
        self.resolved_root()
            .map(|root| root.to_url())
            .unwrap_or_default()
    }

    fn root_type(&self) -> Option<RootType> {
        Some(self.info.volume_type().into())
    }

    fn volume_info(&self) -> Option<Arc<VolumeInfo>> {
        Some(Arc::clone(&self.info))
    }

    fn is_native_type(&self) -> bool {
        true
    }

    fn native_entry(&self) -> Option<Arc<dyn NativeEntry>> {
        self.resolved_root()
    }

    fn icon_name(&self) -> String {
        self.info.volume_type().to_string()
    }

    fn create_reader(&self) -> Box<dyn DirReader> {
        let injected = StaticReader::new(self.ui_children());
        match self.resolved_root() {
            Some(root) => Box::new(CombinedReader::new(vec![
                root.create_reader(),
                Box::new(injected),
            ])),
            // Until the root resolves the native portion contributes
            // nothing.
            None => Box::new(injected),
        }
    }

    async fn parent(self: Arc<Self>) -> VfsResult<Arc<dyn FsEntry>> {
        // Roots are their own parent, per the web filesystem contract.
        Ok(self)
    }

    async fn metadata(&self) -> VfsResult<EntryMetadata> {
        Ok(EntryMetadata::modified_now())
    }
}

impl fmt::Debug for VolumeEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("VolumeEntry")
            .field("label", &self.info.label())
            .field("volume_type", &self.info.volume_type())
            .field("root", &self.root.read().label())
            .field("children", &self.children.read().len())
            .finish()
    }
}

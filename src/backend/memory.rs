/*!
 * In-Memory Backend
 * Native entries backed by an in-memory directory tree
 */

use super::traits::{FileSystemHandle, NativeEntry};
use crate::entry::{FsEntry, GetOptions};
use crate::reader::{DirReader, Page, StaticReader};
use crate::types::{EntryMetadata, FileType, VfsError, VfsResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use std::time::SystemTime;

/// In-memory filesystem with a single directory tree
///
/// Stands in for a real mounted volume: small virtual volumes in
/// production, volume fixtures in tests.
pub struct MemoryFileSystem {
    handle: Arc<FileSystemHandle>,
    root: Arc<MemoryEntry>,
}

impl MemoryFileSystem {
    pub fn new(name: impl Into<String>) -> Self {
        let handle = Arc::new(FileSystemHandle::new(name));
        let root = MemoryEntry::alloc(
            Arc::clone(&handle),
            "/".to_string(),
            FileType::Directory,
            Weak::new(),
        );
        Self { handle, root }
    }

    pub fn handle(&self) -> &Arc<FileSystemHandle> {
        &self.handle
    }

    pub fn root(&self) -> &Arc<MemoryEntry> {
        &self.root
    }

    /// Build a tree from absolute paths; a trailing slash marks a directory
    ///
    /// Missing intermediate directories are created on the way down.
    pub fn populate(&self, paths: &[&str]) -> VfsResult<()> {
        for path in paths {
            self.root.make_path(path)?;
        }
        Ok(())
    }
}

/// One node of an in-memory tree
///
/// Implements both the backend interface and the UI entry capability set,
/// so native children can appear directly in reader pages.
pub struct MemoryEntry {
    fs: Arc<FileSystemHandle>,
    full_path: String,
    file_type: FileType,
    modified: SystemTime,
    parent: Weak<MemoryEntry>,
    self_ref: Weak<MemoryEntry>,
    children: RwLock<Vec<Arc<MemoryEntry>>>,
}

impl MemoryEntry {
    fn alloc(
        fs: Arc<FileSystemHandle>,
        full_path: String,
        file_type: FileType,
        parent: Weak<MemoryEntry>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|me| Self {
            fs,
            full_path,
            file_type,
            modified: SystemTime::now(),
            parent,
            self_ref: me.clone(),
            children: RwLock::new(Vec::new()),
        })
    }

    /// Last path component; empty for the filesystem root
    pub fn name(&self) -> &str {
        self.full_path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("")
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn filesystem(&self) -> &Arc<FileSystemHandle> {
        &self.fs
    }

    pub fn to_url(&self) -> String {
        format!("{}{}", self.fs.root_url, self.full_path.trim_start_matches('/'))
    }

    /// Snapshot of the direct children, in insertion order
    pub fn children(&self) -> Vec<Arc<MemoryEntry>> {
        self.children.read().clone()
    }

    fn self_arc(&self) -> VfsResult<Arc<MemoryEntry>> {
        self.self_ref
            .upgrade()
            .ok_or_else(|| VfsError::NotFound(self.full_path.clone()))
    }

    fn child(&self, name: &str) -> Option<Arc<MemoryEntry>> {
        self.children.read().iter().find(|c| c.name() == name).cloned()
    }

    fn root_from(mut node: Arc<MemoryEntry>) -> Arc<MemoryEntry> {
        loop {
            match node.parent.upgrade() {
                Some(parent) => node = parent,
                None => return node,
            }
        }
    }

    fn insert_child(parent: &Arc<MemoryEntry>, name: &str, file_type: FileType) -> Arc<MemoryEntry> {
        let full_path = if parent.full_path == "/" {
            format!("/{name}")
        } else {
            format!("{}/{}", parent.full_path, name)
        };
        let child = MemoryEntry::alloc(
            Arc::clone(&parent.fs),
            full_path,
            file_type,
            Arc::downgrade(parent),
        );
        parent.children.write().push(Arc::clone(&child));
        child
    }

    fn children_reader(&self) -> Box<dyn DirReader> {
        let page: Page = self
            .children
            .read()
            .iter()
            .map(|child| Arc::clone(child) as Arc<dyn FsEntry>)
            .collect();
        Box::new(StaticReader::new(page))
    }

    pub(super) fn make_path(self: &Arc<Self>, path: &str) -> VfsResult<()> {
        if !path.starts_with('/') {
            return Err(VfsError::InvalidPath(format!(
                "populate paths must be absolute: '{path}'"
            )));
        }
        let is_dir = path.ends_with('/');
        let components: Vec<&str> = path.split('/').filter(|c| !c.is_empty()).collect();
        let mut node = Arc::clone(self);
        for (index, component) in components.iter().enumerate() {
            let last = index + 1 == components.len();
            let want = if last && !is_dir {
                FileType::File
            } else {
                FileType::Directory
            };
            node = match node.child(component) {
                Some(existing) => {
                    if existing.file_type != want {
                        return Err(VfsError::AlreadyExists(existing.full_path.clone()));
                    }
                    existing
                }
                None => Self::insert_child(&node, component, want),
            };
        }
        Ok(())
    }

    async fn lookup(
        &self,
        path: &str,
        options: GetOptions,
        want: FileType,
    ) -> VfsResult<Arc<dyn NativeEntry>> {
        tokio::task::yield_now().await;
        let start = if path.starts_with('/') {
            Self::root_from(self.self_arc()?)
        } else {
            self.self_arc()?
        };
        let mut components: Vec<&str> = path
            .split('/')
            .filter(|c| !c.is_empty() && *c != ".")
            .collect();
        let Some(target) = components.pop() else {
            return Err(VfsError::InvalidPath(format!("empty lookup path: '{path}'")));
        };

        let mut node = start;
        for component in components {
            let next = node
                .child(component)
                .ok_or_else(|| VfsError::NotFound(format!("{path}: missing '{component}'")))?;
            if !next.file_type.is_dir() {
                return Err(VfsError::NotADirectory(next.full_path.clone()));
            }
            node = next;
        }
        if !node.file_type.is_dir() {
            return Err(VfsError::NotADirectory(node.full_path.clone()));
        }

        match node.child(target) {
            Some(found) => {
                if options.create && options.exclusive {
                    return Err(VfsError::AlreadyExists(found.full_path.clone()));
                }
                match (want, found.file_type) {
                    (FileType::File, FileType::Directory) => {
                        Err(VfsError::IsADirectory(found.full_path.clone()))
                    }
                    (FileType::Directory, FileType::File) => {
                        Err(VfsError::NotADirectory(found.full_path.clone()))
                    }
                    _ => Ok(found as Arc<dyn NativeEntry>),
                }
            }
            None if options.create => Ok(Self::insert_child(&node, target, want) as _),
            None => Err(VfsError::NotFound(path.to_string())),
        }
    }
}

#[async_trait]
impl NativeEntry for MemoryEntry {
    fn name(&self) -> String {
        MemoryEntry::name(self).to_string()
    }

    fn full_path(&self) -> String {
        self.full_path.clone()
    }

    fn is_directory(&self) -> bool {
        self.file_type.is_dir()
    }

    fn to_url(&self) -> String {
        MemoryEntry::to_url(self)
    }

    fn filesystem(&self) -> Arc<FileSystemHandle> {
        Arc::clone(&self.fs)
    }

    fn create_reader(&self) -> Box<dyn DirReader> {
        self.children_reader()
    }

    async fn parent(self: Arc<Self>) -> VfsResult<Arc<dyn NativeEntry>> {
        tokio::task::yield_now().await;
        match self.parent.upgrade() {
            Some(parent) => Ok(parent),
            // The filesystem root is its own parent.
            None => Ok(self),
        }
    }

    async fn metadata(&self) -> VfsResult<EntryMetadata> {
        tokio::task::yield_now().await;
        Ok(EntryMetadata::modified_at(self.modified))
    }

    async fn get_file(
        &self,
        path: &str,
        options: GetOptions,
    ) -> VfsResult<Arc<dyn NativeEntry>> {
        self.lookup(path, options, FileType::File).await
    }

    async fn get_directory(
        &self,
        path: &str,
        options: GetOptions,
    ) -> VfsResult<Arc<dyn NativeEntry>> {
        self.lookup(path, options, FileType::Directory).await
    }
}

#[async_trait]
impl FsEntry for MemoryEntry {
    fn name(&self) -> String {
        MemoryEntry::name(self).to_string()
    }

    fn is_directory(&self) -> bool {
        self.file_type.is_dir()
    }

    fn is_file(&self) -> bool {
        self.file_type.is_file()
    }

    fn to_url(&self) -> String {
        MemoryEntry::to_url(self)
    }

    fn is_native_type(&self) -> bool {
        true
    }

    fn native_entry(&self) -> Option<Arc<dyn NativeEntry>> {
        self.self_ref
            .upgrade()
            .map(|entry| entry as Arc<dyn NativeEntry>)
    }

    fn create_reader(&self) -> Box<dyn DirReader> {
        self.children_reader()
    }

    async fn parent(self: Arc<Self>) -> VfsResult<Arc<dyn FsEntry>> {
        tokio::task::yield_now().await;
        match self.parent.upgrade() {
            Some(parent) => Ok(parent),
            None => Ok(self),
        }
    }

    async fn metadata(&self) -> VfsResult<EntryMetadata> {
        tokio::task::yield_now().await;
        Ok(EntryMetadata::modified_at(self.modified))
    }
}

/*!
 * File Manager VFS Library
 * Composite directory entries and paginated readers for the file-manager UI
 */

pub mod backend;
pub mod core;
pub mod entry;
pub mod reader;
pub mod types;
pub mod volume;

// Re-exports
pub use backend::{FileSystemHandle, MemoryEntry, MemoryFileSystem, NativeEntry};
pub use entry::{EntryList, FakeEntry, FsEntry, GetOptions, VolumeEntry};
pub use reader::{into_stream, read_all, CombinedReader, DirReader, Page, StaticReader};
pub use types::{
    EntryMetadata, FileType, RootType, SourceRestriction, VfsError, VfsResult, VolumeType,
};
pub use volume::{RootResolver, VolumeInfo};

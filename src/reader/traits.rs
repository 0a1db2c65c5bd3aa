/*!
 * Reader Traits
 * Core directory-listing abstraction
 */

use crate::entry::FsEntry;
use crate::types::VfsResult;
use async_trait::async_trait;
use std::sync::Arc;

/// One page of a directory listing
///
/// An empty page signals end-of-listing.
pub type Page = Vec<Arc<dyn FsEntry>>;

/// Paginated enumerator over an entry's children
///
/// A reader is bound to its parent's children at creation time and owns a
/// private cursor; two readers created from the same entry operate
/// independently. Callers drive pagination by calling `read_next_page`
/// until an empty page comes back. The `&mut self` receiver makes
/// overlapping calls on one reader impossible.
#[async_trait]
pub trait DirReader: Send {
    /// Read the next page of the listing
    ///
    /// An empty page means the listing is exhausted and stays exhausted.
    /// An error terminates the current attempt without consuming items;
    /// whether to retry is caller policy.
    async fn read_next_page(&mut self) -> VfsResult<Page>;
}

/*!
 * Reader Stream Adapter
 * Bridges the paginated reader protocol to futures::Stream
 */

use super::traits::{DirReader, Page};
use crate::entry::FsEntry;
use crate::types::VfsResult;
use futures::Stream;
use std::sync::Arc;

/// Flatten a reader's pages into a stream of entries
///
/// The stream ends on the first empty page; an error is yielded once and
/// then the stream ends, since an error terminates the listing attempt.
pub fn into_stream(
    mut reader: Box<dyn DirReader>,
) -> impl Stream<Item = VfsResult<Arc<dyn FsEntry>>> {
    async_stream::stream! {
        loop {
            match reader.read_next_page().await {
                Ok(page) => {
                    if page.is_empty() {
                        break;
                    }
                    for entry in page {
                        yield Ok(entry);
                    }
                }
                Err(e) => {
                    yield Err(e);
                    break;
                }
            }
        }
    }
}

/// Drain a reader to completion, collecting every page in order
pub async fn read_all(reader: &mut dyn DirReader) -> VfsResult<Page> {
    let mut entries = Page::new();
    loop {
        let page = reader.read_next_page().await?;
        if page.is_empty() {
            return Ok(entries);
        }
        entries.extend(page);
    }
}

/*!
 * Combined Reader
 * Sequentially drains an ordered list of inner readers
 */

use super::traits::{DirReader, Page};
use crate::types::VfsResult;
use async_trait::async_trait;

/// Reader that concatenates the output of several inner readers
///
/// The cursor advances past an inner reader only once it reports
/// exhaustion, so an exhausted reader is never revisited. An error from
/// the current inner reader is forwarded unchanged and does not advance
/// the cursor; a retry hits the same reader again.
pub struct CombinedReader {
    readers: Vec<Box<dyn DirReader>>,
    current: usize,
}

impl CombinedReader {
    pub fn new(readers: Vec<Box<dyn DirReader>>) -> Self {
        Self {
            readers,
            current: 0,
        }
    }
}

#[async_trait]
impl DirReader for CombinedReader {
    async fn read_next_page(&mut self) -> VfsResult<Page> {
        while let Some(reader) = self.readers.get_mut(self.current) {
            let page = reader.read_next_page().await?;
            if !page.is_empty() {
                return Ok(page);
            }
            // Current inner reader exhausted, ask the next one.
            self.current += 1;
        }
        Ok(Page::new())
    }
}

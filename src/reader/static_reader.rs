/*!
 * Static Reader
 * One-shot reader over a fixed in-memory listing
 */

use super::traits::{DirReader, Page};
use crate::types::VfsResult;
use async_trait::async_trait;

/// Reader that emits a fixed listing as a single page
///
/// The first call delivers the wrapped items; every later call delivers an
/// empty page. Completion is deferred by one cooperative yield so the
/// asynchronous contract holds uniformly even though no I/O happens.
pub struct StaticReader {
    items: Option<Page>,
}

impl StaticReader {
    pub fn new(items: Page) -> Self {
        Self { items: Some(items) }
    }

    /// Reader over an empty listing
    pub fn empty() -> Self {
        Self::new(Page::new())
    }
}

#[async_trait]
impl DirReader for StaticReader {
    async fn read_next_page(&mut self) -> VfsResult<Page> {
        tokio::task::yield_now().await;
        Ok(self.items.take().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{FakeEntry, FsEntry};
    use crate::types::RootType;
    use std::sync::Arc;

    fn item(label: &str) -> Arc<dyn FsEntry> {
        Arc::new(FakeEntry::new(label, RootType::Crostini))
    }

    #[tokio::test]
    async fn test_single_page_then_exhausted() {
        let mut reader = StaticReader::new(vec![item("file1"), item("file2")]);

        let page = reader.read_next_page().await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].name(), "file1");
        assert_eq!(page[1].name(), "file2");

        assert!(reader.read_next_page().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_exhaustion_is_idempotent() {
        let mut reader = StaticReader::new(vec![item("file1")]);
        let _ = reader.read_next_page().await.unwrap();

        for _ in 0..3 {
            assert!(reader.read_next_page().await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_empty_reader() {
        let mut reader = StaticReader::empty();
        assert!(reader.read_next_page().await.unwrap().is_empty());
        assert!(reader.read_next_page().await.unwrap().is_empty());
    }
}

/*!
 * Reader Protocol Tests
 * Tests for the paginated directory-reading contract
 */

use async_trait::async_trait;
use fileman_vfs::{
    into_stream, read_all, CombinedReader, DirReader, FakeEntry, FsEntry, Page, RootType,
    StaticReader, VfsError, VfsResult,
};
use futures::StreamExt;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::Arc;

fn item(label: &str) -> Arc<dyn FsEntry> {
    Arc::new(FakeEntry::new(label, RootType::Crostini))
}

fn items(labels: &[&str]) -> Page {
    labels.iter().map(|label| item(label)).collect()
}

/// Reader that fails on every call with the same error
struct AlwaysFails(VfsError);

#[async_trait]
impl DirReader for AlwaysFails {
    async fn read_next_page(&mut self) -> VfsResult<Page> {
        Err(self.0.clone())
    }
}

#[tokio::test]
async fn test_static_reader_protocol() {
    let mut reader = StaticReader::new(items(&["file1", "file2"]));

    // Exactly one non-empty page equal to the full sequence.
    let page = reader.read_next_page().await.unwrap();
    let names: Vec<String> = page.iter().map(|e| e.name()).collect();
    assert_eq!(names, ["file1", "file2"]);

    // Then idempotent exhaustion.
    assert!(reader.read_next_page().await.unwrap().is_empty());
    assert!(reader.read_next_page().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_readers_from_same_items_are_independent() {
    let page = items(&["file1"]);
    let mut first = StaticReader::new(page.clone());
    let mut second = StaticReader::new(page);

    assert_eq!(first.read_next_page().await.unwrap().len(), 1);
    assert!(first.read_next_page().await.unwrap().is_empty());
    // The second reader's cursor is untouched by draining the first.
    assert_eq!(second.read_next_page().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_combined_reader_concatenates_in_order() {
    let mut reader = CombinedReader::new(vec![
        Box::new(StaticReader::new(items(&["file1"]))),
        Box::new(StaticReader::new(items(&["file2"]))),
    ]);

    let entries = read_all(&mut reader).await.unwrap();
    let names: Vec<String> = entries.iter().map(|e| e.name()).collect();
    assert_eq!(names, ["file1", "file2"]);

    // Exhaustion is reported only after the last inner reader.
    assert!(reader.read_next_page().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_combined_reader_forwards_error_unchanged() {
    let expected = VfsError::IoError("a fake error".to_string());
    let mut reader = CombinedReader::new(vec![
        Box::new(StaticReader::new(items(&["a"]))),
        Box::new(AlwaysFails(expected.clone())),
    ]);

    // First call returns the leading items untouched.
    let page = reader.read_next_page().await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name(), "a");

    // Second call hits the failing reader and forwards its error.
    let err = reader.read_next_page().await.unwrap_err();
    assert_eq!(err, expected);
}

#[tokio::test]
async fn test_combined_reader_does_not_emit_past_failure() {
    let mut reader = CombinedReader::new(vec![
        Box::new(AlwaysFails(VfsError::IoError("boom".to_string()))),
        Box::new(StaticReader::new(items(&["never"]))),
    ]);

    // The reader after the failing one is not reached.
    assert!(reader.read_next_page().await.is_err());
    assert!(reader.read_next_page().await.is_err());
}

#[tokio::test]
async fn test_stream_adapter_ends_on_error() {
    let reader = CombinedReader::new(vec![
        Box::new(StaticReader::new(items(&["a", "b"]))),
        Box::new(AlwaysFails(VfsError::IoError("boom".to_string()))),
    ]);

    let results: Vec<VfsResult<Arc<dyn FsEntry>>> =
        into_stream(Box::new(reader)).collect().await;
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().name(), "a");
    assert_eq!(results[1].as_ref().unwrap().name(), "b");
    assert!(results[2].is_err());
}

proptest! {
    /// Splitting a sequence across inner readers never changes the
    /// concatenated output.
    #[test]
    fn prop_combined_reader_preserves_concatenation(
        pages in prop::collection::vec(
            prop::collection::vec("[a-z]{1,8}", 0..4),
            0..5,
        )
    ) {
        let expected: Vec<String> = pages.iter().flatten().cloned().collect();

        let drained = tokio_test::block_on(async {
            let readers: Vec<Box<dyn DirReader>> = pages
                .iter()
                .map(|labels| {
                    let page: Page = labels
                        .iter()
                        .map(|label| item(label))
                        .collect();
                    Box::new(StaticReader::new(page)) as Box<dyn DirReader>
                })
                .collect();
            let mut combined = CombinedReader::new(readers);
            read_all(&mut combined).await.unwrap()
        });

        let names: Vec<String> = drained.iter().map(|e| e.name()).collect();
        prop_assert_eq!(names, expected);
    }
}

/*!
 * Entry Composition Tests
 * End-to-end tests for composite entries over mixed child sources
 */

use fileman_vfs::{
    read_all, DirReader, EntryList, FakeEntry, FsEntry, GetOptions, MemoryFileSystem,
    NativeEntry, RootResolver, RootType, VfsError, VolumeEntry, VolumeInfo, VolumeType,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

fn fake_volume_entry(volume_type: VolumeType) -> Arc<VolumeEntry> {
    let fs = MemoryFileSystem::new("fake-fs");
    let info = Arc::new(
        VolumeInfo::new(volume_type, "Fake Filesystem")
            .with_display_root(Arc::clone(fs.root()) as Arc<dyn NativeEntry>),
    );
    VolumeEntry::new(info)
}

#[tokio::test]
async fn test_entry_list_two_children_reader_scenario() {
    let list = Arc::new(EntryList::new("My files", RootType::MyFiles));
    list.add_entry(Arc::new(FakeEntry::new("Linux files", RootType::Crostini)));
    list.add_entry(Arc::new(FakeEntry::new("Play files", RootType::AndroidFiles)));

    let mut reader = list.create_reader();

    // First page carries both children, second page signals exhaustion.
    let page = reader.read_next_page().await.unwrap();
    assert_eq!(page.len(), 2);
    assert!(reader.read_next_page().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_entry_list_child_management() {
    let list = Arc::new(EntryList::new("My files", RootType::MyFiles));
    let downloads = fake_volume_entry(VolumeType::Downloads);
    let crostini = fake_volume_entry(VolumeType::Crostini);

    list.add_entry(Arc::clone(&downloads) as Arc<dyn FsEntry>);
    list.add_entry(Arc::clone(&crostini) as Arc<dyn FsEntry>);

    assert_eq!(
        list.find_index_by_volume_info(downloads.volume_info()),
        Some(0)
    );
    assert_eq!(
        list.find_index_by_volume_info(crostini.volume_info()),
        Some(1)
    );
    assert_eq!(list.find_index_by_volume_type(VolumeType::Crostini), Some(1));

    assert!(list.remove_by_volume_type(VolumeType::Crostini));
    assert_eq!(list.children().len(), 1);
    assert!(!list.remove_by_volume_type(VolumeType::Crostini));

    list.add_entry(Arc::new(FakeEntry::new("Linux files", RootType::Crostini)));
    assert!(list.remove_by_root_type(RootType::Crostini));
    assert_eq!(list.children().len(), 1);
}

#[tokio::test]
async fn test_add_entry_sets_prefix_owner() {
    let volume = fake_volume_entry(VolumeType::Downloads);
    let list = Arc::new(EntryList::new("My files", RootType::MyFiles));

    assert!(volume.volume_info().prefix_entry().is_none());
    list.add_entry(Arc::clone(&volume) as Arc<dyn FsEntry>);

    // The list presenting the volume is recorded on its descriptor.
    let prefix = volume.volume_info().prefix_entry().unwrap();
    assert!(Arc::ptr_eq(&(list as Arc<dyn FsEntry>), &prefix));
}

#[tokio::test]
async fn test_volume_entry_drains_native_then_injected() {
    let fs = MemoryFileSystem::new("fake-fs");
    fs.populate(&["/file1"]).unwrap();
    let info = Arc::new(
        VolumeInfo::new(VolumeType::Downloads, "Fake Filesystem")
            .with_display_root(Arc::clone(fs.root()) as Arc<dyn NativeEntry>),
    );
    let volume = VolumeEntry::new(info);
    volume.add_entry(Arc::new(FakeEntry::new("Linux files", RootType::Crostini)));
    volume.add_entry(Arc::new(FakeEntry::new("Play files", RootType::AndroidFiles)));

    let entries = read_all(&mut *volume.create_reader()).await.unwrap();
    let names: Vec<String> = entries.iter().map(|e| e.name()).collect();
    assert_eq!(names, ["file1", "Linux files", "Play files"]);
}

#[tokio::test]
async fn test_background_resolution_completes_without_awaiting() {
    let fs = MemoryFileSystem::new("fake-fs");
    let root = Arc::clone(fs.root()) as Arc<dyn NativeEntry>;
    let resolver_root = Arc::clone(&root);
    let resolver: RootResolver = Box::new(move || {
        let root = Arc::clone(&resolver_root);
        Box::pin(async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Ok(root)
        })
    });
    let info = Arc::new(
        VolumeInfo::new(VolumeType::Downloads, "Fake Filesystem").with_resolver(resolver),
    );
    let volume = VolumeEntry::new(info);
    assert!(volume.native_entry().is_none());

    // The constructor kicked off resolution; give it time to finish.
    tokio::time::sleep(Duration::from_millis(50)).await;
    let resolved = volume.native_entry().expect("root should have resolved");
    assert!(Arc::ptr_eq(&resolved, &root));
    assert_eq!(volume.to_url(), "filesystem:fake-fs/");
}

#[tokio::test]
async fn test_unresolved_volume_serves_injected_children_only() {
    let info = Arc::new(VolumeInfo::new(VolumeType::Downloads, "Fake Filesystem"));
    let volume = VolumeEntry::new(info);
    volume.add_entry(Arc::new(FakeEntry::new("Linux files", RootType::Crostini)));

    let entries = read_all(&mut *volume.create_reader()).await.unwrap();
    let names: Vec<String> = entries.iter().map(|e| e.name()).collect();
    assert_eq!(names, ["Linux files"]);

    // Native-delegated lookups fail fast instead of hanging.
    let err = volume
        .get_directory("/anything", GetOptions::existing())
        .await
        .unwrap_err();
    assert!(matches!(err, VfsError::NotAvailable(_)));
}

#[tokio::test]
async fn test_heterogeneous_tree_presents_uniform_interface() {
    let my_files = Arc::new(EntryList::new("My files", RootType::MyFiles));
    my_files.add_entry(fake_volume_entry(VolumeType::Downloads));
    my_files.add_entry(Arc::new(FakeEntry::new("Linux files", RootType::Crostini)));

    for child in my_files.children() {
        // Every variant answers the directory-shaped capability set.
        assert!(child.is_directory());
        assert!(!child.is_file());
        assert!(!child.to_url().is_empty());
        let metadata = child.metadata().await.unwrap();
        // Only the placeholder returns an empty record.
        assert_eq!(metadata.is_empty(), !child.is_native_type());
    }
}

#[tokio::test]
async fn test_entry_list_parent_and_metadata_contract() {
    let list = Arc::new(EntryList::new("My files", RootType::MyFiles));

    let parent = Arc::clone(&list).parent().await.unwrap();
    assert!(Arc::ptr_eq(&(Arc::clone(&list) as Arc<dyn FsEntry>), &parent));

    let metadata = list.metadata().await.unwrap();
    assert!(metadata.modification_time.is_some());
}

/*!
 * Composite Entries
 * Entry variants presented to the directory tree
 */

mod children;
mod entry_list;
mod fake;
mod traits;
mod volume_entry;

pub use entry_list::EntryList;
pub use fake::FakeEntry;
pub use traits::{FsEntry, GetOptions};
pub use volume_entry::VolumeEntry;

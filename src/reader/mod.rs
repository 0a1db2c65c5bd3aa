/*!
 * Directory Readers
 * Paginated enumeration of entry children
 */

mod combined;
mod static_reader;
mod stream;
mod traits;

pub use combined::CombinedReader;
pub use static_reader::StaticReader;
pub use stream::{into_stream, read_all};
pub use traits::{DirReader, Page};

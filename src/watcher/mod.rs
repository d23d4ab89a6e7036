pub mod inotify;
pub mod record;

use std::future::Future;
use std::io;

pub use self::inotify::InotifyWatch;
pub use record::RawEventRecord;

/// A stream of inotify records, delivered one read cycle at a time.
pub trait EventSource {
    /// Waits for the next read and returns every record it produced, in
    /// arrival order.
    fn next_batch(&mut self) -> impl Future<Output = io::Result<Vec<RawEventRecord>>>;
}

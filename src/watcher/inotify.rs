use crate::error::{Result, WatchError};
use crate::watcher::record::{watched, RawEventRecord};
use crate::watcher::EventSource;
use futures_util::{FutureExt, StreamExt};
use inotify::{EventStream, Inotify};
use std::io;
use std::path::Path;
use tracing::debug;

/// An inotify instance watching exactly one path.
///
/// Dropping it closes the instance, which also removes the watch.
pub struct InotifyWatch {
    stream: EventStream<Vec<u8>>,
}

impl InotifyWatch {
    /// Must be called from within a tokio runtime.
    pub fn open(path: &Path, buffer_size: usize) -> Result<Self> {
        let inotify = Inotify::init().map_err(WatchError::WatchCreate)?;
        debug!("inotify instance created");

        let wd = inotify
            .watches()
            .add(path, watched())
            .map_err(|source| WatchError::WatchRegister {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(wd = ?wd, path = %path.display(), "watch registered");

        let stream = inotify
            .into_event_stream(vec![0u8; buffer_size])
            .map_err(WatchError::WatchCreate)?;

        Ok(Self { stream })
    }
}

impl EventSource for InotifyWatch {
    async fn next_batch(&mut self) -> io::Result<Vec<RawEventRecord>> {
        let first = match self.stream.next().await {
            Some(event) => event?,
            None => return Err(io::ErrorKind::UnexpectedEof.into()),
        };

        // Take whatever the kernel already has queued without blocking again.
        let mut batch = vec![RawEventRecord::from(first)];
        while let Some(Some(event)) = self.stream.next().now_or_never() {
            batch.push(event?.into());
        }

        Ok(batch)
    }
}

impl Drop for InotifyWatch {
    fn drop(&mut self) {
        debug!("inotify instance released");
    }
}

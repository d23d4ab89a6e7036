use crate::config::Config;
use crate::error::{Result, WatchError};
use crate::notifier::{DesktopNotifier, Notification, NotificationSink};
use crate::target::WatchTarget;
use crate::watcher::{EventSource, InotifyWatch, RawEventRecord};
use inotify::EventMask;
use std::future::Future;
use std::io::{self, Write};
use tracing::{debug, info};

/// Checked in order; every matching flag yields its own notification.
const MESSAGES: [(EventMask, &str); 6] = [
    (EventMask::CREATE, "File created"),
    (EventMask::DELETE, "File deleted"),
    (EventMask::ACCESS, "File accessed"),
    (EventMask::CLOSE_WRITE, "File closed after being written to"),
    (EventMask::MODIFY, "File modified"),
    (EventMask::MOVE_SELF, "File moved"),
];

pub fn messages_for(mask: EventMask) -> impl Iterator<Item = &'static str> {
    MESSAGES
        .into_iter()
        .filter(move |(flag, _)| mask.contains(*flag))
        .map(|(_, message)| message)
}

/// Acquires both handles, then watches until `shutdown` resolves or a
/// fatal error occurs. The handles are released on return either way.
pub async fn start(
    target: &WatchTarget,
    config: &Config,
    shutdown: impl Future<Output = ()>,
) -> Result<()> {
    let mut notifier = DesktopNotifier::init(&config.notification)?;

    let mut watch = InotifyWatch::open(target.path(), config.watch.buffer_size)?;
    info!(path = %target.path().display(), "watching");

    run(
        target,
        &config.notification.icon,
        &mut watch,
        &mut notifier,
        &mut io::stdout(),
        shutdown,
    )
    .await
}

/// One status line goes to `out` before every read.
pub async fn run<S, N, W>(
    target: &WatchTarget,
    icon: &str,
    source: &mut S,
    sink: &mut N,
    out: &mut W,
    shutdown: impl Future<Output = ()>,
) -> Result<()>
where
    S: EventSource,
    N: NotificationSink,
    W: Write,
{
    tokio::pin!(shutdown);

    loop {
        writeln!(out, "Watching file for events...").map_err(WatchError::Output)?;
        out.flush().map_err(WatchError::Output)?;

        let records = tokio::select! {
            _ = &mut shutdown => {
                info!("shutdown requested, releasing handles");
                return Ok(());
            }
            read = source.next_batch() => read.map_err(WatchError::Read)?,
        };

        let attempted = dispatch(&records, target.title(), icon, sink);
        debug!(records = records.len(), notifications = attempted, "read cycle complete");
    }
}

/// Shows one notification per recognised flag of every record.
///
/// Display failures are reported and skipped. Returns how many
/// notifications were attempted.
pub fn dispatch<N: NotificationSink>(
    records: &[RawEventRecord],
    title: &str,
    icon: &str,
    sink: &mut N,
) -> usize {
    let mut attempted = 0;

    for record in records {
        debug!(mask = ?record.mask, cookie = record.cookie, name = ?record.name, "record");

        for body in messages_for(record.mask) {
            attempted += 1;
            let notification = Notification { title, body, icon };
            if let Err(e) = sink.show(&notification) {
                eprintln!("{}", e);
            }
        }
    }

    attempted
}

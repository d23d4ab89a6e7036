//! Decoded inotify records and the fixed subscription.
//!
//! The kernel hands back a buffer of variable-length `struct inotify_event`
//! records; `inotify::Events` walks it using each record's declared name
//! length, and every decoded event is copied into a [`RawEventRecord`] so it
//! outlives the buffer it came from.

use inotify::{Event, EventMask, WatchMask};
use std::ffi::OsString;

/// Size of `struct inotify_event` without its trailing name.
const HEADER_SIZE: usize = 16;

const NAME_MAX: usize = 255;

/// Smallest read buffer the kernel will accept for an arbitrary record.
pub const MIN_BUFFER_SIZE: usize = HEADER_SIZE + NAME_MAX + 1;

/// Subscription passed to the watch registration.
pub fn watched() -> WatchMask {
    WatchMask::CREATE
        | WatchMask::DELETE
        | WatchMask::ACCESS
        | WatchMask::CLOSE_WRITE
        | WatchMask::MODIFY
        | WatchMask::MOVE_SELF
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEventRecord {
    pub mask: EventMask,
    pub cookie: u32,
    /// `None` when the event concerns the watched path itself.
    pub name: Option<OsString>,
}

impl From<Event<OsString>> for RawEventRecord {
    fn from(event: Event<OsString>) -> Self {
        Self {
            mask: event.mask,
            cookie: event.cookie,
            name: event.name,
        }
    }
}

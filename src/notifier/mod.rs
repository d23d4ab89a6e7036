pub mod desktop;

use crate::error::Result;

pub use desktop::DesktopNotifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification<'a> {
    pub title: &'a str,
    pub body: &'static str,
    pub icon: &'a str,
}

/// Where notifications go. Each call is independent; a failed `show`
/// leaves the sink usable for the next one.
pub trait NotificationSink {
    fn show(&mut self, notification: &Notification<'_>) -> Result<()>;
}

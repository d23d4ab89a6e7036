use crate::config::NotificationConfig;
use crate::error::{Result, WatchError};
use crate::notifier::{Notification, NotificationSink};
use notify_rust::Timeout;
use tracing::{debug, info};

/// Handle to the session's desktop notification server.
///
/// Creating one is the backend's `init`; dropping it is the `uninit`.
#[derive(Debug)]
pub struct DesktopNotifier {
    app_name: String,
    timeout: Option<Timeout>,
}

impl DesktopNotifier {
    pub fn init(config: &NotificationConfig) -> Result<Self> {
        let server = notify_rust::get_server_information()
            .map_err(|e| WatchError::BackendInit(e.to_string()))?;
        info!(
            app = %config.app_name,
            server = %server.name,
            vendor = %server.vendor,
            version = %server.version,
            "notification backend ready"
        );

        Ok(Self {
            app_name: config.app_name.clone(),
            timeout: config.timeout_ms.map(Timeout::Milliseconds),
        })
    }
}

impl NotificationSink for DesktopNotifier {
    fn show(&mut self, notification: &Notification<'_>) -> Result<()> {
        let mut desktop = notify_rust::Notification::new();
        desktop
            .appname(&self.app_name)
            .summary(notification.title)
            .body(notification.body)
            .icon(notification.icon);
        if let Some(timeout) = self.timeout {
            desktop.timeout(timeout);
        }

        // The returned handle is dropped straight away; the server keeps
        // displaying the notification on its own.
        desktop
            .show()
            .map(drop)
            .map_err(|e| WatchError::Show(e.to_string()))
    }
}

impl Drop for DesktopNotifier {
    fn drop(&mut self) {
        debug!(app = %self.app_name, "notification backend released");
    }
}

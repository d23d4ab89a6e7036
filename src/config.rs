use crate::watcher::record::MIN_BUFFER_SIZE;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub notification: NotificationConfig,
    pub watch: WatchConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationConfig {
    pub app_name: String,
    pub icon: String,
    pub timeout_ms: Option<u32>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct WatchConfig {
    pub buffer_size: usize,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.watch.buffer_size < MIN_BUFFER_SIZE {
            bail!(
                "watch.buffer_size must be at least {} bytes, got {}",
                MIN_BUFFER_SIZE,
                self.watch.buffer_size
            );
        }
        if self.notification.app_name.is_empty() {
            bail!("notification.app_name must not be empty");
        }
        Ok(())
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            app_name: "watchfd".to_string(),
            icon: "dialog-information".to_string(),
            timeout_ms: None,
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        WatchConfig { buffer_size: 4096 }
    }
}

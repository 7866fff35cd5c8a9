//! Shared access to the live settings.
//!
//! The owner of the settings (CLI, config editor) publishes new values and
//! the pipeline takes a snapshot at the start of every fetch or render
//! cycle, so edits apply from the next cycle on.

use super::Config;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct SettingsHandle {
    sender: Arc<watch::Sender<Config>>,
}

impl SettingsHandle {
    pub fn new(config: Config) -> Self {
        let (sender, _) = watch::channel(config);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Current settings
    pub fn snapshot(&self) -> Config {
        self.sender.borrow().clone()
    }

    /// Edits the settings in place and notifies subscribers
    pub fn update(&self, edit: impl FnOnce(&mut Config)) {
        self.sender.send_modify(edit);
    }

    pub fn replace(&self, config: Config) {
        self.sender.send_replace(config);
    }

    pub fn subscribe(&self) -> watch::Receiver<Config> {
        self.sender.subscribe()
    }
}

impl Default for SettingsHandle {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

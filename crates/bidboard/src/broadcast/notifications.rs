//! Notification broadcasting for toast surfaces.

use tokio::sync::broadcast;

use crate::notify::{Notification, Notifier, Severity};

#[derive(Clone)]
pub struct NotificationBroadcaster {
    sender: broadcast::Sender<Notification>,
}

impl NotificationBroadcaster {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn send(&self, notification: Notification) {
        // No active receivers is fine
        let _ = self.sender.send(notification);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}

impl Default for NotificationBroadcaster {
    fn default() -> Self {
        Self::new(64)
    }
}

impl Notifier for NotificationBroadcaster {
    fn notify(&self, severity: Severity, message: &str) {
        log::debug!("toast [{}]: {}", severity, message);
        self.send(Notification::new(severity, message));
    }
}

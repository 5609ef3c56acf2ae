//! Route-change broadcasting so a front-end can follow the workflow.

use std::sync::{Arc, RwLock};

use tokio::sync::broadcast;

use crate::navigate::{Navigator, Route};

#[derive(Clone)]
pub struct NavigationBroadcaster {
    sender: broadcast::Sender<Route>,
    current: Arc<RwLock<Option<Route>>>,
}

impl NavigationBroadcaster {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            current: Arc::new(RwLock::new(None)),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Route> {
        self.sender.subscribe()
    }

    /// Last route navigated to.
    pub fn current(&self) -> Option<Route> {
        self.current
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl Default for NavigationBroadcaster {
    fn default() -> Self {
        Self::new(16)
    }
}

impl Navigator for NavigationBroadcaster {
    fn navigate(&self, route: Route) {
        log::info!("Navigating to {}", route);
        match self.current.write() {
            Ok(mut guard) => *guard = Some(route.clone()),
            Err(poisoned) => *poisoned.into_inner() = Some(route.clone()),
        }
        let _ = self.sender.send(route);
    }
}

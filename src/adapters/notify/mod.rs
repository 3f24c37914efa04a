//! Notifier adapters.
//!
//! - `TracingNotifier` - writes notifications to the log (server/headless use)
//! - `RecordingNotifier` - keeps notifications for assertions

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{error, info};

use crate::ports::{Notification, NotificationLevel, Notifier};

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => error!(message = %notification.message, "notification"),
            level => info!(?level, message = %notification.message, "notification"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    seen: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.guard().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.guard().last().cloned()
    }

    pub fn messages(&self) -> Vec<String> {
        self.guard().iter().map(|n| n.message.clone()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.guard().push(notification);
    }
}

use std::time::{Duration, Instant};

/// Surfaces fetch errors to the user.
pub trait NotificationSink {
    fn notify_error(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub message: String,
    pub expires_at: Instant,
}

/// Queue of error toasts, each shown for a fixed duration.
#[derive(Debug, Clone)]
pub struct Toasts {
    duration: Duration,
    items: Vec<Notification>,
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            items: Vec::new(),
        }
    }

    pub fn push_at(&mut self, message: &str, now: Instant) {
        self.items.push(Notification {
            title: "Error",
            message: message.to_string(),
            expires_at: now + self.duration,
        });
    }

    /// Drops toasts whose display time has run out.
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|toast| toast.expires_at > now);
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl NotificationSink for Toasts {
    fn notify_error(&mut self, message: &str) {
        self.push_at(message, Instant::now());
    }
}

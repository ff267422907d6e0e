//! User-facing failure notifications.

use parking_lot::Mutex;

/// Side channel for failures that the user should see (toast-style).
pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

/// Forwards notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Keeps every notification in memory.
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    messages: Mutex<Vec<String>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages reported so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl Notifier for CollectingNotifier {
    fn notify_error(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_notifier_keeps_order() {
        let notifier = CollectingNotifier::new();
        assert!(notifier.is_empty());

        notifier.notify_error("first");
        notifier.notify_error("second");
        assert_eq!(notifier.messages(), vec!["first", "second"]);

        notifier.clear();
        assert!(notifier.is_empty());
    }
}

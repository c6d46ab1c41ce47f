use crate::api::types::MessageToken;
use crate::core::timer::{TimerId, TimerQueue};

/// Default time a notification stays on screen.
pub const DEFAULT_MESSAGE_DURATION_MS: u32 = 3000;

/// A transient message shown to the player.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub token: MessageToken,
    pub text: String,
    pub duration_ms: u32,
}

#[derive(Debug, Clone)]
struct ActiveMessage {
    notification: Notification,
    expiry: TimerId,
}

/// Single-slot message box with auto-expiry.
///
/// `show` replaces whatever is on screen right away; there is no queue. Each
/// message owns exactly one expiry timer, which is cancelled when the message
/// is replaced or cleared. Expiry also checks the token, so a stale timer can
/// never remove a newer message.
#[derive(Debug, Clone)]
pub struct NotificationEmitter {
    duration_ms: u32,
    next_token: u64,
    active: Option<ActiveMessage>,
    timers: TimerQueue<MessageToken>,
}

impl NotificationEmitter {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            next_token: 1,
            active: None,
            timers: TimerQueue::new(),
        }
    }

    /// Show `text`, replacing the current message and rescheduling expiry.
    pub fn show(&mut self, text: impl Into<String>) -> &Notification {
        if let Some(prev) = self.active.take() {
            self.timers.cancel(prev.expiry);
        }

        let token = MessageToken(self.next_token);
        self.next_token += 1;
        let expiry = self.timers.schedule(self.duration_ms as f64, token);

        let active = self.active.insert(ActiveMessage {
            notification: Notification {
                token,
                text: text.into(),
                duration_ms: self.duration_ms,
            },
            expiry,
        });
        &active.notification
    }

    /// Remove the active message immediately and cancel its expiry.
    pub fn clear(&mut self) -> Option<Notification> {
        let prev = self.active.take()?;
        self.timers.cancel(prev.expiry);
        Some(prev.notification)
    }

    /// Advance time. Returns the message that expired during this step, if any.
    pub fn advance(&mut self, dt_ms: f64) -> Option<Notification> {
        let mut expired = None;
        for (_, token) in self.timers.advance(dt_ms) {
            if self.current().map(|n| n.token) == Some(token) {
                expired = self.active.take().map(|a| a.notification);
            }
        }
        expired
    }

    /// The message currently on screen.
    pub fn current(&self) -> Option<&Notification> {
        self.active.as_ref().map(|a| &a.notification)
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Change the display duration. Applies to messages shown afterwards.
    pub fn set_duration_ms(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms;
    }

    /// Number of expiry timers still pending (0 or 1).
    pub fn pending_expiries(&self) -> usize {
        self.timers.len()
    }
}

impl Default for NotificationEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE_DURATION_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_text(n: &NotificationEmitter) -> Option<&str> {
        n.current().map(|m| m.text.as_str())
    }

    #[test]
    fn message_expires_after_duration() {
        let mut n = NotificationEmitter::default();
        n.show("hello");
        assert!(n.advance(2999.0).is_none());
        assert_eq!(current_text(&n), Some("hello"));

        let expired = n.advance(1.0).expect("message should expire");
        assert_eq!(expired.text, "hello");
        assert!(n.current().is_none());
    }

    #[test]
    fn newer_message_survives_older_expiry() {
        let mut n = NotificationEmitter::default();
        n.show("A");
        n.advance(1000.0);
        n.show("B");

        // A would have expired at 3000ms.
        assert!(n.advance(2500.0).is_none());
        assert_eq!(current_text(&n), Some("B"));
        assert_eq!(n.pending_expiries(), 1);

        // B expires at 4000ms.
        let expired = n.advance(600.0).expect("B should expire");
        assert_eq!(expired.text, "B");
        assert!(n.current().is_none());
    }

    #[test]
    fn replacement_gets_fresh_token() {
        let mut n = NotificationEmitter::default();
        let a = n.show("A").token;
        let b = n.show("B").token;
        assert_ne!(a, b);
        assert_eq!(n.current().map(|m| m.token), Some(b));
    }

    #[test]
    fn clear_cancels_pending_expiry() {
        let mut n = NotificationEmitter::default();
        n.show("A");
        let cleared = n.clear().expect("A was active");
        assert_eq!(cleared.text, "A");
        assert_eq!(n.pending_expiries(), 0);
        assert!(n.advance(5000.0).is_none());
        assert!(n.clear().is_none());
    }

    #[test]
    fn custom_duration_applies_to_next_message() {
        let mut n = NotificationEmitter::new(100);
        n.show("short");
        n.set_duration_ms(500);
        assert!(n.advance(100.0).is_some());
        n.show("long");
        assert_eq!(n.current().map(|m| m.duration_ms), Some(500));
        assert!(n.advance(499.0).is_none());
        assert!(n.advance(1.0).is_some());
    }
}

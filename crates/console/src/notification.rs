//! Transient screen notifications.
//!
//! Each screen owns one [`Notifier`]: a single slot, so a new message
//! replaces the previous one and restarts the clock. Expiry is checked
//! against a caller-supplied instant, which keeps controllers free of
//! timers and deterministic under test.

use std::time::{Duration, Instant};

/// Success toasts clear quickly; errors linger long enough to read.
pub const SUCCESS_TTL: Duration = Duration::from_millis(1500);
pub const ERROR_TTL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: Level,
    expires_at: Instant,
}

impl Notice {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Single-slot notification holder.
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.push(message.into(), Level::Success, now + SUCCESS_TTL);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.push(message.into(), Level::Error, now + ERROR_TTL);
    }

    fn push(&mut self, message: String, level: Level, expires_at: Instant) {
        self.current = Some(Notice {
            message,
            level,
            expires_at,
        });
    }

    /// Currently visible notice, dropping it first if it has expired.
    pub fn current(&mut self, now: Instant) -> Option<&Notice> {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
        }
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_clears_after_its_delay() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.success("Pièce créée", t0);
        assert!(notifier.current(t0 + Duration::from_millis(1400)).is_some());
        assert!(notifier.current(t0 + Duration::from_millis(1600)).is_none());
    }

    #[test]
    fn errors_linger_longer_than_successes() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.error("Erreur lors de la sauvegarde", t0);
        let notice = notifier.current(t0 + Duration::from_millis(3000)).unwrap();
        assert_eq!(notice.level, Level::Error);
        assert!(notifier.current(t0 + ERROR_TTL).is_none());
    }

    #[test]
    fn a_new_notice_replaces_and_restarts_the_clock() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.success("première", t0);
        notifier.success("seconde", t0 + Duration::from_millis(1000));
        let notice = notifier.current(t0 + Duration::from_millis(2000)).unwrap();
        assert_eq!(notice.message, "seconde");
    }

    #[test]
    fn dismiss_clears_immediately() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.error("oops", t0);
        notifier.dismiss();
        assert!(notifier.current(t0).is_none());
    }
}

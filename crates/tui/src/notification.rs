//! Transient status-bar notifications.

use std::time::{Duration, Instant};

/// How a notification is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Confirmation of something the user did.
    Info,
    /// Something the user tried did not happen.
    Error,
}

/// A message shown in the status bar until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text to show.
    pub text: String,
    /// Styling of the text.
    pub level: NotificationLevel,
    expires_at: Instant,
}

impl Notification {
    /// Creates a notification that expires `ttl` after `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::{Duration, Instant};
    /// use taskboard_tui::notification::{Notification, NotificationLevel};
    ///
    /// let now = Instant::now();
    /// let note = Notification::new("Saved", NotificationLevel::Info, now, Duration::from_secs(3));
    /// assert!(!note.is_expired(now));
    /// assert!(note.is_expired(now + Duration::from_secs(3)));
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>, level: NotificationLevel, now: Instant, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            level,
            expires_at: now + ttl,
        }
    }

    /// Shorthand for an [`NotificationLevel::Info`] notification.
    #[must_use]
    pub fn info(text: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self::new(text, NotificationLevel::Info, now, ttl)
    }

    /// Shorthand for an [`NotificationLevel::Error`] notification.
    #[must_use]
    pub fn error(text: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self::new(text, NotificationLevel::Error, now, ttl)
    }

    /// Returns `true` once `now` has reached the expiry time.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Returns `true` for error notifications.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

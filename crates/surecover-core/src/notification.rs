//! Notification data types.
//!
//! A [`Notification`] is a transient, user-facing message. It carries a
//! [`NotificationKind`] that only affects presentation, a required title,
//! an optional body and a display lifetime.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tokio::time::Instant;
use ulid::Ulid;

use crate::error::NotifyError;

/// How long a notification stays visible when the caller gives no lifetime.
pub const DEFAULT_LIFETIME: Duration = Duration::from_millis(5000);

/// Unique identifier for a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub Ulid);

impl NotificationId {
    /// Create a new NotificationId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Get the underlying ULID
    pub fn as_ulid(&self) -> &Ulid {
        &self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast_{}", self.0)
    }
}

/// Visual category of a notification.
///
/// The kind selects the icon and colour treatment. It never changes how
/// the notification center treats the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationKind {
    /// Operation completed successfully
    Success,
    /// Something failed and the user should know
    Error,
    /// Something needs attention but nothing failed
    Warning,
    /// Neutral information
    #[default]
    Info,
}

impl NotificationKind {
    /// All kinds, in display order
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Success,
        NotificationKind::Error,
        NotificationKind::Warning,
        NotificationKind::Info,
    ];

    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    /// Returns the CSS class used by the toast renderer
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast-success",
            NotificationKind::Error => "toast-error",
            NotificationKind::Warning => "toast-warning",
            NotificationKind::Info => "toast-info",
        }
    }

    /// Returns the glyph shown next to the title
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "\u{2713}",
            NotificationKind::Error => "\u{2715}",
            NotificationKind::Warning => "!",
            NotificationKind::Info => "i",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(NotificationKind::Success),
            "error" => Ok(NotificationKind::Error),
            "warning" => Ok(NotificationKind::Warning),
            "info" => Ok(NotificationKind::Info),
            _ => Err(NotifyError::UnknownKind(s.to_string())),
        }
    }
}

/// A message to be displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    kind: NotificationKind,
    title: String,
    message: Option<String>,
    lifetime: Duration,
    created_at: Instant,
}

impl Notification {
    /// Creates a notification with a fresh id and the default lifetime.
    pub fn new(kind: NotificationKind, title: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: title.into(),
            message: None,
            lifetime: DEFAULT_LIFETIME,
            created_at: Instant::now(),
        }
    }

    /// Creates a success notification.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title)
    }

    /// Creates an error notification.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title)
    }

    /// Creates a warning notification.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title)
    }

    /// Creates an info notification.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title)
    }

    /// Sets the longer body text.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the display lifetime, replacing [`DEFAULT_LIFETIME`].
    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Restamp creation; the center does this when the notification is shown.
    pub(crate) fn stamp(&mut self, at: Instant) {
        self.created_at = at;
    }

    /// Time since the notification was shown (or built, if not yet shown).
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Time left before the notification expires, zero once it is due.
    pub fn remaining(&self) -> Duration {
        self.lifetime.saturating_sub(self.age())
    }
}

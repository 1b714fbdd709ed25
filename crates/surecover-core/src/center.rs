//! The notification center.
//!
//! [`NotificationCenter`] owns the visible set. Callers add entries with
//! [`notify`](NotificationCenter::notify) or [`show`](NotificationCenter::show)
//! and remove them with [`dismiss`](NotificationCenter::dismiss); every entry
//! also expires on its own once its lifetime has elapsed.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  NotificationCenter (Clone, shares one Inner)                │
//! │  ├── entries: Vec<Entry>        insertion order, oldest first│
//! │  │     └── Entry { notification, ExpiryTimer }               │
//! │  ├── snapshot_tx: watch         latest visible set (render)  │
//! │  └── event_tx: broadcast        Shown / Dismissed / Expired  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Removing an entry drops its timer, which aborts the sleeping task.
//! A timer that already woke up only removes the entry carrying its own
//! ticket, so dismissal and expiry can race without double removal.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::{broadcast, watch};
use tokio::time::Instant;

use crate::error::{NotifyError, NotifyResult};
use crate::expiry::ExpiryTimer;
use crate::notification::{Notification, NotificationId, NotificationKind};

/// Default capacity for the lifecycle event channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Lifecycle events emitted by the notification center.
///
/// An event is only sent when the visible set actually changed.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationEvent {
    /// A notification entered the visible set
    Shown(Notification),
    /// A notification was removed explicitly
    Dismissed(NotificationId),
    /// A notification reached the end of its lifetime
    Expired(NotificationId),
    /// Every visible notification was removed at once
    Cleared {
        /// Number of notifications removed
        count: usize,
    },
}

struct Entry {
    notification: Notification,
    timer: ExpiryTimer,
}

struct Inner {
    entries: Mutex<Vec<Entry>>,
    next_ticket: AtomicU64,
    runtime: Handle,
    snapshot_tx: watch::Sender<Vec<Notification>>,
    event_tx: broadcast::Sender<NotificationEvent>,
}

impl Inner {
    fn publish(&self, entries: &[Entry]) {
        let snapshot = entries.iter().map(|e| e.notification.clone()).collect();
        self.snapshot_tx.send_replace(snapshot);
    }

    fn emit(&self, event: NotificationEvent) {
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }

    fn expire(&self, id: NotificationId, ticket: u64) {
        let mut entries = self.entries.lock();
        let Some(pos) = entries
            .iter()
            .position(|e| e.notification.id() == id && e.timer.ticket() == ticket)
        else {
            tracing::trace!(%id, ticket, "expiry fired for a notification that is already gone");
            return;
        };

        let removed = entries.remove(pos);
        self.publish(&entries);
        drop(entries);
        drop(removed);

        tracing::debug!(%id, "notification expired");
        self.emit(NotificationEvent::Expired(id));
    }
}

/// Shared handle to the visible notification set.
///
/// Cloning is cheap; every clone talks to the same set. Construct one per
/// application (or per UI subtree) and hand it out through
/// [`scope`](NotificationCenter::scope) or a UI context provider.
///
/// # Example
///
/// ```ignore
/// let center = NotificationCenter::new()?;
///
/// let id = center.notify(NotificationKind::Success, "Check your email", Some("We sent a code"), None);
/// assert_eq!(center.len(), 1);
///
/// center.dismiss(id);
/// assert!(center.is_empty());
/// ```
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
}

impl NotificationCenter {
    /// Create a center whose expiry timers run on the current tokio runtime.
    ///
    /// Fails with [`NotifyError::RuntimeUnavailable`] when called outside a
    /// runtime context.
    pub fn new() -> NotifyResult<Self> {
        let runtime = Handle::try_current().map_err(|_| NotifyError::RuntimeUnavailable)?;
        Ok(Self::with_runtime(runtime))
    }

    /// Create a center whose expiry timers run on `runtime`.
    pub fn with_runtime(runtime: Handle) -> Self {
        let (snapshot_tx, _) = watch::channel(Vec::new());
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            inner: Arc::new(Inner {
                entries: Mutex::new(Vec::new()),
                next_ticket: AtomicU64::new(0),
                runtime,
                snapshot_tx,
                event_tx,
            }),
        }
    }

    /// Show a message.
    ///
    /// `lifetime` defaults to [`DEFAULT_LIFETIME`](crate::DEFAULT_LIFETIME).
    /// Never fails; the returned id can be passed to
    /// [`dismiss`](Self::dismiss).
    pub fn notify(
        &self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: Option<&str>,
        lifetime: Option<Duration>,
    ) -> NotificationId {
        let mut notification = Notification::new(kind, title);
        if let Some(message) = message {
            notification = notification.with_message(message);
        }
        if let Some(lifetime) = lifetime {
            notification = notification.with_lifetime(lifetime);
        }
        self.show(notification)
    }

    /// Append a prepared notification to the visible set and schedule its
    /// expiry.
    pub fn show(&self, mut notification: Notification) -> NotificationId {
        let id = notification.id();
        let kind = notification.kind();
        let lifetime = notification.lifetime();
        let ticket = self.inner.next_ticket.fetch_add(1, Ordering::Relaxed);

        // Hold the lock across scheduling so a zero lifetime cannot expire
        // before the entry exists.
        let mut entries = self.inner.entries.lock();
        let shown_at = Instant::now();
        notification.stamp(shown_at);
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let timer = ExpiryTimer::schedule(&self.inner.runtime, ticket, shown_at, lifetime, move || {
            if let Some(inner) = weak.upgrade() {
                inner.expire(id, ticket);
            }
        });
        entries.push(Entry {
            notification: notification.clone(),
            timer,
        });
        self.inner.publish(&entries);

        // Shown goes out under the lock so it always precedes Expired
        tracing::debug!(%id, %kind, lifetime_ms = lifetime.as_millis() as u64, "notification shown");
        self.inner.emit(NotificationEvent::Shown(notification));
        drop(entries);
        id
    }

    /// Shorthand for a success notification with the default lifetime.
    pub fn success(&self, title: impl Into<String>, message: Option<&str>) -> NotificationId {
        self.notify(NotificationKind::Success, title, message, None)
    }

    /// Shorthand for an error notification with the default lifetime.
    pub fn error(&self, title: impl Into<String>, message: Option<&str>) -> NotificationId {
        self.notify(NotificationKind::Error, title, message, None)
    }

    /// Shorthand for a warning notification with the default lifetime.
    pub fn warning(&self, title: impl Into<String>, message: Option<&str>) -> NotificationId {
        self.notify(NotificationKind::Warning, title, message, None)
    }

    /// Shorthand for an info notification with the default lifetime.
    pub fn info(&self, title: impl Into<String>, message: Option<&str>) -> NotificationId {
        self.notify(NotificationKind::Info, title, message, None)
    }

    /// Remove a notification and cancel its expiry.
    ///
    /// Returns `true` if the notification was visible. Dismissing an id that
    /// already expired or was already dismissed is a no-op.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let mut entries = self.inner.entries.lock();
        let Some(pos) = entries.iter().position(|e| e.notification.id() == id) else {
            tracing::trace!(%id, "dismiss ignored, notification not visible");
            return false;
        };

        let removed = entries.remove(pos);
        self.inner.publish(&entries);
        drop(entries);
        drop(removed);

        tracing::debug!(%id, "notification dismissed");
        self.inner.emit(NotificationEvent::Dismissed(id));
        true
    }

    /// Remove every visible notification and cancel all pending expiries.
    ///
    /// Returns the number of notifications removed.
    pub fn clear(&self) -> usize {
        let mut entries = self.inner.entries.lock();
        let removed: Vec<Entry> = entries.drain(..).collect();
        let count = removed.len();
        if count > 0 {
            self.inner.publish(&entries);
        }
        drop(entries);
        drop(removed);

        if count > 0 {
            tracing::debug!(count, "notifications cleared");
            self.inner.emit(NotificationEvent::Cleared { count });
        }
        count
    }

    /// Snapshot of the visible set, oldest first.
    pub fn visible(&self) -> Vec<Notification> {
        self.inner
            .entries
            .lock()
            .iter()
            .map(|e| e.notification.clone())
            .collect()
    }

    /// Number of visible notifications.
    pub fn len(&self) -> usize {
        self.inner.entries.lock().len()
    }

    /// Whether nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.inner.entries.lock().is_empty()
    }

    /// Whether a notification with this id is visible.
    pub fn contains(&self, id: NotificationId) -> bool {
        self.inner
            .entries
            .lock()
            .iter()
            .any(|e| e.notification.id() == id)
    }

    /// Time until the notification expires, measured on the runtime clock.
    ///
    /// Returns `None` when the notification is not visible.
    pub fn expires_in(&self, id: NotificationId) -> Option<Duration> {
        let entries = self.inner.entries.lock();
        entries
            .iter()
            .find(|e| e.notification.id() == id)
            .map(|e| e.timer.deadline().saturating_duration_since(Instant::now()))
    }

    /// Watch the visible set. The receiver always holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.inner.snapshot_tx.subscribe()
    }

    /// Subscribe to lifecycle events.
    pub fn events(&self) -> broadcast::Receiver<NotificationEvent> {
        self.inner.event_tx.subscribe()
    }

    /// Whether two handles share the same visible set.
    pub fn same_center(&self, other: &NotificationCenter) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for NotificationCenter {
    fn eq(&self, other: &Self) -> bool {
        self.same_center(other)
    }
}

impl std::fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("visible", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_center_is_empty() {
        let center = NotificationCenter::new().unwrap();
        assert!(center.is_empty());
        assert_eq!(center.len(), 0);
        assert!(center.visible().is_empty());
    }

    #[test]
    fn new_outside_runtime_fails() {
        assert_eq!(
            NotificationCenter::new().unwrap_err(),
            NotifyError::RuntimeUnavailable
        );
    }

    #[tokio::test]
    async fn notify_appends_in_insertion_order() {
        let center = NotificationCenter::new().unwrap();
        let a = center.info("first", None);
        let b = center.warning("second", Some("details"));
        let c = center.error("third", None);

        let ids: Vec<_> = center.visible().iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[tokio::test]
    async fn dismiss_reports_whether_anything_was_removed() {
        let center = NotificationCenter::new().unwrap();
        let id = center.success("saved", None);

        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
        assert!(!center.contains(id));
    }

    #[tokio::test]
    async fn clones_share_the_visible_set() {
        let center = NotificationCenter::new().unwrap();
        let other = center.clone();
        let id = other.info("shared", None);

        assert!(center.contains(id));
        assert_eq!(center, other);
        assert_ne!(center, NotificationCenter::new().unwrap());
    }

    #[tokio::test]
    async fn subscribe_sees_latest_snapshot() {
        let center = NotificationCenter::new().unwrap();
        let rx = center.subscribe();
        let id = center.success("Check your email", Some("We sent a code"));

        assert_eq!(rx.borrow().len(), 1);
        assert_eq!(rx.borrow()[0].id(), id);

        center.dismiss(id);
        assert!(rx.borrow().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn expires_in_counts_down() {
        let center = NotificationCenter::new().unwrap();
        let id = center.notify(NotificationKind::Info, "tick", None, Some(Duration::from_secs(2)));

        assert_eq!(center.expires_in(id), Some(Duration::from_secs(2)));
        tokio::time::advance(Duration::from_millis(500)).await;
        assert_eq!(center.expires_in(id), Some(Duration::from_millis(1500)));

        center.dismiss(id);
        assert_eq!(center.expires_in(id), None);
    }

    #[tokio::test]
    async fn clear_on_empty_center_emits_nothing() {
        let center = NotificationCenter::new().unwrap();
        let mut events = center.events();

        assert_eq!(center.clear(), 0);
        assert!(matches!(
            events.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }
}

//! Expiry and dismissal timing tests
//!
//! All tests run on a paused tokio clock, so sleeps advance virtual time
//! and timers fire deterministically.

use std::time::Duration;

use surecover_core::{
    Notification, NotificationCenter, NotificationEvent, NotificationKind, DEFAULT_LIFETIME,
};
use tokio::sync::broadcast::error::TryRecvError;

const SHORT: Duration = Duration::from_millis(100);

/// Let every task woken at the current instant run.
async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

// ============================================================================
// Expiry
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_short_lifetime_expires() {
    let center = NotificationCenter::new().unwrap();
    let id = center.notify(NotificationKind::Info, "Quote ready", None, Some(SHORT));

    assert!(center.contains(id), "present right after creation");

    tokio::time::sleep(SHORT + Duration::from_millis(1)).await;
    settle().await;

    assert!(!center.contains(id), "gone once the lifetime elapsed");
    assert!(center.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_still_visible_just_before_deadline() {
    let center = NotificationCenter::new().unwrap();
    let id = center.notify(NotificationKind::Info, "Almost", None, Some(SHORT));

    tokio::time::sleep(SHORT - Duration::from_millis(1)).await;
    settle().await;

    assert!(center.contains(id));
}

#[tokio::test(start_paused = true)]
async fn test_default_lifetime_is_five_seconds() {
    let center = NotificationCenter::new().unwrap();
    let id = center.notify(NotificationKind::Error, "Request failed", None, None);

    tokio::time::sleep(Duration::from_millis(4999)).await;
    settle().await;
    assert!(center.contains(id));

    tokio::time::sleep(Duration::from_millis(2)).await;
    settle().await;
    assert!(!center.contains(id));
    assert_eq!(DEFAULT_LIFETIME, Duration::from_millis(5000));
}

#[tokio::test(start_paused = true)]
async fn test_each_timer_fires_at_its_own_delay() {
    let center = NotificationCenter::new().unwrap();
    let slow = center.notify(NotificationKind::Info, "slow", None, Some(Duration::from_millis(300)));

    tokio::time::sleep(Duration::from_millis(100)).await;
    let fast = center.notify(NotificationKind::Info, "fast", None, Some(Duration::from_millis(100)));

    // t = 201ms: fast (created at 100ms) is gone, slow remains
    tokio::time::sleep(Duration::from_millis(101)).await;
    settle().await;
    assert!(!center.contains(fast));
    assert!(center.contains(slow));

    // t = 301ms: slow is gone too
    tokio::time::sleep(Duration::from_millis(100)).await;
    settle().await;
    assert!(center.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_zero_lifetime_expires_immediately() {
    let center = NotificationCenter::new().unwrap();
    center.notify(NotificationKind::Warning, "blink", None, Some(Duration::ZERO));

    tokio::time::sleep(Duration::from_millis(1)).await;
    settle().await;

    assert!(center.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_expiry_emits_event() {
    let center = NotificationCenter::new().unwrap();
    let mut events = center.events();
    let id = center.notify(NotificationKind::Success, "Policy renewed", None, Some(SHORT));

    assert!(matches!(events.recv().await.unwrap(), NotificationEvent::Shown(n) if n.id() == id));

    tokio::time::sleep(SHORT * 2).await;
    assert_eq!(events.recv().await.unwrap(), NotificationEvent::Expired(id));
}

// ============================================================================
// Dismissal racing expiry
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_dismissed_before_expiry_has_no_residual_effect() {
    let center = NotificationCenter::new().unwrap();
    let mut events = center.events();

    let id = center.notify(NotificationKind::Info, "Claim submitted", None, Some(SHORT));
    assert!(center.dismiss(id));

    // Let the original deadline pass
    tokio::time::sleep(SHORT * 3).await;
    settle().await;

    assert!(!center.contains(id), "dismissed notification must not reappear");
    assert!(matches!(events.try_recv(), Ok(NotificationEvent::Shown(_))));
    assert_eq!(events.try_recv(), Ok(NotificationEvent::Dismissed(id)));
    assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)), "no expiry after dismissal");
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_after_expiry_is_noop() {
    let center = NotificationCenter::new().unwrap();
    let id = center.notify(NotificationKind::Info, "Session ending", None, Some(SHORT));

    tokio::time::sleep(SHORT * 2).await;
    settle().await;

    assert!(!center.dismiss(id));
    assert!(!center.dismiss(id));
}

#[tokio::test(start_paused = true)]
async fn test_dismissing_one_does_not_cancel_others() {
    let center = NotificationCenter::new().unwrap();
    let a = center.notify(NotificationKind::Info, "a", None, Some(SHORT));
    let b = center.notify(NotificationKind::Info, "b", None, Some(SHORT));

    center.dismiss(a);

    tokio::time::sleep(SHORT / 2).await;
    settle().await;
    assert!(center.contains(b));

    tokio::time::sleep(SHORT).await;
    settle().await;
    assert!(center.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_clear_cancels_pending_expiries() {
    let center = NotificationCenter::new().unwrap();
    let mut events = center.events();
    for i in 0..3 {
        center.notify(NotificationKind::Info, format!("toast {i}"), None, Some(SHORT));
    }

    assert_eq!(center.clear(), 3);
    tokio::time::sleep(SHORT * 2).await;
    settle().await;

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push(event);
    }
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[3], NotificationEvent::Cleared { count: 3 });
}

// ============================================================================
// Rendering feed
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_watch_receiver_tracks_expiry() {
    let center = NotificationCenter::new().unwrap();
    let mut rx = center.subscribe();

    center.notify(NotificationKind::Success, "Payment received", None, Some(SHORT));
    assert_eq!(rx.borrow_and_update().len(), 1);

    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_center_stops_timers() {
    let center = NotificationCenter::new().unwrap();
    let rx = center.subscribe();
    center.notify(NotificationKind::Info, "orphan", None, Some(SHORT));

    drop(center);
    tokio::time::sleep(SHORT * 2).await;
    settle().await;

    // Sender is gone with the center; the last snapshot still holds the entry
    assert!(rx.has_changed().is_err());
    assert_eq!(rx.borrow().len(), 1);
}

// ============================================================================
// Extreme And Late Lifetimes
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_unbounded_lifetime_stays_until_dismissed() {
    let center = NotificationCenter::new().unwrap();
    let id = center.notify(NotificationKind::Warning, "Policy on hold", None, Some(Duration::MAX));

    tokio::time::sleep(Duration::from_secs(86_400 * 365)).await;
    settle().await;

    assert!(center.contains(id), "an unrepresentable deadline never fires");
    assert!(center.expires_in(id).unwrap() > Duration::from_secs(86_400 * 365));
    assert!(center.dismiss(id));
    assert!(center.is_empty());
}

/// A notification prepared ahead of time counts its lifetime from `show`
#[tokio::test(start_paused = true)]
async fn test_remaining_matches_expiry_when_shown_late() {
    let center = NotificationCenter::new().unwrap();
    let prepared = Notification::info("Renewal reminder").with_lifetime(Duration::from_secs(2));

    tokio::time::advance(Duration::from_millis(1500)).await;
    let id = center.show(prepared);
    tokio::time::advance(Duration::from_secs(1)).await;

    let shown = &center.visible()[0];
    assert_eq!(shown.age(), Duration::from_secs(1));
    assert_eq!(shown.remaining(), Duration::from_secs(1));
    assert_eq!(center.expires_in(id), Some(shown.remaining()));

    tokio::time::sleep(Duration::from_millis(1001)).await;
    settle().await;
    assert!(!center.contains(id));
}

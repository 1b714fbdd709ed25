//! Notification provider and hooks.
//!
//! ## Usage
//!
//! ```ignore
//! // In the App component
//! NotificationProvider {
//!     Router::<Route> {}
//! }
//!
//! // In any descendant
//! let toasts = use_notifications();
//! toasts.success("Check your email", Some("We sent a code"));
//! ```

use dioxus::prelude::*;
use surecover_core::{Notification, NotificationCenter, NotificationId, NotifyError, NotifyResult};

use crate::components::ToastStack;

/// Hosts a [`NotificationCenter`] for its subtree and renders the toasts.
///
/// Children reach the center through [`use_notifications`].
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    let center = use_hook(|| match NotificationCenter::new() {
        Ok(center) => {
            tracing::debug!("Notification center ready");
            Some(provide_context(center))
        }
        Err(e) => {
            tracing::error!("Failed to start notification center: {}", e);
            None
        }
    });
    let mut visible = use_signal(Vec::<Notification>::new);

    // Mirror the center's watch channel into a signal so the stack re-renders
    let feed = center.clone();
    use_future(move || {
        let feed = feed.clone();
        async move {
            let Some(center) = feed else {
                return;
            };
            let mut rx = center.subscribe();
            loop {
                let snapshot = rx.borrow_and_update().clone();
                visible.set(snapshot);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    let on_dismiss = move |id: NotificationId| {
        if let Some(center) = &center {
            center.dismiss(id);
        }
    };

    rsx! {
        {children}
        ToastStack { notifications: visible(), on_dismiss }
    }
}

/// Hook to access the notification center, if a provider is an ancestor.
pub fn try_use_notifications() -> NotifyResult<NotificationCenter> {
    try_use_context::<NotificationCenter>().ok_or(NotifyError::OutsideScope)
}

/// Hook to access the notification center.
///
/// # Panics
///
/// Panics immediately when no [`NotificationProvider`] is an ancestor of
/// the calling component. Showing a toast outside the provider is always a
/// wiring bug.
pub fn use_notifications() -> NotificationCenter {
    match try_use_notifications() {
        Ok(center) => center,
        Err(e) => panic!("{e}: wrap the component tree in NotificationProvider"),
    }
}

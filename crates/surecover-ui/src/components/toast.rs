//! Toast Components
//!
//! Rendering side of the notification center. [`ToastStack`] draws the
//! visible set; each [`Toast`] maps its kind to an icon and colour class and
//! wires the close button to `dismiss`.

use dioxus::prelude::*;
use surecover_core::{Notification, NotificationId, NotificationKind};

use super::CloseButton;

/// How urgently assistive technology should announce a toast.
pub fn live_politeness(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Error => "assertive",
        NotificationKind::Success | NotificationKind::Warning | NotificationKind::Info => "polite",
    }
}

/// ARIA role for a toast of this kind.
pub fn toast_role(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Error | NotificationKind::Warning => "alert",
        NotificationKind::Success | NotificationKind::Info => "status",
    }
}

/// A single notification card
#[component]
pub fn Toast(notification: Notification, on_dismiss: EventHandler<NotificationId>) -> Element {
    let kind = notification.kind();
    let id = notification.id();
    let class = format!("toast {}", kind.class());
    let icon = kind.icon();
    let role = toast_role(kind);
    let live = live_politeness(kind);
    let title = notification.title().to_string();
    let message = notification.message().map(str::to_string);

    rsx! {
        div {
            class: "{class}",
            role: "{role}",
            "aria-live": "{live}",
            "data-toast-id": "{id}",
            span { class: "toast-icon", "aria-hidden": "true", "{icon}" }
            div { class: "toast-body",
                p { class: "toast-title", "{title}" }
                if let Some(message) = message {
                    p { class: "toast-message", "{message}" }
                }
            }
            CloseButton {
                onclick: move |_| on_dismiss.call(id),
                aria_label: "Dismiss notification".to_string(),
            }
        }
    }
}

/// The visible set, oldest first, anchored to the corner of the window.
#[component]
pub fn ToastStack(notifications: Vec<Notification>, on_dismiss: EventHandler<NotificationId>) -> Element {
    if notifications.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "toast-stack", "aria-label": "Notifications",
            {notifications.into_iter().map(|notification| {
                let key = notification.id().to_string();
                rsx! {
                    Toast { key: "{key}", notification, on_dismiss }
                }
            })}
        }
    }
}

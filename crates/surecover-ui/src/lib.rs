//! SureCover UI Components
//!
//! Dioxus building blocks shared by the SureCover pages: buttons, inputs and
//! the toast layer.
//!
//! The toast layer has two halves:
//! - [`NotificationProvider`] owns a [`surecover_core::NotificationCenter`]
//!   for its subtree and renders the visible toasts
//! - [`use_notifications`] hands the center to any descendant

pub mod components;
mod notifications;

pub use components::*;
pub use notifications::{try_use_notifications, use_notifications, NotificationProvider};

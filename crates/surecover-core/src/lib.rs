//! SureCover Frontend Core Library
//!
//! Shared plumbing for the SureCover customer frontend (property insurance
//! quotes, policies and claims).
//!
//! ## Overview
//!
//! The centre piece is the [`NotificationCenter`]: a process-wide set of
//! transient toasts (success, error, warning, info) that any part of the UI
//! can add to, that the renderer observes, and that expires entries on its
//! own.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::time::Duration;
//! use surecover_core::{NotificationCenter, NotificationKind};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let center = NotificationCenter::new()?;
//!
//!     let id = center.notify(NotificationKind::Success, "Check your email", Some("We sent a code"), None);
//!     center.notify(NotificationKind::Error, "Request failed", None, Some(Duration::from_millis(100)));
//!
//!     for toast in center.visible() {
//!         println!("[{}] {}", toast.kind(), toast.title());
//!     }
//!
//!     center.dismiss(id);
//!     Ok(())
//! }
//! ```

pub mod center;
pub mod error;
mod expiry;
pub mod logging;
pub mod notification;
mod scope;

// Re-exports
pub use center::{NotificationCenter, NotificationEvent};
pub use error::{NotifyError, NotifyResult};
pub use notification::{Notification, NotificationId, NotificationKind, DEFAULT_LIFETIME};

use dioxus::prelude::*;
use surecover_ui::NotificationProvider;

use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the notification center to every page.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        NotificationProvider {
            Home {}
        }
    }
}

//! Input Field Components
//!
//! Labelled text input with optional hint and inline validation error.

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Hint text next to the label (e.g., "optional")
    #[props(default)]
    pub hint: Option<String>,
    /// Validation message shown under the field, empty when valid
    #[props(default)]
    pub error: String,
    /// Input type (text, email, tel, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: email(),
///         oninput: move |s| email.set(s),
///         label: "Email address".to_string(),
///         input_type: "email".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = use_hook(|| props.id.clone().unwrap_or_else(|| next_field_id("input")));
    let error_id = format!("{id}-error");
    let invalid = !props.error.is_empty();
    let class = if invalid {
        "input-field input-invalid"
    } else {
        "input-field"
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", "{hint_suffix(hint)}" }
                    }
                }
            }
            input {
                id: "{id}",
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                "aria-invalid": invalid,
                "aria-describedby": "{error_id}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            if invalid {
                p { id: "{error_id}", class: "input-error", "{props.error}" }
            }
        }
    }
}

/// Text appended to a label for its hint, e.g. " (optional)"
fn hint_suffix(hint: &str) -> String {
    format!(" ({})", hint.trim())
}

/// Generate a process-unique ID for form elements
fn next_field_id(prefix: &str) -> String {
    static NEXT: AtomicU32 = AtomicU32::new(0);
    format!("{}-{}", prefix, NEXT.fetch_add(1, Ordering::Relaxed))
}

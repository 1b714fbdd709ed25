//! Home page.
//!
//! Landing view with a "call me back" request: the visitor leaves an email
//! address and gets a toast confirming it, or explaining what is wrong.

use dioxus::prelude::*;
use surecover_ui::{use_notifications, Button, ButtonVariant, Input};

/// Why an email address was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailProblem {
    Empty,
    Malformed,
}

impl EmailProblem {
    pub fn message(&self) -> &'static str {
        match self {
            EmailProblem::Empty => "Enter your email address",
            EmailProblem::Malformed => "Enter a valid email address, like ada@example.ng",
        }
    }
}

/// Shallow client-side check; the quote service does the real validation.
pub fn validate_email(raw: &str) -> Result<String, EmailProblem> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EmailProblem::Empty);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(EmailProblem::Malformed);
    };
    let domain_ok = domain
        .split('.')
        .all(|label| !label.is_empty())
        && domain.contains('.');
    if local.is_empty() || !domain_ok || email.contains(char::is_whitespace) {
        return Err(EmailProblem::Malformed);
    }
    Ok(email.to_string())
}

#[component]
pub fn Home() -> Element {
    let toasts = use_notifications();
    let mut email = use_signal(String::new);
    let mut error = use_signal(String::new);

    let request_callback = {
        let toasts = toasts.clone();
        move |_| match validate_email(&email()) {
            Ok(address) => {
                error.set(String::new());
                email.set(String::new());
                tracing::info!("Callback requested");
                let body = format!("We sent a code to {address}");
                toasts.success("Check your email", Some(&body));
            }
            Err(problem) => {
                error.set(problem.message().to_string());
                toasts.error("Request failed", Some(problem.message()));
            }
        }
    };

    let clear = move |_| {
        toasts.clear();
    };

    rsx! {
        main { class: "home",
            header { class: "home-header",
                h1 { class: "page-title", "SureCover" }
                p { class: "tagline", "Property insurance for Nigerian homes, quoted in minutes." }
            }

            section { class: "card",
                h2 { class: "card-title", "Talk to an agent" }
                p { class: "card-text",
                    "Leave your email and we will send a code to confirm your callback."
                }
                Input {
                    value: email(),
                    oninput: move |s| email.set(s),
                    label: "Email address".to_string(),
                    hint: "we only use it to reach you".to_string(),
                    placeholder: "ada@example.ng".to_string(),
                    input_type: "email".to_string(),
                    required: true,
                    error: error(),
                }
                div { class: "card-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: request_callback,
                        "Request callback"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: clear,
                        "Clear notifications"
                    }
                }
            }
        }
    }
}

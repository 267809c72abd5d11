//! Loading and message banners shared by every page.

use dioxus::prelude::*;

/// Banner colour.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Severity {
    #[default]
    Error,
    Success,
}

impl Severity {
    fn class(self) -> &'static str {
        match self {
            Severity::Error => "alert alert--error",
            Severity::Success => "alert alert--success",
        }
    }
}

#[component]
pub fn Alert(message: String, #[props(default)] severity: Severity) -> Element {
    rsx! {
        div {
            class: severity.class(),
            role: "alert",
            "{message}"
        }
    }
}

/// Centered spinner with an optional caption.
#[component]
pub fn Spinner(#[props(default)] label: Option<String>) -> Element {
    rsx! {
        div {
            class: "spinner-container",
            div { class: "spinner" }
            if let Some(label) = label {
                p { class: "spinner-label", "{label}" }
            }
        }
    }
}

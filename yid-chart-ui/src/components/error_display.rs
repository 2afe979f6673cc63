//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #3d1f1f; color: #f1938e; \
                    border-radius: 4px; border: 1px solid #6e2b28;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}

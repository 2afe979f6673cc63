//! Loading spinner component.

use dioxus::prelude::*;

/// Simple loading indicator shown while a view waits for its data.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #8b949e;",
            "Loading data..."
        }
    }
}

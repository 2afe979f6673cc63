//! Heading for one data section.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    pub title: String,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        h2 {
            style: "margin: 24px 0 8px 0; font-size: 20px;",
            "{props.title}"
        }
    }
}

//! Horizontally scrollable strip of selectable filter items.
//!
//! A permanent "Show all" entry comes first and reports index -1; the i-th
//! caller-supplied item reports index i. The caller owns the selection
//! state and re-derives its filtered dataset. While the pointer is over
//! the strip, two nudge buttons scroll it by 80% of its visible width.

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

/// Fraction of the visible width one nudge scrolls by.
const SCROLL_STEP: f64 = 0.8;

/// One selectable entry: a cover image when available, a text label otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselItem {
    pub name: String,
    pub image_url: Option<String>,
}

impl CarouselItem {
    pub fn text(name: impl Into<String>) -> Self {
        CarouselItem {
            name: name.into(),
            image_url: None,
        }
    }

    pub fn image(name: impl Into<String>, url: impl Into<String>) -> Self {
        CarouselItem {
            name: name.into(),
            image_url: Some(url.into()),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct FilterCarouselProps {
    /// DOM id of the scroll strip; must be unique per carousel.
    pub id: String,
    pub items: Vec<CarouselItem>,
    /// Currently selected index; -1 means "show all".
    pub selected_index: i32,
    /// Called with -1 for "Show all" or the index of the chosen item.
    pub on_select: EventHandler<i32>,
    /// Strip height in rem.
    #[props(default = 8)]
    pub height_rem: u32,
}

/// Scrollable filter strip with hover-triggered nudge buttons.
#[component]
pub fn FilterCarousel(props: FilterCarouselProps) -> Element {
    let mut hovered = use_signal(|| false);
    let outer_style = format!("position: relative; height: {}rem; margin: 8px 0;", props.height_rem);

    rsx! {
        div {
            style: "{outer_style}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),

            if hovered() {
                ScrollNudge { target: props.id.clone(), direction: ScrollDirection::Left }
                ScrollNudge { target: props.id.clone(), direction: ScrollDirection::Right }
            }

            div {
                id: "{props.id}",
                style: "display: flex; gap: 8px; align-items: center; height: 100%; overflow-x: auto; scroll-behavior: smooth;",

                div {
                    style: item_style(props.selected_index == -1),
                    onclick: move |_| props.on_select.call(-1),
                    div { style: "{TEXT_STYLE}", "Show all" }
                }

                for (index, item) in props.items.iter().enumerate() {
                    div {
                        key: "{index}",
                        style: item_style(props.selected_index == index as i32),
                        onclick: move |_| props.on_select.call(index as i32),
                        if let Some(url) = &item.image_url {
                            img {
                                src: "{url}",
                                alt: "{item.name}",
                                style: "height: 100%; border-radius: 4px; display: block;",
                            }
                        } else {
                            div { style: "{TEXT_STYLE}", "{item.name}" }
                        }
                    }
                }
            }
        }
    }
}

const TEXT_STYLE: &str =
    "padding: 8px 12px; font-size: 13px; color: #ddd; white-space: nowrap;";

fn item_style(selected: bool) -> String {
    let border = if selected { "#58a6ff" } else { "transparent" };
    format!(
        "flex: 0 0 auto; height: 100%; display: flex; align-items: center; \
         cursor: pointer; border: 2px solid {border}; border-radius: 6px;"
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    fn sign(&self) -> f64 {
        match self {
            ScrollDirection::Left => -1.0,
            ScrollDirection::Right => 1.0,
        }
    }
}

/// Signed scroll distance for one nudge of a strip `visible_width` px wide.
fn scroll_delta(visible_width: f64, direction: ScrollDirection) -> f64 {
    SCROLL_STEP * direction.sign() * visible_width
}

#[component]
fn ScrollNudge(target: String, direction: ScrollDirection) -> Element {
    let side = match direction {
        ScrollDirection::Left => "left: 4px;",
        ScrollDirection::Right => "right: 4px;",
    };
    let label = match direction {
        ScrollDirection::Left => "\u{2039}",
        ScrollDirection::Right => "\u{203a}",
    };
    let style = format!(
        "position: absolute; top: 50%; transform: translateY(-50%); {side} \
         z-index: 2; width: 32px; height: 32px; border-radius: 50%; border: none; \
         background: rgba(0, 0, 0, 0.6); color: #fff; font-size: 18px; cursor: pointer;"
    );

    rsx! {
        button {
            style: "{style}",
            onclick: move |_| nudge(&target, direction),
            "{label}"
        }
    }
}

/// Scroll the strip with the given DOM id by one nudge. No wrap-around;
/// the browser clamps at either end.
fn nudge(strip_id: &str, direction: ScrollDirection) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(strip_id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
    match element {
        Some(element) => {
            let delta = scroll_delta(element.offset_width() as f64, direction);
            element.scroll_by_with_x_and_y(delta, 0.0);
        }
        None => log::warn!("carousel strip {strip_id} not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_delta_is_80_percent_of_visible_width() {
        assert_eq!(scroll_delta(1000.0, ScrollDirection::Right), 800.0);
        assert_eq!(scroll_delta(1000.0, ScrollDirection::Left), -800.0);
        assert_eq!(scroll_delta(0.0, ScrollDirection::Right), 0.0);
    }

    #[test]
    fn test_item_constructors() {
        let text = CarouselItem::text("Show all");
        assert_eq!(text.image_url, None);
        let image = CarouselItem::image("B01", "https://img/cover.jpg");
        assert_eq!(image.image_url.as_deref(), Some("https://img/cover.jpg"));
    }
}

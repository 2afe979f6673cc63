//! Navbar with the year dropdown.

use crate::state::current_year;
use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use yid_data::dates::{year_range, FIRST_DASHBOARD_YEAR};

#[derive(Props, Clone, PartialEq)]
pub struct YearNavbarProps {
    /// The year currently displayed.
    pub year: i32,
    /// Called with the chosen year; the parent owns the year state.
    pub on_select: EventHandler<i32>,
}

/// Fixed top bar offering every year from 2023 through the current one.
/// Selecting a year drops focus from the control and notifies the parent.
#[component]
pub fn YearNavbar(props: YearNavbarProps) -> Element {
    let years = year_range(FIRST_DASHBOARD_YEAR, current_year());

    let on_change = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            blur_active_element();
            props.on_select.call(year);
        }
    };

    rsx! {
        nav {
            style: "position: sticky; top: 0; z-index: 10; display: flex; align-items: center; gap: 12px; \
                    padding: 8px 16px; background: #161b22; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.5);",
            select {
                id: "year-select",
                style: "font-weight: bold; padding: 4px 8px; border-radius: 4px;",
                onchange: on_change,
                for year in years {
                    option {
                        value: "{year}",
                        selected: year == props.year,
                        "{year}"
                    }
                }
            }
            span { style: "font-weight: 600; font-size: 20px;", "Year in data" }
        }
    }
}

/// Drop focus from whichever control triggered the selection.
fn blur_active_element() {
    if let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())
    {
        if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = element.blur();
        }
    }
}

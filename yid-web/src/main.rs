//! Year in Data -- personal dashboard of yearly activity heatmaps.
//!
//! Each view fetches its category's records from the backend API and
//! paints a cal-heatmap calendar through the yid-chart-ui bridge. The
//! navbar year is the only shared state; everything else stays local to
//! the view that owns it.

use dioxus::prelude::*;
use yid_chart_ui::components::YearNavbar;
use yid_chart_ui::js_bridge;
use yid_chart_ui::state::AppState;

mod views;

use views::Home;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("year-in-data-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // One-time: evaluate the bridge once cal-heatmap's script tag loads.
    use_effect(|| js_bridge::init_heatmaps());

    rsx! {
        div {
            style: "background: #0d1117; min-height: 100vh; color: #e6edf3;",
            YearNavbar {
                year: (state.year)(),
                on_select: move |year| state.year.set(year),
            }
            Home {}
        }
    }
}

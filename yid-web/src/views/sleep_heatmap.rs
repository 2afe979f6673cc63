//! Sleep duration heatmap view.

use super::DESCRIPTION_STYLE;
use dioxus::prelude::*;
use yid_api::ApiClient;
use yid_chart_ui::components::{ErrorDisplay, HeatmapContainer, LoadingSpinner, SectionHeader};
use yid_chart_ui::heatmap::{ColorSpec, Heatmap, HeatmapSpec};
use yid_chart_ui::state::AppState;
use yid_data::records::SleepRecord;
use yid_data::transform::Aggregation;

/// d3's five-step RdBu diverging range: red for short nights, blue for long.
const SLEEP_RDBU: [&str; 5] = ["#ca0020", "#f4a582", "#f7f7f7", "#92c5de", "#0571b0"];

fn sleep_spec() -> HeatmapSpec {
    HeatmapSpec {
        name: "sleep".to_string(),
        date_col: "date".to_string(),
        value_col: "total_duration_hours".to_string(),
        legend_label: "Hours slept".to_string(),
        units: "hours".to_string(),
        color: ColorSpec::range(&SLEEP_RDBU, [6.0, 7.0, 8.0, 9.0]),
        group_y: Aggregation::Sum,
    }
}

#[component]
pub fn SleepHeatmap() -> Element {
    let state = use_context::<AppState>();
    let mut records = use_signal(Vec::<SleepRecord>::new);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);
    let chart = use_hook(|| Heatmap::new("sleep"));

    {
        let chart = chart.clone();
        use_drop(move || chart.dispose());
    }

    use_effect(move || {
        spawn(async move {
            match ApiClient::new().fetch_sleep().await {
                Ok(data) => {
                    records.set(data);
                    loading.set(false);
                }
                Err(err) => {
                    log::error!("sleep data fetch failed: {err}");
                    error_msg.set(Some(err.to_string()));
                    loading.set(false);
                }
            }
        });
    });

    {
        let chart = chart.clone();
        use_effect(move || {
            let year = (state.year)();
            let data = records.read().clone();
            if data.is_empty() {
                return;
            }
            chart.paint(&sleep_spec(), &data, year);
        });
    }

    rsx! {
        section {
            SectionHeader { title: "Sleep (From Fitbit)".to_string() }

            if let Some(message) = error_msg.read().as_ref() {
                ErrorDisplay { message: message.clone() }
            }
            if *loading.read() {
                LoadingSpinner {}
            }

            HeatmapContainer { name: "sleep".to_string() }

            p {
                style: "{DESCRIPTION_STYLE}",
                "Hours asleep per night. Red nights are the ones I paid for \
                 the next day."
            }
        }
    }
}

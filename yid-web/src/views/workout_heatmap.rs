//! Gym workout heatmap view.

use super::DESCRIPTION_STYLE;
use dioxus::prelude::*;
use yid_api::ApiClient;
use yid_chart_ui::components::{ErrorDisplay, HeatmapContainer, LoadingSpinner, SectionHeader};
use yid_chart_ui::heatmap::{ColorScheme, ColorSpec, Heatmap, HeatmapSpec};
use yid_chart_ui::state::AppState;
use yid_data::records::WorkoutRecord;
use yid_data::transform::Aggregation;

fn workout_spec() -> HeatmapSpec {
    HeatmapSpec {
        name: "workout".to_string(),
        date_col: "date".to_string(),
        value_col: "workout_duration_minutes".to_string(),
        legend_label: "Minutes working out".to_string(),
        units: "minutes".to_string(),
        color: ColorSpec::scheme(ColorScheme::YlGnBu, [40.0, 60.0, 80.0, 100.0]),
        // A day with two sessions shows the longest one, not the total.
        group_y: Aggregation::Max,
    }
}

#[component]
pub fn WorkoutHeatmap() -> Element {
    let state = use_context::<AppState>();
    let mut records = use_signal(Vec::<WorkoutRecord>::new);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);
    let chart = use_hook(|| Heatmap::new("workout"));

    {
        let chart = chart.clone();
        use_drop(move || chart.dispose());
    }

    // Effect 1: fetch once on mount; the task dies with the component.
    use_effect(move || {
        spawn(async move {
            match ApiClient::new().fetch_workouts().await {
                Ok(data) => {
                    records.set(data);
                    loading.set(false);
                }
                Err(err) => {
                    log::error!("workout data fetch failed: {err}");
                    error_msg.set(Some(err.to_string()));
                    loading.set(false);
                }
            }
        });
    });

    // Effect 2: repaint whenever the data or the displayed year changes.
    {
        let chart = chart.clone();
        use_effect(move || {
            let year = (state.year)();
            let data = records.read().clone();
            if data.is_empty() {
                return;
            }
            chart.paint(&workout_spec(), &data, year);
        });
    }

    rsx! {
        section {
            SectionHeader { title: "Workouts (From Strong)".to_string() }

            if let Some(message) = error_msg.read().as_ref() {
                ErrorDisplay { message: message.clone() }
            }
            if *loading.read() {
                LoadingSpinner {}
            }

            HeatmapContainer { name: "workout".to_string() }

            p {
                style: "{DESCRIPTION_STYLE}",
                "Each cell is the longest workout of that day. Anything over \
                 an hour and a half usually means I lost track of time at the gym."
            }
        }
    }
}

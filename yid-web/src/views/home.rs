//! Page composition: every category view with its display configuration.

use super::{
    GithubHeatmap, ReadingHeatmap, SleepHeatmap, TimeSeriesHeatmap, WorkoutHeatmap,
};
use dioxus::prelude::*;
use yid_chart_ui::heatmap::ColorScheme;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 16px; \
                    font-family: system-ui, -apple-system, sans-serif;",

            h1 { "Year in Data" }
            p {
                "A year of me, one day-cell at a time: what I read, lifted, \
                 committed, slept, and walked, pulled straight from the \
                 services that watched me do it."
            }

            WorkoutHeatmap {}

            ReadingHeatmap {}

            GithubHeatmap {}

            SleepHeatmap {}

            TimeSeriesHeatmap {
                name: "calorie".to_string(),
                data_url: "/calorie-data".to_string(),
                value_col: "calories".to_string(),
                title: "Calories burned (From Fitbit)".to_string(),
                description: "Apparently the average person burns about 2500 a \
                              day and Fitbit rounds generously upward. Here it \
                              is anyway.".to_string(),
                scheme: ColorScheme::YlOrRd,
                domain: [1500.0, 2000.0, 3000.0, 3500.0],
                buckets: vec![
                    (1500.0, "low".to_string()),
                    (2000.0, "normal".to_string()),
                    (3000.0, "active".to_string()),
                    (3500.0, "very active".to_string()),
                ],
                legend_label: "Calories burned".to_string(),
                units: "calories".to_string(),
            }

            TimeSeriesHeatmap {
                name: "step".to_string(),
                data_url: "/steps-data".to_string(),
                value_col: "steps".to_string(),
                title: "Steps per day (From Fitbit)".to_string(),
                description: "Saturdays carry the weekly average.".to_string(),
                scheme: ColorScheme::PuBuGn,
                domain: [1000.0, 5000.0, 10000.0, 15000.0],
                buckets: vec![
                    (1000.0, "low".to_string()),
                    (5000.0, "mid".to_string()),
                    (10000.0, "high".to_string()),
                ],
                legend_label: "Steps".to_string(),
                units: "steps".to_string(),
            }

            TimeSeriesHeatmap {
                name: "running".to_string(),
                data_url: "/running-data".to_string(),
                value_col: "distance_km".to_string(),
                title: "Running (From Fitbit)".to_string(),
                description: "Distance per day. The long gaps are not taper \
                              weeks.".to_string(),
                scheme: ColorScheme::GnBu,
                domain: [1.0, 3.0, 5.0, 10.0],
                buckets: vec![
                    (1.0, "light".to_string()),
                    (3.0, "steady".to_string()),
                    (5.0, "long".to_string()),
                    (10.0, "race day".to_string()),
                ],
                legend_label: "Kilometers run".to_string(),
                units: "km".to_string(),
            }
        }
    }
}

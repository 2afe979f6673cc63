//! GitHub commit heatmap view.

use super::DESCRIPTION_STYLE;
use dioxus::prelude::*;
use yid_api::ApiClient;
use yid_chart_ui::components::{ErrorDisplay, HeatmapContainer, LoadingSpinner, SectionHeader};
use yid_chart_ui::heatmap::{ColorSpec, Heatmap, HeatmapSpec};
use yid_chart_ui::state::AppState;
use yid_data::records::GithubRecord;
use yid_data::transform::Aggregation;

/// GitHub's own contribution-graph greens.
const GITHUB_GREENS: [&str; 4] = ["#9AE9A8", "#41C363", "#31A14E", "#206D38"];

fn github_spec() -> HeatmapSpec {
    HeatmapSpec {
        name: "github".to_string(),
        date_col: "date".to_string(),
        value_col: "total_commits".to_string(),
        legend_label: "Number of commits".to_string(),
        units: "commits".to_string(),
        color: ColorSpec::range(&GITHUB_GREENS, [5.0, 10.0, 15.0, 20.0]),
        group_y: Aggregation::Sum,
    }
}

#[component]
pub fn GithubHeatmap() -> Element {
    let state = use_context::<AppState>();
    let mut records = use_signal(Vec::<GithubRecord>::new);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);
    let chart = use_hook(|| Heatmap::new("github"));

    {
        let chart = chart.clone();
        use_drop(move || chart.dispose());
    }

    use_effect(move || {
        spawn(async move {
            match ApiClient::new().fetch_github().await {
                Ok(data) => {
                    records.set(data);
                    loading.set(false);
                }
                Err(err) => {
                    log::error!("github data fetch failed: {err}");
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
            chart.paint(&github_spec(), &data, year);
        });
    }

    rsx! {
        section {
            SectionHeader { title: "Commits (From GitHub)".to_string() }

            if let Some(message) = error_msg.read().as_ref() {
                ErrorDisplay { message: message.clone() }
            }
            if *loading.read() {
                LoadingSpinner {}
            }

            HeatmapContainer { name: "github".to_string() }

            p {
                style: "{DESCRIPTION_STYLE}",
                "Commits across all repositories, public and private. The \
                 empty stretches line up suspiciously well with exam season."
            }
        }
    }
}

//! Generic time-series heatmap view (steps, calories, running).
//!
//! Parameterized by endpoint, value column, color scheme, and a set of
//! labeled value buckets. The buckets drive both the threshold color
//! domain's companion filter carousel and the re-filtering: selecting a
//! bucket repaints with only the days whose value falls inside it.

use super::DESCRIPTION_STYLE;
use dioxus::prelude::*;
use yid_api::ApiClient;
use yid_chart_ui::components::{
    CarouselItem, ErrorDisplay, FilterCarousel, HeatmapContainer, LoadingSpinner, SectionHeader,
};
use yid_chart_ui::heatmap::{ColorScheme, ColorSpec, Heatmap, HeatmapSpec};
use yid_chart_ui::state::AppState;
use yid_data::records::GenericRecord;
use yid_data::transform::{Aggregation, ValueBuckets};

#[derive(Props, Clone, PartialEq)]
pub struct TimeSeriesHeatmapProps {
    /// Category name; DOM ids and the chart registry key derive from it.
    pub name: String,
    /// API path, e.g. "/steps-data".
    pub data_url: String,
    /// Column of the API rows holding the day's value.
    pub value_col: String,
    pub title: String,
    #[props(default = String::new())]
    pub description: String,
    pub scheme: ColorScheme,
    /// Threshold breakpoints for the color scale.
    pub domain: [f64; 4],
    /// (breakpoint, label) pairs for the bucket filter carousel.
    pub buckets: Vec<(f64, String)>,
    pub legend_label: String,
    pub units: String,
}

#[component]
pub fn TimeSeriesHeatmap(props: TimeSeriesHeatmapProps) -> Element {
    let state = use_context::<AppState>();
    let mut records = use_signal(Vec::<GenericRecord>::new);
    let mut selected_bucket = use_signal(|| -1i32);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);
    let chart = use_hook({
        let name = props.name.clone();
        move || Heatmap::new(name)
    });

    {
        let chart = chart.clone();
        use_drop(move || chart.dispose());
    }

    let buckets = ValueBuckets::new(
        props.buckets.iter().map(|(breakpoint, label)| (*breakpoint, label.clone())),
    );
    let spec = HeatmapSpec {
        name: props.name.clone(),
        date_col: "date".to_string(),
        // fetch_series normalizes the per-category column to "value".
        value_col: "value".to_string(),
        legend_label: props.legend_label.clone(),
        units: props.units.clone(),
        color: ColorSpec::scheme(props.scheme, props.domain),
        group_y: Aggregation::Sum,
    };

    // Effect 1: fetch once on mount.
    {
        let name = props.name.clone();
        let data_url = props.data_url.clone();
        let value_col = props.value_col.clone();
        use_effect(move || {
            let name = name.clone();
            let data_url = data_url.clone();
            let value_col = value_col.clone();
            spawn(async move {
                match ApiClient::new().fetch_series(&data_url, &value_col).await {
                    Ok(data) => {
                        records.set(data);
                        loading.set(false);
                    }
                    Err(err) => {
                        log::error!("{name} data fetch failed: {err}");
                        error_msg.set(Some(err.to_string()));
                        loading.set(false);
                    }
                }
            });
        });
    }

    // Effect 2: repaint for the current bucket selection and year.
    {
        let chart = chart.clone();
        let spec = spec.clone();
        let buckets = buckets.clone();
        use_effect(move || {
            let year = (state.year)();
            let selected = selected_bucket();
            let all = records.read().clone();
            if all.is_empty() {
                return;
            }
            let visible = buckets.filter(&all, selected);
            chart.paint(&spec, &visible, year);
        });
    }

    let items: Vec<CarouselItem> = buckets
        .labels()
        .into_iter()
        .map(CarouselItem::text)
        .collect();

    rsx! {
        section {
            SectionHeader { title: props.title.clone() }

            if let Some(message) = error_msg.read().as_ref() {
                ErrorDisplay { message: message.clone() }
            }
            if *loading.read() {
                LoadingSpinner {}
            }

            HeatmapContainer { name: props.name.clone() }

            FilterCarousel {
                id: format!("{}-carousel", props.name),
                items: items,
                selected_index: selected_bucket(),
                on_select: move |index| selected_bucket.set(index),
                height_rem: 3,
            }

            if !props.description.is_empty() {
                p { style: "{DESCRIPTION_STYLE}", "{props.description}" }
            }
        }
    }
}

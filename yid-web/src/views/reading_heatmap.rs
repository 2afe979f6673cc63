//! Kindle reading heatmap view with the book filter carousel.

use super::DESCRIPTION_STYLE;
use dioxus::prelude::*;
use yid_api::{ApiClient, ApiError};
use yid_chart_ui::components::{
    CarouselItem, ErrorDisplay, FilterCarousel, HeatmapContainer, LoadingSpinner, SectionHeader,
};
use yid_chart_ui::heatmap::{ColorScheme, ColorSpec, Heatmap, HeatmapSpec};
use yid_chart_ui::state::AppState;
use yid_data::records::{DistinctBook, ReadingRecord};
use yid_data::transform::{select_book, Aggregation};

fn reading_spec() -> HeatmapSpec {
    HeatmapSpec {
        name: "reading".to_string(),
        date_col: "date".to_string(),
        value_col: "total_reading_minutes".to_string(),
        legend_label: "Minutes read".to_string(),
        units: "minutes".to_string(),
        color: ColorSpec::scheme(ColorScheme::YlOrBr, [20.0, 40.0, 60.0, 80.0]),
        group_y: Aggregation::Sum,
    }
}

#[component]
pub fn ReadingHeatmap() -> Element {
    let state = use_context::<AppState>();
    let mut records = use_signal(Vec::<ReadingRecord>::new);
    let mut books = use_signal(Vec::<DistinctBook>::new);
    let mut selected_book = use_signal(|| -1i32);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| None::<String>);
    let chart = use_hook(|| Heatmap::new("reading"));

    {
        let chart = chart.clone();
        use_drop(move || chart.dispose());
    }

    // Effect 1: fetch for the displayed year; re-runs when the year changes.
    use_effect(move || {
        let year = (state.year)();
        spawn(async move {
            let client = ApiClient::new();
            let fetched = async {
                let reading = client.fetch_reading(year).await?;
                let distinct = client.fetch_distinct_books(year).await?;
                Ok::<_, ApiError>((reading, distinct))
            }
            .await;

            // A slow response for a year the user has already left must not
            // clobber the newer one.
            if (state.year)() != year {
                return;
            }
            match fetched {
                Ok((reading, distinct)) => {
                    records.set(reading);
                    books.set(distinct);
                    selected_book.set(-1);
                    error_msg.set(None);
                    loading.set(false);
                }
                Err(err) => {
                    log::error!("reading data fetch failed: {err}");
                    error_msg.set(Some(err.to_string()));
                    loading.set(false);
                }
            }
        });
    });

    // Effect 2: repaint for the current book selection. Only the selected
    // book's records reach the chart; -1 paints the full dataset.
    {
        let chart = chart.clone();
        use_effect(move || {
            let year = (state.year)();
            let selected = selected_book();
            let all = records.read().clone();
            if all.is_empty() {
                return;
            }
            let visible = select_book(&all, &books.read(), selected);
            chart.paint(&reading_spec(), &visible, year);
        });
    }

    let items: Vec<CarouselItem> = books
        .read()
        .iter()
        .map(|book| match &book.book_image {
            Some(url) => CarouselItem::image(book.asin.clone(), url.clone()),
            None => CarouselItem::text(book.asin.clone()),
        })
        .collect();

    rsx! {
        section {
            SectionHeader { title: "Reading Activity (From Amazon Kindle)".to_string() }

            if let Some(message) = error_msg.read().as_ref() {
                ErrorDisplay { message: message.clone() }
            }
            if *loading.read() {
                LoadingSpinner {}
            }

            HeatmapContainer { name: "reading".to_string() }

            FilterCarousel {
                id: "reading-carousel".to_string(),
                items: items,
                selected_index: selected_book(),
                on_select: move |index| selected_book.set(index),
            }

            p {
                style: "{DESCRIPTION_STYLE}",
                "Reading comes and goes in waves. Pick a cover to see when a \
                 single book had me locked in; the e-ink phone is to blame \
                 for the dense stretches."
            }
        }
    }
}

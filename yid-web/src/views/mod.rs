//! One view component per data category, plus the page composition.

mod github_heatmap;
mod home;
mod reading_heatmap;
mod sleep_heatmap;
mod time_series_heatmap;
mod workout_heatmap;

pub use github_heatmap::GithubHeatmap;
pub use home::Home;
pub use reading_heatmap::ReadingHeatmap;
pub use sleep_heatmap::SleepHeatmap;
pub use time_series_heatmap::TimeSeriesHeatmap;
pub use workout_heatmap::WorkoutHeatmap;

/// Shared style for the descriptive paragraph under each chart.
pub(crate) const DESCRIPTION_STYLE: &str = "font-size: 13px; color: #8b949e; margin: 8px 0 0 0;";

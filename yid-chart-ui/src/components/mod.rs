//! Reusable Dioxus RSX components for the year-in-data app.

mod error_display;
mod filter_carousel;
mod heatmap_container;
mod loading_spinner;
mod section_header;
mod year_navbar;

pub use error_display::ErrorDisplay;
pub use filter_carousel::{CarouselItem, FilterCarousel};
pub use heatmap_container::HeatmapContainer;
pub use loading_spinner::LoadingSpinner;
pub use section_header::SectionHeader;
pub use year_navbar::YearNavbar;

//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the cross-view signals into a single struct provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. Per-view data (fetched records, filter
//! selections, loading/error flags) stays local to each view; the only
//! shared piece of state is the displayed year.

use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The calendar year every heatmap currently displays.
    pub year: Signal<i32>,
}

impl AppState {
    /// AppState starting at the current calendar year.
    pub fn new() -> Self {
        Self {
            year: Signal::new(current_year()),
        }
    }
}

/// The current calendar year according to the browser clock.
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

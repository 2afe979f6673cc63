//! Shared Dioxus components and cal-heatmap bridge for the year-in-data app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for cal-heatmap via `js_sys::eval()`
//! - `heatmap`: the declarative heatmap configuration builder
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (carousel, navbar, etc.)

pub mod components;
pub mod heatmap;
pub mod js_bridge;
pub mod state;

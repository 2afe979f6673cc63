//! Browser HTTP client for the year-in-data backend API.
//!
//! Every view fetches its own slice of data through [`ApiClient`]: a GET
//! against a fixed base URL with a fixed 5 second timeout, decoded from a
//! JSON array into the record types in `yid-data`. No caching, no retries,
//! no request deduplication; failures surface as [`ApiError`] and the view
//! decides what to show.

pub mod client;
pub mod error;

pub use client::{ApiClient, DEFAULT_BASE_URL, REQUEST_TIMEOUT_MS};
pub use error::{ApiError, Result};

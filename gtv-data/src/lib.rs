//! Core types and dataset loader for monthly global land-surface temperature data.
//!
//! This crate provides:
//! - `dataset`: the `Dataset` / `Observation` shapes served by the JSON endpoint
//! - `error`: the `FetchError` returned by every loader
//! - `api` (feature `api`): a native `reqwest` loader used by the CLI
//!
//! The browser loader lives in `gtv-chart-ui` and shares `FetchError`.

pub mod dataset;
pub mod error;

#[cfg(feature = "api")]
pub mod api;

pub use dataset::{month_names, Dataset, Observation};
pub use error::FetchError;

/// Endpoint serving the monthly land-surface temperature variance document.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

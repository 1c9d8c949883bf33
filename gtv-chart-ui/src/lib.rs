//! Dioxus components and browser loader for the temperature variance heat map.
//!
//! This crate provides:
//! - `loader`: one `fetch` of the dataset through `web-sys`
//! - `state`: `AppState` with Dioxus Signals, shared via context
//! - `components`: RSX components that draw a `HeatMapScene` as SVG

pub mod components;
pub mod loader;
pub mod state;

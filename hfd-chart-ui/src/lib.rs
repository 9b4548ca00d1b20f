//! Shared Dioxus components and D3.js bridge for the heart failure dashboards.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: reactive `AppState` / `PredictorState` built from Dioxus Signals
//! - `components`: reusable RSX components (cards, selectors, predictor form, ...)

pub mod js_bridge;
pub mod state;
pub mod components;

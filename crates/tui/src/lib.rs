//! Terminal front-end for the logger picker.
//!
//! [`App`] owns the picker state, a query input and a background worker that
//! talks to the configured [`logpick_core::Backend`]. [`run`] drives it in the
//! terminal until the user quits and reports what was applied.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;
pub mod worker;

#[cfg(test)]
mod snapshot_tests;

pub use app::{App, AppOptions, SessionSummary};
pub use config::UiLabels;
pub use input::QueryInput;
pub use runtime::run;
pub use style::{StyleConfig, Theme, builtin_themes, by_name, default_theme, names};

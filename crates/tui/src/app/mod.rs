//! Application state and behavior for the interactive picker.
//!
//! The [`App`] type aggregates the picker core, input widgets and the remote
//! worker handle. Supporting modules partition the implementation: actions
//! (input handling), rendering and remote result processing.

mod actions;
mod remote;
mod render;
mod state;

pub use state::{App, AppOptions, SessionSummary};

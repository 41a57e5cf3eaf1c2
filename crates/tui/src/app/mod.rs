//! Core application state and behavior for the showcase.
//!
//! The [`App`] type aggregates the catalog, selection and theme state.
//! Supporting modules partition the implementation into focused pieces:
//! input handling, rendering, the sidebar and detail panes, and the
//! background clipboard writer.

mod actions;
mod copy;
mod detail;
mod render;
mod sidebar;
mod state;

pub use state::{App, SessionOutcome};

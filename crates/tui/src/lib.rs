//! Interactive terminal UI for browsing a component catalog.
//!
//! This crate holds the full TUI application: the event loop, rendering
//! pipeline, state management, the sample renderers, and the themes that
//! style them.

mod app;
mod clipboard;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

pub use app::{App, SessionOutcome};
pub use clipboard::{Osc52, TerminalClipboard};
pub use config::UiLabels;
pub use runtime::run;

pub use crate::input::QueryInput;
pub use crate::style::{Theme, ThemeSet, builtin_themes};

#[cfg(test)]
mod test_support;

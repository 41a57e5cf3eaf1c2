//! Visual styling for the showcase.
//!
//! Themes are color schemes keyed by [`ThemeMode`](showcase_catalog::ThemeMode);
//! the renderer picks one per frame from the current preference.

pub mod theme;

pub use theme::{Theme, ThemeRegistration, ThemeSet, builtin_themes};

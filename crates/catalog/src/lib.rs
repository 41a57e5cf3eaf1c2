//! Catalog model for the `showcase` component browser.
//!
//! The crate owns everything that has semantics independent of the terminal:
//! the [`Entry`] records and the [`Catalog`] that holds them, the pure
//! [`filter`] and [`group`] passes that feed the sidebar, and the two pieces of
//! mutable session state ([`SelectionState`] and [`ThemePreference`]). The
//! rendering crate consumes these types without reaching into their internals.

mod catalog;
mod clipboard;
mod entry;
mod error;
mod filter;
mod group;
mod library;
mod selection;
mod theme;

pub use catalog::Catalog;
pub use clipboard::{Clipboard, ClipboardError};
pub use entry::{AlertLevel, Badge, BadgeVariant, ButtonVariant, Entry, Preview};
pub use error::CatalogError;
pub use filter::filter;
pub use group::{Groups, group};
pub use library::builtin;
pub use selection::{COPY_RESET_DELAY, SelectionState, Tab};
pub use theme::{ThemeMode, ThemePreference};

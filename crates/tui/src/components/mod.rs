//! UI building blocks shared across rendering and state modules.

/// Source listings with line numbers.
pub mod code;
/// Sample previews drawn as text.
pub mod samples;
/// Scroll bookkeeping and the scrollbar widget.
pub mod scrollbar;
/// Search row and tab bar.
pub mod tabs;

pub use code::{code_lines, listing};
pub use samples::{SampleContext, center_block, format_date, sample_lines, validate_email};
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
pub use tabs::{InputContext, render_input, render_tab_bar};

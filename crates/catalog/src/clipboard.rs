use thiserror::Error;

/// Destination for the "copy code" action.
///
/// Implementations write `text` to whatever clipboard the environment offers.
/// The selection state only cares whether the write succeeded.
pub trait Clipboard {
	/// Place `text` on the clipboard.
	fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: Clipboard + ?Sized> Clipboard for Box<C> {
	fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
		(**self).write_text(text)
	}
}

/// Reasons a clipboard write can fail.
#[derive(Debug, Error)]
pub enum ClipboardError {
	/// No clipboard mechanism is reachable from this process.
	#[error("no clipboard mechanism is available")]
	Unavailable,

	/// A clipboard mechanism was found but the write failed.
	#[error("clipboard write failed")]
	Io(#[from] std::io::Error),

	/// The background writer stopped before reporting a result.
	#[error("clipboard writer disconnected")]
	Disconnected,
}

use std::sync::{Arc, Mutex};

use showcase_catalog::{Clipboard, ClipboardError};

/// Records every write so tests can inspect it from another thread.
#[derive(Clone, Default)]
pub(crate) struct SharedClipboard {
	pub writes: Arc<Mutex<Vec<String>>>,
}

impl SharedClipboard {
	pub fn written(&self) -> Vec<String> {
		self.writes.lock().expect("clipboard lock").clone()
	}
}

impl Clipboard for SharedClipboard {
	fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
		self.writes
			.lock()
			.expect("clipboard lock")
			.push(text.to_string());
		Ok(())
	}
}

//! Background clipboard writes.
//!
//! Clipboard tools can block for a noticeable time, so writes run on a worker
//! thread and their outcomes are pumped back into the selection state by the
//! event loop.

use std::io;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;

use showcase_catalog::{Clipboard, ClipboardError};

enum CopyCommand {
	Write { id: u64, text: String },
	Shutdown,
}

/// Outcome of one clipboard write.
pub(crate) struct CopyResult {
	pub id: u64,
	pub result: Result<(), ClipboardError>,
}

/// Owns the clipboard worker thread.
///
/// Every request is written in order and every outcome is reported; a newer
/// copy never cancels an older one still in flight.
pub(crate) struct CopyRuntime {
	tx: Sender<CopyCommand>,
	rx: Receiver<CopyResult>,
	next_id: u64,
	in_flight: usize,
}

impl CopyRuntime {
	pub(crate) fn spawn(clipboard: Box<dyn Clipboard + Send>) -> io::Result<Self> {
		let (command_tx, command_rx) = channel();
		let (result_tx, result_rx) = channel();

		thread::Builder::new()
			.name("clipboard-writer".into())
			.spawn(move || worker_loop(clipboard, command_rx, result_tx))?;

		Ok(Self {
			tx: command_tx,
			rx: result_rx,
			next_id: 0,
			in_flight: 0,
		})
	}

	/// Queue `text` for the clipboard and return the request id.
	///
	/// If the worker is gone the failure is reported through [`try_recv`](Self::try_recv)
	/// like any other write.
	pub(crate) fn request(&mut self, text: String) -> u64 {
		self.next_id = self.next_id.wrapping_add(1);
		let id = self.next_id;
		if self.tx.send(CopyCommand::Write { id, text }).is_err() {
			tracing::warn!(id, "clipboard worker is not running");
		}
		self.in_flight += 1;
		id
	}

	/// Take the next finished write, if any.
	pub(crate) fn try_recv(&mut self) -> Option<CopyResult> {
		match self.rx.try_recv() {
			Ok(result) => {
				self.in_flight = self.in_flight.saturating_sub(1);
				Some(result)
			}
			Err(TryRecvError::Empty) => None,
			Err(TryRecvError::Disconnected) if self.in_flight > 0 => {
				self.in_flight -= 1;
				Some(CopyResult {
					id: self.next_id,
					result: Err(ClipboardError::Disconnected),
				})
			}
			Err(TryRecvError::Disconnected) => None,
		}
	}

	/// Number of writes requested but not yet reported.
	pub(crate) fn in_flight(&self) -> usize {
		self.in_flight
	}
}

impl Drop for CopyRuntime {
	fn drop(&mut self) {
		let _ = self.tx.send(CopyCommand::Shutdown);
	}
}

fn worker_loop(
	mut clipboard: Box<dyn Clipboard + Send>,
	command_rx: Receiver<CopyCommand>,
	result_tx: Sender<CopyResult>,
) {
	while let Ok(command) = command_rx.recv() {
		match command {
			CopyCommand::Write { id, text } => {
				let result = clipboard.write_text(&text);
				if result_tx.send(CopyResult { id, result }).is_err() {
					break;
				}
			}
			CopyCommand::Shutdown => break,
		}
	}
}

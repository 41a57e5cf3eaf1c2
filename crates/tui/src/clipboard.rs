//! Terminal clipboard access.
//!
//! Two routes exist. [`Osc52`] produces an escape sequence the event loop
//! writes through the terminal backend between frames, so it never races
//! the renderer for stdout. [`TerminalClipboard`] pipes text into the usual
//! clipboard commands and is safe to run on a worker thread.

use std::env;
use std::io::{self, IsTerminal, Write};
use std::process::{Child, Command, Stdio};

use base64::Engine;
use showcase_catalog::{Clipboard, ClipboardError};

/// OSC 52 clipboard writes, emitted by the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Osc52 {
	inside_tmux: bool,
}

impl Osc52 {
	/// OSC 52 when stdout is a terminal, else `None`.
	#[must_use]
	pub fn detect() -> Option<Self> {
		io::stdout().is_terminal().then(|| Self {
			inside_tmux: env::var_os("TMUX").is_some(),
		})
	}

	#[must_use]
	pub fn new(inside_tmux: bool) -> Self {
		Self { inside_tmux }
	}

	/// The escape sequence that places `text` on the clipboard.
	#[must_use]
	pub fn sequence(&self, text: &str) -> String {
		let encoded = base64::engine::general_purpose::STANDARD.encode(text);
		if self.inside_tmux {
			format!("\x1bPtmux;\x1b\x1b]52;c;{encoded}\x07\x1b\\")
		} else {
			format!("\x1b]52;c;{encoded}\x07")
		}
	}
}

/// Writes to the system clipboard through `wl-copy`, `xclip`, `xsel` or
/// `pbcopy`, whichever is installed first. Never touches stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
	fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
		let wayland = env::var_os("WAYLAND_DISPLAY").is_some();
		let tools = NATIVE_TOOLS
			.iter()
			.filter(|(program, _)| wayland || *program != "wl-copy");
		write_with_tools(tools, text)
	}
}

const NATIVE_TOOLS: &[(&str, &[&str])] = &[
	("wl-copy", &[]),
	("xclip", &["-selection", "clipboard"]),
	("xsel", &["--clipboard", "--input"]),
	("pbcopy", &[]),
];

fn write_with_tools<'t, I>(tools: I, text: &str) -> Result<(), ClipboardError>
where
	I: IntoIterator<Item = &'t (&'t str, &'t [&'t str])>,
{
	for (program, args) in tools {
		match pipe_into(program, args, text) {
			Ok(()) => {
				tracing::debug!(program, "copied with native clipboard tool");
				return Ok(());
			}
			Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
			Err(err) => return Err(ClipboardError::Io(err)),
		}
	}
	Err(ClipboardError::Unavailable)
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> io::Result<()> {
	let mut child = Command::new(program)
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()?;
	if let Some(mut stdin) = child.stdin.take()
		&& let Err(err) = stdin.write_all(text.as_bytes())
	{
		drop(stdin);
		reap(&mut child);
		return Err(err);
	}
	let status = child.wait()?;
	if status.success() {
		Ok(())
	} else {
		Err(io::Error::other(format!("{program} exited with {status}")))
	}
}

/// Kill and wait for a child whose input could not be delivered.
fn reap(child: &mut Child) {
	if let Err(err) = child.kill() {
		tracing::debug!(error = %err, "clipboard tool already exited");
	}
	if let Err(err) = child.wait() {
		tracing::warn!(error = %err, "failed to reap clipboard tool");
	}
}

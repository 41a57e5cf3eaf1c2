//! Application runtime and event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use showcase_catalog::Catalog;

use crate::App;
use crate::app::SessionOutcome;
use crate::clipboard::{Osc52, TerminalClipboard};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Browse `catalog` with the default settings until the user quits.
pub fn run(catalog: Catalog) -> Result<SessionOutcome> {
	App::new(catalog, Box::new(TerminalClipboard))?
		.with_osc52(Osc52::detect())
		.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user quits.
	pub fn run(&mut self) -> Result<SessionOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture)?;
		tracing::info!(entries = self.catalog.len(), "showcase started");

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<SessionOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if let Some(outcome) = self.handle_key(key) {
							maybe_outcome = Some(outcome);
							break;
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			self.tick(Instant::now());
			self.flush_terminal_writes(terminal.backend_mut(), Instant::now());

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(FRAME_INTERVAL);
		};

		ratatui::restore();
		execute!(stdout(), DisableMouseCapture)?;

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		if let Ok(outcome) = &result {
			tracing::info!(selected = %outcome.selected_id, theme = %outcome.theme.mode(), "showcase closed");
		}
		result
	}
}

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, ToastLevel, update};
use crate::document::read_lines;
use crate::editor::EditorBuffer;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if
    /// terminal initialization or the event loop hits an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let _run_scope = crate::perf::scope("app.run.total");

        let (buffer, is_new_file) = self.load_initial_buffer()?;

        let init_scope = crate::perf::scope("app.ratatui_init");
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal: runedit requires an interactive terminal")?;
        let size = terminal.size()?;
        drop(init_scope);

        let mut model = Model::new(self.file_path.clone(), buffer, (size.width, size.height))
            .with_line_ending(self.line_ending);
        if is_new_file {
            model.show_toast(ToastLevel::Info, format!("New file: {}", model.display_name()));
        }

        let result = Self::event_loop(&mut terminal, &mut model);

        ratatui::restore();
        result
    }

    /// Read the starting buffer. A missing file starts an empty one.
    fn load_initial_buffer(&self) -> Result<(EditorBuffer, bool)> {
        let _scope = crate::perf::scope("app.read_file");
        match read_lines(&self.file_path) {
            Ok(lines) => Ok((
                EditorBuffer::from_lines(lines).with_history_limit(self.history_limit),
                false,
            )),
            Err(err) if err.is_not_found() => {
                tracing::info!(path = %self.file_path.display(), "starting new file");
                Ok((
                    EditorBuffer::empty().with_history_limit(self.history_limit),
                    true,
                ))
            }
            Err(err) => Err(err).context("Failed to open file"),
        }
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;
        let mut frame_idx: u64 = 0;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if needs_render {
                frame_idx += 1;
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }

            let poll_ms = if model.active_toast().is_some() { 100 } else { 250 };
            if !event::poll(Duration::from_millis(poll_ms))? {
                continue;
            }

            // Apply this event and any already queued behind it (key repeat
            // bursts, pastes) before drawing again.
            let mut handled = 0_u32;
            loop {
                if let Some(msg) = Self::handle_event(&event::read()?, model) {
                    crate::perf::log_event(
                        "event.message",
                        format!("frame={frame_idx} msg={msg:?}"),
                    );
                    Self::dispatch(model, msg);
                    handled += 1;
                    needs_render = true;
                }
                if model.should_quit || !event::poll(Duration::from_millis(0))? {
                    break;
                }
            }
            if handled > 1 {
                crate::perf::log_event(
                    "event.drain",
                    format!("frame={frame_idx} handled={handled}"),
                );
            }
        }

        Ok(())
    }

    /// Apply `msg` to the model, then run its side effects.
    pub(super) fn dispatch(model: &mut Model, msg: Message) {
        let side_msg = msg.clone();
        *model = update(std::mem::take(model), msg);
        Self::handle_message_side_effects(model, &side_msg);
    }
}

use crate::app::{App, Message, Model, ToastLevel};
use crate::document::{read_lines, write_lines};

impl App {
    /// Perform the file I/O a message asks for.
    ///
    /// Failures become error toasts; the buffer and its history are left
    /// exactly as they were.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        match msg {
            Message::Save => save(model),
            Message::Reload => reload(model),
            _ => {}
        }
    }
}

fn save(model: &mut Model) {
    let _scope = crate::perf::scope("file.save");
    match write_lines(&model.file_path, model.buffer.document(), model.line_ending) {
        Ok(()) => {
            model.buffer.mark_clean();
            let lines = model.buffer.line_count();
            let noun = if lines == 1 { "line" } else { "lines" };
            model.show_toast(
                ToastLevel::Info,
                format!("Saved {lines} {noun} to {}", model.display_name()),
            );
            if model.quit_confirmed {
                model.should_quit = true;
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "save failed");
            crate::perf::log_event("save.error", err.to_string());
            model.quit_confirmed = false;
            model.show_toast(ToastLevel::Error, format!("Save failed: {err}"));
        }
    }
}

fn reload(model: &mut Model) {
    let _scope = crate::perf::scope("file.reload");
    match read_lines(&model.file_path) {
        Ok(lines) => {
            model.buffer.load_document(lines);
            model.search = None;
            model.viewport.go_to_top();
            model.sync_viewport();
            model.show_toast(ToastLevel::Info, "Reloaded (Ctrl+Z to undo)");
        }
        Err(err) => {
            tracing::warn!(error = %err, "reload failed");
            crate::perf::log_event("reload.error", err.to_string());
            model.show_toast(ToastLevel::Error, format!("Reload failed: {err}"));
        }
    }
}

use crate::app::Model;
use crate::app::model::ToastLevel;
use crate::editor::Direction;
use crate::search::{SearchMatch, SearchResults};

/// All possible events and actions in the application.
///
/// File I/O messages ([`Message::Save`], [`Message::Reload`]) carry no
/// state change here; the event loop performs them as side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Insert a character at the cursor
    InsertChar(char),
    /// Split the line at the cursor
    InsertNewline,
    /// Delete the character before the cursor
    DeleteBack,
    /// Undo the last edit
    Undo,
    /// Redo the last undone edit
    Redo,

    // Navigation
    /// Move the cursor one step
    MoveCursor(Direction),
    /// Move to the start of the line
    MoveHome,
    /// Move to the end of the line
    MoveEnd,
    /// Move to the start of the document
    MoveToStart,
    /// Move to the end of the document
    MoveToEnd,

    // Search
    /// Open the search prompt
    StartSearch,
    /// Replace the query being typed
    SearchInput(String),
    /// Run the typed query and jump to the first match
    SubmitSearch,
    /// Close the prompt without searching
    CancelSearch,
    /// Jump to the next match, wrapping around
    NextMatch,
    /// Jump to the previous match, wrapping around
    PrevMatch,
    /// Drop search results
    ClearSearch,

    // File
    /// Write the buffer to its file
    Save,
    /// Replace the buffer with the file's contents
    Reload,

    // System
    /// Terminal resized
    Resize(u16, u16),
    /// Quit the application
    Quit,
}

impl Message {
    /// Whether this message can change document content.
    const fn edits(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_) | Self::InsertNewline | Self::DeleteBack | Self::Undo | Self::Redo
        )
    }
}

/// Apply a message to the model.
pub fn update(mut model: Model, msg: Message) -> Model {
    // Save preserves the quit flag so Ctrl+S can complete a pending quit.
    if !matches!(msg, Message::Quit | Message::Save) {
        model.quit_confirmed = false;
    }
    // Match positions go stale as soon as content changes.
    if msg.edits() {
        model.search = None;
    }

    match msg {
        Message::InsertChar(ch) => model.buffer.insert_char(ch),
        Message::InsertNewline => model.buffer.insert_newline(),
        Message::DeleteBack => {
            model.buffer.delete_back();
        }
        Message::Undo => {
            if !model.buffer.undo() {
                model.show_toast(ToastLevel::Info, "Nothing to undo");
            }
        }
        Message::Redo => {
            if !model.buffer.redo() {
                model.show_toast(ToastLevel::Info, "Nothing to redo");
            }
        }

        Message::MoveCursor(direction) => model.buffer.move_cursor(direction),
        Message::MoveHome => model.buffer.move_home(),
        Message::MoveEnd => model.buffer.move_end(),
        Message::MoveToStart => model.buffer.move_to_start(),
        Message::MoveToEnd => model.buffer.move_to_end(),

        Message::StartSearch => {
            let previous = model
                .search
                .as_ref()
                .map(|results| results.query().to_string())
                .unwrap_or_default();
            model.search_input = Some(previous);
        }
        Message::SearchInput(query) => {
            if model.search_input.is_some() {
                model.search_input = Some(query);
            }
        }
        Message::SubmitSearch => {
            if let Some(query) = model.search_input.take() {
                submit_search(&mut model, &query);
            }
        }
        Message::CancelSearch => model.search_input = None,
        Message::NextMatch => step_search(&mut model, SearchResults::next_match),
        Message::PrevMatch => step_search(&mut model, SearchResults::prev_match),
        Message::ClearSearch => model.search = None,

        Message::Resize(width, height) => model.resize(width, height),
        Message::Quit => {
            if model.buffer.is_dirty() && !model.quit_confirmed {
                model.quit_confirmed = true;
                model.show_toast(
                    ToastLevel::Warning,
                    "Unsaved changes. Esc to discard, Ctrl+S to save and quit",
                );
            } else {
                model.should_quit = true;
            }
        }

        Message::Save | Message::Reload => {}
    }

    model.sync_viewport();
    model
}

fn submit_search(model: &mut Model, query: &str) {
    if query.is_empty() {
        model.search = None;
        return;
    }
    let results = SearchResults::new(model.buffer.document(), query);
    match results.current() {
        Some(first) => model.buffer.jump_to(first),
        None => model.show_toast(ToastLevel::Info, format!("No matches for \"{query}\"")),
    }
    model.search = Some(results);
}

fn step_search(model: &mut Model, step: fn(&mut SearchResults) -> Option<SearchMatch>) {
    let Some(results) = model.search.as_mut() else {
        model.show_toast(ToastLevel::Info, "No active search (Ctrl+F)");
        return;
    };
    if let Some(found) = step(results) {
        model.buffer.jump_to(found);
    }
}

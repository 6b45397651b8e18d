use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Message, Model};
use crate::editor::Direction;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if model.search_prompt_active() {
                    search_prompt_key(*key, model)
                } else {
                    editor_key(*key)
                }
            }
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }
}

/// Keys while typing a search query.
fn search_prompt_key(key: KeyEvent, model: &Model) -> Option<Message> {
    let query = model.search_input.as_deref().unwrap_or_default();
    match key.code {
        KeyCode::Esc => Some(Message::CancelSearch),
        KeyCode::Enter => Some(Message::SubmitSearch),
        KeyCode::Backspace => {
            let mut query = query.to_string();
            query.pop();
            Some(Message::SearchInput(query))
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::SearchInput(format!("{query}{c}")))
        }
        _ => None,
    }
}

/// Keys while editing.
pub(super) fn editor_key(key: KeyEvent) -> Option<Message> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char('s') if ctrl => Some(Message::Save),
        KeyCode::Char('o') if ctrl => Some(Message::Reload),
        KeyCode::Char('z') if ctrl => Some(Message::Undo),
        KeyCode::Char('y') if ctrl => Some(Message::Redo),
        KeyCode::Char('f') if ctrl => Some(Message::StartSearch),
        KeyCode::Char('n') if ctrl => Some(Message::NextMatch),
        KeyCode::Char('p') if ctrl => Some(Message::PrevMatch),
        KeyCode::F(3) if key.modifiers.contains(KeyModifiers::SHIFT) => Some(Message::PrevMatch),
        KeyCode::F(3) => Some(Message::NextMatch),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(c) => Some(Message::InsertChar(c)),
        KeyCode::Enter => Some(Message::InsertNewline),
        KeyCode::Backspace => Some(Message::DeleteBack),
        KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
        KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
        KeyCode::Home if ctrl => Some(Message::MoveToStart),
        KeyCode::End if ctrl => Some(Message::MoveToEnd),
        KeyCode::Home => Some(Message::MoveHome),
        KeyCode::End => Some(Message::MoveEnd),
        _ => None,
    }
}

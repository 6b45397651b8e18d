use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::document::LineEnding;
use crate::editor::EditorBuffer;
use crate::search::SearchResults;
use crate::ui::viewport::Viewport;

/// Rows reserved below the text for the status bar.
const STATUS_ROWS: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// The editing session
    pub buffer: EditorBuffer,
    /// Scroll position of the text area
    pub viewport: Viewport,
    /// File the buffer is loaded from and saved to
    pub file_path: PathBuf,
    /// Terminator written after each line on save
    pub line_ending: LineEnding,
    /// Query being typed while the search prompt is open
    pub search_input: Option<String>,
    /// Results of the last submitted search
    pub search: Option<SearchResults>,
    /// Set once the event loop should exit
    pub should_quit: bool,
    /// Set after first quit attempt with unsaved changes; allows second quit to proceed
    pub quit_confirmed: bool,
    toast: Option<Toast>,
}

impl Model {
    /// Create a model for `buffer` on a terminal of `size` (width, height).
    pub fn new(file_path: PathBuf, buffer: EditorBuffer, size: (u16, u16)) -> Self {
        let (width, height) = size;
        let viewport = Viewport::new(
            width,
            height.saturating_sub(STATUS_ROWS),
            buffer.line_count(),
        );
        Self {
            buffer,
            viewport,
            file_path,
            line_ending: LineEnding::default(),
            search_input: None,
            search: None,
            should_quit: false,
            quit_confirmed: false,
            toast: None,
        }
    }

    pub const fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Resize the text area for a terminal of `width` x `height`.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport
            .resize(width, height.saturating_sub(STATUS_ROWS));
        self.sync_viewport();
    }

    /// Keep the viewport in step with the buffer after any change.
    pub fn sync_viewport(&mut self) {
        self.viewport.set_total_lines(self.buffer.line_count());
        self.viewport.follow(self.buffer.cursor().line);
    }

    pub const fn search_prompt_active(&self) -> bool {
        self.search_input.is_some()
    }

    /// One-based index of the current match and the match count.
    pub fn current_search_match(&self) -> Option<(usize, usize)> {
        self.search.as_ref().and_then(SearchResults::position)
    }

    /// File name for display.
    pub fn display_name(&self) -> String {
        self.file_path.file_name().map_or_else(
            || "untitled".to_string(),
            |s| s.to_string_lossy().to_string(),
        )
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(PathBuf::new(), EditorBuffer::empty(), (80, 24))
    }
}

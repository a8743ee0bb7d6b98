use ratatui::prelude::Rect;
use tui_textarea::Input;
use tui_textarea::Key;

use super::Interpreter;
use super::Scroll;
use super::ScrollbackView;
use super::Session;
use crate::domain::models::Entry;
use crate::domain::models::Resume;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

pub struct AppStateProps {
    pub greeting: String,
    pub username: Option<String>,
}

pub struct AppState {
    pub interpreter: Interpreter,
    pub last_known_height: usize,
    pub last_known_width: usize,
    pub resume: Resume,
    pub scroll: Scroll,
    pub scrollback_view: ScrollbackView,
    pub session: Session,
}

impl AppState {
    pub fn new(props: AppStateProps) -> AppState {
        let session = Session::new(&props.greeting, props.username);
        tracing::info!(username = session.username(), "session started");

        let mut app_state = AppState {
            interpreter: Interpreter::new(),
            last_known_height: 0,
            last_known_width: 0,
            resume: Resume::default(),
            scroll: Scroll::default(),
            scrollback_view: ScrollbackView::default(),
            session,
        };

        app_state.sync_dependants();
        return app_state;
    }

    pub fn handle_resume_loaded(&mut self, resume: Resume) {
        tracing::debug!(
            work = resume.work.as_ref().map(|e| e.len()).unwrap_or_default(),
            skills = resume.skills.as_ref().map(|e| e.len()).unwrap_or_default(),
            "resume loaded"
        );
        self.resume = resume;
    }

    pub fn add_entry(&mut self, entry: Entry) {
        self.session.push_entry(entry);
        self.sync_dependants();
        self.scroll.last();
    }

    /// Submits the live buffer. Returns false when it was blank.
    pub fn submit_input(&mut self) -> bool {
        let input = self.session.input().to_string();
        if !self.session.submit(&input, &self.interpreter, &self.resume) {
            return false;
        }

        self.sync_dependants();
        self.scroll.last();
        return true;
    }

    pub fn recall_previous(&mut self) {
        self.session.recall_previous();
        self.sync_input();
    }

    pub fn recall_next(&mut self) {
        self.session.recall_next();
        self.sync_input();
    }

    pub fn handle_paste(&mut self, text: &str) {
        self.session.push_str(text);
        self.sync_input();
    }

    pub fn handle_key_input(&mut self, input: Input) {
        match input {
            Input {
                key: Key::Char(c),
                ctrl: false,
                alt: false,
                ..
            } => self.session.push_char(c),
            Input {
                key: Key::Backspace,
                ..
            } => self.session.pop_char(),
            Input { key: Key::Esc, .. } => self.session.clear_input(),
            _ => return,
        }

        self.sync_input();
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width.into();
        self.last_known_height = rect.height.into();
        self.sync_dependants();
    }

    /// Buffer edits always bring the prompt back into view.
    fn sync_input(&mut self) {
        self.sync_dependants();
        self.scroll.last();
    }

    fn sync_dependants(&mut self) {
        self.scrollback_view
            .set_session(&self.session, self.last_known_width);

        let scrollbar_at_bottom = self.scroll.is_position_at_last();
        self.scroll
            .set_state(self.scrollback_view.line_count(), self.last_known_height);

        if scrollbar_at_bottom {
            self.scroll.last();
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use rand::seq::SliceRandom;
use rand::Rng;

use super::Interpreter;
use crate::domain::models::Entry;
use crate::domain::models::Resume;

const ADJECTIVES: [&str; 4] = ["cool", "bright", "cheerful", "clever"];
const NOUNS: [&str; 4] = ["cat", "dog", "fox", "owl"];

/// Terminal session state: scrollback, live input buffer and command history.
///
/// The history cursor always satisfies `0 <= cursor <= history.len()`, where
/// `history.len()` means no history entry is selected and the buffer is live.
#[derive(Debug, Clone)]
pub struct Session {
    username: String,
    scrollback: Vec<Entry>,
    input: String,
    history: Vec<String>,
    history_cursor: usize,
}

impl Session {
    pub fn new(greeting: &str, username: Option<String>) -> Session {
        let username = username
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(Session::generate_username);

        return Session {
            username,
            scrollback: vec![Entry::system(greeting)],
            input: String::new(),
            history: vec![],
            history_cursor: 0,
        };
    }

    /// Generates an adjective-noun-number display name such as `clever-owl-42`.
    pub fn generate_username() -> String {
        let mut rng = rand::thread_rng();
        let adjective = ADJECTIVES.choose(&mut rng).unwrap_or(&ADJECTIVES[0]);
        let noun = NOUNS.choose(&mut rng).unwrap_or(&NOUNS[0]);
        let number = rng.gen_range(0..1000);

        return format!("{adjective}-{noun}-{number}");
    }

    pub fn username(&self) -> &str {
        return &self.username;
    }

    pub fn prompt(&self) -> String {
        return format!("{}@terminal:~$", self.username);
    }

    pub fn scrollback(&self) -> &[Entry] {
        return &self.scrollback;
    }

    pub fn input(&self) -> &str {
        return &self.input;
    }

    pub fn history(&self) -> &[String] {
        return &self.history;
    }

    pub fn history_cursor(&self) -> usize {
        return self.history_cursor;
    }

    pub fn append_entry(&mut self, input: Option<&str>, output: &str) {
        self.push_entry(Entry::new(input, output));
    }

    pub fn push_entry(&mut self, entry: Entry) {
        self.scrollback.push(entry);
    }

    /// Runs `raw_input` through the interpreter and records the result.
    /// Returns false, without touching any state, when the trimmed input is
    /// empty.
    pub fn submit(&mut self, raw_input: &str, interpreter: &Interpreter, resume: &Resume) -> bool {
        let input = raw_input.trim();
        if input.is_empty() {
            return false;
        }

        self.history.push(input.to_string());
        self.history_cursor = self.history.len();

        let output = interpreter.execute(input, resume);
        self.append_entry(Some(input), &output);
        self.input.clear();

        return true;
    }

    pub fn recall_previous(&mut self) {
        if self.history_cursor == 0 {
            return;
        }

        self.history_cursor -= 1;
        self.input = self.history[self.history_cursor].to_string();
    }

    pub fn recall_next(&mut self) {
        if self.history_cursor + 1 < self.history.len() {
            self.history_cursor += 1;
            self.input = self.history[self.history_cursor].to_string();
            return;
        }

        self.history_cursor = self.history.len();
        self.input.clear();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Pasted text is flattened onto the single input line.
    pub fn push_str(&mut self, text: &str) {
        let flattened = text.replace(['\r', '\n'], " ").replace('\t', "  ");
        self.input.push_str(&flattened);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }
}

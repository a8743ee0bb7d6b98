#[cfg(test)]
#[path = "scrollback_view_test.rs"]
mod tests;

use ratatui::prelude::Color;
use ratatui::prelude::Line;
use ratatui::prelude::Span;
use ratatui::prelude::Style;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use super::Session;
use crate::domain::models::EntryType;

const PROMPT_COLOR: Color = Color::Rgb(0x81, 0xa2, 0xbe);
const OUTPUT_COLOR: Color = Color::Rgb(0xc5, 0xc8, 0xc6);
const ERROR_COLOR: Color = Color::Rgb(0xcc, 0x66, 0x66);

/// Splits `text` into rows of at most `width` terminal cells. A character
/// wider than `width` gets a row of its own. A zero width disables wrapping.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.width() <= width {
        return vec![text.to_string()];
    }

    let mut rows = vec![];
    let mut row = String::new();
    let mut row_width = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or_default();
        if row_width + char_width > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }

        row.push(c);
        row_width += char_width;
    }

    if !row.is_empty() {
        rows.push(row);
    }

    return rows;
}

/// Wraps a prompt line, keeping the first `prompt_len` characters in the
/// prompt style even when they spill onto a second row.
fn prompt_lines(prompt: &str, input: &str, width: usize) -> Vec<Line<'static>> {
    let prompt_len = prompt.chars().count() + 1;
    let text = format!("{prompt} {input}");

    let mut offset = 0;
    let mut lines = vec![];
    for chunk in wrap_text(&text, width) {
        let chunk_len = chunk.chars().count();
        let split = prompt_len.saturating_sub(offset).min(chunk_len);
        let head = chunk.chars().take(split).collect::<String>();
        let tail = chunk.chars().skip(split).collect::<String>();

        let mut spans = vec![];
        if !head.is_empty() {
            spans.push(Span::styled(head, Style::default().fg(PROMPT_COLOR)));
        }
        if !tail.is_empty() {
            spans.push(Span::raw(tail));
        }

        lines.push(Line::from(spans));
        offset += chunk_len;
    }

    return lines;
}

/// The scrollback plus the live prompt, flattened into terminal rows.
#[derive(Debug, Default)]
pub struct ScrollbackView {
    lines: Vec<Line<'static>>,
    cursor: (usize, usize),
}

impl ScrollbackView {
    pub fn set_session(&mut self, session: &Session, width: usize) {
        let prompt = session.prompt();
        let mut lines = vec![];

        for entry in session.scrollback() {
            if let Some(input) = &entry.input {
                lines.append(&mut prompt_lines(&prompt, input, width));
            }

            let color = match entry.entry_type() {
                EntryType::Normal => OUTPUT_COLOR,
                EntryType::Error => ERROR_COLOR,
            };

            for line in entry.output_lines() {
                for chunk in wrap_text(line, width) {
                    lines.push(Line::styled(chunk, Style::default().fg(color)));
                }
            }

            lines.push(Line::default());
        }

        let live = prompt_lines(&prompt, session.input(), width);
        let last_row = live.len().saturating_sub(1);
        let last_width = live.last().map(Line::width).unwrap_or_default();
        let (row, col) = if width > 0 && last_width >= width {
            (last_row + 1, 0)
        } else {
            (last_row, last_width)
        };

        let live_start = lines.len();
        lines.extend(live);
        self.cursor = (live_start + row, col);
        self.lines = lines;
    }

    pub fn line_count(&self) -> usize {
        // The cursor may sit on a fresh row after a prompt that exactly fills
        // the width.
        return self.lines.len().max(self.cursor.0 + 1);
    }

    /// Row and column of the input cursor, in rendered lines.
    pub fn cursor(&self) -> (usize, usize) {
        return self.cursor;
    }

    pub fn visible_lines(&self, position: usize, height: usize) -> Vec<Line<'static>> {
        return self
            .lines
            .iter()
            .skip(position)
            .take(height)
            .cloned()
            .collect();
    }
}

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

/// Only the keys the prompt understands are mapped.
fn key_input(keyevent: &KeyEvent) -> Option<Input> {
    let key = match keyevent.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Esc => Key::Esc,
        _ => return None,
    };

    return Some(Input {
        key,
        ctrl: keyevent.modifiers.contains(KeyModifiers::CONTROL),
        alt: keyevent.modifiers.contains(KeyModifiers::ALT),
        shift: keyevent.modifiers.contains(KeyModifiers::SHIFT),
    });
}

fn handle_key(input: Input) -> Event {
    match input {
        Input { key: Key::Up, .. } => Event::KeyboardHistoryPrevious,
        Input { key: Key::Down, .. } => Event::KeyboardHistoryNext,
        Input {
            key: Key::PageUp, ..
        }
        | Input {
            key: Key::Char('u'),
            ctrl: true,
            ..
        } => Event::UIScrollPageUp,
        Input {
            key: Key::PageDown,
            ..
        }
        | Input {
            key: Key::Char('d'),
            ctrl: true,
            ..
        } => Event::UIScrollPageDown,
        Input {
            key: Key::Char('c'),
            ctrl: true,
            ..
        } => Event::KeyboardCTRLC,
        Input {
            key: Key::Enter, ..
        } => Event::KeyboardEnter,
        input => Event::KeyboardCharInput(input),
    }
}

fn handle_crossterm(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Paste(text) => return Some(Event::KeyboardPaste(text)),
        CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
            MouseEventKind::ScrollUp => return Some(Event::UIScrollUp),
            MouseEventKind::ScrollDown => return Some(Event::UIScrollDown),
            _ => return None,
        },
        CrosstermEvent::Key(keyevent) if keyevent.kind != KeyEventKind::Release => {
            return key_input(&keyevent).map(handle_key);
        }
        _ => return None,
    }
}

pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(500)) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}

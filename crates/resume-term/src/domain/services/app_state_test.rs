use ratatui::prelude::Rect;
use serde_json::json;
use tui_textarea::Input;
use tui_textarea::Key;

use super::*;
use crate::domain::models::EntryType;

fn app_state() -> AppState {
    let mut app_state = AppState::new(AppStateProps {
        greeting: "Welcome to Resume Terminal! Type 'help' to start.".to_string(),
        username: Some("bright-fox-12".to_string()),
    });
    app_state.set_rect(Rect::new(0, 0, 80, 5));
    app_state
}

fn key(key: Key) -> Input {
    Input {
        key,
        ..Default::default()
    }
}

fn type_text(app_state: &mut AppState, text: &str) {
    for c in text.chars() {
        app_state.handle_key_input(key(Key::Char(c)));
    }
}

#[test]
fn it_starts_with_a_greeting() {
    let app_state = app_state();
    assert_eq!(app_state.session.scrollback().len(), 1);
    assert!(app_state.session.history().is_empty());
    assert_eq!(app_state.session.history_cursor(), 0);
    assert_eq!(app_state.session.input(), "");
    assert_eq!(app_state.resume, Resume::default());
}

#[test]
fn it_types_and_submits_commands() {
    let mut app_state = app_state();
    type_text(&mut app_state, "work lisx");
    app_state.handle_key_input(key(Key::Backspace));
    type_text(&mut app_state, "t");
    assert_eq!(app_state.session.input(), "work list");

    assert!(app_state.submit_input());
    let entry = app_state.session.scrollback().last().unwrap();
    assert_eq!(entry.input.as_deref(), Some("work list"));
    assert_eq!(entry.output, "No work entries found.");
    assert_eq!(app_state.session.input(), "");
}

#[test]
fn it_ignores_control_chords_and_clears_on_escape() {
    let mut app_state = app_state();
    type_text(&mut app_state, "who");
    app_state.handle_key_input(Input {
        key: Key::Char('x'),
        ctrl: true,
        ..Default::default()
    });
    assert_eq!(app_state.session.input(), "who");

    app_state.handle_key_input(key(Key::Esc));
    assert_eq!(app_state.session.input(), "");
    assert!(!app_state.submit_input());
    assert_eq!(app_state.session.scrollback().len(), 1);
}

#[test]
fn it_runs_commands_before_the_resume_is_loaded_and_after() {
    let mut app_state = app_state();
    type_text(&mut app_state, "who");
    app_state.submit_input();
    assert_eq!(
        app_state.session.scrollback().last().unwrap().output,
        "No basics info found."
    );

    let resume: Resume = serde_json::from_value(json!({ "basics": { "name": "Ada" } })).unwrap();
    app_state.handle_resume_loaded(resume);
    app_state.add_entry(Entry::system("Resume data loaded from GitHub."));

    type_text(&mut app_state, "who");
    app_state.submit_input();
    assert!(app_state
        .session
        .scrollback()
        .last()
        .unwrap()
        .output
        .contains("  Name:        Ada"));
    assert_eq!(app_state.session.scrollback().len(), 4);
}

#[test]
fn it_keeps_the_document_when_the_source_fails() {
    let mut app_state = app_state();
    app_state.add_entry(Entry::system_error("Error fetching resume data: boom"));

    let entry = app_state.session.scrollback().last().unwrap();
    assert!(entry.is_system());
    assert_eq!(entry.entry_type(), EntryType::Error);
    assert_eq!(app_state.resume, Resume::default());
}

#[test]
fn it_navigates_history() {
    let mut app_state = app_state();
    for command in ["who", "help"] {
        type_text(&mut app_state, command);
        app_state.submit_input();
    }

    app_state.recall_previous();
    assert_eq!(app_state.session.input(), "help");
    app_state.recall_previous();
    assert_eq!(app_state.session.input(), "who");
    app_state.recall_next();
    app_state.recall_next();
    assert_eq!(app_state.session.input(), "");
}

#[test]
fn it_pastes_onto_the_input_line() {
    let mut app_state = app_state();
    app_state.handle_paste("work\nshow 1");
    assert_eq!(app_state.session.input(), "work show 1");
}

#[test]
fn it_follows_new_output_unless_scrolled_up() {
    let mut app_state = app_state();
    type_text(&mut app_state, "help");
    app_state.submit_input();
    assert!(app_state.scroll.is_position_at_last());
    let bottom = app_state.scroll.position();
    assert!(bottom > 0);

    app_state.scroll.up_page();
    assert!(!app_state.scroll.is_position_at_last());

    app_state.set_rect(Rect::new(0, 0, 80, 5));
    assert!(app_state.scroll.position() < bottom);

    type_text(&mut app_state, "w");
    assert!(app_state.scroll.is_position_at_last());
}

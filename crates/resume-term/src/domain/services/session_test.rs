use super::*;
use crate::domain::models::EntryType;

const GREETING: &str = "Welcome! Type 'help' to start.";

fn session() -> Session {
    Session::new(GREETING, Some("clever-owl-7".to_string()))
}

fn submit(session: &mut Session, input: &str) -> bool {
    session.submit(input, &Interpreter::new(), &Resume::default())
}

fn assert_cursor_invariant(session: &Session) {
    assert!(session.history_cursor() <= session.history().len());
}

#[test]
fn it_starts_with_the_greeting_only() {
    let session = session();
    assert_eq!(session.scrollback().len(), 1);
    assert_eq!(session.scrollback()[0], Entry::system(GREETING));
    assert!(session.history().is_empty());
    assert_eq!(session.history_cursor(), 0);
    assert_eq!(session.input(), "");
}

#[test]
fn it_generates_a_username_when_none_is_configured() {
    for username in [None, Some("  ".to_string())] {
        let session = Session::new(GREETING, username);
        let parts = session.username().split('-').collect::<Vec<&str>>();
        assert_eq!(parts.len(), 3);
        assert!(ADJECTIVES.contains(&parts[0]));
        assert!(NOUNS.contains(&parts[1]));
        assert!(parts[2].parse::<u32>().unwrap() < 1000);
    }
}

#[test]
fn it_uses_the_configured_username_for_the_prompt() {
    let session = session();
    assert_eq!(session.username(), "clever-owl-7");
    assert_eq!(session.prompt(), "clever-owl-7@terminal:~$");
}

#[test]
fn it_appends_entries() {
    let mut session = session();
    session.append_entry(None, "Resume data loaded from GitHub.");
    session.append_entry(Some("who"), "No basics info found.");

    assert_eq!(session.scrollback().len(), 3);
    assert!(session.scrollback()[1].is_system());
    assert_eq!(session.scrollback()[2].input.as_deref(), Some("who"));
}

#[test]
fn it_submits_trimmed_input() {
    let mut session = session();
    session.push_str("  work list  ");
    let input = session.input().to_string();
    assert!(submit(&mut session, &input));

    assert_eq!(session.scrollback().len(), 2);
    let entry = session.scrollback().last().unwrap();
    assert_eq!(entry.input.as_deref(), Some("work list"));
    assert_eq!(entry.output, "No work entries found.");
    assert_eq!(entry.entry_type(), EntryType::Normal);
    assert_eq!(session.history(), ["work list"]);
    assert_eq!(session.history_cursor(), 1);
    assert_eq!(session.input(), "");
}

#[test]
fn it_appends_exactly_one_entry_per_submission() {
    let mut session = session();
    for (i, input) in ["who", " help ", "foo bar", "work show 3"].iter().enumerate() {
        assert!(submit(&mut session, input));
        assert_eq!(session.scrollback().len(), i + 2);
        assert_eq!(
            session.scrollback().last().unwrap().input.as_deref(),
            Some(input.trim())
        );
        assert_eq!(session.history_cursor(), session.history().len());
    }
}

#[test]
fn it_ignores_blank_submissions() {
    let mut session = session();
    submit(&mut session, "who");
    session.recall_previous();
    let before = session.clone();

    for input in ["", "   ", "\t\n"] {
        assert!(!submit(&mut session, input));
    }

    assert_eq!(session.scrollback(), before.scrollback());
    assert_eq!(session.history(), before.history());
    assert_eq!(session.history_cursor(), before.history_cursor());
}

#[test]
fn it_recalls_previous_entries_and_stops_at_the_oldest() {
    let mut session = session();
    submit(&mut session, "who");
    submit(&mut session, "help");

    session.recall_previous();
    assert_eq!(session.input(), "help");
    assert_eq!(session.history_cursor(), 1);

    session.recall_previous();
    assert_eq!(session.input(), "who");
    assert_eq!(session.history_cursor(), 0);

    session.recall_previous();
    assert_eq!(session.input(), "who");
    assert_eq!(session.history_cursor(), 0);
    assert_cursor_invariant(&session);
}

#[test]
fn it_recalls_next_entries_and_lands_on_an_empty_buffer() {
    let mut session = session();
    submit(&mut session, "who");
    submit(&mut session, "help");

    session.recall_previous();
    session.recall_previous();
    session.recall_next();
    assert_eq!(session.input(), "help");
    assert_eq!(session.history_cursor(), 1);

    session.recall_next();
    assert_eq!(session.input(), "");
    assert_eq!(session.history_cursor(), 2);

    session.recall_next();
    assert_eq!(session.input(), "");
    assert_eq!(session.history_cursor(), 2);
    assert_cursor_invariant(&session);
}

#[test]
fn it_does_not_wrap_from_the_newest_entry() {
    let mut session = session();
    submit(&mut session, "who");
    submit(&mut session, "help");

    session.recall_previous();
    assert_eq!(session.input(), "help");
    session.recall_next();
    assert_eq!(session.input(), "");
    assert_eq!(session.history_cursor(), session.history().len());
}

#[test]
fn it_clears_a_live_buffer_when_recalling_next_without_history() {
    let mut session = session();
    session.push_str("wor");
    session.recall_next();
    assert_eq!(session.input(), "");
    assert_eq!(session.history_cursor(), 0);

    session.push_str("wor");
    session.recall_previous();
    assert_eq!(session.input(), "wor");
    assert_eq!(session.history_cursor(), 0);
}

#[test]
fn it_keeps_the_cursor_invariant_under_mixed_operations() {
    let mut session = session();
    let ops: [fn(&mut Session); 4] = [
        |s| s.recall_previous(),
        |s| s.recall_next(),
        |s| {
            submit(s, "who");
        },
        |s| {
            submit(s, " ");
        },
    ];

    for i in 0..64 {
        ops[(i * 7 + i / 3) % ops.len()](&mut session);
        assert_cursor_invariant(&session);
    }
}

#[test]
fn it_edits_the_live_buffer_without_touching_history() {
    let mut session = session();
    session.push_char('w');
    session.push_str("ork\nlist");
    assert_eq!(session.input(), "work list");
    session.pop_char();
    assert_eq!(session.input(), "work lis");
    session.clear_input();
    assert_eq!(session.input(), "");
    assert!(session.history().is_empty());
    assert_eq!(session.scrollback().len(), 1);
}

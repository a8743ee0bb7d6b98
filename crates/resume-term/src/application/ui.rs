#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::layout::Position;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;

/// Renders the visible slice of the scrollback and places the cursor at the
/// end of the live prompt when it is on screen.
fn render(frame: &mut Frame, app_state: &AppState) {
    let area = frame.area();
    let height = usize::from(area.height);
    let position = app_state.scroll.position();

    let lines = app_state.scrollback_view.visible_lines(position, height);
    frame.render_widget(Paragraph::new(lines), area);

    let (row, col) = app_state.scrollback_view.cursor();
    if row < position || row >= position + height {
        return;
    }

    let x = u16::try_from(col).unwrap_or(u16::MAX).min(area.width.saturating_sub(1));
    let y = u16::try_from(row - position).unwrap_or_default();
    frame.set_cursor_position(Position::new(area.x + x, area.y + y));
}

pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state_props: AppStateProps,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = AppState::new(app_state_props);
    let mut events = EventsService::new(rx);

    loop {
        terminal.draw(|frame| {
            app_state.set_rect(frame.area());
            render(frame, &app_state);
        })?;

        match events.next().await? {
            Event::ResumeLoaded(resume) => {
                app_state.handle_resume_loaded(resume);
            }
            Event::SourceMessage(entry) => {
                app_state.add_entry(entry);
            }
            Event::KeyboardCharInput(input) => {
                app_state.handle_key_input(input);
            }
            Event::KeyboardCTRLC => {
                tracing::info!("exit requested");
                tx.send(Action::AbortFetch)?;
                break;
            }
            Event::KeyboardEnter => {
                app_state.submit_input();
            }
            Event::KeyboardHistoryNext => {
                app_state.recall_next();
            }
            Event::KeyboardHistoryPrevious => {
                app_state.recall_previous();
            }
            Event::KeyboardPaste(text) => {
                app_state.handle_paste(&text);
            }
            Event::UIScrollDown => {
                app_state.scroll.down();
            }
            Event::UIScrollUp => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp => {
                app_state.scroll.up_page();
            }
            Event::UITick => {}
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

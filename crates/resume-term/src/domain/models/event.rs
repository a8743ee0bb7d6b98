use super::Entry;
use super::Resume;
use tui_textarea::Input;

#[derive(Debug)]
pub enum Event {
    ResumeLoaded(Resume),
    SourceMessage(Entry),
    KeyboardCharInput(Input),
    KeyboardCTRLC,
    KeyboardEnter,
    KeyboardHistoryNext,
    KeyboardHistoryPrevious,
    KeyboardPaste(String),
    UITick,
    UIScrollDown,
    UIScrollUp,
    UIScrollPageDown,
    UIScrollPageUp,
}

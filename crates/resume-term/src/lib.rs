//! Terminal user interface for browsing a JSON Resume document.
//!
//! The résumé is loaded once, from a local file or a GitHub gist, and explored
//! through a small set of shell-like commands such as `who`, `work list` and
//! `skills list`.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, Command, Entry, Event, Resume, ResumeSource};
pub use domain::services::{AppStateProps, Interpreter, Session};
pub use infrastructure::sources::SourceManager;

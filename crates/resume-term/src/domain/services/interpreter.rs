#[cfg(test)]
#[path = "interpreter_test.rs"]
mod tests;

use super::handlers;
use crate::domain::models::Command;
use crate::domain::models::CommandLine;
use crate::domain::models::Resume;

/// Maps trimmed input lines to display text.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {}

impl Interpreter {
    pub fn new() -> Interpreter {
        return Interpreter {};
    }

    fn dispatch(command: Command, args: &str, resume: &Resume) -> String {
        match command {
            Command::Who => handlers::show_basics(resume),
            Command::WorkList => handlers::list_work(resume),
            Command::WorkShow => handlers::show_work(args, resume),
            Command::SkillsList => handlers::list_skills(resume),
            Command::ReferencesList => handlers::list_references(resume),
            Command::Help => handlers::help_text(),
        }
    }

    pub fn execute(&self, input: &str, resume: &Resume) -> String {
        let line = match CommandLine::parse(input) {
            Some(line) => line,
            None => return String::new(),
        };

        match line.command() {
            Some(command) => {
                tracing::debug!(command = %command, args = %line.args, "executing command");
                return Interpreter::dispatch(command, &line.args, resume);
            }
            None => {
                tracing::debug!(key = %line.candidate_key, "unknown command");
                return format!("{} not found - try \"help\"", line.first_token);
            }
        }
    }
}

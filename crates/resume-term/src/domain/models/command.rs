#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

use std::str::FromStr;

use itertools::Itertools;
use strum::IntoEnumIterator;
use strum_macros::Display;
use strum_macros::EnumIter;
use strum_macros::EnumString;

/// Every command the terminal recognizes, keyed by its literal name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum Command {
    #[strum(serialize = "who")]
    Who,
    #[strum(serialize = "work list")]
    WorkList,
    #[strum(serialize = "work show")]
    WorkShow,
    #[strum(serialize = "skills list")]
    SkillsList,
    #[strum(serialize = "references list")]
    ReferencesList,
    #[strum(serialize = "help")]
    Help,
}

impl Command {
    /// Exact, case-sensitive lookup of a candidate key.
    pub fn lookup(key: &str) -> Option<Command> {
        return Command::from_str(key).ok();
    }

    pub fn keys() -> Vec<String> {
        return Command::iter().map(|e| e.to_string()).collect();
    }
}

/// A trimmed input line split into its lookup key and argument string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandLine {
    pub first_token: String,
    pub candidate_key: String,
    pub args: String,
}

impl CommandLine {
    pub fn parse(input: &str) -> Option<CommandLine> {
        let tokens = input.split_whitespace().collect::<Vec<&str>>();
        let first_token = tokens.first()?.to_string();
        let candidate_key = tokens.iter().take(2).join(" ");
        let args = tokens.iter().skip(2).join(" ");

        return Some(CommandLine {
            first_token,
            candidate_key,
            args,
        });
    }

    pub fn command(&self) -> Option<Command> {
        return Command::lookup(&self.candidate_key);
    }
}

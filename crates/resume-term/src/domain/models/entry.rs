#[cfg(test)]
#[path = "entry_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub enum EntryType {
    #[default]
    Normal,
    Error,
}

/// One scrollback record. `input` is `None` for system output such as the
/// greeting or résumé source diagnostics.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default, Debug)]
pub struct Entry {
    pub input: Option<String>,
    pub output: String,
    pub entry_type: EntryType,
}

impl Entry {
    pub fn new(input: Option<&str>, output: &str) -> Entry {
        return Entry {
            input: input.map(|e| e.to_string()),
            output: output.replace('\t', "  "),
            entry_type: EntryType::Normal,
        };
    }

    pub fn system(output: &str) -> Entry {
        return Entry::new(None, output);
    }

    pub fn system_error(output: &str) -> Entry {
        return Entry {
            entry_type: EntryType::Error,
            ..Entry::new(None, output)
        };
    }

    pub fn entry_type(&self) -> EntryType {
        return self.entry_type.clone();
    }

    pub fn is_system(&self) -> bool {
        return self.input.is_none();
    }

    pub fn output_lines(&self) -> Vec<&str> {
        if self.output.is_empty() {
            return vec![];
        }

        return self.output.split('\n').collect();
    }
}

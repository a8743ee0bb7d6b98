use async_trait::async_trait;
use strum_macros::Display;
use thiserror::Error;

use super::Resume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum SourceName {
    GithubGist,
    File,
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("{0}")]
    NotFound(String),
    #[error("Error fetching resume data: {0}")]
    Transport(String),
    #[error("Error fetching resume data: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(err.to_string())
    }
}

/// Somewhere a résumé document can be loaded from.
#[async_trait]
pub trait ResumeSource: Send + Sync {
    fn name(&self) -> SourceName;
    /// Scrollback text shown once the document has been loaded.
    fn loaded_message(&self) -> String;
    async fn fetch(&self) -> Result<Resume, SourceError>;
}

pub type ResumeSourceBox = Box<dyn ResumeSource>;

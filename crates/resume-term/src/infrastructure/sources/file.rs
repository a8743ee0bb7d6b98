#[cfg(test)]
#[path = "file_test.rs"]
mod tests;

use std::path;

use async_trait::async_trait;
use tokio::fs;

use crate::configuration::{Config, ConfigKey};
use crate::domain::models::{Resume, ResumeSource, SourceError, SourceName};

/// Loads a résumé from a JSON file on disk.
pub struct FileSource {
    path: path::PathBuf,
}

impl Default for FileSource {
    fn default() -> FileSource {
        FileSource::new(&Config::get(ConfigKey::ResumeFile))
    }
}

impl FileSource {
    pub fn new(path: &str) -> FileSource {
        FileSource {
            path: path::PathBuf::from(path),
        }
    }
}

#[async_trait]
impl ResumeSource for FileSource {
    fn name(&self) -> SourceName {
        SourceName::File
    }

    fn loaded_message(&self) -> String {
        format!("Resume data loaded from {}.", self.path.display())
    }

    async fn fetch(&self) -> Result<Resume, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::NotFound(format!(
                "No resume found at {}.",
                self.path.display()
            )));
        }

        let json = fs::read_to_string(&self.path)
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;

        return Ok(Resume::from_json(&json)?);
    }
}

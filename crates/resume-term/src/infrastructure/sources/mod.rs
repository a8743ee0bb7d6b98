pub mod file;
pub mod github_gist;

use crate::configuration::{Config, ConfigKey};
use crate::domain::models::ResumeSourceBox;
use crate::domain::models::SourceName;

pub struct SourceManager {}

impl SourceManager {
    /// Picks the configured source. A résumé file wins over a GitHub user.
    pub fn select(resume_file: &str, github_user: &str) -> Option<SourceName> {
        if !resume_file.is_empty() {
            return Some(SourceName::File);
        }

        if !github_user.is_empty() {
            return Some(SourceName::GithubGist);
        }

        None
    }

    pub fn get(name: SourceName) -> ResumeSourceBox {
        match name {
            SourceName::File => Box::<file::FileSource>::default(),
            SourceName::GithubGist => Box::<github_gist::GithubGist>::default(),
        }
    }

    pub fn from_config() -> Option<ResumeSourceBox> {
        let name = SourceManager::select(
            &Config::get(ConfigKey::ResumeFile),
            &Config::get(ConfigKey::GithubUser),
        )?;

        tracing::debug!(source = %name, "resume source selected");
        Some(SourceManager::get(name))
    }
}

#[cfg(test)]
#[path = "github_gist_test.rs"]
mod tests;

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use crate::configuration::{Config, ConfigKey};
use crate::domain::models::{Resume, ResumeSource, SourceError, SourceName};

const RESUME_FILE_NAME: &str = "resume.json";

#[derive(Debug, Deserialize)]
struct GistFile {
    raw_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Gist {
    #[serde(default)]
    files: HashMap<String, GistFile>,
}

/// Loads `resume.json` from the public gists of a GitHub user.
pub struct GithubGist {
    api_url: String,
    user: String,
    client: reqwest::Client,
}

impl Default for GithubGist {
    fn default() -> GithubGist {
        GithubGist::new(
            &Config::get(ConfigKey::GithubApiUrl),
            &Config::get(ConfigKey::GithubUser),
        )
    }
}

impl GithubGist {
    pub fn new(api_url: &str, user: &str) -> GithubGist {
        let client = reqwest::Client::builder()
            .user_agent(concat!("resume-term/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        GithubGist {
            api_url: api_url.trim_end_matches('/').to_string(),
            user: user.to_string(),
            client,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(url = url, status = status.as_u16(), "gist request failed");
            return Err(SourceError::Transport(format!(
                "GET {url} returned HTTP {}",
                status.as_u16()
            )));
        }

        let body = response.text().await?;
        return Ok(serde_json::from_str::<T>(&body)?);
    }

    async fn find_raw_url(&self) -> Result<String, SourceError> {
        let gists_url = format!("{}/users/{}/gists", self.api_url, self.user);
        let gists = self.get_json::<Vec<Gist>>(&gists_url).await?;
        tracing::debug!(user = %self.user, count = gists.len(), "listed gists");

        let resume_file = gists
            .into_iter()
            .find_map(|mut gist| gist.files.remove(RESUME_FILE_NAME));

        match resume_file {
            Some(GistFile {
                raw_url: Some(raw_url),
            }) => Ok(raw_url),
            Some(_) => Err(SourceError::Transport(format!(
                "gist file {RESUME_FILE_NAME} has no raw_url"
            ))),
            None => Err(SourceError::NotFound(format!(
                "No '{RESUME_FILE_NAME}' gist found for this user."
            ))),
        }
    }
}

#[async_trait]
impl ResumeSource for GithubGist {
    fn name(&self) -> SourceName {
        SourceName::GithubGist
    }

    fn loaded_message(&self) -> String {
        "Resume data loaded from GitHub.".to_string()
    }

    async fn fetch(&self) -> Result<Resume, SourceError> {
        if self.user.is_empty() {
            return Err(SourceError::Transport(
                "GitHub user is not defined".to_string(),
            ));
        }

        let raw_url = self.find_raw_url().await?;
        tracing::debug!(raw_url = %raw_url, "downloading resume gist");

        return self.get_json::<Resume>(&raw_url).await;
    }
}

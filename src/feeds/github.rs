use super::{EmojiIndex, EmojiSource};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;

pub const GITHUB_EMOJIS_URL: &str = "https://api.github.com/emojis";

pub struct GithubEmojiFetcher {
    endpoint: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl GithubEmojiFetcher {
    pub fn new(endpoint: String, token: Option<String>) -> Self {
        Self {
            endpoint,
            token,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl EmojiSource for GithubEmojiFetcher {
    async fn fetch(&self) -> Result<EmojiIndex> {
        tracing::debug!(endpoint = %self.endpoint, "fetching emoji index");

        let mut request = self
            .client
            .get(&self.endpoint)
            .header("User-Agent", "emojiplist")
            .header("Accept", "application/vnd.github.v3+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.endpoint))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow::anyhow!("{} ({})", status, self.endpoint));
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read response body from {}", self.endpoint))?;

        let index: EmojiIndex = serde_json::from_str(&body)
            .with_context(|| format!("failed to decode emoji list from {}", self.endpoint))?;

        tracing::info!(count = index.len(), "fetched emoji index");
        Ok(index)
    }
}

// File: src/client/core.rs
use crate::source::ScheduleSource;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;

/// HTTP client for the local file API served by `schedview-serve`.
#[derive(Clone, Debug)]
pub struct ShimClient {
    http: reqwest::Client,
    base: Url,
}

impl ShimClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .with_context(|| format!("Invalid server URL '{}'", base_url))?;
        if base.cannot_be_a_base() {
            return Err(anyhow!("Server URL '{}' cannot carry a path", base_url));
        }
        let http = reqwest::Client::builder()
            .user_agent(format!("schedview/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `segments` are percent-encoded individually, so a run name containing
    /// `/` or spaces stays one path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Server URL '{}' cannot carry a path", self.base))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response> {
        log::debug!("GET {}", url);
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status == StatusCode::NOT_FOUND {
            Err(anyhow!("Not found: {}", url.path()))
        } else {
            Err(anyhow!("Server answered {} for {}", status, url.path()))
        }
    }

    async fn get_json(&self, url: Url) -> Result<Vec<String>> {
        let response = self.get(url.clone()).await?;
        response
            .json()
            .await
            .with_context(|| format!("Malformed JSON from {}", url.path()))
    }

    pub async fn get_runs(&self) -> Result<Vec<String>> {
        self.get_json(self.endpoint(&["api", "runs"])?).await
    }

    pub async fn get_files(&self, run: &str) -> Result<Vec<String>> {
        self.get_json(self.endpoint(&["api", "run", run, "files"])?)
            .await
    }

    pub async fn get_csv(&self, run: &str, file: &str) -> Result<String> {
        let url = self.endpoint(&["api", "run", run, "file", file])?;
        let response = self.get(url.clone()).await?;
        response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {}", url.path()))
    }
}

#[async_trait]
impl ScheduleSource for ShimClient {
    async fn list_runs(&self) -> Result<Vec<String>> {
        self.get_runs().await
    }

    async fn list_files(&self, run: &str) -> Result<Vec<String>> {
        self.get_files(run).await
    }

    async fn fetch_file(&self, run: &str, file: &str) -> Result<String> {
        self.get_csv(run, file).await
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}

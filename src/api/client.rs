//! Blocking HTTP client for the sleep tracking REST API.

use reqwest::blocking::{Client, Response};
use std::time::Duration;

use super::SleepApi;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::new_entry::NewEntry;
use crate::models::stats::Stats;

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::new(&cfg.api_url, Duration::from_millis(cfg.request_timeout_ms))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Turn a non-success status into `AppError::Api`, keeping the server
    /// message so it can be shown to the user.
    fn check(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        } else {
            body.trim().to_string()
        };

        tracing::warn!(status = status.as_u16(), %message, "API request failed");
        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl SleepApi for ApiClient {
    fn get_entries(&self) -> AppResult<Vec<Entry>> {
        let url = self.url("entries");
        tracing::debug!(%url, "fetching entries");

        let raw: Vec<String> = Self::check(self.client.get(&url).send()?)?.json()?;
        let entries = Entry::parse_all(&raw)?;

        tracing::debug!(count = entries.len(), "entries fetched");
        Ok(entries)
    }

    fn add_entry(&self, entry: &NewEntry) -> AppResult<()> {
        let url = self.url("entry");
        tracing::debug!(%url, time = %entry.time, "posting entry");

        Self::check(self.client.post(&url).json(entry).send()?)?;
        Ok(())
    }

    fn remove_entry(&self) -> AppResult<()> {
        let url = self.url("entry");
        tracing::debug!(%url, "deleting last entry");

        Self::check(self.client.delete(&url).send()?)?;
        Ok(())
    }

    fn get_stats(&self) -> AppResult<Stats> {
        let url = self.url("stats");
        tracing::debug!(%url, "fetching stats");

        let stats = Self::check(self.client.get(&url).send()?)?.json()?;
        Ok(stats)
    }
}

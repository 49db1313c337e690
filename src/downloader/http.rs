//! reqwest-backed form source for the IRS file server

use super::{FetchResult, FormSource};
use crate::config::Config;
use crate::errors::FormsError;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

pub struct HttpFormSource {
    client: Client,
    base_url: String,
}

impl HttpFormSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.http_client()?, config.base_url.clone()))
    }

    pub fn url_for(&self, filename: &str) -> String {
        format!("{}/{}", self.base_url, filename)
    }
}

#[async_trait]
impl FormSource for HttpFormSource {
    async fn fetch(&self, filename: &str) -> Result<FetchResult, FormsError> {
        let url = self.url_for(filename);
        debug!("Fetching {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(FetchResult::NotFound);
        }
        if !status.is_success() {
            return Err(FormsError::HttpStatus {
                status_code: status.as_u16(),
                url,
            });
        }

        let content = response.bytes().await?;
        Ok(FetchResult::Found(content.to_vec()))
    }
}

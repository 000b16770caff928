//! Record sources for the registries.
//!
//! The demo panel ships with [`EmptySource`]; a real backend is reached with
//! [`HttpSource`], which expects a JSON array matching the record schema.

use archcraft_common::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[async_trait]
pub trait DataSource<T>: Send + Sync {
    async fn fetch(&self) -> Result<Vec<T>>;
}

/// Always succeeds with no records.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySource;

#[async_trait]
impl<T: Send + 'static> DataSource<T> for EmptySource {
    async fn fetch(&self) -> Result<Vec<T>> {
        Ok(Vec::new())
    }
}

/// Fixed in-memory records, returned on every fetch.
#[derive(Debug, Clone, Default)]
pub struct StaticSource<T>(pub Vec<T>);

#[async_trait]
impl<T: Clone + Send + Sync + 'static> DataSource<T> for StaticSource<T> {
    async fn fetch(&self) -> Result<Vec<T>> {
        Ok(self.0.clone())
    }
}

/// `GET <url>` returning a JSON array of records.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl<T: DeserializeOwned + Send + 'static> DataSource<T> for HttpSource {
    async fn fetch(&self) -> Result<Vec<T>> {
        let records = self.client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<T>>()
            .await?;
        Ok(records)
    }
}

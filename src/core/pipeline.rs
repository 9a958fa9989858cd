use crate::core::row_parser::parse_row;
use crate::core::{ConfigProvider, Feed, FeedEntry, Pipeline, Storage, TestCase};
use crate::utils::error::{Result, SuiteError};
use reqwest::Client;
use std::path::Path;

pub const SUITE_FILE: &str = "suite.json";
pub const SUITE_DIR: &str = "suite";

pub struct SuitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> SuitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            storage,
            config,
            client,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SuitePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<FeedEntry>> {
        tracing::debug!("Requesting feed: {}", self.config.feed_url());
        let response = self.client.get(self.config.feed_url()).send().await?;

        tracing::debug!("Feed response status: {}", response.status());
        let body = response.error_for_status()?.text().await?;

        let feed: Feed = serde_json::from_str(&body).map_err(SuiteError::FeedDecodeError)?;
        tracing::debug!("Feed contains {} entries", feed.feed.entry.len());

        Ok(feed.feed.entry)
    }

    async fn transform(&self, entries: Vec<FeedEntry>) -> Result<Vec<TestCase>> {
        let suite = entries
            .iter()
            .map(|entry| parse_row(entry.content()))
            .collect();
        Ok(suite)
    }

    async fn load(&self, suite: Vec<TestCase>) -> Result<String> {
        let output_path = Path::new(self.config.output_dir()).join(SUITE_FILE);

        self.storage.create_dir(SUITE_DIR).await?;

        let json = if self.config.pretty() {
            serde_json::to_vec_pretty(&suite)?
        } else {
            serde_json::to_vec(&suite)?
        };

        tracing::debug!("Writing {} test cases ({} bytes)", suite.len(), json.len());
        self.storage.write_file(SUITE_FILE, &json).await?;

        Ok(output_path.display().to_string())
    }
}

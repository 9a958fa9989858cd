use crate::domain::model::{FeedEntry, TestCase};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    /// Creates `path` and any missing parents under the storage root.
    fn create_dir(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Replaces `path` with `data`. Readers never observe a partial file.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn feed_url(&self) -> &str;
    fn output_dir(&self) -> &str;

    fn request_timeout(&self) -> Option<Duration> {
        None
    }

    fn pretty(&self) -> bool {
        false
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<FeedEntry>>;
    async fn transform(&self, entries: Vec<FeedEntry>) -> Result<Vec<TestCase>>;
    async fn load(&self, suite: Vec<TestCase>) -> Result<String>;
}

use crate::core::{Pipeline, TestCase};
use crate::utils::error::Result;

/// Drives a [`Pipeline`] through its stages, one after the other.
pub struct SuiteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SuiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Fetches and parses the feed without writing anything.
    pub async fn preview(&self) -> Result<Vec<TestCase>> {
        tracing::info!("Fetching test feed...");
        let entries = self.pipeline.extract().await?;
        tracing::info!("Fetched {} feed entries", entries.len());

        tracing::info!("Parsing rows...");
        let suite = self.pipeline.transform(entries).await?;
        tracing::info!("Parsed {} test cases", suite.len());

        Ok(suite)
    }

    /// Runs fetch, parse and write, returning the path of the written suite.
    pub async fn run(&self) -> Result<String> {
        let suite = self.preview().await?;

        tracing::info!("Writing test suite...");
        let output_path = self.pipeline.load(suite).await?;
        tracing::info!("Suite saved to: {}", output_path);

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedEntry;
    use crate::utils::error::SuiteError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPipeline {
        calls: Mutex<Vec<&'static str>>,
        fail_extract: bool,
    }

    #[async_trait::async_trait]
    impl Pipeline for RecordingPipeline {
        async fn extract(&self) -> Result<Vec<FeedEntry>> {
            self.calls.lock().unwrap().push("extract");
            if self.fail_extract {
                return Err(SuiteError::ConfigError {
                    message: "no feed".to_string(),
                });
            }
            Ok(vec![FeedEntry::new("expr: a"), FeedEntry::new("expr: b")])
        }

        async fn transform(&self, entries: Vec<FeedEntry>) -> Result<Vec<TestCase>> {
            self.calls.lock().unwrap().push("transform");
            Ok(entries
                .iter()
                .map(|e| crate::core::row_parser::parse_row(e.content()))
                .collect())
        }

        async fn load(&self, suite: Vec<TestCase>) -> Result<String> {
            self.calls.lock().unwrap().push("load");
            Ok(format!("{} cases", suite.len()))
        }
    }

    #[tokio::test]
    async fn test_run_executes_stages_in_order() {
        let engine = SuiteEngine::new(RecordingPipeline::default());

        let output = engine.run().await.unwrap();

        assert_eq!(output, "2 cases");
        assert_eq!(
            *engine.pipeline.calls.lock().unwrap(),
            vec!["extract", "transform", "load"]
        );
    }

    #[tokio::test]
    async fn test_preview_does_not_load() {
        let engine = SuiteEngine::new(RecordingPipeline::default());

        let suite = engine.preview().await.unwrap();

        assert_eq!(suite[0].expr, "a");
        assert_eq!(suite[1].expr, "b");
        assert_eq!(
            *engine.pipeline.calls.lock().unwrap(),
            vec!["extract", "transform"]
        );
    }

    #[tokio::test]
    async fn test_extract_failure_stops_the_run() {
        let engine = SuiteEngine::new(RecordingPipeline {
            fail_extract: true,
            ..Default::default()
        });

        assert!(engine.run().await.is_err());
        assert_eq!(*engine.pipeline.calls.lock().unwrap(), vec!["extract"]);
    }
}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{storage::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use crate::core::{etl::SuiteEngine, pipeline::SuitePipeline, row_parser::parse_row};
pub use crate::domain::model::{FeedEntry, TestCase};
pub use crate::utils::error::{Result, SuiteError};

use crate::core::ConfigProvider;

/// Fetches the feed named by `config` and writes `suite.json` under its
/// output directory. Returns the path of the written file.
pub async fn run<C: ConfigProvider>(config: C) -> Result<String> {
    let storage = LocalStorage::new(config.output_dir());
    let pipeline = SuitePipeline::new(storage, config)?;
    SuiteEngine::new(pipeline).run().await
}

/// Fetches and parses the feed named by `config` without touching disk.
pub async fn preview<C: ConfigProvider>(config: C) -> Result<Vec<TestCase>> {
    let storage = LocalStorage::new(config.output_dir());
    let pipeline = SuitePipeline::new(storage, config)?;
    SuiteEngine::new(pipeline).preview().await
}

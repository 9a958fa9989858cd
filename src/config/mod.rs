pub mod storage;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_FEED_URL: &str = "https://spreadsheets.google.com/feeds/list/0AjzMl1BJlJDkdDI2c0VUSHNZMnR6ZVR5S2hXZEdtd1E/1/public/basic?alt=json";

#[derive(Debug, Clone, Parser)]
#[command(name = "update-suite")]
#[command(about = "Download the spreadsheet test feed and write it out as suite.json")]
pub struct CliConfig {
    /// Spreadsheet feed to download
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    pub feed_url: String,

    /// Directory that receives suite.json and the suite/ folder
    #[arg(long, default_value = ".")]
    pub output_dir: String,

    /// Abort the feed request after this many seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Read feed and output settings from a TOML file instead
    #[arg(short, long)]
    pub config: Option<String>,

    /// Indent the written JSON
    #[arg(long)]
    pub pretty: bool,

    /// Fetch and parse only, write nothing
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn feed_url(&self) -> &str {
        &self.feed_url
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn pretty(&self) -> bool {
        self.pretty
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("feed_url", &self.feed_url)?;
        validate_path("output_dir", &self.output_dir)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

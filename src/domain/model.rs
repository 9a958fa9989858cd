use serde::{Deserialize, Serialize};

/// Top-level document returned by the spreadsheet list feed.
#[derive(Debug, Clone, Deserialize)]
pub struct Feed {
    pub feed: FeedBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedBody {
    // The feed drops the key entirely when the sheet has no rows.
    #[serde(default)]
    pub entry: Vec<FeedEntry>,
}

/// One spreadsheet row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEntry {
    pub content: FeedContent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedContent {
    #[serde(rename = "$t")]
    pub text: String,
}

impl FeedEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            content: FeedContent { text: text.into() },
        }
    }

    pub fn content(&self) -> &str {
        &self.content.text
    }
}

/// A single test case extracted from one feed row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub expr: String,
    pub local: String,
    pub server: String,
    pub difference: String,
    pub reason: String,
    pub desugar: String,
    pub bytecode: String,
    #[serde(rename = "pyretSrc")]
    pub pyret_src: String,
    #[serde(rename = "pyretAST")]
    pub pyret_ast: String,
}

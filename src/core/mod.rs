pub mod etl;
pub mod pipeline;
pub mod row_parser;

pub use crate::domain::model::{Feed, FeedEntry, TestCase};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

// src/ingest/types.rs
use anyhow::Result;

use crate::story::NewsStory;

#[async_trait::async_trait]
pub trait StoryProvider {
    async fn fetch_latest(&self) -> Result<Vec<NewsStory>>;
    fn name(&self) -> &'static str;
}

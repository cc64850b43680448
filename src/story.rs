// src/story.rs
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One news item as delivered by a feed provider.
///
/// `guid` is stable and unique per distinct story across its lifetime; fields
/// never mutate after construction. Stories live for one polling batch only —
/// the engine keeps no copy of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsStory {
    pub guid: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub published_at: DateTime<FixedOffset>,
}

impl NewsStory {
    pub fn new(
        guid: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
        published_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            guid: guid.into(),
            title: title.into(),
            description: description.into(),
            link: link.into(),
            published_at,
        }
    }
}

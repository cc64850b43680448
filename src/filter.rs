// src/filter.rs
//! Batch filtering of stories against the active trigger list.

use crate::story::NewsStory;
use crate::trigger::Trigger;

/// Keep the stories for which at least one trigger fires.
///
/// Input order is preserved and each story appears at most once; per story
/// the trigger list is walked in order and stops at the first hit. An empty
/// trigger list keeps nothing.
pub fn filter_stories(stories: Vec<NewsStory>, triggers: &[Trigger]) -> Vec<NewsStory> {
    stories
        .into_iter()
        .filter(|story| triggers.iter().any(|trigger| trigger.evaluate(story)))
        .collect()
}

// src/trigger.rs
//! Trigger predicates over news stories and their boolean composition.

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::matcher::contains_phrase;
use crate::story::NewsStory;

/// Wall-clock format for reference timestamps in trigger definitions,
/// e.g. `3 Oct 2016 17:00:10`.
pub const TIME_FORMAT: &str = "%d %b %Y %H:%M:%S";

/// Reference timestamps carry the fixed EST offset (UTC-05:00).
pub fn est_offset() -> FixedOffset {
    FixedOffset::west_opt(5 * 3600).expect("EST offset")
}

/// Parse a reference timestamp literal and tag it with the EST offset.
pub fn parse_reference_time(s: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), TIME_FORMAT)?;
    Ok(naive
        .and_local_timezone(est_offset())
        .single()
        .expect("fixed offsets map local times uniquely"))
}

/// A boolean condition over a [`NewsStory`].
///
/// Leaves test a single field; `Not`/`And`/`Or` own their children, so a
/// trigger is a self-contained expression tree of arbitrary depth.
#[derive(Debug, Clone)]
pub enum Trigger {
    /// Phrase occurs in the story title.
    Title(String),
    /// Phrase occurs in the story description.
    Description(String),
    /// Story published strictly earlier than the reference instant.
    Before(DateTime<FixedOffset>),
    /// Story published strictly later than the reference instant.
    After(DateTime<FixedOffset>),
    Not(Box<Trigger>),
    And(Box<Trigger>, Box<Trigger>),
    Or(Box<Trigger>, Box<Trigger>),
}

impl Trigger {
    /// True if the story should fire an alert.
    ///
    /// Pure: depends only on the trigger's fields and the story, never on
    /// call history, so one trigger instance is freely shareable across
    /// threads for concurrent evaluation. `And`/`Or` short-circuit, which is
    /// observationally equivalent since evaluation has no side effects.
    pub fn evaluate(&self, story: &NewsStory) -> bool {
        match self {
            Trigger::Title(phrase) => contains_phrase(&story.title, phrase),
            Trigger::Description(phrase) => contains_phrase(&story.description, phrase),
            Trigger::Before(at) => story.published_at < *at,
            Trigger::After(at) => story.published_at > *at,
            Trigger::Not(inner) => !inner.evaluate(story),
            Trigger::And(left, right) => left.evaluate(story) && right.evaluate(story),
            Trigger::Or(left, right) => left.evaluate(story) || right.evaluate(story),
        }
    }
}

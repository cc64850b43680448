// src/lib.rs
// Public library surface for integration tests (and the polling binary).

pub mod config;
pub mod filter;
pub mod ingest;
pub mod matcher;
pub mod settings;
pub mod story;
pub mod trigger;

// ---- Re-exports for stable public API ----
pub use crate::config::{build_active_triggers, load_trigger_file, TriggerConfigError};
pub use crate::filter::filter_stories;
pub use crate::matcher::contains_phrase;
pub use crate::story::NewsStory;
pub use crate::trigger::Trigger;

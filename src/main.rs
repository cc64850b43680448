//! News Alert Filter — binary entrypoint.
//! Polls the configured RSS feed, runs each batch through the trigger list,
//! and logs fresh matches.

use std::collections::HashSet;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use news_alert_filter::config::load_trigger_file;
use news_alert_filter::filter::filter_stories;
use news_alert_filter::ingest::{self, providers::google_rss::GoogleNewsProvider, types::StoryProvider};
use news_alert_filter::settings::AppSettings;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let settings = AppSettings::load_default()?;

    // A failed trigger build aborts startup: polling with an empty rule set
    // would silently match nothing.
    let triggers = load_trigger_file(&settings.triggers_path).with_context(|| {
        format!(
            "loading trigger config from {}",
            settings.triggers_path.display()
        )
    })?;
    tracing::info!(
        triggers = triggers.len(),
        feed = %settings.feed_url,
        poll_secs = settings.poll_secs,
        "trigger list built"
    );

    let providers: Vec<Box<dyn StoryProvider>> =
        vec![Box::new(GoogleNewsProvider::from_url(settings.feed_url))];

    // Guids already shown, so a story alerts once across polling cycles.
    let mut seen_guids: HashSet<String> = HashSet::new();
    let mut ticker = tokio::time::interval(Duration::from_secs(settings.poll_secs));
    loop {
        ticker.tick().await;

        let batch = ingest::run_once(&providers).await;
        let total = batch.len();
        let matched = filter_stories(batch, &triggers);
        let matched_count = matched.len();

        let mut fresh = 0usize;
        for story in matched {
            if seen_guids.insert(story.guid.clone()) {
                fresh += 1;
                tracing::debug!(
                    payload = %serde_json::to_string(&story).unwrap_or_default(),
                    "matched story payload"
                );
                tracing::info!(
                    title = %story.title,
                    link = %story.link,
                    published_at = %story.published_at,
                    "matched story"
                );
            }
        }
        tracing::info!(total, matched = matched_count, fresh, "poll cycle done");
    }
}

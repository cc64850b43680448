// src/ingest/mod.rs
pub mod providers;
pub mod types;

use metrics::{counter, describe_counter, describe_histogram};
use once_cell::sync::OnceCell;

use crate::ingest::types::StoryProvider;
use crate::story::NewsStory;

/// One-time metrics registration.
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "ingest_stories_total",
            "Total stories parsed from providers."
        );
        describe_counter!(
            "ingest_provider_errors_total",
            "Provider fetch/parse errors."
        );
        describe_histogram!("ingest_parse_ms", "Provider parse time in milliseconds.");
    });
}

/// Normalize raw feed text: decode HTML entities, strip tags, collapse
/// whitespace.
pub fn normalize_text(s: &str) -> String {
    let mut out = html_escape::decode_html_entities(s).to_string();

    static RE_TAGS: OnceCell<regex::Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").expect("tag regex"));
    out = re_tags.replace_all(&out, " ").to_string();

    static RE_WS: OnceCell<regex::Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").expect("ws regex"));
    out = re_ws.replace_all(&out, " ").to_string();
    out.trim().to_string()
}

/// Fetch one batch of stories from every provider.
///
/// A failing provider is logged and counted; the batch still carries the
/// stories from the healthy ones.
pub async fn run_once(providers: &[Box<dyn StoryProvider>]) -> Vec<NewsStory> {
    ensure_metrics_described();

    let mut batch = Vec::new();
    for p in providers {
        match p.fetch_latest().await {
            Ok(mut stories) => batch.append(&mut stories),
            Err(e) => {
                tracing::warn!(error = ?e, provider = p.name(), "provider error");
                counter!("ingest_provider_errors_total").increment(1);
            }
        }
    }
    counter!("ingest_stories_total").increment(batch.len() as u64);
    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_decodes_entities_and_strips_tags() {
        let s = "  <b>Hello&nbsp;world</b> &amp; more  ";
        assert_eq!(normalize_text(s), "Hello world & more");
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize_text("a\n\t b   c"), "a b c");
    }
}

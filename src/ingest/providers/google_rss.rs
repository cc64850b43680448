use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use metrics::{counter, histogram};
use quick_xml::de::from_str;
use serde::Deserialize;

use crate::ingest::normalize_text;
use crate::ingest::types::StoryProvider;
use crate::story::NewsStory;

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}
#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}
#[derive(Debug, Deserialize)]
struct Item {
    guid: Option<Guid>,
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
}
// <guid isPermaLink="..."> carries its id as element text.
#[derive(Debug, Deserialize)]
struct Guid {
    #[serde(rename = "$text")]
    value: Option<String>,
}

fn parse_pub_date(ts: &str) -> Option<DateTime<FixedOffset>> {
    // Feeds emit RFC 2822 dates, with either a numeric offset or an
    // obsolete zone name (GMT, EST, ...); chrono handles both.
    DateTime::parse_from_rfc2822(ts.trim()).ok()
}

pub struct GoogleNewsProvider {
    mode: Mode,
}

enum Mode {
    Fixture(String),
    Http { url: String, client: reqwest::Client },
}

impl GoogleNewsProvider {
    pub fn from_fixture(s: &str) -> Self {
        Self {
            mode: Mode::Fixture(s.to_string()),
        }
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            mode: Mode::Http {
                url: url.into(),
                client: reqwest::Client::new(),
            },
        }
    }

    fn parse_feed(s: &str) -> Result<Vec<NewsStory>> {
        let t0 = std::time::Instant::now();
        let xml_clean = scrub_html_entities_for_xml(s);
        let rss: Rss = from_str(&xml_clean).context("parsing news rss xml")?;

        let mut out = Vec::with_capacity(rss.channel.item.len());
        for it in rss.channel.item {
            let link = it.link.unwrap_or_default();
            let Some(published_at) = it.pub_date.as_deref().and_then(parse_pub_date) else {
                tracing::warn!(link = %link, "skipping item without a parsable pubDate");
                continue;
            };
            let guid = it
                .guid
                .and_then(|g| g.value)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| link.clone());

            out.push(NewsStory {
                guid,
                title: normalize_text(&it.title.unwrap_or_default()),
                description: normalize_text(&it.description.unwrap_or_default()),
                link,
                published_at,
            });
        }

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("ingest_parse_ms").record(ms);
        Ok(out)
    }
}

#[async_trait]
impl StoryProvider for GoogleNewsProvider {
    async fn fetch_latest(&self) -> Result<Vec<NewsStory>> {
        match &self.mode {
            Mode::Fixture(s) => Self::parse_feed(s),

            Mode::Http { url, client } => {
                let body = match client.get(url).send().await {
                    Ok(resp) => resp.text().await.context("news feed .text()")?,
                    Err(e) => {
                        tracing::warn!(error = ?e, provider = "GoogleNews", "provider http error");
                        counter!("ingest_provider_errors_total").increment(1);
                        return Err(e).context("news feed get()");
                    }
                };
                Self::parse_feed(&body)
            }
        }
    }

    fn name(&self) -> &'static str {
        "GoogleNews"
    }
}

fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}

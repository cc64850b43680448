// src/ingest/providers/mod.rs
pub mod google_rss;

//! Web discovery and acquisition for Answerbox.
//!
//! - SerpAPI client (`serp`) for search-result discovery
//! - Page fetching trait and browser-backed implementation (`fetch`)
//! - Heuristic DOM text extraction strategies (`extract`)
//! - The per-request scrape loop tying them together (`scrape`)

pub mod extract;
pub mod fetch;
pub mod scrape;
pub mod serp;

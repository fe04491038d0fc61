use crate::extract::extract_fragments;
use crate::fetch::{BrowserFetcher, PageFetcher};
use answerbox_drivers::browser::BrowserSession;
use scraper::Html;
use std::time::Duration;
use url::Url;

/// Drives one browser session across a batch of URLs and accumulates every
/// extracted fragment into a single text blob.
#[derive(Clone)]
pub struct ContentExtractor {
    webdriver_url: String,
    page_timeout: Duration,
}

impl ContentExtractor {
    pub fn new(webdriver_url: impl Into<String>, page_timeout: Duration) -> Self {
        Self {
            webdriver_url: webdriver_url.into(),
            page_timeout,
        }
    }

    /// Visit `urls` in order and return the concatenated fragments.
    ///
    /// One session serves the whole batch and is closed on every exit path.
    /// A session that cannot even be acquired degrades to "nothing
    /// extracted"; per-URL failures are handled inside the loop.
    pub async fn extract(&self, urls: &[Url]) -> String {
        let session = match BrowserSession::connect(&self.webdriver_url).await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(
                    target: "web.scrape",
                    error = %e,
                    "scrape.session.unavailable"
                );
                return String::new();
            }
        };

        let fetcher = BrowserFetcher::new(&session, self.page_timeout);
        let blob = collect_content(&fetcher, urls).await;

        if let Err(e) = session.close().await {
            tracing::warn!(target: "web.scrape", error = %e, "scrape.session.close_failed");
        }
        blob
    }
}

/// The extraction loop proper, independent of how pages are fetched.
///
/// URLs that fail to load are skipped without retry; strategy output order is
/// deterministic (strategies in declaration order per page, pages in URL
/// order), so the same inputs always produce the same blob.
pub async fn collect_content(fetcher: &dyn PageFetcher, urls: &[Url]) -> String {
    let mut fragments: Vec<String> = Vec::new();

    for url in urls {
        let html = match fetcher.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(
                    target: "web.scrape",
                    url = %url,
                    error = %e,
                    "scrape.page.skipped"
                );
                continue;
            }
        };

        let doc = Html::parse_document(&html);
        let page_fragments = extract_fragments(&doc);
        tracing::debug!(
            target: "web.scrape",
            url = %url,
            fragment_count = page_fragments.len(),
            "scrape.page.done"
        );
        fragments.extend(page_fragments);
    }

    fragments.join("\n")
}

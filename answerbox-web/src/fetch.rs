use answerbox_common::Result;
use answerbox_drivers::browser::BrowserSession;
use std::time::Duration;
use url::Url;

/// Client-side rendering grace period applied after every navigation.
///
/// A fixed delay, not a readiness poll: the observed pages have no reliable
/// "done" signal, and three seconds covers the ones we target.
const SETTLE_DELAY: Duration = Duration::from_secs(3);

/// One page load: navigate, settle, hand back the rendered HTML.
///
/// The seam between browser driving and extraction; tests substitute a stub
/// that serves canned HTML per URL.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// Fetcher backed by a live [`BrowserSession`].
///
/// Borrows the session: acquisition and release stay with the caller so the
/// session is closed exactly once regardless of how the batch went.
pub struct BrowserFetcher<'a> {
    session: &'a BrowserSession,
    page_timeout: Duration,
}

impl<'a> BrowserFetcher<'a> {
    pub fn new(session: &'a BrowserSession, page_timeout: Duration) -> Self {
        Self {
            session,
            page_timeout,
        }
    }
}

#[async_trait::async_trait]
impl PageFetcher for BrowserFetcher<'_> {
    async fn fetch(&self, url: &Url) -> Result<String> {
        self.session.goto(url.as_str(), self.page_timeout).await?;
        tokio::time::sleep(SETTLE_DELAY).await;
        self.session.source().await
    }
}

use answerbox_common::{AnswerboxError, Result};
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;
use webdriver::capabilities::Capabilities;

/// Chrome arguments for an unattended scrape session: no window, no GPU,
/// a fixed viewport so responsive layouts render the same way every run.
const CHROME_ARGS: &[&str] = &["--headless=new", "--disable-gpu", "--window-size=1920,1080"];

/// Thin wrapper around a `fantoccini` WebDriver client.
///
/// One session maps to one browser instance; callers acquire it for the
/// duration of a scrape batch and must [`close`](BrowserSession::close) it on
/// every exit path.
pub struct BrowserSession {
    client: Client,
}

impl BrowserSession {
    /// Create a new session connected to a running WebDriver service
    /// (Chromedriver at `http://localhost:9515` in the default deployment).
    pub async fn connect(webdriver_url: &str) -> Result<Self> {
        let mut caps = Capabilities::new();
        let mut chrome_opts = HashMap::new();
        chrome_opts.insert("args".to_string(), json!(CHROME_ARGS));
        caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(webdriver_url)
            .await
            .map_err(|e| AnswerboxError::Driver(e.into()))?;

        Ok(Self { client })
    }

    /// Navigate to `url`, bounded by `timeout`.
    ///
    /// A timeout is reported as an error so callers can skip the URL; the
    /// session itself stays usable for the next navigation.
    pub async fn goto(&self, url: &str, timeout: Duration) -> Result<()> {
        match tokio::time::timeout(timeout, self.client.goto(url)).await {
            Ok(res) => res.map_err(|e| AnswerboxError::Driver(e.into())),
            Err(_) => Err(AnswerboxError::Timeout),
        }
    }

    /// Return the full HTML source of the current page.
    pub async fn source(&self) -> Result<String> {
        self.client
            .source()
            .await
            .map_err(|e| AnswerboxError::Driver(e.into()))
    }

    /// Close the underlying browser session.
    pub async fn close(self) -> Result<()> {
        self.client
            .close()
            .await
            .map_err(|e| AnswerboxError::Driver(e.into()))
    }
}

use super::types::{links_from_response, SearchApiResponse};
use answerbox_http::{HttpClient, HttpError, RequestOpts};
use std::borrow::Cow;
use std::time::Duration;
use std::time::Instant;
use url::Url;

const SERP_BASE_URL: &str = "https://serpapi.com";
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Locale constants pinning the search to the deployment's region.
const SEARCH_ENGINE: &str = "google";
const SEARCH_COUNTRY: &str = "IN";
const SEARCH_LANG: &str = "en";
const SEARCH_LOCATION: &str = "India";

/// Minimal client for the SerpAPI web search vertical.
///
/// `resolve` never fails: any upstream problem degrades to an empty result
/// list, with the true cause logged for operators.
#[derive(Clone)]
pub struct SearchResolver {
    http: HttpClient,
    api_key: String,
    max_results: usize,
}

impl SearchResolver {
    pub fn new(api_key: String, max_results: usize) -> Result<Self, HttpError> {
        Self::with_base_url(api_key, max_results, SERP_BASE_URL)
    }

    /// Point the resolver at an alternative endpoint (test servers).
    pub fn with_base_url(
        api_key: String,
        max_results: usize,
        base_url: &str,
    ) -> Result<Self, HttpError> {
        let http = HttpClient::new(base_url)?.with_timeout(SEARCH_TIMEOUT);
        Ok(Self {
            http,
            api_key,
            max_results,
        })
    }

    /// Turn a question into candidate URLs in the API's ranking order.
    pub async fn resolve(&self, query: &str) -> Vec<Url> {
        let num = self.max_results.to_string();
        let params: Vec<(&str, Cow<'_, str>)> = vec![
            ("engine", SEARCH_ENGINE.into()),
            ("q", query.into()),
            ("num", num.as_str().into()),
            ("gl", SEARCH_COUNTRY.into()),
            ("hl", SEARCH_LANG.into()),
            ("location", SEARCH_LOCATION.into()),
        ];

        let query_snippet = if query.chars().count() > 160 {
            let head: String = query.chars().take(160).collect();
            format!("{head}…")
        } else {
            query.to_string()
        };
        let started = Instant::now();
        tracing::info!(
            target: "web.serp",
            query = %query_snippet,
            "serp.search.start"
        );

        let resp: SearchApiResponse = match self
            .http
            .get_json(
                "search.json",
                RequestOpts {
                    key_param: Some(("api_key", &self.api_key)),
                    query: Some(params),
                    ..Default::default()
                },
            )
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                // "No results" and "search broke" are the same outcome for
                // the caller; keep the distinction in the logs only.
                tracing::warn!(
                    target: "web.serp",
                    query = %query_snippet,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "serp.search.error"
                );
                return Vec::new();
            }
        };

        let links = links_from_response(&resp, self.max_results);
        tracing::info!(
            target: "web.serp",
            query = %query_snippet,
            elapsed_ms = started.elapsed().as_millis() as u64,
            hit_count = links.len(),
            "serp.search.success"
        );
        links
    }
}

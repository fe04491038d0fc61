use serde::Deserialize;
use url::Url;

/// SerpAPI `search.json` response, reduced to the organic vertical.
///
/// The full payload carries many more sections (ads, knowledge graph, local
/// pack); we only ever rank by organic results, so everything else is left to
/// serde to discard.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchApiResponse {
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

/// Candidate URLs in the API's ranking order.
///
/// Entries without a parseable `link` are dropped first, then the list is
/// truncated to `max`. No deduplication.
pub fn links_from_response(resp: &SearchApiResponse, max: usize) -> Vec<Url> {
    resp.organic_results
        .iter()
        .filter_map(|r| r.link.as_deref().and_then(|s| Url::parse(s).ok()))
        .take(max)
        .collect()
}

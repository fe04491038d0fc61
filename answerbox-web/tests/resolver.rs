use answerbox_web::serp::SearchResolver;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn resolver_returns_links_in_rank_order() {
    let server = MockServer::start().await;

    let body = json!({
        "organic_results": [
            { "position": 1, "title": "First", "link": "https://one.example/cafes" },
            { "position": 2, "title": "No link here" },
            { "position": 3, "title": "Second", "link": "https://two.example/guide" },
            { "position": 4, "title": "Third", "link": "https://three.example/list" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("engine", "google"))
        .and(query_param("q", "best cafes in Mumbai"))
        .and(query_param("num", "2"))
        .and(query_param("gl", "IN"))
        .and(query_param("hl", "en"))
        .and(query_param("location", "India"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let resolver = SearchResolver::with_base_url("test-key".into(), 2, &server.uri())
        .expect("valid base url");
    let links = resolver.resolve("best cafes in Mumbai").await;

    // Linkless entry dropped, ranking preserved, truncated to max_results.
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].as_str(), "https://one.example/cafes");
    assert_eq!(links[1].as_str(), "https://two.example/guide");
}

#[tokio::test]
async fn upstream_error_degrades_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let resolver =
        SearchResolver::with_base_url("test-key".into(), 5, &server.uri()).expect("valid base");
    assert!(resolver.resolve("anything").await.is_empty());
}

#[tokio::test]
async fn malformed_body_degrades_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let resolver =
        SearchResolver::with_base_url("test-key".into(), 5, &server.uri()).expect("valid base");
    assert!(resolver.resolve("anything").await.is_empty());
}

#[tokio::test]
async fn empty_organic_results_yield_no_links() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let resolver =
        SearchResolver::with_base_url("test-key".into(), 5, &server.uri()).expect("valid base");
    assert!(resolver.resolve("anything").await.is_empty());
}

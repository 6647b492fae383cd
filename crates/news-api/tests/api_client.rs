use news_api::{
    ApiClient, ApiConfig, ApiError, BroadcastRequest, DashboardStats, NewsQuery, Platform,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig::new(format!("{}/api/v1/", server.uri()))).expect("valid base URL")
}

/// Nothing listens on port 1, every request fails at the transport level
fn unreachable_client() -> ApiClient {
    ApiClient::new(&ApiConfig::new("http://127.0.0.1:1/api/v1")).expect("valid base URL")
}

fn news_json(id: i64, title: &str, impact: i32) -> Value {
    json!({
        "id": id,
        "title": title,
        "url": format!("https://example.com/{}", id),
        "source_id": 1,
        "published_at": "2024-05-01T08:30:00",
        "summary": "summary",
        "impact_score": impact,
        "sentiment": "Positive",
        "category_cluster": "Research",
        "created_at": "2024-05-01T09:00:00",
        "view_count": 0,
        "broadcast_count": 0
    })
}

#[tokio::test]
async fn fetch_news_sends_filters_and_page_size() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/news/"))
        .and(query_param("min_impact", "60"))
        .and(query_param("limit", "50"))
        .and(query_param("category", "Research"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([news_json(1, "Scaling laws", 85)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let items = client_for(&server)
        .fetch_news(&NewsQuery::new(60, Some("Research")))
        .await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Scaling laws");
    assert_eq!(items[0].source_id.as_deref(), Some("1"));
}

#[tokio::test]
async fn fetch_news_with_all_category_omits_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/news/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    client_for(&server)
        .fetch_news(&NewsQuery::new(0, Some("all")))
        .await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let keys: Vec<String> = requests[0]
        .url
        .query_pairs()
        .map(|(k, _)| k.into_owned())
        .collect();
    assert_eq!(keys, vec!["min_impact", "limit"]);
}

#[tokio::test]
async fn failed_reads_degrade_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/news/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.fetch_news(&NewsQuery::default()).await.is_empty());
    assert!(client.search_news("agents").await.is_empty());
    assert!(client.list_favorites().await.is_empty());
    assert!(client.list_categories().await.is_empty());
    assert!(client.list_sources().await.is_empty());
    assert_eq!(client.dashboard_stats().await, DashboardStats::default());

    match client.try_fetch_news(&NewsQuery::default()).await {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "database down");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_json_degrades_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.fetch_news(&NewsQuery::default()).await.is_empty());
    assert_eq!(client.dashboard_stats().await, DashboardStats::default());
    assert!(matches!(
        client.try_list_categories().await,
        Err(ApiError::Http(_))
    ));
}

#[tokio::test]
async fn unreachable_backend_never_fails_reads() {
    let client = unreachable_client();
    assert!(client.fetch_news(&NewsQuery::default()).await.is_empty());
    assert!(client.search_news("llm").await.is_empty());
    assert!(client.list_favorites().await.is_empty());
    assert!(client.list_categories().await.is_empty());
    assert!(client.list_sources().await.is_empty());
    assert_eq!(client.dashboard_stats().await, DashboardStats::default());
}

#[tokio::test]
async fn search_posts_query_with_fixed_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/news/search"))
        .and(body_json(json!({ "query": "LLM scaling", "limit": 20 })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([
                news_json(3, "Bigger models", 70),
                news_json(4, "Smaller models", 45)
            ])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let items = client_for(&server).search_news("LLM scaling").await;
    let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![3, 4]);
}

#[tokio::test]
async fn categories_stats_and_favorites_parse() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/news/categories/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Research", "Policy"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/news/stats/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_news": 120,
            "total_sources": 21,
            "avg_impact_score": 57.25
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/news/favorites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([news_json(9, "Saved", 90)])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.list_categories().await, vec!["Research", "Policy"]);
    assert_eq!(
        client.dashboard_stats().await,
        DashboardStats {
            total_news: 120,
            total_sources: 21,
            avg_impact_score: 57.25,
        }
    );
    assert_eq!(client.list_favorites().await[0].id, 9);
}

#[tokio::test]
async fn sources_parse_backend_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/sources/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "name": "OpenAI Blog",
                "url": "https://openai.com/blog/rss.xml",
                "source_type": "rss",
                "is_active": true,
                "created_at": "2024-01-01T00:00:00Z",
                "last_fetched": null,
                "fetch_count": 14
            },
            { "id": 2, "name": "arXiv cs.AI", "fetch_count": null }
        ])))
        .mount(&server)
        .await;

    let sources = client_for(&server).list_sources().await;
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].fetch_count, 14);
    assert!(sources[1].is_active);
    assert_eq!(sources[1].fetch_count, 0);
}

#[tokio::test]
async fn toggle_favorite_returns_new_flag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/news/7/favorite"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "is_favorited": false })))
        .expect(1)
        .mount(&server)
        .await;

    let flag = client_for(&server).toggle_favorite(7).await.unwrap();
    assert!(!flag);
}

#[tokio::test]
async fn toggle_favorite_propagates_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/news/404/favorite"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "News item not found" })))
        .mount(&server)
        .await;

    let err = client_for(&server).toggle_favorite(404).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));

    let err = unreachable_client().toggle_favorite(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)));
}

#[tokio::test]
async fn broadcast_sends_exactly_one_post_with_the_pair() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/broadcast/"))
        .and(body_json(json!({ "news_item_id": 42, "platform": "whatsapp" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "platform": "whatsapp",
            "message": "Broadcast executed successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = BroadcastRequest {
        news_item_id: 42,
        platform: Platform::WhatsApp,
        custom_message: None,
    };
    let response = client_for(&server).broadcast(&request).await.unwrap();
    assert_eq!(response.message, "Broadcast executed successfully");
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn broadcast_forwards_custom_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/broadcast/"))
        .and(body_json(json!({
            "news_item_id": 5,
            "platform": "email",
            "custom_message": "Read this before standup"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "platform": "email",
            "message": "Broadcast executed successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = BroadcastRequest {
        news_item_id: 5,
        platform: Platform::Email,
        custom_message: Some("Read this before standup".to_string()),
    };
    assert!(client_for(&server).broadcast(&request).await.is_ok());
}

#[tokio::test]
async fn broadcast_failures_propagate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/broadcast/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "failed",
            "platform": "linkedin",
            "message": "Unknown platform"
        })))
        .mount(&server)
        .await;

    let request = BroadcastRequest {
        news_item_id: 1,
        platform: Platform::LinkedIn,
        custom_message: None,
    };
    match client_for(&server).broadcast(&request).await {
        Err(ApiError::Rejected(reason)) => assert_eq!(reason, "Unknown platform"),
        other => panic!("expected rejection, got {:?}", other),
    }

    let err = unreachable_client().broadcast(&request).await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)));
}

#[test]
fn invalid_base_url_is_a_config_error() {
    let err = ApiClient::new(&ApiConfig::new("not a url")).unwrap_err();
    assert!(matches!(err, ApiError::Config(_)));
}

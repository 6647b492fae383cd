//! Backend HTTP Client
//!
//! One method per endpoint. Reads come in two forms: `try_*` returns the
//! error, the plain name logs it and hands back empty/default data so a
//! page can always render. Writes always return the error.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{ApiConfig, SEARCH_LIMIT};
use crate::error::{ApiError, ApiResult};
use crate::models::{
    BroadcastRequest, BroadcastResponse, DashboardStats, FavoriteToggle, NewsItem, NewsQuery,
    Source,
};

#[derive(Serialize)]
struct SearchArgs<'a> {
    query: &'a str,
    limit: u32,
}

/// Typed client for the news backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = config.normalized_base_url()?;
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }

    // ========================
    // Reads
    // ========================

    pub async fn try_fetch_news(&self, query: &NewsQuery) -> ApiResult<Vec<NewsItem>> {
        let request = self.request(Method::GET, "/news/").query(&query.params());
        self.send(request).await
    }

    pub async fn fetch_news(&self, query: &NewsQuery) -> Vec<NewsItem> {
        or_logged_default(self.try_fetch_news(query).await, "Fetch news")
    }

    pub async fn try_search_news(&self, query: &str) -> ApiResult<Vec<NewsItem>> {
        let args = SearchArgs {
            query,
            limit: SEARCH_LIMIT,
        };
        let request = self.request(Method::POST, "/news/search").json(&args);
        self.send(request).await
    }

    pub async fn search_news(&self, query: &str) -> Vec<NewsItem> {
        or_logged_default(self.try_search_news(query).await, "Search")
    }

    pub async fn try_list_favorites(&self) -> ApiResult<Vec<NewsItem>> {
        self.send(self.request(Method::GET, "/news/favorites")).await
    }

    pub async fn list_favorites(&self) -> Vec<NewsItem> {
        or_logged_default(self.try_list_favorites().await, "Favorites")
    }

    pub async fn try_list_categories(&self) -> ApiResult<Vec<String>> {
        self.send(self.request(Method::GET, "/news/categories/list")).await
    }

    pub async fn list_categories(&self) -> Vec<String> {
        or_logged_default(self.try_list_categories().await, "Categories")
    }

    pub async fn try_dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.send(self.request(Method::GET, "/news/stats/dashboard")).await
    }

    /// Zeroed stats on failure
    pub async fn dashboard_stats(&self) -> DashboardStats {
        or_logged_default(self.try_dashboard_stats().await, "Stats")
    }

    pub async fn try_list_sources(&self) -> ApiResult<Vec<Source>> {
        self.send(self.request(Method::GET, "/sources/")).await
    }

    pub async fn list_sources(&self) -> Vec<Source> {
        or_logged_default(self.try_list_sources().await, "Sources")
    }

    // ========================
    // Writes
    // ========================

    /// Flip the favorite flag server-side, returning the new value
    pub async fn toggle_favorite(&self, news_id: i64) -> ApiResult<bool> {
        let request = self.request(Method::POST, &format!("/news/{}/favorite", news_id));
        let toggled: FavoriteToggle = self.send(request).await?;
        Ok(toggled.is_favorited)
    }

    /// Relay a story to an external channel
    pub async fn broadcast(&self, request: &BroadcastRequest) -> ApiResult<BroadcastResponse> {
        let http_request = self.request(Method::POST, "/broadcast/").json(request);
        let response: BroadcastResponse = self.send(http_request).await?;
        if response.is_failure() {
            let reason = if response.message.is_empty() {
                format!("{} refused the broadcast", request.platform.label())
            } else {
                response.message
            };
            return Err(ApiError::Rejected(reason));
        }
        log::info!(
            "Broadcast news item {} to {}",
            request.news_item_id,
            request.platform.as_str()
        );
        Ok(response)
    }
}

fn or_logged_default<T: Default>(result: ApiResult<T>, what: &str) -> T {
    result.unwrap_or_else(|err| {
        log::error!("{} error: {}", what, err);
        T::default()
    })
}

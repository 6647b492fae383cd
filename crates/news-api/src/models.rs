//! Wire Models
//!
//! Data structures matching the backend's JSON.

use serde::{Deserialize, Serialize};

use crate::config::NEWS_PAGE_SIZE;
use crate::serde_utils::{null_as_default, opt_string_or_number};

/// Synthetic category meaning "no category filter"
pub const ALL_CATEGORY: &str = "all";

/// One scored news item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub source_id: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    pub url: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub impact_score: i32,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub category_cluster: Option<String>,
    #[serde(default)]
    pub view_count: Option<u32>,
    #[serde(default)]
    pub broadcast_count: Option<u32>,
    #[serde(default)]
    pub is_favorited: Option<bool>,
}

/// Aggregate counters shown above the feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_news: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_sources: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_impact_score: f64,
}

/// Response of the favorite toggle endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteToggle {
    pub is_favorited: bool,
}

/// An ingestion feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub last_fetched: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fetch_count: u32,
}

fn default_true() -> bool {
    true
}

/// Broadcast channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    LinkedIn,
    Email,
    WhatsApp,
}

impl Platform {
    /// Selector order in the broadcast modal
    pub const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::Email, Platform::WhatsApp];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::LinkedIn => "linkedin",
            Platform::Email => "email",
            Platform::WhatsApp => "whatsapp",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Email => "Email",
            Platform::WhatsApp => "WhatsApp",
        }
    }
}

/// Body of `POST /broadcast/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastRequest {
    pub news_item_id: i64,
    pub platform: Platform,
    /// Replaces the summary in the relayed post
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

/// Response of `POST /broadcast/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastResponse {
    pub status: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub message: String,
}

impl BroadcastResponse {
    pub fn is_failure(&self) -> bool {
        self.status.eq_ignore_ascii_case("failed")
    }
}

/// Parameters of a news list request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsQuery {
    pub min_impact: u32,
    /// `None` lists every category
    pub category: Option<String>,
}

impl NewsQuery {
    /// Build a list query; the "all" sentinel and blank names become `None`
    pub fn new(min_impact: u32, category: Option<&str>) -> Self {
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty() && !is_all_category(c))
            .map(str::to_string);
        Self { min_impact, category }
    }

    /// Query-string pairs in request order
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("min_impact", self.min_impact.to_string()),
            ("limit", NEWS_PAGE_SIZE.to_string()),
        ];
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        params
    }
}

pub fn is_all_category(category: &str) -> bool {
    category.eq_ignore_ascii_case(ALL_CATEGORY)
}

/// Category buttons in display order: the sentinel first, then each fetched label once
pub fn with_all_category(categories: &[String]) -> Vec<String> {
    let mut all = vec![ALL_CATEGORY.to_string()];
    for category in categories {
        if !is_all_category(category) && !all.contains(category) {
            all.push(category.clone());
        }
    }
    all
}

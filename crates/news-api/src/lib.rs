//! News Intelligence API
//!
//! Target-independent half of the dashboard: wire models, the HTTP client,
//! and the pure rules the UI renders from. Compiles to wasm32 for the
//! browser and to the host for tests.

mod broadcast;
mod client;
mod config;
mod dashboard;
mod error;
mod list_state;
mod models;
mod presentation;
mod serde_utils;

pub use broadcast::{BroadcastDraft, BroadcastStatus};
pub use client::ApiClient;
pub use config::{ApiConfig, BROADCAST_CLOSE_DELAY_MS, DEFAULT_API_URL, NEWS_PAGE_SIZE, SEARCH_LIMIT};
pub use dashboard::{DashboardState, FetchPlan};
pub use error::{ApiError, ApiResult};
pub use list_state::{ListState, LoadPhase, RequestTicket};
pub use models::{
    is_all_category, with_all_category, BroadcastRequest, BroadcastResponse, DashboardStats,
    FavoriteToggle, NewsItem, NewsQuery, Platform, Source, ALL_CATEGORY,
};
pub use presentation::{
    format_stat, parse_timestamp, relative_time, CategoryTone, ImpactBand, SentimentTone,
    IMPACT_THRESHOLDS,
};

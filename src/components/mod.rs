//! UI Components
//!
//! Reusable Leptos components.

mod broadcast_modal;
mod category_filter;
mod impact_badge;
mod impact_filter;
mod news_card;
mod search_bar;
mod sidebar;
mod stats_card;

pub use broadcast_modal::BroadcastModal;
pub use category_filter::CategoryFilter;
pub use impact_badge::ImpactBadge;
pub use impact_filter::ImpactFilter;
pub use news_card::NewsCard;
pub use search_bar::SearchBar;
pub use sidebar::Sidebar;
pub use stats_card::StatsCard;

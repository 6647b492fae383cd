//! Dashboard State
//!
//! Filters, feed items and counters of the main page, plus the
//! transitions each user action triggers.

use crate::list_state::{Generation, LoadPhase, RequestTicket};
use crate::models::{DashboardStats, NewsItem, NewsQuery, ALL_CATEGORY};

/// Which request a feed reload issues
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    Search(String),
    List(NewsQuery),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub phase: LoadPhase,
    pub items: Vec<NewsItem>,
    pub categories: Vec<String>,
    pub stats: DashboardStats,
    pub selected_category: String,
    pub min_impact: u32,
    /// Last submitted search text
    pub query: String,
    generation: Generation,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Loading,
            items: Vec::new(),
            categories: Vec::new(),
            stats: DashboardStats::default(),
            selected_category: ALL_CATEGORY.to_string(),
            min_impact: 0,
            query: String::new(),
            generation: Generation::default(),
        }
    }
}

impl DashboardState {
    /// List request for the current filters
    pub fn list_query(&self) -> NewsQuery {
        NewsQuery::new(self.min_impact, Some(&self.selected_category))
    }

    fn begin(&mut self) -> RequestTicket {
        self.phase = LoadPhase::Loading;
        self.generation.next()
    }

    // ========================
    // Transitions (each returns the request to issue)
    // ========================

    /// Mount: news, categories and stats in parallel
    pub fn begin_initial_load(&mut self) -> (RequestTicket, NewsQuery) {
        (self.begin(), self.list_query())
    }

    /// Search submit; blank text falls back to the filtered list
    pub fn begin_search(&mut self, query: &str) -> (RequestTicket, FetchPlan) {
        self.query = query.to_string();
        let trimmed = query.trim();
        let plan = if trimmed.is_empty() {
            FetchPlan::List(self.list_query())
        } else {
            FetchPlan::Search(trimmed.to_string())
        };
        (self.begin(), plan)
    }

    /// Category click; the selection sticks even if the fetch fails
    pub fn begin_category_change(&mut self, category: &str) -> (RequestTicket, FetchPlan) {
        self.selected_category = category.to_string();
        (self.begin(), FetchPlan::List(self.list_query()))
    }

    pub fn begin_min_impact_change(&mut self, min_impact: u32) -> (RequestTicket, FetchPlan) {
        self.min_impact = min_impact;
        (self.begin(), FetchPlan::List(self.list_query()))
    }

    /// Refresh button: list with current filters, stats alongside
    pub fn begin_refresh(&mut self) -> (RequestTicket, NewsQuery) {
        (self.begin(), self.list_query())
    }

    // ========================
    // Completions (stale tickets are ignored)
    // ========================

    pub fn finish_initial_load(
        &mut self,
        ticket: RequestTicket,
        items: Vec<NewsItem>,
        categories: Vec<String>,
        stats: DashboardStats,
    ) -> bool {
        // Categories and stats do not depend on the filters, keep them even when stale
        self.categories = categories;
        self.stats = stats;
        self.finish_news(ticket, items)
    }

    pub fn finish_news(&mut self, ticket: RequestTicket, items: Vec<NewsItem>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.items = items;
        self.phase = LoadPhase::Ready;
        true
    }

    pub fn finish_refresh(
        &mut self,
        ticket: RequestTicket,
        items: Vec<NewsItem>,
        stats: DashboardStats,
    ) -> bool {
        self.stats = stats;
        self.finish_news(ticket, items)
    }

    pub fn fail(&mut self, ticket: RequestTicket, message: impl Into<String>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.phase = LoadPhase::Failed(message.into());
        true
    }

    /// Mirror a card's favorite toggle into the feed
    pub fn mark_favorited(&mut self, news_id: i64, is_favorited: bool) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == news_id) {
            item.is_favorited = Some(is_favorited);
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: i64) -> NewsItem {
        NewsItem {
            id,
            title: format!("Item {}", id),
            source_id: Some("1".to_string()),
            summary: Some("summary".to_string()),
            url: format!("https://example.com/{}", id),
            published_at: None,
            impact_score: 70,
            sentiment: Some("Neutral".to_string()),
            category_cluster: Some("Research".to_string()),
            view_count: None,
            broadcast_count: None,
            is_favorited: None,
        }
    }

    #[test]
    fn test_initial_load_lists_everything() {
        let mut state = DashboardState::default();
        let (ticket, query) = state.begin_initial_load();
        assert_eq!(query, NewsQuery::new(0, None));
        assert!(query.category.is_none());

        let stats = DashboardStats {
            total_news: 10,
            total_sources: 2,
            avg_impact_score: 55.5,
        };
        assert!(state.finish_initial_load(
            ticket,
            vec![make_item(1)],
            vec!["Research".to_string()],
            stats.clone()
        ));
        assert_eq!(state.phase, LoadPhase::Ready);
        assert_eq!(state.stats, stats);
        assert_eq!(state.categories, vec!["Research"]);
    }

    #[test]
    fn test_empty_search_is_list_with_current_category() {
        let mut state = DashboardState::default();
        state.begin_category_change("Policy");

        let (_, plan) = state.begin_search("");
        assert_eq!(plan, FetchPlan::List(NewsQuery::new(0, Some("Policy"))));

        let (_, plan) = state.begin_search("   ");
        assert_eq!(plan, FetchPlan::List(state.list_query()));

        let (_, plan) = state.begin_search(" LLM scaling ");
        assert_eq!(plan, FetchPlan::Search("LLM scaling".to_string()));
        assert_eq!(state.query, " LLM scaling ");
    }

    #[test]
    fn test_category_selection_filters_and_all_omits() {
        let mut state = DashboardState::default();

        let (_, plan) = state.begin_category_change("Business");
        assert_eq!(
            plan,
            FetchPlan::List(NewsQuery {
                min_impact: 0,
                category: Some("Business".to_string())
            })
        );

        let (_, plan) = state.begin_category_change("all");
        let FetchPlan::List(query) = plan else {
            panic!("category change must list");
        };
        assert!(query.category.is_none());
        assert!(!query.params().iter().any(|(k, _)| *k == "category"));
    }

    #[test]
    fn test_category_sticks_when_fetch_fails() {
        let mut state = DashboardState::default();
        let (ticket, _) = state.begin_category_change("Product");
        assert!(state.fail(ticket, "boom"));
        assert_eq!(state.selected_category, "Product");
        assert_eq!(state.error(), Some("boom"));
    }

    #[test]
    fn test_min_impact_carries_into_later_fetches() {
        let mut state = DashboardState::default();
        state.begin_min_impact_change(60);
        let (_, plan) = state.begin_category_change("Research");
        assert_eq!(plan, FetchPlan::List(NewsQuery::new(60, Some("Research"))));

        let (_, query) = state.begin_refresh();
        assert_eq!(query.min_impact, 60);
    }

    #[test]
    fn test_overlapping_fetches_resolve_last_issued() {
        let mut state = DashboardState::default();
        let (slow, _) = state.begin_category_change("Research");
        let (fast, _) = state.begin_category_change("Policy");

        assert!(state.finish_news(fast, vec![make_item(2)]));
        assert!(!state.finish_news(slow, vec![make_item(1)]));
        assert_eq!(state.items[0].id, 2);
        assert_eq!(state.selected_category, "Policy");
    }

    #[test]
    fn test_stale_initial_load_still_fills_categories() {
        let mut state = DashboardState::default();
        let (initial, _) = state.begin_initial_load();
        let (search, _) = state.begin_search("agents");
        assert!(state.finish_news(search, vec![make_item(5)]));

        assert!(!state.finish_initial_load(
            initial,
            vec![make_item(1)],
            vec!["Research".to_string()],
            DashboardStats::default()
        ));
        assert_eq!(state.categories, vec!["Research"]);
        assert_eq!(state.items[0].id, 5);
    }

    #[test]
    fn test_mark_favorited() {
        let mut state = DashboardState::default();
        let (ticket, _) = state.begin_refresh();
        state.finish_refresh(ticket, vec![make_item(1), make_item(2)], DashboardStats::default());

        state.mark_favorited(2, true);
        assert_eq!(state.items[1].is_favorited, Some(true));
        assert_eq!(state.items[0].is_favorited, None);
    }
}

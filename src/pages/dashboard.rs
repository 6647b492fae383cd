//! Dashboard Page
//!
//! Stats header, filters and the news grid. Owns all feed state; cards
//! and filters only report back through callbacks.

use futures::join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use news_api::{format_stat, DashboardState, FetchPlan, LoadPhase, RequestTicket};

use crate::components::{CategoryFilter, ImpactFilter, NewsCard, SearchBar, StatsCard};
use crate::context::{use_app_context, AppContext};

/// Mount: news, categories and stats together
fn load_initial(ctx: AppContext, state: RwSignal<DashboardState>) {
    let Some((ticket, query)) = state.try_update(|s| s.begin_initial_load()) else {
        return;
    };
    let api = match ctx.api() {
        Ok(api) => api,
        Err(message) => {
            state.update(|s| {
                s.fail(ticket, message);
            });
            return;
        }
    };
    spawn_local(async move {
        let (items, categories, stats) = join!(
            api.fetch_news(&query),
            api.list_categories(),
            api.dashboard_stats()
        );
        log::debug!("Loaded {} items, {} categories", items.len(), categories.len());
        let _ = state.try_update(|s| s.finish_initial_load(ticket, items, categories, stats));
    });
}

/// Search, category or impact change: one news request
fn load_feed(ctx: AppContext, state: RwSignal<DashboardState>, ticket: RequestTicket, plan: FetchPlan) {
    let api = match ctx.api() {
        Ok(api) => api,
        Err(message) => {
            state.update(|s| {
                s.fail(ticket, message);
            });
            return;
        }
    };
    spawn_local(async move {
        let items = match &plan {
            FetchPlan::Search(text) => api.search_news(text).await,
            FetchPlan::List(query) => api.fetch_news(query).await,
        };
        let _ = state.try_update(|s| s.finish_news(ticket, items));
    });
}

/// Refresh button: feed with current filters plus fresh counters
fn refresh(ctx: AppContext, state: RwSignal<DashboardState>) {
    let (ticket, query) = state.write().begin_refresh();
    let api = match ctx.api() {
        Ok(api) => api,
        Err(message) => {
            state.update(|s| {
                s.fail(ticket, message);
            });
            return;
        }
    };
    spawn_local(async move {
        let (items, stats) = join!(api.fetch_news(&query), api.dashboard_stats());
        let _ = state.try_update(|s| s.finish_refresh(ticket, items, stats));
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(DashboardState::default());

    // Load on mount
    Effect::new(move |_| load_initial(ctx, state));

    let on_search = Callback::new(move |query: String| {
        let (ticket, plan) = state.write().begin_search(&query);
        load_feed(ctx, state, ticket, plan);
    });

    let on_category = Callback::new(move |category: String| {
        let (ticket, plan) = state.write().begin_category_change(&category);
        load_feed(ctx, state, ticket, plan);
    });

    let on_min_impact = Callback::new(move |min_impact: u32| {
        let (ticket, plan) = state.write().begin_min_impact_change(min_impact);
        load_feed(ctx, state, ticket, plan);
    });

    let on_favorite_change = Callback::new(move |(id, is_favorited): (i64, bool)| {
        state.update(|s| s.mark_favorited(id, is_favorited));
    });

    let total_news = Signal::derive(move || state.with(|s| s.stats.total_news.to_string()));
    let total_sources = Signal::derive(move || state.with(|s| s.stats.total_sources.to_string()));
    let avg_impact = Signal::derive(move || state.with(|s| format_stat(s.stats.avg_impact_score)));
    let categories = Signal::derive(move || state.with(|s| s.categories.clone()));
    let selected_category = Signal::derive(move || state.with(|s| s.selected_category.clone()));
    let min_impact = Signal::derive(move || state.with(|s| s.min_impact));
    // Memos so favorite toggles inside the grid do not rebuild it
    let phase = Memo::new(move |_| state.with(|s| s.phase.clone()));
    let is_empty = Memo::new(move |_| state.with(|s| s.items.is_empty()));

    view! {
        <header class="page-header">
            <div class="page-title-row">
                <div>
                    <h1>"AI Intelligence Feed"</h1>
                    <p class="page-subtitle">"Real-time analysis from 20+ top sources."</p>
                </div>

                <div class="page-actions">
                    <button class="icon-btn" title="Refresh Feed" on:click=move |_| refresh(ctx, state)>
                        "⟳"
                    </button>
                    <SearchBar on_search=on_search />
                </div>
            </div>

            <div class="stats-grid">
                <StatsCard title="Total Articles" value=total_news icon="▤" tone="tone-blue" />
                <StatsCard title="Active Sources" value=total_sources icon="↗" tone="tone-green" />
                <StatsCard title="Avg Impact Score" value=avg_impact icon="◎" tone="tone-purple" />
            </div>

            <div class="filter-row">
                <CategoryFilter categories=categories selected=selected_category on_change=on_category />
                <ImpactFilter selected=min_impact on_change=on_min_impact />
            </div>
        </header>

        {move || {
            let empty = is_empty.get();
            match phase.get() {
                LoadPhase::Loading => view! {
                    <div class="loading-state">
                        <span class="spinner">"⟳"</span>
                        <p>"Analyzing global intelligence..."</p>
                    </div>
                }.into_any(),
                LoadPhase::Failed(message) => view! {
                    <div class="error-banner">{message}</div>
                }.into_any(),
                LoadPhase::Ready if empty => view! {
                    <div class="empty-state">
                        <p>"No news found matching your criteria."</p>
                    </div>
                }.into_any(),
                LoadPhase::Ready => view! {
                    <div class="news-grid">
                        <For
                            each=move || state.with(|s| s.items.clone())
                            key=|item| item.id
                            children=move |item| view! {
                                <NewsCard item=item on_favorite_change=on_favorite_change />
                            }
                        />
                    </div>
                }.into_any(),
            }
        }}
    }
}

//! Favorites Page
//!
//! Saved items only. Un-favorited cards drop out locally, no refetch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use news_api::{ListState, LoadPhase, NewsItem};

use crate::components::NewsCard;
use crate::context::{use_app_context, AppContext};

fn load_favorites(ctx: AppContext, state: RwSignal<ListState<NewsItem>>) {
    let Some(ticket) = state.try_update(|s| s.begin_load()) else {
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
        let items = api.list_favorites().await;
        log::debug!("Loaded {} favorites", items.len());
        let _ = state.try_update(|s| s.finish_favorites(ticket, items));
    });
}

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(ListState::<NewsItem>::default());

    Effect::new(move |_| load_favorites(ctx, state));

    let on_favorite_change = Callback::new(move |(id, is_favorited): (i64, bool)| {
        state.update(|s| {
            s.apply_favorite_change(id, is_favorited);
        });
    });

    let phase = Memo::new(move |_| state.with(|s| s.phase.clone()));
    let is_empty = Memo::new(move |_| state.with(|s| s.is_empty_result()));

    view! {
        <header class="page-header page-title-row">
            <div>
                <h1>"Favorites"</h1>
                <p class="page-subtitle">"Only your saved AI news items are shown here."</p>
            </div>
            <button class="icon-btn" title="Refresh Favorites" on:click=move |_| load_favorites(ctx, state)>
                "⟳"
            </button>
        </header>

        {move || match phase.get() {
            LoadPhase::Loading => view! {
                <div class="loading-state">
                    <span class="spinner">"⟳"</span>
                    <p>"Loading your favorites..."</p>
                </div>
            }.into_any(),
            LoadPhase::Failed(message) => view! {
                <div class="error-banner">{message}</div>
            }.into_any(),
            LoadPhase::Ready if is_empty.get() => view! {
                <div class="empty-state dashed">
                    <p class="empty-title">"No favorites yet."</p>
                    <p class="empty-hint">"Go to the main feed and click the star on any article."</p>
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
        }}
    }
}

//! News Card Component
//!
//! One feed item: badges, metadata, and the broadcast/favorite actions.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use news_api::{relative_time, CategoryTone, NewsItem, SentimentTone};

use crate::components::{BroadcastModal, ImpactBadge};
use crate::context::use_app_context;

/// Applies a server-confirmed toggle; no-op once the card or its page is gone
fn confirm_toggle(
    set_favorited: WriteSignal<bool>,
    on_favorite_change: Option<Callback<(i64, bool)>>,
    id: i64,
    is_favorited: bool,
) {
    let _ = set_favorited.try_set(is_favorited);
    if let Some(callback) = on_favorite_change {
        if callback.try_run((id, is_favorited)).is_none() {
            log::debug!("Favorite change for news item {} arrived after unmount", id);
        }
    }
}

/// Card for a news item
///
/// # Arguments
/// * `item` - Snapshot to render; `is_favorited` seeds the star state
/// * `on_favorite_change` - Called with `(id, is_favorited)` after the server confirmed a toggle
#[component]
pub fn NewsCard(
    item: NewsItem,
    #[prop(optional, into)] on_favorite_change: Option<Callback<(i64, bool)>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;

    let (modal_open, set_modal_open) = signal(false);
    let (favorited, set_favorited) = signal(item.is_favorited.unwrap_or(false));
    let (toggling, set_toggling) = signal(false);

    let toggle_favorite = move |_: web_sys::MouseEvent| {
        if toggling.get_untracked() {
            return;
        }
        let api = match ctx.api() {
            Ok(api) => api,
            Err(message) => {
                log::error!("Favorite toggle unavailable: {}", message);
                return;
            }
        };
        set_toggling.set(true);
        spawn_local(async move {
            match api.toggle_favorite(id).await {
                Ok(is_favorited) => {
                    confirm_toggle(set_favorited, on_favorite_change, id, is_favorited)
                }
                Err(err) => log::error!("Favorite toggle failed for news item {}: {}", id, err),
            }
            let _ = set_toggling.try_set(false);
        });
    };

    let sentiment_label = item.sentiment.clone().unwrap_or_else(|| "Neutral".to_string());
    let sentiment_class = format!(
        "sentiment-chip {}",
        SentimentTone::from_label(item.sentiment.as_deref()).css_class()
    );
    let source = item.source_id.clone().unwrap_or_else(|| "Unknown".to_string());
    let summary = item
        .summary
        .clone()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "No summary available.".to_string());
    let published = relative_time(item.published_at.as_deref(), Utc::now());
    let views = item.view_count.filter(|count| *count > 0);

    view! {
        <div class="news-card">
            <div class="card-header">
                <div class="card-badges">
                    <ImpactBadge score=item.impact_score />
                    <span class=sentiment_class>{sentiment_label}</span>
                </div>
                <span class="card-source">{source}</span>
            </div>

            {item.category_cluster.clone().filter(|c| !c.is_empty()).map(|category| {
                let class = format!("category-chip {}", CategoryTone::from_label(&category).css_class());
                view! {
                    <div class="card-category">
                        <span class=class>{category}</span>
                    </div>
                }
            })}

            <h3 class="card-title">{item.title.clone()}</h3>
            <p class="card-summary">{summary}</p>

            <div class="card-meta">
                <span class="card-time">"🕒 " {published}</span>
                {views.map(|count| view! {
                    <span class="card-views">"👁 " {count} " views"</span>
                })}
            </div>

            <div class="card-actions">
                <button class="btn-broadcast" on:click=move |_| set_modal_open.set(true)>
                    "Broadcast"
                </button>
                <button
                    class=move || if favorited.get() { "btn-favorite active" } else { "btn-favorite" }
                    title=move || if favorited.get() { "Remove from favorites" } else { "Add to favorites" }
                    disabled=move || toggling.get()
                    on:click=toggle_favorite
                >
                    {move || if favorited.get() { "★" } else { "☆" }}
                </button>
                <a class="btn-link" href=item.url.clone() target="_blank" rel="noopener noreferrer">
                    "↗"
                </a>
            </div>
        </div>

        <BroadcastModal
            news_id=id
            news_title=item.title.clone()
            is_open=modal_open
            on_close=move |_: ()| set_modal_open.set(false)
        />
    }
}

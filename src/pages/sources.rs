//! Sources Page
//!
//! Ingestion feeds known to the backend.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use news_api::{relative_time, ListState, LoadPhase, Source};

use crate::context::{use_app_context, AppContext};

fn load_sources(ctx: AppContext, state: RwSignal<ListState<Source>>) {
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
        let sources = api.list_sources().await;
        let _ = state.try_update(|s| s.finish_load(ticket, sources));
    });
}

#[component]
fn SourceRow(source: Source) -> impl IntoView {
    let last_fetched = match source.last_fetched.as_deref() {
        Some(raw) => relative_time(Some(raw), Utc::now()),
        None => "Never".to_string(),
    };

    view! {
        <tr class=if source.is_active { "source-row" } else { "source-row inactive" }>
            <td class="source-name">
                {match source.url.clone() {
                    Some(url) => view! {
                        <a href=url target="_blank" rel="noopener noreferrer">{source.name.clone()}</a>
                    }.into_any(),
                    None => view! { <span>{source.name.clone()}</span> }.into_any(),
                }}
            </td>
            <td>{source.source_type.clone().unwrap_or_else(|| "rss".to_string())}</td>
            <td>{source.fetch_count}</td>
            <td>{last_fetched}</td>
        </tr>
    }
}

#[component]
pub fn SourcesPage() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(ListState::<Source>::default());

    Effect::new(move |_| load_sources(ctx, state));

    let phase = Memo::new(move |_| state.with(|s| s.phase.clone()));
    let is_empty = Memo::new(move |_| state.with(|s| s.is_empty_result()));

    view! {
        <header class="page-header page-title-row">
            <div>
                <h1>"Sources"</h1>
                <p class="page-subtitle">"Feeds the ingestion pipeline pulls from."</p>
            </div>
            <button class="icon-btn" title="Refresh Sources" on:click=move |_| load_sources(ctx, state)>
                "⟳"
            </button>
        </header>

        {move || match phase.get() {
            LoadPhase::Loading => view! {
                <div class="loading-state">
                    <span class="spinner">"⟳"</span>
                    <p>"Loading sources..."</p>
                </div>
            }.into_any(),
            LoadPhase::Failed(message) => view! {
                <div class="error-banner">{message}</div>
            }.into_any(),
            LoadPhase::Ready if is_empty.get() => view! {
                <div class="empty-state dashed">
                    <p class="empty-title">"No sources configured."</p>
                    <p class="empty-hint">"Feeds added to the backend will show up here."</p>
                </div>
            }.into_any(),
            LoadPhase::Ready => view! {
                <table class="sources-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Type"</th>
                            <th>"Fetches"</th>
                            <th>"Last fetched"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.with(|s| s.items.clone())
                            key=|source| source.id
                            children=move |source| view! { <SourceRow source=source /> }
                        />
                    </tbody>
                </table>
                <p class="item-count">
                    {move || state.with(|s| {
                        let active = s.items.iter().filter(|src| src.is_active).count();
                        format!("{} sources, {} active", s.items.len(), active)
                    })}
                </p>
            }.into_any(),
        }}
    }
}

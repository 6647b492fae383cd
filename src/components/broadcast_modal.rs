//! Broadcast Modal Component
//!
//! Platform picker that relays one story, then closes itself on success.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use news_api::{BroadcastDraft, BroadcastStatus, Platform, BROADCAST_CLOSE_DELAY_MS};

use crate::context::use_app_context;

fn platform_icon(platform: Platform) -> &'static str {
    match platform {
        Platform::LinkedIn => "in",
        Platform::Email => "✉",
        Platform::WhatsApp => "✆",
    }
}

/// Modal dialog; renders nothing while `is_open` is false
#[component]
pub fn BroadcastModal(
    news_id: i64,
    news_title: String,
    is_open: ReadSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(BroadcastDraft::default());

    let close = move || {
        if draft.with_untracked(|d| d.status != BroadcastStatus::Sending) {
            draft.update(|d| d.reset());
        }
        on_close.run(());
    };

    let submit = move || {
        let Some(request) = draft.try_update(|d| d.begin_submit(news_id)).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = match ctx.api() {
                Ok(api) => api.broadcast(&request).await.map_err(|e| e.to_string()),
                Err(message) => Err(message),
            };
            if let Err(reason) = &outcome {
                log::error!("Broadcast of news item {} failed: {}", news_id, reason);
            }
            let sent = outcome.is_ok();
            if draft.try_update(|d| d.finish(outcome)).is_none() {
                return;
            }
            if sent {
                TimeoutFuture::new(BROADCAST_CLOSE_DELAY_MS).await;
                if draft.try_update(|d| d.reset()).is_some() {
                    let _ = on_close.try_run(());
                }
            }
        });
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h3>"Broadcast Intelligence"</h3>
                        <button class="modal-close" on:click=move |_| close()>"×"</button>
                    </div>

                    <div class="modal-section">
                        <p class="modal-label">"Selected Article:"</p>
                        <div class="modal-article">{news_title.clone()}</div>
                    </div>

                    <div class="platform-grid">
                        {Platform::ALL.iter().map(|platform| {
                            let platform = *platform;
                            let is_selected = move || draft.with(|d| d.platform == platform);
                            view! {
                                <button
                                    class=move || if is_selected() { "platform-btn active" } else { "platform-btn" }
                                    on:click=move |_| draft.update(|d| d.select_platform(platform))
                                >
                                    <span class="platform-icon">{platform_icon(platform)}</span>
                                    <span class="platform-label">{platform.label()}</span>
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <textarea
                        class="modal-message"
                        placeholder="Optional message (defaults to the article summary)"
                        prop:value=move || draft.with(|d| d.custom_message.clone())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            draft.update(|d| d.custom_message = text);
                        }
                    ></textarea>

                    {move || draft.with(|d| match &d.status {
                        BroadcastStatus::Sent(message) => Some(view! {
                            <p class="modal-status success">{message.clone()}</p>
                        }.into_any()),
                        BroadcastStatus::Failed(reason) => Some(view! {
                            <p class="modal-status error">{reason.clone()}</p>
                        }.into_any()),
                        _ => None,
                    })}

                    <div class="modal-actions">
                        <button class="btn-secondary" on:click=move |_| close()>"Cancel"</button>
                        <button
                            class=move || if draft.with(|d| d.is_sent()) { "btn-primary sent" } else { "btn-primary" }
                            disabled=move || !draft.with(|d| d.can_submit())
                            on:click=move |_| submit()
                        >
                            {move || draft.with(|d| d.button_label().to_string())}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

//! Sidebar Component
//!
//! Fixed left navigation between pages.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

const NAV_ENTRIES: &[(Page, &str, &str)] = &[
    (Page::Dashboard, "▦", "Dashboard"),
    (Page::Favorites, "★", "Favorites"),
    (Page::Sources, "◉", "Sources"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="sidebar">
            <div class="sidebar-brand">
                <span class="brand-icon">"⚡"</span>
                <h1>"AI News Engine"</h1>
            </div>

            <div class="sidebar-nav">
                {NAV_ENTRIES.iter().map(|(page, icon, label)| {
                    let page = *page;
                    let is_active = move || ctx.page.get() == page;
                    view! {
                        <button
                            class=move || if is_active() { "nav-link active" } else { "nav-link" }
                            on:click=move |_| ctx.navigate(page)
                        >
                            <span class="nav-icon">{*icon}</span>
                            <span>{*label}</span>
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="sidebar-footer">
                <div class="nav-link disabled" title="Not available yet">
                    <span class="nav-icon">"⚙"</span>
                    <span>"Settings"</span>
                </div>
            </div>
        </nav>
    }
}

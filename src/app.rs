//! News Intelligence App
//!
//! Fixed sidebar plus the selected page.

use leptos::prelude::*;
use news_api::{ApiClient, ApiConfig};

use crate::components::Sidebar;
use crate::context::{AppContext, Page};
use crate::pages::{DashboardPage, FavoritesPage, SourcesPage};

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Dashboard);
    let config = ApiConfig::from_build_env();
    log::info!("Using news API at {}", config.base_url);
    let api = ApiClient::new(&config).map_err(|e| e.to_string());
    if let Err(message) = &api {
        log::error!("News API client unavailable: {}", message);
    }

    // Provide context to all children
    provide_context(AppContext::new((page, set_page), api));

    view! {
        <div class="app-layout">
            <Sidebar />

            <main class="main-content">
                {move || match page.get() {
                    Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                    Page::Favorites => view! { <FavoritesPage /> }.into_any(),
                    Page::Sources => view! { <SourcesPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}

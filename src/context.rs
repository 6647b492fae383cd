//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use news_api::ApiClient;

/// Top-level views reachable from the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Favorites,
    Sources,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently shown - read
    pub page: ReadSignal<Page>,
    /// Page currently shown - write
    set_page: WriteSignal<Page>,
    /// Client built once at startup, or why it could not be built
    api: StoredValue<Result<ApiClient, String>, LocalStorage>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>), api: Result<ApiClient, String>) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            api: StoredValue::new_local(api),
        }
    }

    /// Switch the main content area
    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }

    /// Handle to the shared client, or the reason it is unavailable
    pub fn api(&self) -> Result<ApiClient, String> {
        self.api
            .try_with_value(Clone::clone)
            .unwrap_or_else(|| Err("API client is no longer available".to_string()))
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

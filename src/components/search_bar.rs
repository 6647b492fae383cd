//! Search Bar Component
//!
//! Semantic search form; reports the submitted text upward.

use leptos::prelude::*;

#[component]
pub fn SearchBar(#[prop(into)] on_search: Callback<String>) -> impl IntoView {
    let (query, set_query) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(query.get());
    };

    view! {
        <form class="search-bar" on:submit=submit>
            <span class="search-icon">"⌕"</span>
            <input
                type="text"
                placeholder="Semantic Search (e.g. 'LLM Scaling laws')"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <button type="submit" class="search-btn">"Search"</button>
        </form>
    }
}

//! Category Filter Component
//!
//! Pill buttons for the fetched categories, led by "All".

use leptos::prelude::*;
use news_api::{is_all_category, with_all_category};

#[component]
pub fn CategoryFilter(
    #[prop(into)] categories: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="category-filter">
            <For
                each=move || with_all_category(&categories.get())
                key=|cat| cat.clone()
                children=move |cat| {
                    let label = if is_all_category(&cat) { "All".to_string() } else { cat.clone() };
                    let value = cat.clone();
                    let is_selected = move || selected.get() == cat;
                    view! {
                        <button
                            class=move || if is_selected() { "category-btn active" } else { "category-btn" }
                            on:click=move |_| on_change.run(value.clone())
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}

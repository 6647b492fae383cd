//! Stats Card Component

use leptos::prelude::*;

/// One counter tile above the feed
#[component]
pub fn StatsCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    /// Glyph shown in the colored icon square
    icon: &'static str,
    /// CSS modifier for the icon square (e.g., "tone-blue")
    tone: &'static str,
) -> impl IntoView {
    view! {
        <div class="stats-card">
            <div class=format!("stats-icon {}", tone)>{icon}</div>
            <div class="stats-body">
                <p class="stats-title">{title}</p>
                <p class="stats-value">{move || value.get()}</p>
            </div>
        </div>
    }
}

//! Impact Filter Component
//!
//! Minimum-impact selector buttons.

use leptos::prelude::*;
use news_api::IMPACT_THRESHOLDS;

#[component]
pub fn ImpactFilter(
    #[prop(into)] selected: Signal<u32>,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="impact-filter">
            {IMPACT_THRESHOLDS.iter().map(|(min, label)| {
                let min = *min;
                let is_selected = move || selected.get() == min;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "impact-btn active" } else { "impact-btn" }
                        on:click=move |_| on_change.run(min)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

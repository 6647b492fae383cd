use leptos::prelude::*;
use news_api::ImpactBand;

/// Impact score chip colored by severity band
#[component]
pub fn ImpactBadge(score: i32) -> impl IntoView {
    let band = ImpactBand::from_score(score);

    view! {
        <span class=format!("impact-badge {}", band.css_class())>
            "Impact " {score}
        </span>
    }
}

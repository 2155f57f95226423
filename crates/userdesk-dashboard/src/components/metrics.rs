//! User Metrics Cards

use leptos::*;

use crate::components::icons::*;
use crate::state::{metric_cards, MetricCard, MetricKind};
use crate::types::StatsSummary;

/// Four fixed summary cards. Missing stats render placeholders; the
/// section itself is always present.
#[component]
pub fn MetricsPanel(#[prop(optional, into)] stats: MaybeProp<StatsSummary>) -> impl IntoView {
    let cards = move || {
        stats
            .with(|stats| metric_cards(Some(stats)))
            .unwrap_or_else(|| metric_cards(None))
    };

    view! {
        <section class="user-metrics" aria-label="User Metrics">
            <div class="stats-grid">
                {move || cards().into_iter().map(|card| view! { <StatsCard card=card /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn StatsCard(card: MetricCard) -> impl IntoView {
    let icon = match card.kind {
        MetricKind::TotalUsers => view! { <IconUsers size=IconSize::Lg /> }.into_view(),
        MetricKind::Pending => view! { <IconClock size=IconSize::Lg /> }.into_view(),
        MetricKind::InProgress => view! { <IconActivity size=IconSize::Lg /> }.into_view(),
        MetricKind::DueThisWeek => view! { <IconCalendar size=IconSize::Lg /> }.into_view(),
    };

    view! {
        <div class=format!("stats-card stats-card-{}", card.kind.color())>
            <div class="stats-icon">{icon}</div>
            <div class="stats-content">
                <span class="stats-value">{card.value.clone()}</span>
                <span class="stats-title">{card.title()}</span>
            </div>
        </div>
    }
}

//! User Workstation Panel
//!
//! Composes the quick actions bar, metrics cards, directory table and
//! pagination into the main content area of the admin users workstation.

use leptos::*;

use crate::components::{ActionBar, DirectoryTable, MetricsPanel, PaginationControl, RefreshFuture};
use crate::config::PanelConfig;
use crate::error::RefreshError;
use crate::state::PageState;
use crate::types::*;

/// Main content area of the users workstation.
///
/// All inputs are optional except `is_loading`. Missing users render the
/// empty state, missing stats render placeholder cards, and missing handlers
/// leave their buttons inert.
#[component]
pub fn WorkstationPanel(
    #[prop(optional, into)] users: MaybeProp<Vec<UserRecord>>,
    #[prop(optional, into)] stats: MaybeProp<StatsSummary>,
    #[prop(into)] is_loading: MaybeSignal<bool>,
    #[prop(optional, into)] on_add_user: Option<Callback<()>>,
    #[prop(optional, into)] on_import: Option<Callback<()>>,
    #[prop(optional, into)] on_bulk_operation: Option<Callback<()>>,
    #[prop(optional, into)] on_export: Option<Callback<()>>,
    #[prop(optional, into)] on_refresh: Option<Callback<(), RefreshFuture>>,
    #[prop(optional, into)] on_refresh_error: Option<Callback<RefreshError>>,
    #[prop(optional)] config: PanelConfig,
) -> impl IntoView {
    let page = create_rw_signal(PageState::new(config.page_size));

    let directory_users = users.clone();
    let users = store_value(users);
    let total = Signal::derive(move || {
        users.with_value(|users| users.with(Vec::len).unwrap_or(0))
    });

    // Keep the stored page in range when the list shrinks
    create_effect(move |_| {
        let total = total.get();
        if page.with_untracked(|p| p.resolve(total).current != p.requested) {
            page.update(|p| {
                p.clamp_to(total);
            });
            tracing::debug!(total, "clamped current page after list change");
        }
    });

    view! {
        <main class="workstation-main">
            <ActionBar
                on_add_user=on_add_user
                on_import=on_import
                on_bulk_operation=on_bulk_operation
                on_export=on_export
                on_refresh=on_refresh
                on_refresh_error=on_refresh_error
            />
            <MetricsPanel stats=stats />
            <DirectoryTable users=directory_users is_loading=is_loading page=page />
            <PaginationControl total=total page=page />
        </main>
    }
}

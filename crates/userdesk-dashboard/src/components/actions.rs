//! Quick Actions Bar

use std::future::Future;

use futures::future::LocalBoxFuture;
use leptos::*;

use crate::components::icons::*;
use crate::error::RefreshError;
use crate::state::{PendingFlag, RefreshGate};

/// Future returned by a refresh handler. Its settlement, not its value,
/// ends the refreshing state.
pub type RefreshFuture = LocalBoxFuture<'static, Result<(), RefreshError>>;

/// The synchronous actions in the bar, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    AddUser,
    Import,
    BulkOperation,
    Export,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        Self::AddUser,
        Self::Import,
        Self::BulkOperation,
        Self::Export,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddUser => "Add User",
            Self::Import => "Import",
            Self::BulkOperation => "Bulk",
            Self::Export => "Export",
        }
    }

    /// Accessible name, stable across renders
    pub fn aria_label(&self) -> &'static str {
        match self {
            Self::AddUser => "Add new user",
            Self::Import => "Import users",
            Self::BulkOperation => "Bulk operations",
            Self::Export => "Export users",
        }
    }

    fn button_class(&self) -> &'static str {
        match self {
            Self::AddUser => "btn btn-primary quick-action",
            _ => "btn btn-secondary quick-action",
        }
    }

    fn icon(&self) -> View {
        match self {
            Self::AddUser => view! { <IconPlus size=IconSize::Sm /> }.into_view(),
            Self::Import => view! { <IconUpload size=IconSize::Sm /> }.into_view(),
            Self::BulkOperation => view! { <IconLayers size=IconSize::Sm /> }.into_view(),
            Self::Export => view! { <IconDownload size=IconSize::Sm /> }.into_view(),
        }
    }
}

/// Invoke the handler bound to `action`. Unbound actions are a no-op.
pub fn dispatch(action: QuickAction, handler: Option<Callback<()>>) {
    match handler {
        Some(handler) => {
            tracing::debug!(action = action.label(), "dispatching quick action");
            handler.call(());
        }
        None => tracing::debug!(action = action.label(), "no handler bound"),
    }
}

/// Pair each quick action with its handler, in display order
pub fn bindings(
    on_add_user: Option<Callback<()>>,
    on_import: Option<Callback<()>>,
    on_bulk_operation: Option<Callback<()>>,
    on_export: Option<Callback<()>>,
) -> [(QuickAction, Option<Callback<()>>); 4] {
    [
        (QuickAction::AddUser, on_add_user),
        (QuickAction::Import, on_import),
        (QuickAction::BulkOperation, on_bulk_operation),
        (QuickAction::Export, on_export),
    ]
}

/// Handle a refresh click.
///
/// Enters Pending synchronously and returns the task to spawn. Returns
/// `None` without touching the gate when no handler is bound or a refresh is
/// already in flight. A rejected refresh is logged and passed to `on_error`.
pub fn trigger_refresh<F: PendingFlag>(
    gate: &RefreshGate<F>,
    on_refresh: Option<Callback<(), RefreshFuture>>,
    on_error: Option<Callback<RefreshError>>,
) -> Option<impl Future<Output = ()>> {
    let Some(handler) = on_refresh else {
        tracing::debug!("refresh clicked with no handler bound");
        return None;
    };
    let Some(task) = gate.start(move || handler.call(())) else {
        tracing::debug!("refresh already in flight, ignoring click");
        return None;
    };

    tracing::debug!("refresh dispatched");
    Some(async move {
        if let Err(err) = task.await {
            tracing::warn!(error = %err, "refresh handler failed");
            if let Some(on_error) = on_error {
                on_error.call(err);
            }
        }
    })
}

/// Add / Import / Bulk / Export / Refresh buttons.
///
/// Handlers are forwarded as-is from the owning panel; `None` renders the
/// button but binds nothing.
#[component]
pub fn ActionBar(
    #[prop(optional_no_strip)] on_add_user: Option<Callback<()>>,
    #[prop(optional_no_strip)] on_import: Option<Callback<()>>,
    #[prop(optional_no_strip)] on_bulk_operation: Option<Callback<()>>,
    #[prop(optional_no_strip)] on_export: Option<Callback<()>>,
    #[prop(optional_no_strip)] on_refresh: Option<Callback<(), RefreshFuture>>,
    #[prop(optional_no_strip)] on_refresh_error: Option<Callback<RefreshError>>,
) -> impl IntoView {
    let refreshing = create_rw_signal(false);
    let gate = RefreshGate::new(refreshing);

    let handle_refresh = move |_| {
        if let Some(task) = trigger_refresh(&gate, on_refresh, on_refresh_error) {
            spawn_local(task);
        }
    };

    let actions = bindings(on_add_user, on_import, on_bulk_operation, on_export);

    view! {
        <section class="quick-actions" aria-label="Quick Actions">
            <div class="quick-actions-bar">
                {actions
                    .into_iter()
                    .map(|(action, handler)| {
                        view! {
                            <button
                                type="button"
                                class=action.button_class()
                                aria-label=action.aria_label()
                                on:click=move |_| dispatch(action, handler)
                            >
                                {action.icon()}
                                <span>{action.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}

                <button
                    type="button"
                    class="btn btn-ghost quick-action quick-action-refresh"
                    aria-label="Refresh user list"
                    aria-busy=move || refreshing.get().to_string()
                    disabled=move || refreshing.get()
                    on:click=handle_refresh
                >
                    <span class=move || if refreshing.get() { "refresh-icon icon-spin" } else { "refresh-icon" }>
                        <IconRefresh size=IconSize::Sm />
                    </span>
                    <span>{move || if refreshing.get() { "Refreshing..." } else { "Refresh" }}</span>
                </button>
            </div>
        </section>
    }
}

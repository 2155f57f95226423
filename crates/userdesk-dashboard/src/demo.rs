//! Standalone demo page
//!
//! Mounts the workstation panel with generated users so the panel can be
//! exercised in a browser without the admin console around it.

use std::cell::Cell;
use std::rc::Rc;

use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::components::RefreshFuture;
use crate::error::RefreshError;
use crate::pages::WorkstationPanel;
use crate::types::*;

const DEMO_USERS: usize = 137;
const REFRESH_DELAY_MS: u32 = 800;

fn demo_users(count: usize) -> Vec<UserRecord> {
    (0..count)
        .map(|i| UserRecord::new(i.to_string(), format!("User {}", i), format!("user{}@example.com", i)))
        .collect()
}

fn demo_stats(total: usize) -> StatsSummary {
    StatsSummary {
        total: Some(total as u64),
        clients: Some(total as u64 / 2),
        staff: Some(total as u64 / 3),
        admins: Some(4),
        pending: Some(12),
        in_progress: Some(7),
        due_this_week: None,
    }
}

#[component]
pub fn DemoApp() -> impl IntoView {
    let users = create_rw_signal::<Option<Vec<UserRecord>>>(None);
    let stats = create_rw_signal::<Option<StatsSummary>>(None);
    let loading = create_rw_signal(true);
    let last_event = create_rw_signal(String::from("Ready"));

    spawn_local(async move {
        TimeoutFuture::new(REFRESH_DELAY_MS).await;
        users.set(Some(demo_users(DEMO_USERS)));
        stats.set(Some(demo_stats(DEMO_USERS)));
        loading.set(false);
    });

    // Every third refresh fails so the error path can be seen
    let refreshes = Rc::new(Cell::new(0u32));
    let on_refresh = move |_: ()| -> RefreshFuture {
        let attempt = refreshes.get() + 1;
        refreshes.set(attempt);
        async move {
            TimeoutFuture::new(REFRESH_DELAY_MS).await;
            if attempt % 3 == 0 {
                return Err(RefreshError::failed(format!("attempt {} timed out", attempt)));
            }
            let count = DEMO_USERS + attempt as usize;
            users.set(Some(demo_users(count)));
            stats.set(Some(demo_stats(count)));
            last_event.set(format!("Refreshed ({} users)", count));
            Ok(())
        }
        .boxed_local()
    };

    let log_action = move |name: &'static str| {
        move |_: ()| {
            tracing::info!(action = name, "demo action");
            last_event.set(format!("{} clicked", name));
        }
    };

    view! {
        <div class="page-container">
            <div class="page-header">
                <h1 class="page-title">"User Workstation"</h1>
                <p class="page-description">{move || last_event.get()}</p>
            </div>
            <WorkstationPanel
                users=users
                stats=stats
                is_loading=loading
                on_add_user=log_action("add user")
                on_import=log_action("import")
                on_bulk_operation=log_action("bulk operation")
                on_export=log_action("export")
                on_refresh=on_refresh
                on_refresh_error=move |err: RefreshError| {
                    tracing::error!(error = %err, "demo refresh failed");
                    last_event.set(err.to_string());
                }
            />
        </div>
    }
}

//! Host render tests for the workstation panel

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::*;
use futures::FutureExt;
use leptos::*;
use userdesk_dashboard::components::{dispatch, QuickAction, RefreshFuture};
use userdesk_dashboard::state::METRIC_PLACEHOLDER;
use userdesk_dashboard::*;

fn render_panel(users: Option<Vec<UserRecord>>, stats: Option<StatsSummary>, is_loading: bool) -> String {
    render_to_string(move || {
        view! { <WorkstationPanel users=users stats=stats is_loading=is_loading /> }
    })
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_renders_all_labelled_regions() {
    let html = render_panel(Some(mock_users()), Some(mock_stats()), false);

    for region in ["Quick Actions", "User Metrics", "User Directory", "Pagination"] {
        assert!(
            tag_with_label(&html, region).is_some(),
            "missing region {region}"
        );
    }
    assert!(html.contains("User Directory"));
}

#[test]
fn test_single_main_landmark() {
    let html = render_panel(Some(mock_users()), Some(mock_stats()), false);
    assert_eq!(html.matches("<main").count(), 1);
}

#[test]
fn test_action_buttons_have_stable_accessible_names() {
    let html = render_panel(Some(mock_users()), Some(mock_stats()), false);

    for name in [
        "Add new user",
        "Import users",
        "Bulk operations",
        "Export users",
        "Refresh user list",
        "Previous page",
        "Next page",
    ] {
        let tag = tag_with_label(&html, name).unwrap_or_else(|| panic!("missing button {name}"));
        assert!(tag.starts_with("<button"), "{name} is not a button: {tag}");
        assert_eq!(html.matches(&format!("aria-label=\"{}\"", name)).count(), 1);
    }
}

#[test]
fn test_refresh_button_enabled_when_idle() {
    let html = render_panel(Some(mock_users()), Some(mock_stats()), false);
    let refresh = tag_with_label(&html, "Refresh user list").unwrap();
    assert!(!is_disabled(refresh));
    assert!(refresh.contains("aria-busy=\"false\""));
}

// ============================================================================
// Directory
// ============================================================================

#[test]
fn test_shows_user_count_and_loaded_count() {
    let html = render_panel(Some(mock_users()), Some(mock_stats()), false);
    assert!(html.contains("3 users"));
    assert!(html.contains("3 users loaded"));
    assert!(!html.contains("No users found"));
    assert!(html.contains("John Doe"));
    assert!(html.contains("jane@example.com"));
}

#[test]
fn test_single_user() {
    let users = vec![mock_users().remove(0)];
    let html = render_panel(Some(users), Some(StatsSummary::with_total(1)), false);
    assert!(html.contains("1 users"));
}

#[test]
fn test_empty_list_shows_empty_state() {
    let html = render_panel(Some(Vec::new()), Some(StatsSummary::with_total(0)), false);
    assert!(html.contains("No users found"));
    assert!(!html.contains("<table"));
    assert!(!html.contains("users loaded"));
}

#[test]
fn test_missing_users_treated_as_empty() {
    let html = render_panel(None, Some(mock_stats()), false);
    assert!(html.contains("User Directory"));
    assert!(html.contains("No users found"));
    assert!(html.contains("Page 1 of 1"));
}

#[test]
fn test_loading_hides_empty_state_and_table() {
    let html = render_panel(Some(mock_users()), Some(mock_stats()), true);
    assert!(html.contains("Loading user directory"));
    assert!(!html.contains("No users found"));
    assert!(!html.contains("users loaded"));
    assert!(!html.contains("<table"));

    let html = render_panel(Some(Vec::new()), None, true);
    assert!(html.contains("Loading user directory"));
    assert!(!html.contains("No users found"));
}

#[test]
fn test_loading_complete_shows_users() {
    let loading = render_panel(Some(mock_users()), Some(mock_stats()), true);
    assert!(loading.contains("Loading user directory"));

    let loaded = render_panel(Some(mock_users()), Some(mock_stats()), false);
    assert!(!loaded.contains("Loading user directory"));
    assert!(loaded.contains("3 users"));
}

#[test]
fn test_updated_users_recount() {
    let mut users = mock_users();
    users.push(UserRecord::new("4", "New User", "new@example.com"));
    let html = render_panel(Some(users), Some(StatsSummary::with_total(4)), false);
    assert!(html.contains("4 users"));
}

#[test]
fn test_large_list_renders_one_page() {
    let html = render_panel(Some(numbered_users(10_000)), Some(StatsSummary::with_total(10_000)), false);
    assert!(html.contains("10000 users"));
    assert!(html.contains("Page 1 of 200"));
    assert_eq!(html.matches("data-user-id=").count(), DEFAULT_PAGE_SIZE);
}

#[test]
fn test_special_characters_in_names() {
    let users = vec![
        UserRecord::new("1", "John O'Brien", "john@example.com"),
        UserRecord::new("2", "张三", "zhang@example.com"),
        UserRecord::new("3", "José García", "jose@example.com"),
    ];
    let html = render_panel(Some(users), Some(StatsSummary::with_total(3)), false);
    assert!(html.contains("3 users"));
    assert!(html.contains("张三"));
    assert!(html.contains("José García"));
    assert!(html.contains("John O'Brien") || html.contains("John O&#x27;Brien") || html.contains("John O&#39;Brien"));
}

// ============================================================================
// Metrics
// ============================================================================

#[test]
fn test_all_metric_cards_present() {
    let html = render_panel(Some(mock_users()), Some(mock_stats()), false);
    for title in ["Total Users", "Pending", "In Progress", "Due This Week"] {
        assert!(html.contains(title), "missing card {title}");
    }
}

#[test]
fn test_metric_values_render_verbatim() {
    let stats = StatsSummary {
        total: Some(150),
        clients: Some(50),
        staff: Some(75),
        admins: Some(25),
        ..StatsSummary::default()
    };
    let html = render_panel(Some(mock_users()), Some(stats), false);
    assert!(html.contains("150"));

    let stats = StatsSummary {
        total: Some(1_000_000),
        clients: Some(500_000),
        staff: Some(400_000),
        admins: Some(100_000),
        ..StatsSummary::default()
    };
    let html = render_panel(Some(mock_users()), Some(stats), false);
    assert!(html.contains("1000000"));
    assert!(!html.contains("1,000,000"));
    assert!(!html.contains("1e6"));
}

#[test]
fn test_missing_stats_render_placeholders() {
    let html = render_panel(Some(mock_users()), None, false);
    assert!(html.contains("User Directory"));
    assert!(tag_with_label(&html, "User Metrics").is_some());
    assert_eq!(html.matches(METRIC_PLACEHOLDER).count(), 4);
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_page_count_for_two_pages() {
    let html = render_panel(Some(numbered_users(100)), Some(StatsSummary::with_total(100)), false);
    assert!(html.contains("Page 1 of 2"));
    assert!(is_disabled(tag_with_label(&html, "Previous page").unwrap()));
    assert!(!is_disabled(tag_with_label(&html, "Next page").unwrap()));
}

#[test]
fn test_single_page_disables_navigation() {
    let html = render_panel(Some(mock_users()), Some(mock_stats()), false);
    assert!(html.contains("Page 1 of 1"));
    assert!(is_disabled(tag_with_label(&html, "Previous page").unwrap()));
    assert!(is_disabled(tag_with_label(&html, "Next page").unwrap()));
}

#[test]
fn test_custom_page_size() {
    let users = numbered_users(120);
    let html = render_to_string(move || {
        view! {
            <WorkstationPanel
                users=users
                is_loading=false
                config=PanelConfig::default().with_page_size(25)
            />
        }
    });
    assert!(html.contains("Page 1 of 5"));
    assert!(html.contains("120 users"));
    assert_eq!(html.matches("data-user-id=").count(), 25);
    assert!(html.contains("data-user-id=\"24\""));
    assert!(!html.contains("data-user-id=\"25\""));
}

// ============================================================================
// Props and handlers
// ============================================================================

#[test]
fn test_accepts_all_handlers() {
    let html = render_to_string(move || {
        view! {
            <WorkstationPanel
                users=mock_users()
                stats=mock_stats()
                is_loading=false
                on_add_user=|_: ()| {}
                on_import=|_: ()| {}
                on_bulk_operation=|_: ()| {}
                on_export=|_: ()| {}
                on_refresh={|_: ()| -> RefreshFuture { async { Ok(()) }.boxed_local() }}
                on_refresh_error=|_: RefreshError| {}
            />
        }
    });
    assert!(html.contains("User Directory"));
}

#[test]
fn test_dispatch_invokes_handler_once_per_click() {
    let runtime = create_runtime();

    for action in QuickAction::ALL {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let handler = Callback::new(move |_: ()| counter.set(counter.get() + 1));

        dispatch(action, Some(handler));
        assert_eq!(calls.get(), 1, "{:?}", action);
        dispatch(action, Some(handler));
        assert_eq!(calls.get(), 2, "{:?}", action);
    }

    runtime.dispose();
}

#[test]
fn test_dispatch_without_handler_is_noop() {
    for action in QuickAction::ALL {
        dispatch(action, None);
    }
}

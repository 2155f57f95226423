//! Shared helpers for host-side render tests

#![allow(dead_code)]

use leptos::*;
use userdesk_dashboard::{StatsSummary, UserRecord};

/// Render a view to HTML on the host
pub fn render_to_string<F, N>(f: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos::ssr::render_to_string(f).to_string()
}

/// Opening tag of the element whose accessible name is `label`
pub fn tag_with_label<'a>(html: &'a str, label: &str) -> Option<&'a str> {
    let needle = format!("aria-label=\"{}\"", label);
    let at = html.find(&needle)?;
    let start = html[..at].rfind('<')?;
    let end = at + html[at..].find('>')?;
    Some(&html[start..=end])
}

pub fn is_disabled(tag: &str) -> bool {
    tag.contains(" disabled")
}

pub fn mock_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new("1", "John Doe", "john@example.com"),
        UserRecord::new("2", "Jane Smith", "jane@example.com"),
        UserRecord::new("3", "Bob Johnson", "bob@example.com"),
    ]
}

pub fn mock_stats() -> StatsSummary {
    StatsSummary {
        total: Some(3),
        clients: Some(1),
        staff: Some(1),
        admins: Some(1),
        ..StatsSummary::default()
    }
}

pub fn numbered_users(count: usize) -> Vec<UserRecord> {
    (0..count)
        .map(|i| UserRecord::new(i.to_string(), format!("User {}", i), format!("user{}@example.com", i)))
        .collect()
}

//! User Directory Table

use leptos::*;

use crate::components::icons::*;
use crate::components::spinner::*;
use crate::state::{DirectoryState, PageState};
use crate::types::UserRecord;

/// Directory view for `users` as currently loaded.
///
/// A missing list is handed to [`DirectoryState::derive`] as `None`, so the
/// absent and empty cases resolve in one place.
pub fn directory_state(users: &MaybeProp<Vec<UserRecord>>, is_loading: bool) -> DirectoryState {
    users
        .with(|list| DirectoryState::derive(Some(list.as_slice()), is_loading))
        .unwrap_or_else(|| DirectoryState::derive(None, is_loading))
}

/// Rows of `users` visible on `page`. Copies the slice only.
pub fn visible_rows(users: &MaybeProp<Vec<UserRecord>>, page: &PageState) -> Vec<UserRecord> {
    users
        .with(|list| list[page.bounds(list.len())].to_vec())
        .unwrap_or_default()
}

/// Directory listing for the current page.
///
/// Renders exactly one of: the loading indicator, the empty state, or the
/// count summary plus the rows of the visible slice.
#[component]
pub fn DirectoryTable(
    #[prop(optional, into)] users: MaybeProp<Vec<UserRecord>>,
    #[prop(into)] is_loading: MaybeSignal<bool>,
    #[prop(into)] page: Signal<PageState>,
) -> impl IntoView {
    let users = store_value(users);

    let state = move || users.with_value(|users| directory_state(users, is_loading.get()));
    let rows = move || users.with_value(|users| visible_rows(users, &page.get()));

    view! {
        <section class="user-directory" aria-label="User Directory">
            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">"User Directory"</h2>
                    {move || state().count_label().map(|label| view! {
                        <span class="directory-count">{label}</span>
                    })}
                </div>
                <div class="card-body">
                    {move || {
                        let state = state();
                        match state {
                            DirectoryState::Loading => view! {
                                <LoadingState text="Loading user directory..." />
                            }.into_view(),
                            DirectoryState::Empty => view! {
                                <div class="empty-state">
                                    <IconUsers size=IconSize::Xl class="text-muted" />
                                    <p>"No users found"</p>
                                </div>
                            }.into_view(),
                            DirectoryState::Populated { .. } => view! {
                                <p class="directory-loaded">{state.loaded_label()}</p>
                                <div class="table-container">
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th scope="col">"Name"</th>
                                                <th scope="col">"Email"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows().into_iter().map(|user| view! {
                                                <tr data-user-id=user.id>
                                                    <td class="user-name">{user.name}</td>
                                                    <td class="user-email">{user.email}</td>
                                                </tr>
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                </div>
                            }.into_view(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

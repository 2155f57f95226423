//! Pagination Control

use leptos::*;

use crate::components::icons::*;
use crate::state::PageState;

/// "Page X of Y" with previous/next buttons.
///
/// The page count is derived from `total` on every read, so a changed list
/// never shows a stale count or an out-of-range page.
#[component]
pub fn PaginationControl(
    #[prop(into)] total: Signal<usize>,
    page: RwSignal<PageState>,
) -> impl IntoView {
    let resolved = move || page.with(|p| p.resolve(total.get()));

    let go_previous = move |_| {
        let total = total.get_untracked();
        page.update(|p| {
            if p.previous(total) {
                tracing::debug!(page = p.requested, "previous page");
            }
        });
    };

    let go_next = move |_| {
        let total = total.get_untracked();
        page.update(|p| {
            if p.next(total) {
                tracing::debug!(page = p.requested, "next page");
            }
        });
    };

    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                type="button"
                class="btn btn-ghost pagination-btn"
                aria-label="Previous page"
                disabled=move || !resolved().has_previous
                on:click=go_previous
            >
                <IconChevronLeft size=IconSize::Sm />
            </button>
            <span class="pagination-status" aria-current="page">
                {move || resolved().label()}
            </span>
            <button
                type="button"
                class="btn btn-ghost pagination-btn"
                aria-label="Next page"
                disabled=move || !resolved().has_next
                on:click=go_next
            >
                <IconChevronRight size=IconSize::Sm />
            </button>
        </nav>
    }
}

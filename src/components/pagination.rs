//! Previous/next pager under a record list.

use leptos::prelude::*;

/// Pager over a 1-based page signal. An empty result still reads
/// "Page 1 of 1" so the label never shows page zero.
#[component]
pub fn Pagination(page: RwSignal<usize>, #[prop(into)] total_pages: Signal<usize>) -> impl IntoView {
    let prev_disabled = move || page.get() <= 1;
    let next_disabled = move || page.get() >= total_pages.get().max(1);

    let on_prev = move |_| {
        page.update(|p| {
            if *p > 1 {
                *p -= 1;
            }
        });
    };
    let on_next = move |_| {
        let last = total_pages.get_untracked().max(1);
        page.update(|p| {
            if *p < last {
                *p += 1;
            }
        });
    };

    let label = move || format!("Page {} of {}", page.get(), total_pages.get().max(1));

    view! {
        <div class="pagination">
            <button class="btn pagination__prev" prop:disabled=prev_disabled on:click=on_prev>
                "Previous"
            </button>
            <span class="pagination__label">{label}</span>
            <button class="btn pagination__next" prop:disabled=next_disabled on:click=on_next>
                "Next"
            </button>
        </div>
    }
}

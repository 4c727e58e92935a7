//! Pagination Bar Component
//!
//! 1-based page buttons derived from the last reported total.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_catalog;

#[component]
pub fn PaginationBar() -> impl IntoView {
    let catalog = use_catalog();
    let state = catalog.state();

    let bar_catalog = catalog.clone();
    view! {
        <div class="pagination">
            {move || {
                let catalog = bar_catalog.clone();
                let (current, count) = state.with(|s| (s.page.page(), s.page.page_count()));
                (1..=count)
                    .map(|page| {
                        let catalog = catalog.clone();
                        let class = if page == current { "page-btn active" } else { "page-btn" };
                        view! {
                            <button
                                class=class
                                on:click=move |_| {
                                    let catalog = catalog.clone();
                                    spawn_local(async move { catalog.set_page(page).await });
                                }
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

//! Header Component
//!
//! Cart link, category filter, title-sort toggle and the debounced
//! product search input.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use gloo_timers::future::TimeoutFuture;

use storefront_core::SortDirection;

use crate::context::use_catalog;

/// Quiet period before a keystroke becomes a search request
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Categories offered by the demo catalog
const CATEGORIES: &[&str] = &[
    "beauty",
    "fragrances",
    "furniture",
    "groceries",
    "home-decoration",
    "kitchen-accessories",
    "laptops",
    "mens-shirts",
    "mens-shoes",
    "mens-watches",
    "motorcycle",
    "skin-care",
    "smartphones",
    "sports-accessories",
    "sunglasses",
    "tablets",
    "tops",
    "vehicle",
    "womens-bags",
    "womens-dresses",
    "womens-shoes",
    "womens-watches",
];

#[component]
pub fn Header(set_cart_open: WriteSignal<bool>) -> impl IntoView {
    let catalog = use_catalog();
    let state = catalog.state();

    let (search_text, set_search_text) = signal(String::new());
    let (category, set_category) = signal(String::new());
    // Bumped on every keystroke; a pending timeout only fires its search if
    // its generation is still current once the quiet period elapses.
    let debounce_generation = StoredValue::new(0u64);

    let search_catalog = catalog.clone();
    let category_catalog = catalog.clone();

    let sort_catalog = catalog.clone();
    let on_sort = move |_| {
        let catalog = sort_catalog.clone();
        spawn_local(async move { catalog.sort_by_title().await });
    };

    view! {
        <header class="header">
            <div class="inner">
                <a
                    href="#"
                    class="cart-link"
                    on:click=move |ev| {
                        ev.prevent_default();
                        set_cart_open.set(true);
                    }
                >
                    "Cart"
                    <span class="cart-count">{move || state.with(|s| s.cart.len())}</span>
                </a>

                <label class="category-filter">
                    "Category: "
                    <select
                        prop:value=move || category.get()
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            let value = select.value();
                            set_category.set(value.clone());

                            let catalog = category_catalog.clone();
                            spawn_local(async move {
                                if value.is_empty() {
                                    catalog.fetch_page().await;
                                } else {
                                    catalog.filter_category(&value).await;
                                }
                            });
                        }
                    >
                        <option value="">"All"</option>
                        {CATEGORIES
                            .iter()
                            .copied()
                            .map(|c| view! { <option value=c>{c}</option> })
                            .collect_view()}
                    </select>
                </label>

                <button class="sort-btn" on:click=on_sort>
                    {move || match state.with(|s| s.next_sort) {
                        SortDirection::Ascending => "Sort: title A-Z",
                        SortDirection::Descending => "Sort: title Z-A",
                    }}
                </button>

                <input
                    class="search-input"
                    type="text"
                    placeholder="Search products"
                    prop:value=move || search_text.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        let text = input.value();
                        set_search_text.set(text.clone());

                        let generation = debounce_generation.get_value() + 1;
                        debounce_generation.set_value(generation);

                        let catalog = search_catalog.clone();
                        spawn_local(async move {
                            if text.trim().is_empty() {
                                // Clearing the input drops the filter right away.
                                catalog.search("").await;
                                return;
                            }
                            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
                            if debounce_generation.get_value() == generation {
                                catalog.search(&text).await;
                            }
                        });
                    }
                />
            </div>
        </header>
    }
}

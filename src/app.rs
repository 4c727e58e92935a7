//! Storefront App
//!
//! Root component: builds the catalog context, kicks off the initial load
//! and lays out the header, grid, pagination and the three modals.

use leptos::prelude::*;
use leptos::task::spawn_local;

use storefront_core::models::Product;
use storefront_core::ApiConfig;

use crate::components::{
    CartModal, CheckoutModal, Header, PaginationBar, ProductGrid, ProductModal,
};
use crate::context::CatalogContext;

#[component]
pub fn App() -> impl IntoView {
    let catalog = CatalogContext::new(ApiConfig::default());
    provide_context(catalog.clone());

    let state = catalog.state();

    // Modal state
    let (selected_product, set_selected_product) = signal::<Option<Product>>(None);
    let (cart_open, set_cart_open) = signal(false);
    let (checkout_open, set_checkout_open) = signal(false);

    // Initial load: stub sign-in, auxiliary users, then the first page
    {
        let catalog = catalog.clone();
        Effect::new(move |_| {
            let catalog = catalog.clone();
            spawn_local(async move {
                catalog.sign_in().await;
                catalog.load_users().await;
                catalog.fetch_page().await;
            });
        });
    }

    let error_catalog = catalog.clone();

    view! {
        <ProductModal product=selected_product set_product=set_selected_product />
        <CartModal open=cart_open set_open=set_cart_open set_checkout_open=set_checkout_open />
        <CheckoutModal open=checkout_open set_open=set_checkout_open />

        <Header set_cart_open=set_cart_open />

        <main class="main-content">
            <h1>"Products"</h1>

            {move || {
                let catalog = error_catalog.clone();
                state.with(|s| s.last_error.clone()).map(|err| view! {
                    <div class="error-banner">
                        <span>{err.to_string()}</span>
                        <button class="dismiss-btn" on:click=move |_| catalog.dismiss_error()>
                            "×"
                        </button>
                    </div>
                })
            }}

            <PaginationBar />

            <Show
                when=move || !state.with(|s| s.is_loading)
                fallback=|| view! { <div class="loader"><div class="spinner"></div></div> }
            >
                <ProductGrid set_selected=set_selected_product />
            </Show>
        </main>
    }
}

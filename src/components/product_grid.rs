//! Product Grid Component
//!
//! Card grid over the current product list.

use leptos::prelude::*;

use storefront_core::models::Product;

use crate::context::use_catalog;

#[component]
pub fn ProductGrid(set_selected: WriteSignal<Option<Product>>) -> impl IntoView {
    let catalog = use_catalog();
    let state = catalog.state();

    let grid_catalog = catalog.clone();
    view! {
        <div class="product-grid">
            {move || {
                let catalog = grid_catalog.clone();
                state
                    .with(|s| s.products.clone())
                    .into_iter()
                    .map(|product| {
                        let title = product.title.clone();
                        let price = format!("${:.2}", product.price);
                        let cover = product.cover_image().unwrap_or("").to_string();
                        let open_from_image = {
                            let product = product.clone();
                            move |_| set_selected.set(Some(product.clone()))
                        };
                        let open_from_button = {
                            let product = product.clone();
                            move |_| set_selected.set(Some(product.clone()))
                        };
                        let add_to_cart = {
                            let catalog = catalog.clone();
                            move |_| catalog.add_to_cart(product.clone(), 1)
                        };
                        view! {
                            <div class="card">
                                <img
                                    class="card-image"
                                    src=cover
                                    alt=title.clone()
                                    on:click=open_from_image
                                />
                                <div class="card-title">{title}</div>
                                <div class="card-price">{price}</div>
                                <div class="card-buttons">
                                    <button on:click=open_from_button>"View"</button>
                                    <button on:click=add_to_cart>"Add to Cart"</button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

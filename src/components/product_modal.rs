//! Product Detail Modal
//!
//! Image, description and price for the product picked from the grid.

use leptos::prelude::*;

use storefront_core::models::Product;

use crate::context::use_catalog;

#[component]
pub fn ProductModal(
    product: ReadSignal<Option<Product>>,
    set_product: WriteSignal<Option<Product>>,
) -> impl IntoView {
    let catalog = use_catalog();

    move || {
        let catalog = catalog.clone();
        product.get().map(|p| {
            let title = p.title.clone();
            let description = p.description.clone();
            let price = format!("${:.2}", p.price);
            let cover = p.cover_image().unwrap_or("").to_string();
            let add_to_cart = move |_| catalog.add_to_cart(p.clone(), 1);
            view! {
                <div class="modal-overlay" on:click=move |_| set_product.set(None)>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <h2>{title.clone()}</h2>
                            <button class="close-btn" on:click=move |_| set_product.set(None)>
                                "×"
                            </button>
                        </div>
                        <img class="modal-image" src=cover alt=title />
                        <p class="modal-description">{description}</p>
                        <p class="modal-price">{price}</p>
                        <button class="add-btn" on:click=add_to_cart>"Add to Cart"</button>
                    </div>
                </div>
            }
        })
    }
}

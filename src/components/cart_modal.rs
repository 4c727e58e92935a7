//! Cart Modal Component
//!
//! Cart lines with quantity controls, per-line totals and the grand total.
//! The minus button at quantity one removes the line.

use leptos::prelude::*;

use crate::context::use_catalog;

#[component]
pub fn CartModal(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    set_checkout_open: WriteSignal<bool>,
) -> impl IntoView {
    let catalog = use_catalog();
    let state = catalog.state();

    move || {
        if !open.get() {
            return None;
        }
        let lines_catalog = catalog.clone();
        Some(view! {
            <div class="modal-overlay" on:click=move |_| set_open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Shopping Cart"</h2>
                        <button class="close-btn" on:click=move |_| set_open.set(false)>
                            "×"
                        </button>
                    </div>

                    <Show when=move || state.with(|s| s.cart.is_empty())>
                        <p class="cart-empty">"Cart is empty"</p>
                    </Show>

                    <div class="cart-lines">
                        {move || {
                            let catalog = lines_catalog.clone();
                            state
                                .with(|s| s.cart.lines().to_vec())
                                .into_iter()
                                .map(|line| {
                                    let id = line.product.id;
                                    let quantity = line.quantity;
                                    let title = line.product.title.clone();
                                    let cover =
                                        line.product.cover_image().unwrap_or("").to_string();
                                    let line_total = format!("${:.2}", line.line_total());
                                    let decrement = {
                                        let catalog = catalog.clone();
                                        move |_| catalog.change_quantity(id, quantity - 1)
                                    };
                                    let increment = {
                                        let catalog = catalog.clone();
                                        move |_| catalog.change_quantity(id, quantity + 1)
                                    };
                                    let remove = {
                                        let catalog = catalog.clone();
                                        move |_| catalog.remove_from_cart(id)
                                    };
                                    view! {
                                        <div class="cart-line">
                                            <img
                                                class="cart-line-image"
                                                src=cover
                                                alt=title.clone()
                                            />
                                            <div class="cart-line-info">
                                                <div class="cart-line-title">{title}</div>
                                                <div class="quantity-controls">
                                                    <button on:click=decrement>"−"</button>
                                                    <span class="quantity">{quantity}</span>
                                                    <button on:click=increment>"+"</button>
                                                </div>
                                                <div class="cart-line-total">{line_total}</div>
                                            </div>
                                            <button class="remove-btn" on:click=remove>
                                                "Remove"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    <Show when=move || !state.with(|s| s.cart.is_empty())>
                        <div class="cart-footer">
                            <div class="cart-total">
                                {move || {
                                    format!("Total: ${:.2}", state.with(|s| s.cart.total_price()))
                                }}
                            </div>
                            <button
                                class="confirm-btn"
                                on:click=move |_| {
                                    set_open.set(false);
                                    set_checkout_open.set(true);
                                }
                            >
                                "Confirm Order"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        })
    }
}

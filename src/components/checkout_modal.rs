//! Checkout Modal Component
//!
//! Order summary plus a stub order form. Confirming only raises a browser
//! alert; nothing is submitted anywhere.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_catalog;

#[component]
pub fn CheckoutModal(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let catalog = use_catalog();
    let state = catalog.state();

    let (name, set_name) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (agreed, set_agreed) = signal(false);

    let can_confirm = move || agreed.get() && !name.get().trim().is_empty();

    let confirm = move |_| {
        if !can_confirm() {
            return;
        }
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("Order placed successfully!");
        }
        set_name.set(String::new());
        set_address.set(String::new());
        set_phone.set(String::new());
        set_agreed.set(false);
        set_open.set(false);
    };

    let text_input = |ev: &web_sys::Event| -> String {
        ev.target()
            .unwrap()
            .dyn_ref::<web_sys::HtmlInputElement>()
            .unwrap()
            .value()
    };

    move || {
        if !open.get() {
            return None;
        }
        Some(view! {
            <div class="modal-overlay" on:click=move |_| set_open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Confirm Your Order"</h2>
                        <button class="close-btn" on:click=move |_| set_open.set(false)>
                            "×"
                        </button>
                    </div>

                    <p class="summary-heading">"Order Summary"</p>
                    <div class="summary-lines">
                        {move || {
                            state
                                .with(|s| s.cart.lines().to_vec())
                                .into_iter()
                                .map(|line| {
                                    let total = format!("${:.2}", line.line_total());
                                    view! {
                                        <div class="summary-line">
                                            <span>{line.product.title.clone()}</span>
                                            <span>{format!("x{}", line.quantity)}</span>
                                            <span>{total}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <div class="summary-total">
                        {move || format!("Total: ${:.2}", state.with(|s| s.cart.total_price()))}
                    </div>

                    <div class="order-form">
                        <input
                            type="text"
                            placeholder="Name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(text_input(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Address"
                            prop:value=move || address.get()
                            on:input=move |ev| set_address.set(text_input(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Phone number"
                            prop:value=move || phone.get()
                            on:input=move |ev| set_phone.set(text_input(&ev))
                        />
                        <label class="terms">
                            <input
                                type="checkbox"
                                prop:checked=move || agreed.get()
                                on:change=move |ev| {
                                    let checked = ev
                                        .target()
                                        .unwrap()
                                        .dyn_ref::<web_sys::HtmlInputElement>()
                                        .unwrap()
                                        .checked();
                                    set_agreed.set(checked);
                                }
                            />
                            "I agree to the terms of service"
                        </label>
                    </div>

                    <button
                        class="confirm-btn"
                        prop:disabled=move || !can_confirm()
                        on:click=confirm
                    >
                        "Confirm Order"
                    </button>
                </div>
            </div>
        })
    }
}

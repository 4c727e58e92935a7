//! Catalog Context
//!
//! The store handle handed to every component via the Leptos Context API.
//! Owns the `CatalogStore`, bridges its notifications into one state
//! signal, and carries the async operations that talk to the catalog
//! service. Built once in `App` so tests and alternative hosts can
//! construct their own isolated instance.

use leptos::prelude::*;
use leptos::task::spawn_local;

use storefront_core::models::Product;
use storefront_core::store::{CatalogState, CatalogStore};
use storefront_core::ApiConfig;

use crate::api;

/// Demo account used for the remote cart stub
const STUB_USER_ID: u64 = 1;

/// App-wide store handle, provided via context
#[derive(Clone)]
pub struct CatalogContext {
    store: CatalogStore,
    state: ReadSignal<CatalogState>,
    config: ApiConfig,
}

impl CatalogContext {
    /// Build the store and bridge every store notification into a signal
    pub fn new(config: ApiConfig) -> Self {
        let store = CatalogStore::new(config.page_limit);
        let (state, set_state) = signal(store.snapshot());
        store.subscribe(move |snapshot| set_state.set(snapshot.clone()));
        Self {
            store,
            state,
            config,
        }
    }

    /// Reactive snapshot of the store state
    pub fn state(&self) -> ReadSignal<CatalogState> {
        self.state
    }

    /// Fetch the current paging window
    pub async fn fetch_page(&self) {
        let window = self.store.page_window();
        let ticket = self.store.begin_fetch();
        let result = api::fetch_page(&self.config, &window).await;
        self.store.complete_page(ticket, result);
    }

    /// Free-text search. Blank input falls back to the plain page fetch.
    /// Debouncing is the caller's job, not the store's.
    pub async fn search(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.store.set_search_query("");
            self.fetch_page().await;
            return;
        }
        self.store.set_search_query(query);
        let ticket = self.store.begin_fetch();
        let result = api::search(&self.config, query).await;
        self.store.complete_search(ticket, result);
    }

    /// Restrict the list to one category; paging state is left untouched
    pub async fn filter_category(&self, category: &str) {
        let ticket = self.store.begin_fetch();
        let result = api::by_category(&self.config, category).await;
        self.store.complete_category(ticket, result);
    }

    /// Fetch sorted by title, flipping the direction for the next call
    pub async fn sort_by_title(&self) {
        let (ticket, direction) = self.store.begin_title_sort();
        let result = api::sorted_by_title(&self.config, direction).await;
        self.store.complete_page(ticket, result);
    }

    /// Jump to a 1-based page and fetch it
    pub async fn set_page(&self, page: u32) {
        let window = self.store.set_page(page);
        let ticket = self.store.begin_fetch();
        let result = api::fetch_page(&self.config, &window).await;
        self.store.complete_page(ticket, result);
    }

    /// Auxiliary user list; stored but never rendered
    pub async fn load_users(&self) {
        let ticket = self.store.begin_fetch();
        let result = api::fetch_users(&self.config).await;
        self.store.complete_users(ticket, result);
    }

    /// Stub sign-in fired at startup; the outcome is only logged
    pub async fn sign_in(&self) {
        match api::login(&self.config).await {
            Ok(()) => web_sys::console::log_1(&"signed in against the demo service".into()),
            Err(err) => {
                web_sys::console::warn_1(&format!("stub sign-in failed: {}", err).into());
            }
        }
    }

    /// Add a product to the cart. The first line also creates a remote cart
    /// in the background; that call is a stub and only logged.
    pub fn add_to_cart(&self, product: Product, quantity: u32) {
        let first_line = self.store.add_to_cart(product, quantity);
        if first_line {
            let config = self.config.clone();
            let payload = self.store.snapshot().cart.to_create_payload(STUB_USER_ID);
            spawn_local(async move {
                match api::create_cart(&config, &payload).await {
                    Ok(created) => {
                        web_sys::console::log_1(
                            &format!("remote cart {} created", created.id).into(),
                        );
                    }
                    Err(err) => {
                        web_sys::console::warn_1(
                            &format!("remote cart creation failed: {}", err).into(),
                        );
                    }
                }
            });
        }
    }

    /// Set a line's quantity; zero removes the line
    pub fn change_quantity(&self, product_id: u64, quantity: u32) {
        self.store.change_quantity(product_id, quantity);
    }

    pub fn remove_from_cart(&self, product_id: u64) {
        self.store.remove_from_cart(product_id);
    }

    /// Dismiss the error banner
    pub fn dismiss_error(&self) {
        self.store.clear_error();
    }
}

/// Get the catalog context from Leptos context
pub fn use_catalog() -> CatalogContext {
    expect_context::<CatalogContext>()
}

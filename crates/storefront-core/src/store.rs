//! Catalog Store
//!
//! The one state container behind the storefront UI. Holds the fetched
//! product list, the paging window, the auxiliary user list and the cart,
//! and hands every subscriber an owned snapshot after each transition.
//!
//! Network calls live elsewhere; the store only models their lifecycle.
//! `begin_fetch` marks a request in flight and returns a [`FetchTicket`];
//! the matching `complete_*` call applies the outcome only while no newer
//! request has been issued since. A superseded response is discarded
//! wholesale, so the last request issued wins regardless of arrival order.
//! Cart operations are synchronous and bypass the ticket machinery.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::cart::Cart;
use crate::error::{FetchError, FetchResult};
use crate::models::{Product, ProductPage, User};
use crate::paging::PageWindow;
use crate::sort::SortDirection;

/// Observable store state; cloned out as a snapshot on every notification
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub users: Vec<User>,
    pub cart: Cart,
    pub page: PageWindow,
    /// Query of the last search request issued; empty means no filter
    pub search_query: String,
    /// Direction the next title sort will request
    pub next_sort: SortDirection,
    pub is_loading: bool,
    pub last_error: Option<FetchError>,
}

/// Generation token tying a `begin` call to its `complete` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

type Subscriber = Box<dyn Fn(&CatalogState) + Send + Sync>;

struct Inner {
    state: CatalogState,
    next_ticket: u64,
    in_flight: Option<u64>,
}

/// Shared, cloneable handle to the catalog state
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<Mutex<Inner>>,
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
}

impl CatalogStore {
    pub fn new(page_limit: u32) -> Self {
        let state = CatalogState {
            page: PageWindow::new(page_limit),
            ..CatalogState::default()
        };
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state,
                next_ticket: 0,
                in_flight: None,
            })),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a listener called with a snapshot after every transition.
    /// Listeners run outside the state lock.
    pub fn subscribe(&self, listener: impl Fn(&CatalogState) + Send + Sync + 'static) {
        self.subscribers
            .lock()
            .expect("subscriber list poisoned")
            .push(Box::new(listener));
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> CatalogState {
        self.lock().state.clone()
    }

    /// Current paging window
    pub fn page_window(&self) -> PageWindow {
        self.lock().state.page
    }

    /// Derived cart total, recomputed on read
    pub fn total_price(&self) -> f64 {
        self.lock().state.cart.total_price()
    }

    // --- fetch lifecycle -------------------------------------------------

    /// Mark a request in flight: raises the loading flag, clears any shown
    /// error and supersedes every ticket issued before.
    pub fn begin_fetch(&self) -> FetchTicket {
        let mut ticket = 0;
        self.transition(|inner| {
            ticket = start_request(inner);
        });
        FetchTicket(ticket)
    }

    /// Begin a title-sort request: returns the direction to ask for and
    /// flips the stored direction for the next invocation.
    pub fn begin_title_sort(&self) -> (FetchTicket, SortDirection) {
        let mut ticket = 0;
        let mut direction = SortDirection::Ascending;
        self.transition(|inner| {
            ticket = start_request(inner);
            direction = inner.state.next_sort;
            inner.state.next_sort = direction.flipped();
        });
        (FetchTicket(ticket), direction)
    }

    /// Apply a plain page fetch: products and total
    pub fn complete_page(&self, ticket: FetchTicket, result: FetchResult<ProductPage>) {
        self.finish(ticket, "page", result, |state, page| {
            state.products = page.products;
            state.page.total = page.total;
        });
    }

    /// Apply search results: same shape as a page fetch
    pub fn complete_search(&self, ticket: FetchTicket, result: FetchResult<ProductPage>) {
        self.finish(ticket, "search", result, |state, page| {
            state.products = page.products;
            state.page.total = page.total;
        });
    }

    /// Apply category results: the list is replaced, paging stays put
    pub fn complete_category(&self, ticket: FetchTicket, result: FetchResult<ProductPage>) {
        self.finish(ticket, "category", result, |state, page| {
            state.products = page.products;
        });
    }

    /// Apply the auxiliary user list
    pub fn complete_users(&self, ticket: FetchTicket, result: FetchResult<Vec<User>>) {
        self.finish(ticket, "users", result, |state, users| {
            state.users = users;
        });
    }

    /// Record the query a search request was issued for
    pub fn set_search_query(&self, query: &str) {
        self.transition(|inner| inner.state.search_query = query.to_string());
    }

    /// Drop the shown error without touching anything else
    pub fn clear_error(&self) {
        self.transition(|inner| inner.state.last_error = None);
    }

    // --- paging ----------------------------------------------------------

    /// Move to a 1-based page; returns the window the caller should fetch
    pub fn set_page(&self, page: u32) -> PageWindow {
        let mut window = PageWindow::default();
        self.transition(|inner| {
            inner.state.page.set_page(page);
            window = inner.state.page;
        });
        window
    }

    // --- cart (synchronous, race-free) ------------------------------------

    /// Add `quantity` of `product`; returns true when this created the
    /// cart's first line.
    pub fn add_to_cart(&self, product: Product, quantity: u32) -> bool {
        let mut first_line = false;
        self.transition(|inner| {
            let was_empty = inner.state.cart.is_empty();
            inner.state.cart.add(product, quantity);
            first_line = was_empty && !inner.state.cart.is_empty();
        });
        first_line
    }

    /// Set a line's quantity; zero removes the line
    pub fn change_quantity(&self, product_id: u64, quantity: u32) {
        self.transition(|inner| inner.state.cart.change_quantity(product_id, quantity));
    }

    /// Remove a line; absent ids are a no-op
    pub fn remove_from_cart(&self, product_id: u64) {
        self.transition(|inner| inner.state.cart.remove(product_id));
    }

    // --- internals --------------------------------------------------------

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("catalog state poisoned")
    }

    /// Run `mutate` under the lock, then notify with the resulting snapshot
    fn transition(&self, mutate: impl FnOnce(&mut Inner)) {
        let snapshot = {
            let mut inner = self.lock();
            mutate(&mut inner);
            inner.state.clone()
        };
        self.notify(&snapshot);
    }

    /// Shared completion gate: superseded tickets are discarded, the current
    /// one clears the loading flag, and a failure keeps the prior data.
    fn finish<T>(
        &self,
        ticket: FetchTicket,
        what: &str,
        result: FetchResult<T>,
        apply: impl FnOnce(&mut CatalogState, T),
    ) {
        let snapshot = {
            let mut inner = self.lock();
            if inner.in_flight != Some(ticket.0) {
                log::debug!("superseded {} response discarded", what);
                return;
            }
            inner.in_flight = None;
            inner.state.is_loading = false;
            match result {
                Ok(payload) => apply(&mut inner.state, payload),
                Err(err) => {
                    log::error!("{} fetch failed: {}", what, err);
                    inner.state.last_error = Some(err);
                }
            }
            inner.state.clone()
        };
        self.notify(&snapshot);
    }

    fn notify(&self, snapshot: &CatalogState) {
        let subscribers = self.subscribers.lock().expect("subscriber list poisoned");
        for listener in subscribers.iter() {
            listener(snapshot);
        }
    }
}

fn start_request(inner: &mut Inner) -> u64 {
    inner.next_ticket += 1;
    inner.in_flight = Some(inner.next_ticket);
    inner.state.is_loading = true;
    inner.state.last_error = None;
    inner.next_ticket
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn product(id: u64, price: f64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            category: "beauty".to_string(),
            price,
            images: Vec::new(),
            description: String::new(),
        }
    }

    fn page(products: Vec<Product>, total: u32) -> ProductPage {
        ProductPage { products, total }
    }

    fn store() -> CatalogStore {
        CatalogStore::new(4)
    }

    #[test]
    fn page_fetch_replaces_products_and_total() {
        let store = store();
        let ticket = store.begin_fetch();
        assert!(store.snapshot().is_loading);

        store.complete_page(ticket, Ok(page(vec![product(1, 10.0)], 20)));

        let state = store.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.page.total, 20);
        assert_eq!(state.page.page_count(), 5);
    }

    #[test]
    fn failed_fetch_keeps_prior_products() {
        let store = store();
        let ticket = store.begin_fetch();
        store.complete_page(ticket, Ok(page(vec![product(1, 10.0)], 1)));

        let ticket = store.begin_fetch();
        store.complete_page(ticket, Err(FetchError::Status(500)));

        let state = store.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.last_error, Some(FetchError::Status(500)));
    }

    #[test]
    fn begin_fetch_clears_the_previous_error() {
        let store = store();
        let ticket = store.begin_fetch();
        store.complete_page(ticket, Err(FetchError::Transport("offline".to_string())));
        assert!(store.snapshot().last_error.is_some());

        store.begin_fetch();
        assert_eq!(store.snapshot().last_error, None);
    }

    #[test]
    fn superseded_response_is_discarded() {
        let store = store();
        let stale = store.begin_fetch();
        let fresh = store.begin_fetch();

        store.complete_page(stale, Ok(page(vec![product(1, 1.0)], 1)));
        // The stale completion must not touch state or clear the newer request.
        assert!(store.snapshot().is_loading);
        assert!(store.snapshot().products.is_empty());

        store.complete_page(fresh, Ok(page(vec![product(2, 2.0)], 1)));
        let state = store.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.products[0].id, 2);
    }

    #[test]
    fn stale_error_does_not_overwrite_fresh_data() {
        let store = store();
        let stale = store.begin_fetch();
        let fresh = store.begin_fetch();

        store.complete_page(fresh, Ok(page(vec![product(2, 2.0)], 1)));
        store.complete_page(stale, Err(FetchError::Status(500)));

        let state = store.snapshot();
        assert_eq!(state.last_error, None);
        assert_eq!(state.products[0].id, 2);
        assert!(!state.is_loading);
    }

    #[test]
    fn set_page_computes_skip() {
        let store = store();
        assert_eq!(store.set_page(3).skip, 8);
        assert_eq!(store.snapshot().page.page(), 3);
        assert_eq!(store.set_page(1).skip, 0);
    }

    #[test]
    fn category_fetch_leaves_paging_untouched() {
        let store = store();
        let ticket = store.begin_fetch();
        store.complete_page(ticket, Ok(page(vec![product(1, 1.0)], 40)));

        let ticket = store.begin_fetch();
        store.complete_category(ticket, Ok(page(vec![product(2, 2.0), product(3, 3.0)], 0)));

        let state = store.snapshot();
        assert_eq!(state.products.len(), 2);
        assert_eq!(state.page.total, 40);
    }

    #[test]
    fn title_sort_direction_flips_per_invocation() {
        let store = store();

        let (ticket, first) = store.begin_title_sort();
        // The flip is tied to the invocation, not to a successful response.
        store.complete_search(ticket, Err(FetchError::Status(500)));
        let (ticket, second) = store.begin_title_sort();
        store.complete_search(ticket, Ok(page(Vec::new(), 0)));
        let (_, third) = store.begin_title_sort();

        assert_eq!(first, SortDirection::Ascending);
        assert_eq!(second, SortDirection::Descending);
        assert_eq!(third, SortDirection::Ascending);
    }

    #[test]
    fn users_are_stored_separately_from_products() {
        let store = store();
        let ticket = store.begin_fetch();
        store.complete_page(ticket, Ok(page(vec![product(1, 1.0)], 1)));

        let ticket = store.begin_fetch();
        let users = vec![User {
            id: 1,
            first_name: "Emily".to_string(),
            last_name: "Johnson".to_string(),
            maiden_name: String::new(),
            age: 28,
            gender: "female".to_string(),
        }];
        store.complete_users(ticket, Ok(users));

        let state = store.snapshot();
        assert_eq!(state.users.len(), 1);
        assert_eq!(state.products.len(), 1);
    }

    #[test]
    fn search_query_is_recorded() {
        let store = store();
        store.set_search_query("mascara");
        assert_eq!(store.snapshot().search_query, "mascara");
    }

    #[test]
    fn first_cart_line_is_flagged_once() {
        let store = store();
        assert!(store.add_to_cart(product(1, 5.0), 1));
        assert!(!store.add_to_cart(product(1, 5.0), 2));
        assert!(!store.add_to_cart(product(2, 1.0), 1));
        assert_eq!(store.snapshot().cart.quantity_of(1), Some(3));
    }

    #[test]
    fn adding_nothing_does_not_flag_a_first_line() {
        let store = store();
        assert!(!store.add_to_cart(product(1, 5.0), 0));
        assert!(store.snapshot().cart.is_empty());
    }

    #[test]
    fn total_price_matches_direct_recomputation() {
        let store = store();
        store.add_to_cart(product(1, 2.5), 2);
        store.add_to_cart(product(2, 10.0), 1);
        store.change_quantity(1, 4);

        let state = store.snapshot();
        let direct: f64 = state
            .cart
            .lines()
            .iter()
            .map(|line| line.product.price * f64::from(line.quantity))
            .sum();
        assert_eq!(store.total_price(), direct);
        assert_eq!(store.total_price(), 20.0);
    }

    #[test]
    fn removing_twice_is_a_noop() {
        let store = store();
        store.add_to_cart(product(1, 5.0), 1);
        store.remove_from_cart(1);
        let after_first = store.snapshot();
        store.remove_from_cart(1);

        assert_eq!(store.snapshot(), after_first);
        assert!(store.snapshot().cart.is_empty());
    }

    #[test]
    fn subscribers_observe_every_transition() {
        let store = store();
        let seen = Arc::new(AtomicUsize::new(0));
        let loading = Arc::new(Mutex::new(Vec::new()));
        {
            let seen = Arc::clone(&seen);
            let loading = Arc::clone(&loading);
            store.subscribe(move |state| {
                seen.fetch_add(1, Ordering::SeqCst);
                loading.lock().unwrap().push(state.is_loading);
            });
        }

        let ticket = store.begin_fetch();
        store.complete_page(ticket, Ok(page(Vec::new(), 0)));

        assert_eq!(seen.load(Ordering::SeqCst), 2);
        assert_eq!(*loading.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn clear_error_only_drops_the_banner() {
        let store = store();
        let ticket = store.begin_fetch();
        store.complete_page(ticket, Ok(page(vec![product(1, 1.0)], 1)));
        let ticket = store.begin_fetch();
        store.complete_page(ticket, Err(FetchError::Status(500)));

        store.clear_error();

        let state = store.snapshot();
        assert_eq!(state.last_error, None);
        assert_eq!(state.products.len(), 1);
    }
}

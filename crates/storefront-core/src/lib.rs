//! Storefront Core
//!
//! Headless state for the storefront frontend: the catalog store, the
//! shopping cart, paging and the catalog-service wire types. Nothing in
//! this crate touches the DOM or the network, so all of it tests natively.

pub mod cart;
pub mod config;
pub mod error;
pub mod models;
pub mod paging;
pub mod query;
pub mod sort;
pub mod store;

pub use cart::{Cart, CartLine};
pub use config::ApiConfig;
pub use error::{FetchError, FetchResult};
pub use models::{Product, ProductPage, User};
pub use paging::PageWindow;
pub use sort::SortDirection;
pub use store::{CatalogState, CatalogStore, FetchTicket};

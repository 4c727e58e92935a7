//! Catalog Service URLs
//!
//! URL construction for every endpoint the app talks to, kept apart from
//! the HTTP layer so it can be checked without a browser.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::ApiConfig;
use crate::paging::PageWindow;
use crate::sort::SortDirection;

/// Fields requested for product listings
const PRODUCT_FIELDS: &str = "title,price,description,category,images";

/// Characters escaped inside a query or path value
const VALUE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?')
    .add(b'/');

/// `GET /products` with the paging window and field selection
pub fn product_page(config: &ApiConfig, window: &PageWindow) -> String {
    format!(
        "{}/products?limit={}&skip={}&select={}",
        config.base_url, window.limit, window.skip, PRODUCT_FIELDS
    )
}

/// `GET /products/search` for a free-text query
pub fn product_search(config: &ApiConfig, query: &str) -> String {
    format!(
        "{}/products/search?q={}",
        config.base_url,
        utf8_percent_encode(query, VALUE_SET)
    )
}

/// `GET /products/category/{category}`
pub fn product_category(config: &ApiConfig, category: &str) -> String {
    format!(
        "{}/products/category/{}",
        config.base_url,
        utf8_percent_encode(category, VALUE_SET)
    )
}

/// `GET /products` sorted by title in the given direction
pub fn products_sorted_by_title(config: &ApiConfig, direction: SortDirection) -> String {
    format!(
        "{}/products?sortBy=title&order={}",
        config.base_url,
        direction.as_query()
    )
}

/// `GET /users`
pub fn users(config: &ApiConfig) -> String {
    format!("{}/users", config.base_url)
}

/// `POST /carts/add`
pub fn carts_add(config: &ApiConfig) -> String {
    format!("{}/carts/add", config.base_url)
}

/// `POST /auth/login`
pub fn auth_login(config: &ApiConfig) -> String {
    format!("{}/auth/login", config.base_url)
}

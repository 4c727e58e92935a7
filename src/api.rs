//! Catalog Service Client
//!
//! HTTP bindings to the catalog service, one function per endpoint. URL
//! construction and error shapes live in `storefront-core`; this module
//! only drives the browser's fetch through gloo.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use storefront_core::models::{CartCreate, CartCreated, LoginRequest, ProductPage, User, UserPage};
use storefront_core::query;
use storefront_core::{ApiConfig, FetchError, FetchResult, PageWindow, SortDirection};

pub async fn fetch_page(config: &ApiConfig, window: &PageWindow) -> FetchResult<ProductPage> {
    get_json(&query::product_page(config, window)).await
}

pub async fn search(config: &ApiConfig, text: &str) -> FetchResult<ProductPage> {
    get_json(&query::product_search(config, text)).await
}

pub async fn by_category(config: &ApiConfig, category: &str) -> FetchResult<ProductPage> {
    get_json(&query::product_category(config, category)).await
}

pub async fn sorted_by_title(
    config: &ApiConfig,
    direction: SortDirection,
) -> FetchResult<ProductPage> {
    get_json(&query::products_sorted_by_title(config, direction)).await
}

pub async fn fetch_users(config: &ApiConfig) -> FetchResult<Vec<User>> {
    let page: UserPage = get_json(&query::users(config)).await?;
    Ok(page.users)
}

/// Remote cart stub, fired once when the first line enters the cart
pub async fn create_cart(config: &ApiConfig, payload: &CartCreate) -> FetchResult<CartCreated> {
    post_json(&query::carts_add(config), payload).await
}

/// Stub sign-in; only the status is checked, the token is never used
pub async fn login(config: &ApiConfig) -> FetchResult<()> {
    let request = Request::post(&query::auth_login(config))
        .json(&LoginRequest::default())
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    Ok(())
}

async fn get_json<T: DeserializeOwned>(url: &str) -> FetchResult<T> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    decode(response).await
}

async fn post_json<T: DeserializeOwned, B: Serialize>(url: &str, body: &B) -> FetchResult<T> {
    let request = Request::post(url)
        .json(body)
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> FetchResult<T> {
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

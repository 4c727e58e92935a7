//! Catalog Models
//!
//! Data structures matching the catalog service payloads.

use serde::{Deserialize, Serialize};

/// Product as served by the catalog service
///
/// Immutable once fetched; the store replaces the whole list on every
/// successful fetch. Listing requests ask for a field subset, so everything
/// beyond id/title/price tolerates being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// First image URL, if the service provided any
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// User as served by the catalog service (auxiliary list)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub maiden_name: String,
    pub age: u32,
    pub gender: String,
}

/// Paged product response (`/products`, `/products/search`)
///
/// The category endpoint omits `total`; it decodes as zero and the category
/// transition ignores it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u32,
}

/// `/users` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserPage {
    pub users: Vec<User>,
}

/// `POST /carts/add` request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCreate {
    pub user_id: u64,
    pub products: Vec<CartProductRef>,
}

/// One cart line on the wire
#[derive(Debug, Clone, Serialize)]
pub struct CartProductRef {
    pub id: u64,
    pub quantity: u32,
}

/// `POST /carts/add` response; everything beyond the id is ignored
#[derive(Debug, Clone, Deserialize)]
pub struct CartCreated {
    pub id: u64,
}

/// `POST /auth/login` request body; the response is never used
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub expires_in_mins: u32,
}

impl Default for LoginRequest {
    fn default() -> Self {
        Self {
            username: "emilys".to_string(),
            password: "emilyspass".to_string(),
            expires_in_mins: 30,
        }
    }
}

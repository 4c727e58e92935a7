//! Service Configuration

/// Page size used when none is configured
pub const DEFAULT_PAGE_LIMIT: u32 = 4;

/// Catalog service endpoint configuration
///
/// Constructed once at startup and handed to the context; components never
/// see it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the catalog service, without a trailing slash
    pub base_url: String,
    /// Page size for product listings, fixed for the session
    pub page_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dummyjson.com".to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

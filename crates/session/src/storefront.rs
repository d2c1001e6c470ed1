//! The storefront session: catalog, filters, cart, checkout.

use thiserror::Error;

use clothy_cart::CartStore;
use clothy_catalog::{Filters, Product, filter, normalize};
use clothy_checkout::{CheckoutError, place_order};
use clothy_client::{ApiClient, ClientError, OrderAck};

/// Session-level failure.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The catalog could not be fetched or decoded. Whatever catalog was
    /// already loaded (usually none) stays in place.
    #[error("catalog load failed: {0}")]
    CatalogLoad(#[source] ClientError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

/// One user session of the storefront.
///
/// Owns the loaded catalog and the filter/search state, and holds the cart
/// store handle. The session is the only component that wires these pieces
/// together.
#[derive(Debug)]
pub struct Storefront {
    client: ApiClient,
    products: Vec<Product>,
    filters: Filters,
    search: String,
    cart: CartStore,
}

impl Storefront {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            products: Vec::new(),
            filters: Filters::default(),
            search: String::new(),
            cart: CartStore::new(),
        }
    }

    /// Fetch and normalize the catalog, then re-derive the filter price
    /// bounds from what actually loaded.
    ///
    /// Malformed records are logged and skipped; a single bad entry never
    /// aborts the load. Returns the number of products loaded.
    pub async fn load_catalog(&mut self) -> Result<usize, SessionError> {
        let raw = self.client.fetch_products().await.map_err(|e| {
            tracing::error!("failed to load products: {e}");
            SessionError::CatalogLoad(e)
        })?;

        let mut products = Vec::with_capacity(raw.len());
        for record in &raw {
            match normalize(record) {
                Ok(product) => products.push(product),
                Err(e) => tracing::warn!("skipping catalog record: {e}"),
            }
        }

        self.products = products;
        self.filters.reset_price_range(&self.products);
        tracing::info!(count = self.products.len(), "catalog loaded");
        Ok(self.products.len())
    }

    /// The currently visible products under the active filters and search.
    pub fn visible(&self) -> Vec<&Product> {
        filter::visible(&self.products, &self.filters, &self.search)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// The session's cart store handle. Clone it to mutate cart state from
    /// elsewhere; there is no other copy of the cart.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn set_gender(&mut self, gender: impl Into<String>) {
        self.filters.gender = gender.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filters.category = category.into();
    }

    pub fn set_price_range(&mut self, min: f64, max: f64) {
        self.filters.set_price_range(min, max);
    }

    /// Submit the cart as an order. On success the cart is emptied; on
    /// failure it is preserved so the user can retry.
    pub async fn checkout(&self, email: Option<String>) -> Result<OrderAck, SessionError> {
        match place_order(&self.cart, &self.client, email).await {
            Ok(ack) => {
                tracing::info!("order placed: {}", ack.message);
                Ok(ack)
            }
            Err(e) => {
                tracing::error!("order not placed: {e}");
                Err(SessionError::from(e))
            }
        }
    }
}

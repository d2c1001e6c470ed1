//! The storefront API client.

use clothy_catalog::RawProductRecord;

use crate::dto::{OrderAck, OrderPayload};
use crate::error::ClientError;

/// Client for the catalog and order endpoints.
///
/// Cheap to clone; the underlying connection pool is shared between clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    order_path: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            order_path: "/order".to_string(),
            token: None,
            http: reqwest::Client::new(),
        }
    }

    /// Attach a bearer token to every request. Checkout is auth-gated
    /// upstream; this client only forwards the credential it is given.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the order-creation path.
    ///
    /// Deployments disagree on it (`/order` per the backend contract,
    /// `/orders` in at least one frontend), so it is configuration, not a
    /// constant.
    pub fn with_order_path(mut self, path: impl Into<String>) -> Self {
        self.order_path = path.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the raw catalog: `GET {base}/products`.
    ///
    /// Records come back exactly as the backend encodes them; normalization
    /// is the caller's concern.
    pub async fn fetch_products(&self) -> Result<Vec<RawProductRecord>, ClientError> {
        let url = format!("{}/products", self.base_url);
        let resp = self
            .authorized(self.http.get(&url))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ClientError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        resp.json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Submit an order: `POST {base}{order_path}`.
    pub async fn submit_order(&self, payload: &OrderPayload) -> Result<OrderAck, ClientError> {
        let url = format!("{}{}", self.base_url, self.order_path);
        let resp = self
            .authorized(self.http.post(&url).json(payload))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ClientError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        resp.json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    fn authorized(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

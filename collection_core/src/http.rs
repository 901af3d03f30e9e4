//! Browser HTTP implementation of the catalog seam
//!
//! Compiled for wasm32 targets only; native builds and tests use
//! `MemoryCatalog`.

use crate::catalog::CatalogSource;
use crate::config::ClientConfig;
use crate::CatalogError;
use async_trait::async_trait;
use card_core::{Card, CardListResponse};
use gloo_net::http::Request;

/// Catalog client fetching card records from the remote service
pub struct HttpCatalog {
    config: ClientConfig,
}

impl HttpCatalog {
    pub fn new(config: ClientConfig) -> Self {
        HttpCatalog { config }
    }

    fn cards_url(&self) -> String {
        format!("{}/api/cards", self.config.base_url)
    }

    /// Fetch one catalog view, decoding the `{ "cards": [...] }` envelope
    async fn fetch(&self, query: Option<(&str, &str)>) -> Result<Vec<Card>, CatalogError> {
        let url = self.cards_url();

        let mut request = Request::get(&url);
        if let Some(pair) = query {
            request = request.query([pair]);
        }

        let response = request.send().await.map_err(|e| CatalogError::Network {
            url: url.clone(),
            message: e.to_string(),
        })?;
        if !response.ok() {
            return Err(CatalogError::Network {
                url,
                message: format!("HTTP status {}", response.status()),
            });
        }

        let body: CardListResponse = response.json().await.map_err(|e| match e {
            gloo_net::Error::SerdeError(error) => CatalogError::Malformed {
                url: self.cards_url(),
                message: error.to_string(),
            },
            other => CatalogError::Network {
                url: self.cards_url(),
                message: other.to_string(),
            },
        })?;

        Ok(body.cards)
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalog {
    async fn all_cards(&self) -> Result<Vec<Card>, CatalogError> {
        self.fetch(None).await
    }

    async fn cards_by_name(&self, key: &str) -> Result<Vec<Card>, CatalogError> {
        self.fetch(Some(("name", key))).await
    }

    async fn cards_by_kind(&self, key: &str) -> Result<Vec<Card>, CatalogError> {
        self.fetch(Some(("type", key))).await
    }
}

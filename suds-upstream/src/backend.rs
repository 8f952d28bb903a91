use async_trait::async_trait;
use serde::Deserialize;
use suds_core::BoxError;
use suds_offer::{Offer, OfferSource};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned {status}")]
    Api { status: u16 },
}

/// The backend wraps list responses in a data envelope.
#[derive(Debug, Deserialize)]
struct OffersEnvelope {
    data: Vec<Offer>,
}

/// Client for the car-wash backend's REST API.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn search_offers(&self, lat: f64, lng: f64) -> Result<Vec<Offer>, BackendError> {
        let response = self
            .http
            .get(format!("{}/api/v1/carwash/offers/search", self.base_url))
            .query(&[("userLat", lat), ("userLng", lng)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Offer search failed with {}", status);
            return Err(BackendError::Api {
                status: status.as_u16(),
            });
        }

        let envelope = response.json::<OffersEnvelope>().await?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl OfferSource for BackendClient {
    async fn offers_near(&self, lat: f64, lng: f64) -> Result<Vec<Offer>, BoxError> {
        Ok(self.search_offers(lat, lng).await?)
    }
}

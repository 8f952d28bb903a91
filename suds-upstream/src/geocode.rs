use async_trait::async_trait;
use serde::Deserialize;
use suds_core::geocode::{Address, ReverseGeocoder};
use suds_core::BoxError;

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("geocoder returned {status}")]
    Api { status: u16 },
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    addresses: Vec<RadarAddress>,
}

#[derive(Debug, Deserialize)]
struct RadarAddress {
    country: Option<String>,
    state: Option<String>,
    #[serde(rename = "postalCode")]
    postal_code: Option<String>,
    #[serde(rename = "formattedAddress")]
    formatted_address: Option<String>,
}

/// Client for Radar's reverse-geocoding API. The publishable key goes in
/// the Authorization header as-is, without a Bearer prefix.
#[derive(Debug, Clone)]
pub struct RadarClient {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
}

impl RadarClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.to_string(),
            api_base: "https://api.radar.io".to_string(),
        }
    }

    /// Point the client at a different host (mock server in tests).
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<Option<Address>, GeocodeError> {
        let response = self
            .http
            .get(format!("{}/v1/geocode/reverse", self.api_base))
            .query(&[("coordinates", format!("{},{}", lat, lng))])
            .header("Authorization", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Reverse geocode failed with {}", status);
            return Err(GeocodeError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.json::<ReverseResponse>().await?;
        Ok(body.addresses.into_iter().next().map(|a| Address {
            country: a.country,
            state: a.state,
            zip_code: a.postal_code,
            formatted_address: a.formatted_address,
        }))
    }
}

#[async_trait]
impl ReverseGeocoder for RadarClient {
    async fn reverse(&self, lat: f64, lng: f64) -> Result<Option<Address>, BoxError> {
        Ok(self.reverse_geocode(lat, lng).await?)
    }
}

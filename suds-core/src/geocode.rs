use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::BoxError;

/// Address details resolved from a coordinate pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub country: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "zipCode")]
    pub zip_code: Option<String>,
    #[serde(rename = "formattedAddress")]
    pub formatted_address: Option<String>,
}

#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Resolve coordinates to the closest known address.
    /// `Ok(None)` means the geocoder had no match for the location.
    async fn reverse(&self, lat: f64, lng: f64) -> Result<Option<Address>, BoxError>;
}

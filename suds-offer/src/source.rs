use async_trait::async_trait;
use suds_core::BoxError;

use crate::models::Offer;

/// Where offers come from: the car-wash backend's search endpoint keyed by
/// the user's coordinates. Every call re-fetches; nothing is cached.
#[async_trait]
pub trait OfferSource: Send + Sync {
    async fn offers_near(&self, lat: f64, lng: f64) -> Result<Vec<Offer>, BoxError>;
}

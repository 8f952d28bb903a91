use std::sync::Arc;

use suds_core::geocode::ReverseGeocoder;
use suds_core::payment::PaymentProvider;
use suds_offer::OfferSource;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
}

/// Per-request collaborators, injected at startup. No shared mutable state
/// lives here; every handler re-fetches what it needs.
#[derive(Clone)]
pub struct AppState {
    pub payments: Arc<dyn PaymentProvider>,
    pub offers: Arc<dyn OfferSource>,
    pub geocoder: Arc<dyn ReverseGeocoder>,
    pub auth: AuthConfig,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Targeting rule attached to an offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferType {
    Geographical,
    TimeDependent,
    OneTime,
}

/// A discounted car-wash package as returned by the backend offer search.
/// Immutable once fetched; lives for one search request and is discarded
/// on the next fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub package_id: i64,
    pub car_wash_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Decimal-string encoded price, as sent by the backend.
    pub offer_price: String,
    pub offer_type: OfferType,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    /// Decimal-string encoded geographic radius in miles.
    pub radius_miles: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Offer {
    /// Parsed price; NaN when the backend sent a malformed decimal string.
    pub fn price(&self) -> f64 {
        self.offer_price.trim().parse().unwrap_or(f64::NAN)
    }

    /// Parsed radius in miles; NaN when malformed.
    pub fn radius(&self) -> f64 {
        self.radius_miles.trim().parse().unwrap_or(f64::NAN)
    }
}

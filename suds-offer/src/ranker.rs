use std::cmp::Ordering;

use crate::models::{Offer, OfferType};

/// Total ordering over parsed decimal fields. Malformed values parse to NaN
/// and sort after every valid value, so they can never win a selection.
fn nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Keep only geographically targeted offers whose radius is within
/// `max_radius_miles`. Input order is preserved. Offers with a malformed
/// radius never qualify.
pub fn geographical_within(offers: &[Offer], max_radius_miles: f64) -> Vec<Offer> {
    offers
        .iter()
        .filter(|offer| offer.offer_type == OfferType::Geographical)
        .filter(|offer| offer.radius() <= max_radius_miles)
        .cloned()
        .collect()
}

/// Pick the cheapest offer from the full set: ascending price, ties broken
/// by ascending radius. Empty input yields `None`, never a fault.
pub fn best_offer(offers: &[Offer]) -> Option<Offer> {
    let mut ranked: Vec<&Offer> = offers.iter().collect();
    ranked.sort_by(|a, b| {
        nan_last(a.price(), b.price()).then_with(|| nan_last(a.radius(), b.radius()))
    });
    ranked.first().map(|offer| (*offer).clone())
}

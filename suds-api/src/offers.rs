use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use suds_offer::{ranker, Offer};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HiddenOfferParams {
    #[serde(rename = "userLat")]
    pub user_lat: f64,
    #[serde(rename = "userLng")]
    pub user_lng: f64,
    /// Maximum radius in miles the caller is willing to travel.
    #[serde(default = "default_distance")]
    pub distance: f64,
}

// Widest radius the discovery UI exposes.
fn default_distance() -> f64 {
    50.0
}

async fn fetch_offers(state: &AppState, params: &HiddenOfferParams) -> Result<Vec<Offer>, AppError> {
    // A 0,0 coordinate pair means the client has no location fix yet.
    if params.user_lat == 0.0 && params.user_lng == 0.0 {
        return Err(AppError::ValidationError("User location is required".to_string()));
    }

    state
        .offers
        .offers_near(params.user_lat, params.user_lng)
        .await
        .map_err(|e| {
            tracing::error!("Offer search failed: {}", e);
            AppError::UpstreamError("Error fetching offers".to_string())
        })
}

/// GET /api/offers/hidden
/// Geographically targeted offers within the caller's chosen radius.
pub async fn hidden_offers(
    State(state): State<AppState>,
    Query(params): Query<HiddenOfferParams>,
) -> Result<Json<Vec<Offer>>, AppError> {
    let offers = fetch_offers(&state, &params).await?;
    Ok(Json(ranker::geographical_within(&offers, params.distance)))
}

/// GET /api/offers/hidden/best
/// The single cheapest offer. Selection runs over the full fetched set,
/// not the radius-filtered one.
pub async fn best_hidden_offer(
    State(state): State<AppState>,
    Query(params): Query<HiddenOfferParams>,
) -> Result<Json<Offer>, AppError> {
    let offers = fetch_offers(&state, &params).await?;

    ranker::best_offer(&offers)
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError("No offers nearby".to_string()))
}

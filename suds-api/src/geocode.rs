use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use suds_core::geocode::Address;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReverseParams {
    pub lat: f64,
    pub lng: f64,
}

/// GET /api/geocode/reverse?lat=&lng=
/// Resolve a coordinate pair to the nearest known address.
pub async fn reverse_geocode(
    State(state): State<AppState>,
    Query(params): Query<ReverseParams>,
) -> Result<Json<Address>, AppError> {
    let address = state
        .geocoder
        .reverse(params.lat, params.lng)
        .await
        .map_err(|e| {
            tracing::error!("Reverse geocode failed: {}", e);
            AppError::UpstreamError("Failed to fetch address details".to_string())
        })?;

    address
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError("No address found".to_string()))
}

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CarServiceAmenity {
    pub id: String,
    pub service_name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// GET /api/car-services/amenities
/// Static enumerated amenity list used by the filter panel; always 200.
pub async fn list_amenities() -> Json<Vec<CarServiceAmenity>> {
    let now = Utc::now();
    let amenity = |id: &str, name: &str| CarServiceAmenity {
        id: id.to_string(),
        service_name: name.to_string(),
        description: name.to_string(),
        created_at: now,
        updated_at: now,
    };

    Json(vec![
        amenity("1", "Free vacuums"),
        amenity("2", "Air gun"),
        amenity("3", "Mat wash station"),
        amenity("4", "Open 24 hours"),
        amenity("5", "Free tire air station"),
    ])
}

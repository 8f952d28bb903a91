use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use tower::util::ServiceExt;

use suds_api::middleware::auth::UserClaims;
use suds_api::state::{AppState, AuthConfig};
use suds_api::app;
use suds_core::geocode::{Address, ReverseGeocoder};
use suds_core::payment::{
    CreateIntentRequest, IntentMetadata, PaymentIntent, PaymentProvider, PaymentStatus,
};
use suds_core::BoxError;
use suds_offer::{Offer, OfferSource, OfferType};

const SECRET: &str = "test-secret";

// ============================================================================
// Stub collaborators
// ============================================================================

struct StubPayments {
    intent: Option<PaymentIntent>,
}

#[async_trait]
impl PaymentProvider for StubPayments {
    async fn create_intent(&self, req: &CreateIntentRequest) -> Result<PaymentIntent, BoxError> {
        match &self.intent {
            Some(template) => {
                let mut intent = template.clone();
                intent.amount = req.amount;
                intent.metadata = req.metadata.clone();
                Ok(intent)
            }
            None => Err("processor unreachable".into()),
        }
    }

    async fn get_intent(&self, _intent_id: &str) -> Result<PaymentIntent, BoxError> {
        self.intent.clone().ok_or_else(|| "processor unreachable".into())
    }
}

struct StubOffers {
    offers: Vec<Offer>,
    fail: bool,
}

#[async_trait]
impl OfferSource for StubOffers {
    async fn offers_near(&self, _lat: f64, _lng: f64) -> Result<Vec<Offer>, BoxError> {
        if self.fail {
            return Err("backend unreachable".into());
        }
        Ok(self.offers.clone())
    }
}

struct StubGeocoder {
    address: Option<Address>,
}

#[async_trait]
impl ReverseGeocoder for StubGeocoder {
    async fn reverse(&self, _lat: f64, _lng: f64) -> Result<Option<Address>, BoxError> {
        Ok(self.address.clone())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn intent(status: PaymentStatus, car_wash_id: &str) -> PaymentIntent {
    PaymentIntent {
        id: "pi_3abc".to_string(),
        amount: 1999,
        currency: "usd".to_string(),
        status,
        client_secret: Some("pi_3abc_secret_xyz".to_string()),
        metadata: IntentMetadata {
            user_id: Some("user-1".to_string()),
            car_wash_id: Some(car_wash_id.to_string()),
            package_name: Some("Deluxe".to_string()),
        },
    }
}

fn offer(id: &str, offer_type: OfferType, price: &str, radius: &str) -> Offer {
    Offer {
        id: id.to_string(),
        package_id: 1,
        car_wash_id: 42,
        name: format!("Offer {}", id),
        description: None,
        offer_price: price.to_string(),
        offer_type,
        start_time: None,
        end_time: None,
        radius_miles: radius.to_string(),
        status: Some("ACTIVE".to_string()),
        image: None,
    }
}

fn state_with(payments: StubPayments, offers: StubOffers, geocoder: StubGeocoder) -> AppState {
    AppState {
        payments: Arc::new(payments),
        offers: Arc::new(offers),
        geocoder: Arc::new(geocoder),
        auth: AuthConfig {
            secret: SECRET.to_string(),
        },
    }
}

fn default_state() -> AppState {
    state_with(
        StubPayments {
            intent: Some(intent(PaymentStatus::Succeeded, "ABC123")),
        },
        StubOffers {
            offers: vec![],
            fail: false,
        },
        StubGeocoder { address: None },
    )
}

fn bearer_token() -> String {
    let claims = UserClaims {
        sub: "user-1".to_string(),
        email: Some("u@example.com".to_string()),
        exp: (Utc::now().timestamp() + 3600) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("token encoding should succeed")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

fn create_intent_request(auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/create-payment-intent")
        .header("content-type", "application/json");
    if let Some(token) = auth {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder
        .body(Body::from(
            serde_json::json!({
                "amount": 1999,
                "carWashId": "ABC123",
                "packageName": "Deluxe",
                "carWashName": "Sparkle Suds"
            })
            .to_string(),
        ))
        .expect("request should build")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

// ============================================================================
// Payment-intent creation
// ============================================================================

#[tokio::test]
async fn test_create_intent_without_auth_is_401() {
    let app = app(default_state());

    let response = app.oneshot(create_intent_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing or invalid authorization header");
}

#[tokio::test]
async fn test_create_intent_with_garbage_token_is_401() {
    let app = app(default_state());

    let response = app
        .oneshot(create_intent_request(Some("not-a-jwt")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_intent_returns_client_secret() {
    let app = app(default_state());

    let response = app
        .oneshot(create_intent_request(Some(&bearer_token())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["clientSecret"], "pi_3abc_secret_xyz");
}

#[tokio::test]
async fn test_create_intent_processor_down_is_500() {
    let state = state_with(
        StubPayments { intent: None },
        StubOffers {
            offers: vec![],
            fail: false,
        },
        StubGeocoder { address: None },
    );
    let app = app(state);

    let response = app
        .oneshot(create_intent_request(Some(&bearer_token())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Error creating payment intent");
}

// ============================================================================
// Redemption codes
// ============================================================================

#[tokio::test]
async fn test_code_for_incomplete_payment_is_400() {
    let state = state_with(
        StubPayments {
            intent: Some(intent(PaymentStatus::RequiresPaymentMethod, "ABC123")),
        },
        StubOffers {
            offers: vec![],
            fail: false,
        },
        StubGeocoder { address: None },
    );
    let app = app(state);

    let response = app.oneshot(get("/api/payment/code/pi_3abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Payment not successful");
}

#[tokio::test]
async fn test_code_shape_for_succeeded_payment() {
    let app = app(default_state());

    let response = app.oneshot(get("/api/payment/code/pi_3abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let code = body["code"].as_str().expect("code should be a string");

    // ^ABC\d{6}[A-Z0-9]{3}$
    assert_eq!(code.len(), 12);
    assert!(code.starts_with("ABC"));
    assert!(code[3..9].bytes().all(|b| b.is_ascii_digit()));
    assert!(code[9..]
        .bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
}

#[tokio::test]
async fn test_repeated_issuance_differs() {
    let app = app(default_state());

    let mut codes = std::collections::HashSet::new();
    for _ in 0..5 {
        let response = app
            .clone()
            .oneshot(get("/api/payment/code?paymentIntent=pi_3abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        codes.insert(body["code"].as_str().unwrap().to_string());
    }

    // Issuance is deliberately not idempotent.
    assert!(codes.len() > 1);
}

#[tokio::test]
async fn test_code_query_without_param_is_400() {
    let app = app(default_state());

    let response = app.oneshot(get("/api/payment/code")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Payment intent is required");
}

#[tokio::test]
async fn test_code_processor_down_is_500() {
    let state = state_with(
        StubPayments { intent: None },
        StubOffers {
            offers: vec![],
            fail: false,
        },
        StubGeocoder { address: None },
    );
    let app = app(state);

    let response = app.oneshot(get("/api/payment/code/pi_3abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Error retrieving carwash code");
}

// ============================================================================
// Hidden offers
// ============================================================================

#[tokio::test]
async fn test_hidden_offers_filters_by_type_and_radius() {
    let state = state_with(
        StubPayments { intent: None },
        StubOffers {
            offers: vec![
                offer("near", OfferType::Geographical, "10.00", "3.0"),
                offer("far", OfferType::Geographical, "5.00", "40.0"),
                offer("one-time", OfferType::OneTime, "1.00", "1.0"),
            ],
            fail: false,
        },
        StubGeocoder { address: None },
    );
    let app = app(state);

    let response = app
        .oneshot(get("/api/offers/hidden?userLat=40.7&userLng=-74.1&distance=10"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["near"]);
}

#[tokio::test]
async fn test_best_offer_picks_cheapest_from_full_set() {
    let state = state_with(
        StubPayments { intent: None },
        StubOffers {
            offers: vec![
                offer("pricey", OfferType::Geographical, "10.00", "3.0"),
                offer("cheap", OfferType::OneTime, "2.50", "99.0"),
            ],
            fail: false,
        },
        StubGeocoder { address: None },
    );
    let app = app(state);

    let response = app
        .oneshot(get("/api/offers/hidden/best?userLat=40.7&userLng=-74.1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], "cheap");
}

#[tokio::test]
async fn test_best_offer_with_no_offers_is_404() {
    let app = app(default_state());

    let response = app
        .oneshot(get("/api/offers/hidden/best?userLat=40.7&userLng=-74.1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_zero_coordinates_are_rejected() {
    let app = app(default_state());

    let response = app
        .oneshot(get("/api/offers/hidden?userLat=0&userLng=0"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "User location is required");
}

#[tokio::test]
async fn test_offer_backend_down_is_500() {
    let state = state_with(
        StubPayments { intent: None },
        StubOffers {
            offers: vec![],
            fail: true,
        },
        StubGeocoder { address: None },
    );
    let app = app(state);

    let response = app
        .oneshot(get("/api/offers/hidden?userLat=40.7&userLng=-74.1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ============================================================================
// Amenities & geocoding
// ============================================================================

#[tokio::test]
async fn test_amenities_list_is_static() {
    let app = app(default_state());

    let response = app.oneshot(get("/api/car-services/amenities")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["service_name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "Free vacuums",
            "Air gun",
            "Mat wash station",
            "Open 24 hours",
            "Free tire air station",
        ]
    );
}

#[tokio::test]
async fn test_reverse_geocode_returns_address() {
    let state = state_with(
        StubPayments { intent: None },
        StubOffers {
            offers: vec![],
            fail: false,
        },
        StubGeocoder {
            address: Some(Address {
                country: Some("US".to_string()),
                state: Some("NJ".to_string()),
                zip_code: Some("07030".to_string()),
                formatted_address: Some("1 Main St".to_string()),
            }),
        },
    );
    let app = app(state);

    let response = app
        .oneshot(get("/api/geocode/reverse?lat=40.7&lng=-74.1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["zipCode"], "07030");
    assert_eq!(body["formattedAddress"], "1 Main St");
}

#[tokio::test]
async fn test_reverse_geocode_without_match_is_404() {
    let app = app(default_state());

    let response = app
        .oneshot(get("/api/geocode/reverse?lat=40.7&lng=-74.1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No address found");
}

use axum::{http::Method, routing::get, routing::post, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod amenities;
pub mod error;
pub mod geocode;
pub mod middleware;
pub mod offers;
pub mod payments;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    Router::new()
        .route(
            "/api/create-payment-intent",
            post(payments::create_payment_intent).route_layer(
                axum::middleware::from_fn_with_state(
                    state.clone(),
                    middleware::auth::user_auth_middleware,
                ),
            ),
        )
        .route("/api/payment/code", get(payments::code_by_query))
        .route("/api/payment/code/{payment_intent}", get(payments::code_by_path))
        .route("/api/offers/hidden", get(offers::hidden_offers))
        .route("/api/offers/hidden/best", get(offers::best_hidden_offer))
        .route("/api/geocode/reverse", get(geocode::reverse_geocode))
        .route("/api/car-services/amenities", get(amenities::list_amenities))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

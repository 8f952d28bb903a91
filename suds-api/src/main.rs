use std::net::SocketAddr;
use std::sync::Arc;
use suds_api::{app, state::{AppState, AuthConfig}};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "suds_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = suds_upstream::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Suds API on port {}", config.server.port);

    // Outbound collaborators, constructed once and injected into state
    let stripe = Arc::new(
        suds_upstream::StripeClient::new(&config.stripe.secret_key)
            .with_api_base(&config.stripe.api_base),
    );
    let backend = Arc::new(suds_upstream::BackendClient::new(&config.backend.base_url));
    let radar = Arc::new(
        suds_upstream::RadarClient::new(&config.geocoder.api_key)
            .with_api_base(&config.geocoder.api_base),
    );

    let app_state = AppState {
        payments: stripe,
        offers: backend,
        geocoder: radar,
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

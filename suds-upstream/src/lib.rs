pub mod app_config;
pub mod backend;
pub mod geocode;
pub mod stripe;

pub use backend::BackendClient;
pub use geocode::RadarClient;
pub use stripe::StripeClient;

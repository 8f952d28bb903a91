pub mod geocode;
pub mod payment;
pub mod redemption;

/// Boxed error type used at the trait seams for outbound collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub mod models;
pub mod ranker;
pub mod source;

pub use models::{Offer, OfferType};
pub use source::OfferSource;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::BoxError;

/// Payment-intent lifecycle states as reported by the processor.
/// The wire format is the processor's own snake_case vocabulary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Succeeded,
    Canceled,
}

/// Checkout context attached to an intent at creation time and read back
/// when a redemption code is issued.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntentMetadata {
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "carWashId", skip_serializing_if = "Option::is_none")]
    pub car_wash_id: Option<String>,
    #[serde(rename = "packageName", skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
}

/// A payment intent as observed from the processor. Never persisted here;
/// the processor owns the lifecycle, this system only creates and reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String, // Provider's ID (e.g., pi_123)
    pub amount: i64,
    pub currency: String,
    pub status: PaymentStatus,
    pub client_secret: Option<String>,
    #[serde(default)]
    pub metadata: IntentMetadata,
}

#[derive(Debug, Clone)]
pub struct CreateIntentRequest {
    /// Amount in minor units (cents).
    pub amount: i64,
    pub metadata: IntentMetadata,
}

#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a payment intent with the provider. Currency is fixed to USD
    /// and automatic payment-method negotiation is enabled.
    async fn create_intent(&self, req: &CreateIntentRequest) -> Result<PaymentIntent, BoxError>;

    /// Retrieve the current state of an intent.
    async fn get_intent(&self, intent_id: &str) -> Result<PaymentIntent, BoxError>;
}

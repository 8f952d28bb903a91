use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use suds_core::payment::{CreateIntentRequest, IntentMetadata, PaymentStatus};
use suds_core::redemption;

use crate::error::AppError;
use crate::middleware::auth::UserClaims;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    /// Amount in minor units (cents).
    pub amount: i64,
    pub car_wash_id: String,
    pub package_name: String,
    #[serde(default)]
    pub car_wash_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatePaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

#[derive(Debug, Serialize)]
pub struct WashCodeResponse {
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct CodeQuery {
    #[serde(rename = "paymentIntent")]
    pub payment_intent: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/create-payment-intent
/// Create a payment intent with the processor and hand back the
/// client-confirmable secret. Requires a bearer identity; the caller's sub
/// travels with the intent as metadata.userId.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Extension(claims): Extension<UserClaims>,
    Json(req): Json<CreatePaymentIntentRequest>,
) -> Result<Json<CreatePaymentIntentResponse>, AppError> {
    if req.amount <= 0 {
        return Err(AppError::ValidationError(
            "Amount must be a positive number of cents".to_string(),
        ));
    }

    let create = CreateIntentRequest {
        amount: req.amount,
        metadata: IntentMetadata {
            user_id: Some(claims.sub),
            car_wash_id: Some(req.car_wash_id),
            package_name: Some(req.package_name),
        },
    };

    let intent = state.payments.create_intent(&create).await.map_err(|e| {
        tracing::error!("Error creating payment intent: {}", e);
        AppError::UpstreamError("Error creating payment intent".to_string())
    })?;

    let client_secret = intent.client_secret.ok_or_else(|| {
        tracing::error!("Intent {} came back without a client secret", intent.id);
        AppError::UpstreamError("Error creating payment intent".to_string())
    })?;

    Ok(Json(CreatePaymentIntentResponse { client_secret }))
}

/// GET /api/payment/code/{payment_intent}
pub async fn code_by_path(
    State(state): State<AppState>,
    Path(payment_intent): Path<String>,
) -> Result<Json<WashCodeResponse>, AppError> {
    issue_code(&state, &payment_intent).await.map(Json)
}

/// GET /api/payment/code?paymentIntent=
pub async fn code_by_query(
    State(state): State<AppState>,
    Query(params): Query<CodeQuery>,
) -> Result<Json<WashCodeResponse>, AppError> {
    let intent_id = params
        .payment_intent
        .ok_or_else(|| AppError::ValidationError("Payment intent is required".to_string()))?;

    issue_code(&state, &intent_id).await.map(Json)
}

/// Verify the payment succeeded, then mint a presentable wash code from the
/// intent's carWashId metadata. Codes are ephemeral and never stored; two
/// calls for the same intent yield different codes.
async fn issue_code(state: &AppState, intent_id: &str) -> Result<WashCodeResponse, AppError> {
    let intent = state.payments.get_intent(intent_id).await.map_err(|e| {
        tracing::error!("Error retrieving carwash code: {}", e);
        AppError::UpstreamError("Error retrieving carwash code".to_string())
    })?;

    if intent.status != PaymentStatus::Succeeded {
        return Err(AppError::ValidationError("Payment not successful".to_string()));
    }

    let car_wash_id = intent.metadata.car_wash_id.ok_or_else(|| {
        tracing::error!("Succeeded intent {} has no carWashId metadata", intent.id);
        AppError::UpstreamError("Error retrieving carwash code".to_string())
    })?;

    Ok(WashCodeResponse {
        code: redemption::issue_wash_code(&car_wash_id),
    })
}

use async_trait::async_trait;
use suds_core::payment::{CreateIntentRequest, PaymentIntent, PaymentProvider};
use suds_core::BoxError;

#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("stripe returned {status}: {body}")]
    Api { status: u16, body: String },
}

/// Minimal payment-intents client for Stripe's REST API.
/// Requests are form-encoded and authenticated with the secret key.
#[derive(Debug, Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl StripeClient {
    pub fn new(secret_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: secret_key.to_string(),
            api_base: "https://api.stripe.com".to_string(),
        }
    }

    /// Point the client at a different host (mock server in tests).
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    async fn create(&self, req: &CreateIntentRequest) -> Result<PaymentIntent, StripeError> {
        let mut form: Vec<(String, String)> = vec![
            ("amount".to_string(), req.amount.to_string()),
            ("currency".to_string(), "usd".to_string()),
            ("automatic_payment_methods[enabled]".to_string(), "true".to_string()),
        ];
        if let Some(user_id) = &req.metadata.user_id {
            form.push(("metadata[userId]".to_string(), user_id.clone()));
        }
        if let Some(car_wash_id) = &req.metadata.car_wash_id {
            form.push(("metadata[carWashId]".to_string(), car_wash_id.clone()));
        }
        if let Some(package_name) = &req.metadata.package_name {
            form.push(("metadata[packageName]".to_string(), package_name.clone()));
        }

        let response = self
            .http
            .post(format!("{}/v1/payment_intents", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn retrieve(&self, intent_id: &str) -> Result<PaymentIntent, StripeError> {
        let response = self
            .http
            .get(format!("{}/v1/payment_intents/{}", self.api_base, intent_id))
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        Self::parse(response).await
    }

    async fn parse(response: reqwest::Response) -> Result<PaymentIntent, StripeError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Stripe call failed with {}: {}", status, body);
            return Err(StripeError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<PaymentIntent>().await?)
    }
}

#[async_trait]
impl PaymentProvider for StripeClient {
    async fn create_intent(&self, req: &CreateIntentRequest) -> Result<PaymentIntent, BoxError> {
        Ok(self.create(req).await?)
    }

    async fn get_intent(&self, intent_id: &str) -> Result<PaymentIntent, BoxError> {
        Ok(self.retrieve(intent_id).await?)
    }
}

use crate::application::metadata;
use crate::application::resolver::ChargeResolver;
use crate::application::webhook::WebhookVerifier;
use crate::config::ClientConfig;
use crate::domain::charge::{ChargeReceipt, ChargeRequest};
use crate::domain::event::WebhookEvent;
use crate::domain::ports::ChargeGatewayBox;
use crate::error::Result;

/// The main entry point for collecting payments.
///
/// `ChargeEngine` owns the client configuration and the gateway seam. The
/// outbound path prices a charge, merges the reconciliation metadata and
/// hands everything to the gateway; the inbound path authenticates provider
/// notifications.
pub struct ChargeEngine {
    config: ClientConfig,
    gateway: ChargeGatewayBox,
}

impl ChargeEngine {
    pub fn new(config: ClientConfig, gateway: ChargeGatewayBox) -> Self {
        Self { config, gateway }
    }

    /// Prices and submits a charge.
    pub async fn submit_charge(&self, request: ChargeRequest) -> Result<ChargeReceipt> {
        let breakdown = ChargeResolver::new(self.config.schedule()).resolve(&request)?;
        let metadata = metadata::merge(&request.metadata, &breakdown)?;
        tracing::debug!(
            strategy = %breakdown.strategy,
            currency = %breakdown.currency,
            customer = %breakdown.customer_amount,
            merchant = %breakdown.merchant_amount,
            "submitting charge"
        );
        let receipt = self
            .gateway
            .submit(&request.email, &breakdown, &metadata)
            .await?;
        Ok(ChargeReceipt {
            reference: receipt.reference,
            authorization_url: receipt.authorization_url,
            breakdown,
        })
    }

    /// Authenticates and parses an inbound provider notification.
    pub fn verify_webhook(&self, raw_body: &[u8], signature_header: &str) -> Result<WebhookEvent> {
        WebhookVerifier::new(&self.config).verify_and_parse(raw_body, signature_header)
    }
}

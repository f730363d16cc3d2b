use crate::config::ClientConfig;
use crate::domain::event::WebhookEvent;
use crate::error::{PaymentError, Result};
use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Authenticates inbound provider notifications.
///
/// The provider signs the exact raw request bytes with HMAC-SHA512 under the
/// account secret and sends the lowercase hex digest in a header. Nothing in
/// the body is interpreted until that signature has been checked; the check
/// itself is constant-time, and rejection messages never carry the digest.
pub struct WebhookVerifier<'a> {
    config: &'a ClientConfig,
}

impl<'a> WebhookVerifier<'a> {
    pub fn new(config: &'a ClientConfig) -> Self {
        Self { config }
    }

    pub fn verify_and_parse(
        &self,
        raw_body: &[u8],
        signature_header: &str,
    ) -> Result<WebhookEvent> {
        let header = signature_header.trim();
        if header.is_empty() {
            return Err(PaymentError::MissingSignature);
        }
        // A header that is not hex cannot be the right digest.
        let claimed = hex::decode(header).map_err(|_| PaymentError::SignatureMismatch)?;

        let mut mac = HmacSha512::new_from_slice(self.config.secret().as_bytes())
            .map_err(|_| PaymentError::SignatureMismatch)?;
        mac.update(raw_body);
        if mac.verify_slice(&claimed).is_err() {
            tracing::warn!("webhook rejected: signature mismatch");
            return Err(PaymentError::SignatureMismatch);
        }

        let value: Value = serde_json::from_slice(raw_body)
            .map_err(|err| PaymentError::MalformedPayload(err.to_string()))?;
        let event_type = value
            .get("event")
            .and_then(Value::as_str)
            .ok_or_else(|| PaymentError::MalformedPayload("missing event field".to_string()))?
            .to_string();
        let data = value
            .get("data")
            .cloned()
            .ok_or_else(|| PaymentError::MalformedPayload("missing data field".to_string()))?;

        tracing::debug!(event = %event_type, "webhook verified");
        Ok(WebhookEvent::new(event_type, data))
    }
}

use super::charge::FeeBreakdown;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// What the gateway answered for a submitted charge.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayReceipt {
    pub reference: String,
    pub authorization_url: Option<String>,
}

/// Outbound seam to the payment provider.
///
/// The engine hands a priced breakdown and the merged metadata to this port;
/// transport, retries and provider schemas live behind it.
#[async_trait]
pub trait ChargeGateway: Send + Sync {
    async fn submit(
        &self,
        payer_email: &str,
        breakdown: &FeeBreakdown,
        metadata: &Map<String, Value>,
    ) -> Result<GatewayReceipt>;
}

pub type ChargeGatewayBox = Box<dyn ChargeGateway>;

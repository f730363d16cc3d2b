use crate::domain::charge::FeeBreakdown;
use crate::domain::ports::{ChargeGateway, GatewayReceipt};
use crate::error::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A charge exactly as the gateway double received it.
#[derive(Debug, Clone)]
pub struct RecordedCharge {
    pub payer_email: String,
    pub breakdown: FeeBreakdown,
    pub metadata: Map<String, Value>,
}

/// An in-memory stand-in for the provider gateway.
///
/// Uses `Arc<RwLock<Vec<_>>>` for shared concurrent access, records every
/// submission and answers with a sequential reference. Real transport lives
/// outside this crate.
#[derive(Default, Clone)]
pub struct InMemoryGateway {
    submissions: Arc<RwLock<Vec<RecordedCharge>>>,
}

impl InMemoryGateway {
    /// Creates a new, empty gateway double.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything submitted so far, in order.
    pub async fn submissions(&self) -> Vec<RecordedCharge> {
        self.submissions.read().await.clone()
    }
}

#[async_trait]
impl ChargeGateway for InMemoryGateway {
    async fn submit(
        &self,
        payer_email: &str,
        breakdown: &FeeBreakdown,
        metadata: &Map<String, Value>,
    ) -> Result<GatewayReceipt> {
        let mut submissions = self.submissions.write().await;
        submissions.push(RecordedCharge {
            payer_email: payer_email.to_string(),
            breakdown: breakdown.clone(),
            metadata: metadata.clone(),
        });
        Ok(GatewayReceipt {
            reference: format!("ref_{}", submissions.len()),
            authorization_url: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::charge::ChargeStrategy;
    use crate::domain::currency::Currency;
    use rust_decimal_macros::dec;

    fn breakdown() -> FeeBreakdown {
        FeeBreakdown {
            base_amount: dec!(1000),
            fee: dec!(15),
            customer_amount: dec!(1000),
            merchant_amount: dec!(985),
            strategy: ChargeStrategy::Absorb,
            currency: Currency::Ngn,
        }
    }

    #[tokio::test]
    async fn test_in_memory_gateway_records_submissions_in_order() {
        let gateway = InMemoryGateway::new();

        let first = gateway
            .submit("a@example.com", &breakdown(), &Map::new())
            .await
            .unwrap();
        let second = gateway
            .submit("b@example.com", &breakdown(), &Map::new())
            .await
            .unwrap();
        assert_eq!(first.reference, "ref_1");
        assert_eq!(second.reference, "ref_2");

        let submissions = gateway.submissions().await;
        assert_eq!(submissions.len(), 2);
        assert_eq!(submissions[0].payer_email, "a@example.com");
        assert_eq!(submissions[1].payer_email, "b@example.com");
    }
}

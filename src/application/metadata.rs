use crate::domain::charge::FeeBreakdown;
use crate::error::{PaymentError, Result};
use serde_json::{Map, Value};

/// Keys the engine writes into the outbound metadata. The merchant reconciles
/// settlements against these, so a caller is never allowed to shadow them.
pub const RESERVED_KEYS: [&str; 3] = ["fee_strategy", "customer_amount", "merchant_amount"];

/// Copies the caller's metadata and appends the breakdown fields.
///
/// Fails on any reserved key already present; amounts are written as strings
/// to keep them out of JSON float territory.
pub fn merge(caller: &Map<String, Value>, breakdown: &FeeBreakdown) -> Result<Map<String, Value>> {
    for key in RESERVED_KEYS {
        if caller.contains_key(key) {
            return Err(PaymentError::MetadataKeyCollision(key.to_string()));
        }
    }
    let mut merged = caller.clone();
    merged.insert(
        "fee_strategy".to_string(),
        Value::String(breakdown.strategy.name().to_string()),
    );
    merged.insert(
        "customer_amount".to_string(),
        Value::String(breakdown.customer_amount.to_string()),
    );
    merged.insert(
        "merchant_amount".to_string(),
        Value::String(breakdown.merchant_amount.to_string()),
    );
    Ok(merged)
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

    #[test]
    fn test_merge_preserves_caller_keys_and_appends_breakdown() {
        let mut caller = Map::new();
        caller.insert("order_id".to_string(), Value::String("ord_42".to_string()));

        let merged = merge(&caller, &breakdown()).unwrap();
        assert_eq!(merged["order_id"], Value::String("ord_42".to_string()));
        assert_eq!(merged["fee_strategy"], Value::String("absorb".to_string()));
        assert_eq!(merged["customer_amount"], Value::String("1000".to_string()));
        assert_eq!(merged["merchant_amount"], Value::String("985".to_string()));
    }

    #[test]
    fn test_merge_with_empty_caller_metadata() {
        let merged = merge(&Map::new(), &breakdown()).unwrap();
        assert_eq!(merged.len(), RESERVED_KEYS.len());
    }

    #[test]
    fn test_reserved_key_collision_fails_instead_of_overwriting() {
        for key in RESERVED_KEYS {
            let mut caller = Map::new();
            caller.insert(key.to_string(), Value::String("mine".to_string()));
            let err = merge(&caller, &breakdown()).unwrap_err();
            match err {
                PaymentError::MetadataKeyCollision(collided) => assert_eq!(collided, key),
                other => panic!("expected a collision error, got {other:?}"),
            }
        }
    }
}

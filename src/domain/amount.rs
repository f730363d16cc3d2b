use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A positive monetary amount in major currency units.
///
/// This is a wrapper around `rust_decimal::Decimal` that rules out zero and
/// negative values at construction, so the fee engine never has to re-check
/// the sign of a base amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PaymentError::InvalidStrategyParameters(
                "amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_accepts_positive_values() {
        let amount = Amount::new(dec!(1000.50)).unwrap();
        assert_eq!(amount.value(), dec!(1000.50));
    }

    #[test]
    fn test_amount_rejects_zero_and_negative() {
        assert!(Amount::new(Decimal::ZERO).is_err());
        assert!(Amount::new(dec!(-5)).is_err());
    }

    #[test]
    fn test_amount_try_from_decimal() {
        let amount: Amount = dec!(25).try_into().unwrap();
        assert_eq!(Decimal::from(amount), dec!(25));
    }

    #[test]
    fn test_amount_deserialization_rejects_non_positive() {
        assert!(serde_json::from_str::<Amount>("\"0\"").is_err());
        assert!(serde_json::from_str::<Amount>("\"-1\"").is_err());
        let amount: Amount = serde_json::from_str("\"10.5\"").unwrap();
        assert_eq!(amount.value(), dec!(10.5));
    }
}

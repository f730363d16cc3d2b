use crate::domain::amount::Amount;
use crate::domain::currency::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Who carries the provider fee for a charge.
///
/// The split ratio only exists on the `Split` variant, so a request can never
/// carry a ratio for a strategy that does not use one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeStrategy {
    /// The merchant absorbs the fee; the payer is charged the base amount.
    Absorb,
    /// The payer covers the fee; the charge is grossed up so the merchant
    /// nets the base amount.
    Pass,
    /// The fee is shared: the payer covers `ratio` of it, the merchant the
    /// rest. `ratio` must lie in (0, 1].
    Split { ratio: Decimal },
}

impl ChargeStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Absorb => "absorb",
            Self::Pass => "pass",
            Self::Split { .. } => "split",
        }
    }
}

impl std::fmt::Display for ChargeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single charge to be priced and submitted. Built per call, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Payer email, forwarded to the gateway untouched.
    pub email: String,
    /// Base amount in major units of `currency`.
    pub amount: Amount,
    pub currency: Currency,
    pub strategy: ChargeStrategy,
    /// Caller metadata, merged with the computed breakdown before submission.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// The priced outcome of a charge request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeBreakdown {
    /// The amount the caller asked to move.
    pub base_amount: Decimal,
    /// Provider fee on the amount actually charged.
    pub fee: Decimal,
    /// What the payer is charged.
    pub customer_amount: Decimal,
    /// What the merchant nets after the fee is deducted.
    pub merchant_amount: Decimal,
    pub strategy: ChargeStrategy,
    pub currency: Currency,
}

/// Outcome of a submitted charge: the gateway reference plus the breakdown
/// the caller needs for reconciliation.
#[derive(Debug, Clone, Serialize)]
pub struct ChargeReceipt {
    pub reference: String,
    /// Where to send the payer to complete the charge, when the gateway
    /// returns one.
    pub authorization_url: Option<String>,
    pub breakdown: FeeBreakdown,
}

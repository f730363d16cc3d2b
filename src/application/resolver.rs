use crate::application::fees::{fee_for, gross_up};
use crate::domain::charge::{ChargeRequest, ChargeStrategy, FeeBreakdown};
use crate::domain::profile::FeeSchedule;
use crate::error::{PaymentError, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// Prices a charge request against the fee schedule.
///
/// Pure: looks up the profile, runs the fee math for the requested strategy
/// and returns the breakdown. Performs no I/O.
pub struct ChargeResolver<'a> {
    schedule: &'a FeeSchedule,
}

impl<'a> ChargeResolver<'a> {
    pub fn new(schedule: &'a FeeSchedule) -> Self {
        Self { schedule }
    }

    pub fn resolve(&self, request: &ChargeRequest) -> Result<FeeBreakdown> {
        let profile = self.schedule.profile(request.currency)?;
        let base = request.amount.value();

        let (fee, customer_amount, merchant_amount) = match request.strategy {
            ChargeStrategy::Absorb => {
                let fee = fee_for(base, profile);
                (fee, base, base - fee)
            }
            ChargeStrategy::Pass => {
                let customer = gross_up(base, profile)?;
                // Recomputed from the rounded charge so the breakdown agrees
                // with what the provider will actually deduct.
                let fee = fee_for(customer, profile);
                (fee, customer, base)
            }
            ChargeStrategy::Split { ratio } => {
                if ratio <= Decimal::ZERO || ratio > Decimal::ONE {
                    return Err(PaymentError::InvalidStrategyParameters(format!(
                        "split ratio must lie in (0, 1], got {ratio}"
                    )));
                }
                // The fee is taken on the base amount; the split does not
                // gross up. The payer's share rounds half-up, the merchant
                // carries the remainder.
                let fee = fee_for(base, profile);
                let customer_share = (ratio * fee)
                    .round_dp_with_strategy(profile.scale, RoundingStrategy::MidpointAwayFromZero);
                (fee, base + customer_share, base - (fee - customer_share))
            }
        };

        if merchant_amount < Decimal::ZERO {
            return Err(PaymentError::InvalidStrategyParameters(format!(
                "fee {fee} exceeds the base amount {base}"
            )));
        }

        Ok(FeeBreakdown {
            base_amount: base,
            fee,
            customer_amount,
            merchant_amount,
            strategy: request.strategy,
            currency: request.currency,
        })
    }
}

use crate::domain::currency::Currency;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fee rules for a single settlement currency.
///
/// Amounts are in major currency units. `scale` is the number of decimal
/// places of the currency's minor unit, used for all rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyFeeProfile {
    /// Percentage rate as a fraction, e.g. `0.015` for 1.5%.
    pub rate: Decimal,
    /// Flat fee added on top of the percentage term.
    pub fixed_fee: Decimal,
    /// Upper bound on the total fee, if the provider caps it.
    pub cap: Option<Decimal>,
    /// Amounts below this threshold do not attract the fixed fee.
    pub waiver_threshold: Option<Decimal>,
    /// Decimal places of the currency's minor unit.
    pub scale: u32,
}

impl CurrencyFeeProfile {
    /// Checks the profile for internal consistency.
    ///
    /// A profile that fails here is a deployment bug, so the schedule is
    /// validated once when the client configuration is built rather than on
    /// every charge.
    pub fn validate(&self, currency: Currency) -> Result<()> {
        if self.rate < Decimal::ZERO || self.rate >= Decimal::ONE {
            return Err(PaymentError::InvariantViolation(format!(
                "{currency}: rate must lie in [0, 1), got {}",
                self.rate
            )));
        }
        if self.fixed_fee < Decimal::ZERO {
            return Err(PaymentError::InvariantViolation(format!(
                "{currency}: fixed fee must be non-negative, got {}",
                self.fixed_fee
            )));
        }
        if let Some(cap) = self.cap
            && cap < self.fixed_fee
        {
            // A cap below the fixed fee alone can never be reached.
            return Err(PaymentError::InvariantViolation(format!(
                "{currency}: cap {cap} is below the fixed fee {}",
                self.fixed_fee
            )));
        }
        if let Some(threshold) = self.waiver_threshold
            && threshold < Decimal::ZERO
        {
            return Err(PaymentError::InvariantViolation(format!(
                "{currency}: waiver threshold must be non-negative, got {threshold}"
            )));
        }
        if self.scale > 8 {
            return Err(PaymentError::InvariantViolation(format!(
                "{currency}: scale {} exceeds 8 decimal places",
                self.scale
            )));
        }
        Ok(())
    }

    /// One minor unit of the currency, e.g. `0.01` at scale 2.
    pub fn minor_unit(&self) -> Decimal {
        Decimal::new(1, self.scale)
    }
}

/// Per-currency fee table, immutable once handed to the client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeSchedule {
    profiles: HashMap<Currency, CurrencyFeeProfile>,
}

impl FeeSchedule {
    /// An empty schedule; profiles are added with [`FeeSchedule::insert`].
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
        }
    }

    /// The provider's published schedule.
    ///
    /// Rows other than NGN carry no cap or waiver; all parameters are
    /// configuration data and can be overridden with [`FeeSchedule::insert`]
    /// before the schedule reaches the client configuration.
    pub fn standard() -> Self {
        let mut schedule = Self::new();
        schedule.insert(
            Currency::Ngn,
            CurrencyFeeProfile {
                rate: dec!(0.015),
                fixed_fee: dec!(100),
                cap: Some(dec!(2000)),
                waiver_threshold: Some(dec!(2500)),
                scale: 2,
            },
        );
        schedule.insert(
            Currency::Usd,
            CurrencyFeeProfile {
                rate: dec!(0.039),
                fixed_fee: Decimal::ZERO,
                cap: None,
                waiver_threshold: None,
                scale: 2,
            },
        );
        schedule.insert(
            Currency::Ghs,
            CurrencyFeeProfile {
                rate: dec!(0.0195),
                fixed_fee: Decimal::ZERO,
                cap: None,
                waiver_threshold: None,
                scale: 2,
            },
        );
        schedule.insert(
            Currency::Zar,
            CurrencyFeeProfile {
                rate: dec!(0.029),
                fixed_fee: dec!(1),
                cap: None,
                waiver_threshold: None,
                scale: 2,
            },
        );
        schedule.insert(
            Currency::Kes,
            CurrencyFeeProfile {
                rate: dec!(0.029),
                fixed_fee: Decimal::ZERO,
                cap: None,
                waiver_threshold: None,
                scale: 2,
            },
        );
        schedule
    }

    /// Adds or replaces the profile for a currency.
    pub fn insert(&mut self, currency: Currency, profile: CurrencyFeeProfile) {
        self.profiles.insert(currency, profile);
    }

    /// Looks up the profile for a currency.
    pub fn profile(&self, currency: Currency) -> Result<&CurrencyFeeProfile> {
        self.profiles
            .get(&currency)
            .ok_or_else(|| PaymentError::UnsupportedCurrency(currency.to_string()))
    }

    /// Validates every profile in the schedule.
    pub fn validate(&self) -> Result<()> {
        for (currency, profile) in &self.profiles {
            profile.validate(*currency)?;
        }
        Ok(())
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

use crate::error::PaymentError;
use serde::{Deserialize, Serialize};

/// Settlement currencies accepted by the payment provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Nigerian Naira
    Ngn,
    /// US Dollar
    Usd,
    /// Ghanaian Cedi
    Ghs,
    /// South African Rand
    Zar,
    /// Kenyan Shilling
    Kes,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ngn => write!(f, "NGN"),
            Self::Usd => write!(f, "USD"),
            Self::Ghs => write!(f, "GHS"),
            Self::Zar => write!(f, "ZAR"),
            Self::Kes => write!(f, "KES"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NGN" => Ok(Self::Ngn),
            "USD" => Ok(Self::Usd),
            "GHS" => Ok(Self::Ghs),
            "ZAR" => Ok(Self::Zar),
            "KES" => Ok(Self::Kes),
            _ => Err(PaymentError::UnsupportedCurrency(s.to_string())),
        }
    }
}

use crate::domain::profile::FeeSchedule;
use crate::error::Result;

/// The provider secret key.
///
/// Wrapped so the key never shows up in `Debug` output or log events.
#[derive(Clone)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// Everything the fee engine and webhook verifier need, built once and passed
/// by reference. There is no process-global state behind it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    secret: SecretKey,
    schedule: FeeSchedule,
}

impl ClientConfig {
    /// Builds a configuration with the provider's standard fee schedule.
    pub fn new(secret: impl Into<String>) -> Self {
        // The standard schedule is known-good, so this cannot fail.
        Self {
            secret: SecretKey::new(secret),
            schedule: FeeSchedule::standard(),
        }
    }

    /// Builds a configuration with a caller-supplied fee schedule.
    ///
    /// Every profile is validated here, once, so a malformed schedule fails
    /// at startup instead of surfacing as a per-charge error.
    pub fn with_schedule(secret: impl Into<String>, schedule: FeeSchedule) -> Result<Self> {
        schedule.validate()?;
        Ok(Self {
            secret: SecretKey::new(secret),
            schedule,
        })
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    pub(crate) fn secret(&self) -> &SecretKey {
        &self.secret
    }
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),
    #[error("invalid strategy parameters: {0}")]
    InvalidStrategyParameters(String),
    #[error("fee profile invariant violated: {0}")]
    InvariantViolation(String),
    #[error("metadata key {0:?} is reserved")]
    MetadataKeyCollision(String),
    #[error("webhook signature header is missing or empty")]
    MissingSignature,
    #[error("webhook signature does not match the request body")]
    SignatureMismatch,
    #[error("malformed webhook payload: {0}")]
    MalformedPayload(String),
    #[error("gateway error: {0}")]
    Gateway(String),
}

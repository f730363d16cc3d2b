//! Fee accounting and webhook verification for a card-payment provider.
//!
//! The crate decides what a payer is charged and what the merchant nets
//! under a chosen fee strategy, and authenticates provider webhooks before
//! their payload is parsed. Transport to the provider sits behind the
//! [`domain::ports::ChargeGateway`] seam.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

use feewise::domain::charge::{ChargeRequest, ChargeStrategy};
use feewise::domain::currency::Currency;
use hmac::{Hmac, Mac};
use rust_decimal::Decimal;
use serde_json::Map;
use sha2::Sha512;

pub const TEST_SECRET: &str = "sk_test_integration_secret";

pub fn sign(secret: &str, body: &[u8]) -> String {
    let mut mac = Hmac::<Sha512>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

pub fn ngn_request(amount: Decimal, strategy: ChargeStrategy) -> ChargeRequest {
    ChargeRequest {
        email: "payer@example.com".to_string(),
        amount: amount.try_into().unwrap(),
        currency: Currency::Ngn,
        strategy,
        metadata: Map::new(),
    }
}

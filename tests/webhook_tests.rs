mod common;

use common::{TEST_SECRET, sign};
use feewise::application::webhook::WebhookVerifier;
use feewise::config::ClientConfig;
use feewise::error::PaymentError;

fn config() -> ClientConfig {
    ClientConfig::new(TEST_SECRET)
}

#[test]
fn test_signed_event_round_trip() {
    let config = config();
    let body = br#"{"event":"charge.success","data":{"reference":"ref_9","amount":"1000"}}"#;
    let signature = sign(TEST_SECRET, body);

    let event = WebhookVerifier::new(&config)
        .verify_and_parse(body, &signature)
        .unwrap();
    assert_eq!(event.event_type(), "charge.success");
    assert_eq!(event.data()["reference"], "ref_9");
}

#[test]
fn test_any_bit_flip_in_the_body_is_rejected() {
    let config = config();
    let verifier = WebhookVerifier::new(&config);
    let body = br#"{"event":"charge.success","data":{}}"#.to_vec();
    let signature = sign(TEST_SECRET, &body);

    for index in 0..body.len() {
        for bit in 0..8 {
            let mut tampered = body.clone();
            tampered[index] ^= 1 << bit;
            let err = verifier
                .verify_and_parse(&tampered, &signature)
                .unwrap_err();
            assert!(
                matches!(err, PaymentError::SignatureMismatch),
                "flip of bit {bit} in byte {index} slipped through"
            );
        }
    }
}

#[test]
fn test_any_hex_digit_change_in_the_signature_is_rejected() {
    let config = config();
    let verifier = WebhookVerifier::new(&config);
    let body = br#"{"event":"charge.success","data":{}}"#;
    let signature = sign(TEST_SECRET, body);

    for index in 0..signature.len() {
        let mut tampered: Vec<char> = signature.chars().collect();
        tampered[index] = if tampered[index] == 'f' { '0' } else { 'f' };
        let tampered: String = tampered.into_iter().collect();
        if tampered == signature {
            continue;
        }
        let err = verifier.verify_and_parse(body, &tampered).unwrap_err();
        assert!(matches!(err, PaymentError::SignatureMismatch));
    }
}

#[test]
fn test_signature_from_another_secret_is_rejected() {
    let config = config();
    let body = br#"{"event":"charge.success","data":{}}"#;
    let signature = sign("sk_test_some_other_secret", body);

    let err = WebhookVerifier::new(&config)
        .verify_and_parse(body, &signature)
        .unwrap_err();
    assert!(matches!(err, PaymentError::SignatureMismatch));
}

#[test]
fn test_empty_header_fails_before_anything_else() {
    let config = config();
    // The body is garbage; if parsing ran first this would be a payload
    // error, not a missing signature.
    let err = WebhookVerifier::new(&config)
        .verify_and_parse(b"\x00\x01garbage", "")
        .unwrap_err();
    assert!(matches!(err, PaymentError::MissingSignature));
}

#[test]
fn test_envelope_without_event_field_is_malformed() {
    let config = config();
    let body = br#"{"data":{}}"#;
    let err = WebhookVerifier::new(&config)
        .verify_and_parse(body, &sign(TEST_SECRET, body))
        .unwrap_err();
    assert!(matches!(err, PaymentError::MalformedPayload(_)));
}

#[test]
fn test_error_messages_never_contain_the_digest() {
    let config = config();
    let body = br#"{"event":"charge.success","data":{}}"#;
    let expected = sign(TEST_SECRET, body);
    let wrong = sign("sk_test_some_other_secret", body);

    let err = WebhookVerifier::new(&config)
        .verify_and_parse(body, &wrong)
        .unwrap_err();
    let message = err.to_string();
    assert!(!message.contains(&expected));
    assert!(!message.contains(&wrong));
    assert!(!message.contains(TEST_SECRET));
}

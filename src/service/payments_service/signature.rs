//!
//! Gateway signs its confirmations with
//! `HMAC-SHA256(secret, "{order_id}|{payment_id}")`
//! encoded as lowercase hex.
//!

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

pub(crate) fn compute_signature(secret: &[u8], order_id: &str, payment_id: &str) -> String {
    // Hmac accepts keys of any length so new_from_slice cannot fail
    let mut mac = HmacSha256::new_from_slice(secret).expect("hmac key of any length is valid");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());

    hex::encode(mac.finalize().into_bytes())
}

pub(crate) fn verify_signature(
    secret: &[u8],
    order_id: &str,
    payment_id: &str,
    signature: &str,
) -> bool {
    let expected = compute_signature(secret, order_id, payment_id);

    expected.as_bytes().ct_eq(signature.as_bytes()).into()
}

#[cfg(test)]
mod test {
    use super::*;

    const SECRET: &[u8] = b"gateway test secret";

    #[test]
    fn computed_signature_verifies() {
        let signature = compute_signature(SECRET, "order_123", "pay_456");

        assert!(verify_signature(SECRET, "order_123", "pay_456", &signature));
    }

    #[test]
    fn tampered_signature_rejected() {
        let mut signature = compute_signature(SECRET, "order_123", "pay_456");
        signature.replace_range(0..1, "x");

        assert!(!verify_signature(SECRET, "order_123", "pay_456", &signature));
    }

    #[test]
    fn signature_bound_to_order_and_payment() {
        let signature = compute_signature(SECRET, "order_123", "pay_456");

        assert!(!verify_signature(SECRET, "order_124", "pay_456", &signature));
        assert!(!verify_signature(SECRET, "order_123", "pay_457", &signature));
    }

    #[test]
    fn wrong_secret_rejected() {
        let signature = compute_signature(b"other secret", "order_123", "pay_456");

        assert!(!verify_signature(SECRET, "order_123", "pay_456", &signature));
    }
}

//! ECDSA signing and verification over commitment digests.
///
/// Signatures use the even-s canonical form: of the two valid s values for a
/// given (digest, r), peers exchange the even one. This matches the historical
/// duplicate-signature rule, not the low-s rule used elsewhere.
pub mod wire;

use crate::util::{Error, Hash256, Result};
use num_bigint::BigUint;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey, constants, ecdsa};
use std::fmt;

/// ECDSA signature with r and s as 32-byte big-endian magnitudes.
///
/// Invariant: s is even. `sign_digest` always produces the even-s form and
/// `verify` rejects signatures that break it.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature {
    /// The r component, big-endian, left-padded with zeros.
    pub r: [u8; 32],
    /// The s component, big-endian, left-padded with zeros. Always even.
    pub s: [u8; 32],
}

impl Signature {
    /// Returns whether s holds the even-value rule.
    #[must_use]
    #[inline]
    pub fn is_canonical(&self) -> bool {
        self.s[31] & 1 == 0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Signature")
            .field("r", &hex::encode(self.r))
            .field("s", &hex::encode(self.s))
            .finish()
    }
}

/// Signs a 32-byte digest, producing the even-s canonical signature.
///
/// Nonces come from the secp256k1 engine's deterministic RFC 6979 scheme, so
/// signing the same digest with the same key yields the same signature.
///
/// # Errors
/// `Error::Secp256k1Error` if the key is invalid or the engine fails.
pub fn sign_digest(private_key: &[u8; 32], digest: &Hash256) -> Result<Signature> {
    let secp = Secp256k1::signing_only();
    let secret_key = SecretKey::from_byte_array(*private_key)?;
    let message = Message::from_digest(digest.0);
    let signature = secp.sign_ecdsa(message, &secret_key);
    let compact = signature.serialize_compact();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&compact[..32]);
    s.copy_from_slice(&compact[32..]);
    // Exactly one of s and order - s is even; peers expect the even one.
    if s[31] & 1 != 0 {
        s = order_negate(&s);
    }
    Ok(Signature { r, s })
}

/// Verifies a canonical signature over a digest against serialized public key
/// bytes.
///
/// Returns `Ok(false)` for a well-formed signature that does not validate;
/// malformed inputs are reported as distinct errors.
///
/// # Errors
/// `Error::NonCanonicalSignature` if s is odd; `Error::InvalidPublicKey` or
/// `Error::InvalidSignatureEncoding` if the inputs do not decode.
pub fn verify(digest: &Hash256, sig: &Signature, pubkey: &[u8]) -> Result<bool> {
    if !sig.is_canonical() {
        return Err(Error::NonCanonicalSignature);
    }
    let secp = Secp256k1::verification_only();
    let public_key = PublicKey::from_slice(pubkey).map_err(Error::InvalidPublicKey)?;
    let mut compact = [0u8; 64];
    compact[..32].copy_from_slice(&sig.r);
    compact[32..].copy_from_slice(&sig.s);
    let mut signature =
        ecdsa::Signature::from_compact(&compact).map_err(Error::InvalidSignatureEncoding)?;
    // The even s may be the high value; the engine only accepts low-s, and
    // both values verify identically.
    signature.normalize_s();
    let message = Message::from_digest(digest.0);
    Ok(secp.verify_ecdsa(message, &signature, &public_key).is_ok())
}

/// Computes curve_order - s for a 32-byte scalar below the curve order.
fn order_negate(s: &[u8; 32]) -> [u8; 32] {
    let order = BigUint::from_bytes_be(&constants::CURVE_ORDER);
    let negated = order - BigUint::from_bytes_be(s);
    let bytes = negated.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keypair(private_key: &[u8; 32]) -> [u8; 33] {
        let secp = Secp256k1::new();
        let secret_key = SecretKey::from_byte_array(*private_key).unwrap();
        PublicKey::from_secret_key(&secp, &secret_key).serialize()
    }

    #[test]
    fn sign_always_even_s() {
        let private_key = [1; 32];
        for i in 0..8u8 {
            let digest = Hash256([i; 32]);
            let sig = sign_digest(&private_key, &digest).unwrap();
            assert!(sig.is_canonical());
        }
    }

    #[test]
    fn sign_verify() {
        let private_key = [1; 32];
        let pubkey = keypair(&private_key);
        for i in 0..8u8 {
            let digest = Hash256([i; 32]);
            let sig = sign_digest(&private_key, &digest).unwrap();
            assert_eq!(verify(&digest, &sig, &pubkey).unwrap(), true);
        }
    }

    #[test]
    fn sign_deterministic() {
        let private_key = [5; 32];
        let digest = Hash256([9; 32]);
        let sig1 = sign_digest(&private_key, &digest).unwrap();
        let sig2 = sign_digest(&private_key, &digest).unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn verify_wrong_digest() {
        let private_key = [2; 32];
        let pubkey = keypair(&private_key);
        let sig = sign_digest(&private_key, &Hash256([3; 32])).unwrap();
        assert_eq!(verify(&Hash256([4; 32]), &sig, &pubkey).unwrap(), false);
    }

    #[test]
    fn verify_wrong_key() {
        let private_key = [2; 32];
        let other_pubkey = keypair(&[3; 32]);
        let digest = Hash256([3; 32]);
        let sig = sign_digest(&private_key, &digest).unwrap();
        assert_eq!(verify(&digest, &sig, &other_pubkey).unwrap(), false);
    }

    #[test]
    fn verify_tampered_r() {
        let private_key = [2; 32];
        let pubkey = keypair(&private_key);
        let digest = Hash256([3; 32]);
        let mut sig = sign_digest(&private_key, &digest).unwrap();
        sig.r[31] ^= 1;
        assert_eq!(verify(&digest, &sig, &pubkey).unwrap(), false);
    }

    #[test]
    fn verify_tampered_s_even() {
        let private_key = [2; 32];
        let pubkey = keypair(&private_key);
        let digest = Hash256([3; 32]);
        let mut sig = sign_digest(&private_key, &digest).unwrap();
        // Keeps the low bit of s[31] clear, so the tamper reaches the curve check.
        sig.s[16] ^= 4;
        assert_eq!(verify(&digest, &sig, &pubkey).unwrap(), false);
    }

    #[test]
    fn verify_rejects_negated_s() {
        let private_key = [2; 32];
        let pubkey = keypair(&private_key);
        let digest = Hash256([3; 32]);
        let mut sig = sign_digest(&private_key, &digest).unwrap();
        // order - even s is odd, the other mathematically valid signature.
        sig.s = order_negate(&sig.s);
        assert!(!sig.is_canonical());
        assert_eq!(
            verify(&digest, &sig, &pubkey).unwrap_err().to_string(),
            "Non-canonical signature: s is odd"
        );
    }

    #[test]
    fn verify_rejects_bad_pubkey() {
        let digest = Hash256([3; 32]);
        let sig = sign_digest(&[2; 32], &digest).unwrap();
        let result = verify(&digest, &sig, &[0u8; 33]);
        assert!(matches!(result.unwrap_err(), Error::InvalidPublicKey(_)));
    }

    #[test]
    fn verify_rejects_bad_scalar() {
        let private_key = [2; 32];
        let pubkey = keypair(&private_key);
        let digest = Hash256([3; 32]);
        let mut sig = sign_digest(&private_key, &digest).unwrap();
        // Above the curve order, rejected before the curve check.
        sig.r = [0xff; 32];
        let result = verify(&digest, &sig, &pubkey);
        assert!(matches!(result.unwrap_err(), Error::InvalidSignatureEncoding(_)));
    }

    #[test]
    fn order_negate_roundtrip() {
        let sig = sign_digest(&[7; 32], &Hash256([1; 32])).unwrap();
        assert_eq!(order_negate(&order_negate(&sig.s)), sig.s);
    }
}

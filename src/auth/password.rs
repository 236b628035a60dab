//! Password hashes in the passlib `pbkdf2_sha256` format:
//! `$pbkdf2-sha256$<rounds>$<salt>$<digest>` with salt and digest in
//! "adapted base64" (standard alphabet, `.` instead of `+`, no padding).

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

const SCHEME: &str = "pbkdf2-sha256";
const DEFAULT_ROUNDS: u32 = 29000;
const DIGEST_LEN: usize = 32;

/// Check a plain password against a stored hash. Unknown schemes and
/// malformed hashes never verify.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    let Some((rounds, salt, expected)) = parse_hash(hashed) else {
        return false;
    };
    let mut digest = vec![0u8; expected.len()];
    pbkdf2_hmac::<Sha256>(plain.as_bytes(), &salt, rounds, &mut digest);
    constant_time_eq(&digest, &expected)
}

pub fn hash_password(plain: &str) -> String {
    let salt = *uuid::Uuid::new_v4().as_bytes();
    hash_with(plain, &salt, DEFAULT_ROUNDS)
}

fn hash_with(plain: &str, salt: &[u8], rounds: u32) -> String {
    let mut digest = [0u8; DIGEST_LEN];
    pbkdf2_hmac::<Sha256>(plain.as_bytes(), salt, rounds, &mut digest);
    format!("${}${}${}${}", SCHEME, rounds, ab64_encode(salt), ab64_encode(&digest))
}

fn parse_hash(hashed: &str) -> Option<(u32, Vec<u8>, Vec<u8>)> {
    let mut parts = hashed.strip_prefix('$')?.split('$');
    if parts.next()? != SCHEME {
        return None;
    }
    let rounds: u32 = parts.next()?.parse().ok().filter(|r| *r > 0)?;
    let salt = ab64_decode(parts.next()?)?;
    let digest = ab64_decode(parts.next()?)?;
    if parts.next().is_some() || digest.is_empty() {
        return None;
    }
    Some((rounds, salt, digest))
}

fn ab64_encode(bytes: &[u8]) -> String {
    STANDARD_NO_PAD.encode(bytes).replace('+', ".")
}

fn ab64_decode(text: &str) -> Option<Vec<u8>> {
    STANDARD_NO_PAD.decode(text.replace('.', "+")).ok()
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: &str = "$pbkdf2-sha256$29000$AAECAwQFBgcICQoLDA0ODw$owqXo4J812QlkyPVsH4f6y3hA3TcFJWITWKFxece66Q";

    #[test]
    fn verifies_passlib_hash() {
        assert!(verify_password("Cambiame.123", KNOWN));
        assert!(!verify_password("cambiame.123", KNOWN));
    }

    #[test]
    fn handles_dot_in_adapted_base64() {
        let hashed = "$pbkdf2-sha256$1000$c2FsdHNhbHRzYWx0c2FsdA$QixOZ6gG6mAu551sUy18GwwCR0uvQBh.29YYp2bF9qY";
        assert!(verify_password("secreto", hashed));
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        assert!(!verify_password("x", "abQ9KY.KfrYrc"));
        assert!(!verify_password("x", "$pbkdf2-sha512$1000$c2FsdA$c2FsdA"));
        assert!(!verify_password("x", "$pbkdf2-sha256$0$c2FsdA$c2FsdA"));
        assert!(!verify_password("x", ""));
    }

    #[test]
    fn hash_round_trips_with_fresh_salt() {
        let first = hash_password("Cambiame.123");
        let second = hash_password("Cambiame.123");
        assert!(first.starts_with("$pbkdf2-sha256$29000$"));
        assert_ne!(first, second);
        assert!(verify_password("Cambiame.123", &first));
    }
}

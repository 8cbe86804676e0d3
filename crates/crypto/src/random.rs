//! Secure random byte generation.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::{CryptoError, Result};

/// Fills a fresh buffer of `length` bytes from the operating system CSPRNG.
///
/// Fails only when the OS randomness source itself fails; no fallback
/// generator is consulted.
pub fn random_bytes(length: usize) -> Result<Vec<u8>> {
    let mut buffer = vec![0u8; length];
    OsRng
        .try_fill_bytes(&mut buffer)
        .map_err(|_| CryptoError::RandomSource)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes_length() {
        assert_eq!(random_bytes(0).unwrap().len(), 0);
        assert_eq!(random_bytes(32).unwrap().len(), 32);
        assert_eq!(random_bytes(100).unwrap().len(), 100);
    }

    #[test]
    fn test_random_bytes_draws_differ() {
        // 32 bytes colliding would indicate a broken source
        assert_ne!(random_bytes(32).unwrap(), random_bytes(32).unwrap());
    }
}

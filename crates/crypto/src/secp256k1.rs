//! secp256k1 bridge
//!
//! Narrow wrapper around the `k256` curve backend: SEC1 point
//! (de)compression, serialized public key combination, private-to-public
//! conversion, and the public-key-to-address pipeline. Nothing outside this
//! module touches curve arithmetic, so the backend is swappable without
//! disturbing checksum or formatting logic.

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{ProjectivePoint, PublicKey, SecretKey};
use thiserror::Error;

use tresor_primitives::EthereumAddress;

use crate::error::{CryptoError, Result};
use crate::random::random_bytes;

/// Length of a private key scalar in bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Length of a compressed SEC1 public key (parity prefix + X).
pub const COMPRESSED_KEY_LENGTH: usize = 33;

/// Length of an uncompressed SEC1 public key (`0x04` prefix + X + Y).
pub const UNCOMPRESSED_KEY_LENGTH: usize = 65;

/// Length of the raw X‖Y public key form without a prefix.
pub const RAW_KEY_LENGTH: usize = 64;

/// Attempts at drawing a valid scalar before giving up on key generation.
const GENERATE_KEY_ATTEMPTS: usize = 1024;

/// Errors from the secp256k1 bridge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Secp256k1Error {
    /// The private key was not a valid non-zero curve scalar.
    #[error("invalid private key scalar")]
    InvalidPrivateKey,

    /// The public key bytes were not a valid SEC1 point encoding.
    #[error("invalid public key encoding")]
    InvalidPublicKey,

    /// The public key buffer had none of the accepted lengths (33, 65, 64).
    #[error("invalid public key length: {0}")]
    InvalidKeyLength(usize),

    /// The public key prefix byte did not match its length.
    #[error("invalid public key prefix byte: {0:#04x}")]
    InvalidKeyPrefix(u8),

    /// No public keys were supplied for combination.
    #[error("no public keys to combine")]
    EmptyKeySet,

    /// Combining public keys produced the point at infinity, which has no
    /// SEC1 encoding.
    #[error("public key combination produced the point at infinity")]
    PointAtInfinity,
}

/// Generates a private key by rejection-sampling random bytes until they form
/// a valid non-zero scalar.
pub fn generate_private_key() -> Result<Vec<u8>> {
    for _ in 0..GENERATE_KEY_ATTEMPTS {
        let candidate = random_bytes(PRIVATE_KEY_LENGTH)?;
        if verify_private_key(&candidate) {
            return Ok(candidate);
        }
    }
    Err(CryptoError::RandomSource)
}

/// Returns `true` if the bytes form a valid non-zero curve scalar.
pub fn verify_private_key(private_key: &[u8]) -> bool {
    SecretKey::from_slice(private_key).is_ok()
}

/// Converts a 32-byte private key to its SEC1 public key encoding,
/// compressed (33 bytes) or uncompressed (65 bytes).
pub fn private_to_public(private_key: &[u8], compressed: bool) -> Result<Vec<u8>> {
    let secret =
        SecretKey::from_slice(private_key).map_err(|_| Secp256k1Error::InvalidPrivateKey)?;
    Ok(secret
        .public_key()
        .to_encoded_point(compressed)
        .as_bytes()
        .to_vec())
}

/// Decompresses a SEC1 public key to its 65-byte uncompressed encoding.
pub fn decompress_public_key(public_key: &[u8]) -> Result<Vec<u8>> {
    let key =
        PublicKey::from_sec1_bytes(public_key).map_err(|_| Secp256k1Error::InvalidPublicKey)?;
    Ok(key.to_encoded_point(false).as_bytes().to_vec())
}

/// Sums a set of serialized public keys into a single SEC1 encoding.
///
/// Each input may be in any valid SEC1 form. The sum must not be the point
/// at infinity (e.g. a key combined with its negation).
pub fn combine_public_keys<I, K>(keys: I, output_compressed: bool) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = K>,
    K: AsRef<[u8]>,
{
    let mut sum = ProjectivePoint::IDENTITY;
    let mut seen = false;

    for key in keys {
        let parsed = PublicKey::from_sec1_bytes(key.as_ref())
            .map_err(|_| Secp256k1Error::InvalidPublicKey)?;
        sum += parsed.to_projective();
        seen = true;
    }

    if !seen {
        return Err(Secp256k1Error::EmptyKeySet.into());
    }

    let combined =
        PublicKey::from_affine(sum.to_affine()).map_err(|_| Secp256k1Error::PointAtInfinity)?;
    Ok(combined
        .to_encoded_point(output_compressed)
        .as_bytes()
        .to_vec())
}

/// Derives the Ethereum address for a public key.
///
/// Accepts the compressed (33-byte, prefix `0x02`/`0x03`), uncompressed
/// (65-byte, prefix `0x04`) and raw X‖Y (64-byte, no prefix) encodings.
/// Compressed keys are decompressed on the curve first; the 64-byte form is
/// then hashed with keccak-256 and the last 20 digest bytes become the
/// address.
pub fn public_key_to_address(public_key: &[u8]) -> Result<EthereumAddress> {
    match public_key.len() {
        COMPRESSED_KEY_LENGTH => {
            match public_key[0] {
                0x02 | 0x03 => {}
                prefix => return Err(Secp256k1Error::InvalidKeyPrefix(prefix).into()),
            }
            let uncompressed = decompress_public_key(public_key)?;
            Ok(EthereumAddress::from_raw_public_key(&uncompressed[1..])?)
        }
        UNCOMPRESSED_KEY_LENGTH => {
            if public_key[0] != 0x04 {
                return Err(Secp256k1Error::InvalidKeyPrefix(public_key[0]).into());
            }
            Ok(EthereumAddress::from_raw_public_key(&public_key[1..])?)
        }
        RAW_KEY_LENGTH => Ok(EthereumAddress::from_raw_public_key(public_key)?),
        other => Err(Secp256k1Error::InvalidKeyLength(other).into()),
    }
}

/// Derives the lowercase `0x`-prefixed address string for a public key.
pub fn public_key_to_address_string(public_key: &[u8]) -> Result<String> {
    Ok(public_key_to_address(public_key)?.to_hex())
}

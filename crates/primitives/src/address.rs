//! Ethereum address type with EIP-55 checksum support
//!
//! An address is exactly 20 bytes, derived from the keccak-256 digest of the
//! 64-byte X‖Y public key representation. It has two textual projections: a
//! lowercase `0x`-prefixed hex form and the EIP-55 mixed-case checksum form,
//! where each hex digit's case is chosen from the keccak-256 digest of the
//! lowercase digits.
//!
//! ## Example Usage
//!
//! ```
//! use tresor_primitives::EthereumAddress;
//!
//! let address: EthereumAddress = "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359"
//!     .parse()
//!     .unwrap();
//! assert_eq!(
//!     address.to_checksum(),
//!     "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{Address, hex, keccak256};
use thiserror::Error;

use crate::bytes::strip_hex_prefix;
use crate::error::{PrimitivesError, Result};

/// Length of an address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// Length of the raw (unprefixed) X‖Y public key form in bytes.
pub const RAW_PUBLIC_KEY_LENGTH: usize = 64;

/// Errors from address handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The textual form did not contain exactly 40 hex digits.
    #[error("invalid address length: expected 40 hex digits, got {0}")]
    InvalidLength(usize),

    /// A mixed-case textual form did not match its EIP-55 encoding.
    #[error("checksum mismatch: mixed-case form does not match its EIP-55 encoding")]
    ChecksumMismatch,

    /// A raw public key buffer was not exactly 64 bytes.
    #[error("invalid raw public key length: expected 64 bytes, got {0}")]
    InvalidRawKeyLength(usize),
}

/// A 20-byte Ethereum account address.
///
/// Equality is defined on the raw bytes, so textual forms that differ only in
/// letter case compare equal once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EthereumAddress(Address);

impl EthereumAddress {
    /// Creates an address from raw bytes.
    pub fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(Address::from(bytes))
    }

    /// Creates an address from a slice, checking the length.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != ADDRESS_LENGTH {
            return Err(AddressError::InvalidLength(slice.len()).into());
        }
        Ok(Self(Address::from_slice(slice)))
    }

    /// Derives an address from the raw 64-byte X‖Y public key form.
    ///
    /// The buffer is hashed with keccak-256 (legacy Keccak padding, not
    /// SHA3-256) and the last 20 bytes of the digest become the address.
    /// Prefix handling and decompression for the 33- and 65-byte public key
    /// encodings live in the curve bridge, which normalizes to this form.
    pub fn from_raw_public_key(raw: &[u8]) -> Result<Self> {
        if raw.len() != RAW_PUBLIC_KEY_LENGTH {
            return Err(AddressError::InvalidRawKeyLength(raw.len()).into());
        }
        let digest = keccak256(raw);
        Ok(Self(Address::from_slice(&digest[12..])))
    }

    /// Returns the underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Returns the lowercase `0x`-prefixed hex form.
    pub fn to_hex(&self) -> String {
        hex::encode_prefixed(self.0.as_slice())
    }

    /// Returns the EIP-55 mixed-case checksum form.
    ///
    /// The 40 lowercase hex digits are hashed with keccak-256 as ASCII bytes
    /// (no prefix); digit `i` is uppercased iff nibble `i` of the digest
    /// (high nibble for even `i`, low for odd) is at least 8.
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0.as_slice());
        let digest = keccak256(lower.as_bytes());

        let mut output = String::with_capacity(2 + 2 * ADDRESS_LENGTH);
        output.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                digest[i / 2] >> 4
            } else {
                digest[i / 2] & 0x0f
            };
            output.push(if nibble >= 8 { c.to_ascii_uppercase() } else { c });
        }
        output
    }
}

impl FromStr for EthereumAddress {
    type Err = PrimitivesError;

    /// Parses an address from its textual form, validating the checksum.
    ///
    /// All-lowercase and all-uppercase hex payloads are always accepted. Any
    /// other case pattern must match the derived EIP-55 encoding exactly.
    fn from_str(s: &str) -> Result<Self> {
        let digits = strip_hex_prefix(s);
        if digits.len() != 2 * ADDRESS_LENGTH {
            return Err(AddressError::InvalidLength(digits.len()).into());
        }

        let bytes = hex::decode(digits)?;
        let address = Self(Address::from_slice(&bytes));

        let uniform_case = digits.bytes().all(|b| !b.is_ascii_uppercase())
            || digits.bytes().all(|b| !b.is_ascii_lowercase());
        if uniform_case || address.to_checksum()[2..] == *digits {
            Ok(address)
        } else {
            Err(AddressError::ChecksumMismatch.into())
        }
    }
}

impl fmt::Display for EthereumAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl From<[u8; ADDRESS_LENGTH]> for EthereumAddress {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self::new(bytes)
    }
}

impl From<Address> for EthereumAddress {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl From<EthereumAddress> for Address {
    fn from(address: EthereumAddress) -> Self {
        address.0
    }
}

impl AsRef<[u8]> for EthereumAddress {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EthereumAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_checksum())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EthereumAddress {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PLAIN: &str = "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359";
    const CHECKSUMMED: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

    #[test]
    fn test_checksum_address() {
        let address: EthereumAddress = PLAIN.parse().unwrap();
        assert_eq!(address.to_checksum(), CHECKSUMMED);
        assert_eq!(address.to_hex(), PLAIN);
    }

    #[test]
    fn test_checksum_is_deterministic_and_idempotent() {
        let address: EthereumAddress = PLAIN.parse().unwrap();
        let once = address.to_checksum();
        let twice = once.parse::<EthereumAddress>().unwrap().to_checksum();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_checksum_address_parsing() {
        assert!(CHECKSUMMED.parse::<EthereumAddress>().is_ok());

        // one character's case flipped from the correct checksum
        let invalid = "0xfb6916095ca1df60bB79Ce92cE3Ea74c37c5d359";
        assert!(matches!(
            invalid.parse::<EthereumAddress>(),
            Err(PrimitivesError::Address(AddressError::ChecksumMismatch))
        ));
    }

    #[test]
    fn test_uniform_case_always_accepted() {
        let lower: EthereumAddress = PLAIN.parse().unwrap();
        let upper: EthereumAddress = PLAIN.to_uppercase().replace("0X", "0x").parse().unwrap();
        let mixed: EthereumAddress = CHECKSUMMED.parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn test_invalid_length_rejected() {
        assert!(matches!(
            "0x1234".parse::<EthereumAddress>(),
            Err(PrimitivesError::Address(AddressError::InvalidLength(4)))
        ));
    }

    #[test]
    fn test_from_raw_public_key_length() {
        assert!(EthereumAddress::from_raw_public_key(&[0u8; 64]).is_ok());
        assert!(matches!(
            EthereumAddress::from_raw_public_key(&[0u8; 65]),
            Err(PrimitivesError::Address(AddressError::InvalidRawKeyLength(65)))
        ));
    }

    proptest! {
        #[test]
        fn proptest_checksum_round_trip(bytes in any::<[u8; ADDRESS_LENGTH]>()) {
            let address = EthereumAddress::new(bytes);
            let checksummed = address.to_checksum();
            prop_assert_eq!(checksummed.parse::<EthereumAddress>().unwrap(), address);
            prop_assert_eq!(address.to_hex().parse::<EthereumAddress>().unwrap(), address);
        }

        #[test]
        fn proptest_flipped_case_rejected(bytes in any::<[u8; ADDRESS_LENGTH]>(), pick in any::<prop::sample::Index>()) {
            let address = EthereumAddress::new(bytes);
            let checksummed = address.to_checksum();

            // require two letters of each case so a single flip can never
            // produce an all-lowercase or all-uppercase payload, which the
            // parser accepts unconditionally
            let letters: Vec<usize> = checksummed
                .char_indices()
                .skip(2)
                .filter(|(_, c)| c.is_ascii_alphabetic())
                .map(|(i, _)| i)
                .collect();
            let uppercase = checksummed.chars().filter(|c| c.is_ascii_uppercase()).count();
            let lowercase = checksummed
                .chars()
                .skip(2)
                .filter(|c| c.is_ascii_lowercase() && c.is_ascii_alphabetic())
                .count();
            prop_assume!(uppercase >= 2 && lowercase >= 2);

            let target = letters[pick.index(letters.len())];
            let mut flipped: Vec<char> = checksummed.chars().collect();
            flipped[target] = if flipped[target].is_ascii_uppercase() {
                flipped[target].to_ascii_lowercase()
            } else {
                flipped[target].to_ascii_uppercase()
            };
            let flipped: String = flipped.into_iter().collect();

            prop_assert!(flipped.parse::<EthereumAddress>().is_err());
        }
    }
}

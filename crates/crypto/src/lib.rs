//! Cryptographic bridge for Ethereum-style wallet keystores
//!
//! This crate wraps the external cryptographic capabilities the keystore
//! layer depends on behind narrow, validated interfaces:
//!
//! - **secp256k1 bridge**: SEC1 point decompression, public key combination,
//!   private-to-public conversion and the public-key-to-address pipeline
//!   ([`secp256k1`])
//! - **Key derivation**: a validated parameter contract around the
//!   memory-hard scrypt function ([`kdf`])
//! - **Randomness**: OS CSPRNG access for salts and key material ([`random`])
//!
//! All operations are pure and synchronous; the only long-running call is
//! [`ScryptParams::derive`], which is slow by design.
//!
//! ## Usage Examples
//!
//! ```
//! use tresor_crypto::{derive_key, private_to_public, public_key_to_address};
//!
//! let private_key = [0x01u8; 32];
//! let public_key = private_to_public(&private_key, true).unwrap();
//! let address = public_key_to_address(&public_key).unwrap();
//! println!("{address}");
//!
//! let key = derive_key(b"password", b"NaCl", 32, 4096, 8, 1).unwrap();
//! assert_eq!(key.len(), 32);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod error;
pub mod kdf;
pub mod random;
pub mod secp256k1;

pub use error::{CryptoError, Result};
pub use kdf::{KdfError, ScryptParams, derive_key};
pub use random::random_bytes;
pub use secp256k1::{
    Secp256k1Error, combine_public_keys, decompress_public_key, generate_private_key,
    private_to_public, public_key_to_address, public_key_to_address_string, verify_private_key,
};

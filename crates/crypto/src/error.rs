//! Error types for the tresor-crypto crate
//!
//! [`CryptoError`] is the top-level type, wrapping the component errors from
//! key derivation and the curve bridge, plus errors bubbling up from the
//! primitives crate during address derivation.

use thiserror::Error;

/// Result type for operations in the crypto crate
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Main error type for the crypto crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Errors from scrypt key derivation
    #[error(transparent)]
    Kdf(#[from] crate::kdf::KdfError),

    /// Errors from the secp256k1 bridge
    #[error(transparent)]
    Secp256k1(#[from] crate::secp256k1::Secp256k1Error),

    /// Errors from the primitives layer
    #[error(transparent)]
    Primitives(#[from] tresor_primitives::PrimitivesError),

    /// The system randomness source failed
    #[error("system randomness source failed")]
    RandomSource,
}

//! Error types for the tresor-primitives crate
//!
//! The crate uses a two-level error hierarchy: [`PrimitivesError`] is the
//! top-level type, wrapping the more specific errors raised by individual
//! components (hex decoding, address handling). Malformed input is always
//! surfaced as an error value, never as a panic.

use alloy_primitives::hex;
use thiserror::Error;

/// Result type for operations in the primitives crate
pub type Result<T> = std::result::Result<T, PrimitivesError>;

/// Main error type for the primitives crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitivesError {
    /// Errors from hex decoding
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),

    /// Errors from address handling
    #[error(transparent)]
    Address(#[from] crate::address::AddressError),
}

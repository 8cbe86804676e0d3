//! scrypt parameter validation and key derivation
//!
//! The memory-hard mixing itself is delegated to the `scrypt` crate; the
//! value of this module is the parameter contract around it. Every parameter
//! is validated *before* the expensive derivation call, with a
//! distinguishable error per violation class, and a successful derivation
//! returns exactly `dk_len` bytes.
//!
//! A derivation with realistic parameters is CPU- and memory-bound by design
//! and may run for hundreds of milliseconds. There is no cancellation hook
//! here; callers needing timeouts must run the call on a worker they can
//! abandon.

use scrypt::Params;
use thiserror::Error;

/// scrypt can address at most `32 * (2^32 - 1)` output bytes.
const MAX_OUTPUT_LENGTH: u64 = 32 * (u32::MAX as u64);

/// RFC 7914 requires `r * p < 2^30`.
const MAX_BLOCK_COUNT: u64 = 1 << 30;

/// Errors from scrypt parameter validation and derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KdfError {
    /// The derived key length is zero or above the addressable maximum.
    #[error("derived key length {0} is outside the addressable range")]
    OutputLength(usize),

    /// Block size or parallelism is zero, or their product exceeds the
    /// block-count ceiling.
    #[error("block size r={r} and parallelism p={p} are outside the block-count ceiling")]
    BlockCount {
        /// Block size parameter.
        r: u32,
        /// Parallelism parameter.
        p: u32,
    },

    /// The cost factor is not a power of two greater than one.
    #[error("cost factor {0} is not a power of two greater than one")]
    CostFactor(u64),

    /// The salt was empty.
    #[error("salt must not be empty")]
    EmptySalt,

    /// The backend rejected parameters that passed validation. This is a
    /// logic-error class and should never occur for valid input.
    #[error("scrypt backend rejected the derivation")]
    Backend,
}

/// Validated scrypt parameters.
///
/// Construction via [`ScryptParams::new`] is the only way to obtain a value,
/// so a `ScryptParams` in hand always satisfies the parameter contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScryptParams {
    n: u64,
    r: u32,
    p: u32,
    dk_len: usize,
}

impl ScryptParams {
    /// Standard cost factor for at-rest keystore encryption (2^18).
    pub const STANDARD_N: u64 = 262_144;

    /// Light cost factor for interactive use (2^12).
    pub const LIGHT_N: u64 = 4_096;

    /// Conventional block size.
    pub const DEFAULT_R: u32 = 8;

    /// Conventional parallelism.
    pub const DEFAULT_P: u32 = 1;

    /// Validates and constructs scrypt parameters.
    pub fn new(n: u64, r: u32, p: u32, dk_len: usize) -> Result<Self, KdfError> {
        if dk_len == 0 || dk_len as u64 > MAX_OUTPUT_LENGTH {
            return Err(KdfError::OutputLength(dk_len));
        }
        if r == 0 || p == 0 || u64::from(r) * u64::from(p) >= MAX_BLOCK_COUNT {
            return Err(KdfError::BlockCount { r, p });
        }
        if n < 2 || !n.is_power_of_two() {
            return Err(KdfError::CostFactor(n));
        }
        Ok(Self { n, r, p, dk_len })
    }

    /// Standard parameters with the given output length.
    pub fn standard(dk_len: usize) -> Result<Self, KdfError> {
        Self::new(Self::STANDARD_N, Self::DEFAULT_R, Self::DEFAULT_P, dk_len)
    }

    /// Light parameters with the given output length.
    pub fn light(dk_len: usize) -> Result<Self, KdfError> {
        Self::new(Self::LIGHT_N, Self::DEFAULT_R, Self::DEFAULT_P, dk_len)
    }

    /// Cost factor N.
    pub const fn n(&self) -> u64 {
        self.n
    }

    /// Block size r.
    pub const fn r(&self) -> u32 {
        self.r
    }

    /// Parallelism p.
    pub const fn p(&self) -> u32 {
        self.p
    }

    /// Derived key length in bytes.
    pub const fn dk_len(&self) -> usize {
        self.dk_len
    }

    // n is validated as a power of two, so this is exact
    fn log2_n(&self) -> u8 {
        self.n.trailing_zeros() as u8
    }

    /// Derives `dk_len` bytes from the password and salt.
    pub fn derive(&self, password: &[u8], salt: &[u8]) -> Result<Vec<u8>, KdfError> {
        if salt.is_empty() {
            return Err(KdfError::EmptySalt);
        }

        let params =
            Params::new(self.log2_n(), self.r, self.p, self.dk_len).map_err(|_| KdfError::Backend)?;

        let mut output = vec![0u8; self.dk_len];
        scrypt::scrypt(password, salt, &params, &mut output).map_err(|_| KdfError::Backend)?;
        Ok(output)
    }
}

/// Validates parameters and derives `dk_len` bytes in one call.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    dk_len: usize,
    n: u64,
    r: u32,
    p: u32,
) -> Result<Vec<u8>, KdfError> {
    ScryptParams::new(n, r, p, dk_len)?.derive(password, salt)
}

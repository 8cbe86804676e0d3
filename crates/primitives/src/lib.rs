//! Numeric and byte-level primitives for Ethereum-style wallet keystores
//!
//! This crate provides the deterministic building blocks a keystore layer is
//! assembled from: byte and hex-string utilities, the 20-byte
//! [`EthereumAddress`] type with EIP-55 checksum encoding and validation, and
//! an arbitrary-precision fixed-point formatter for token amounts.
//!
//! Everything here is a pure, stateless transformation over immutable inputs;
//! there is no I/O, no global state and no internal synchronization, so every
//! operation is safely callable from multiple threads. Elliptic-curve
//! operations and key derivation live in the companion `tresor-crypto` crate.
//!
//! ## Key Components
//!
//! - **Byte utilities**: hex codec, padding, bit extraction, constant-time
//!   comparison ([`bytes`])
//! - **Addresses**: derivation from raw public keys, checksum encoding and
//!   checksum-aware parsing ([`EthereumAddress`])
//! - **Amount formatting**: wei-denominated integers rendered at a chosen
//!   unit scale and precision ([`format_to_precision`], [`Units`])
//!
//! ## Usage Examples
//!
//! ```
//! use num_bigint::BigInt;
//! use tresor_primitives::{format_to_precision, format_units, Units};
//!
//! let balance = BigInt::from(-1_100_000_000_000_000_000i64);
//! assert_eq!(format_units(&balance, Units::Eth), "-1.1000");
//! assert_eq!(format_to_precision(&balance, 18, 2, ",", false), "-1,10");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod address;
pub mod bytes;
pub mod error;
pub mod format;
pub mod units;

pub use address::{ADDRESS_LENGTH, AddressError, EthereumAddress, RAW_PUBLIC_KEY_LENGTH};
pub use error::{PrimitivesError, Result};
pub use format::{format_to_precision, format_to_precision_unsigned, format_units};
pub use units::Units;

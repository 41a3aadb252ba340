//! Codec core for EIP-681 payment request URIs.
//!
//! This crate turns a human-facing amount and a merchant address into a
//! deterministic payment request identifier, and back again. Two independent
//! parties (a payment UI producing the identifier, a wallet consuming it)
//! agree on a transfer instruction with no shared backend: the instruction is
//! the identifier itself.
//!
//! Everything here is synchronous, allocation-light, and pure: no I/O, no
//! shared mutable state, safe to call from any number of threads. The only
//! shared data is the compile-time [`networks`] registry.
//!
//! # Modules
//!
//! - [`address`] - EIP-55 checksummed addresses and format validation
//! - [`units`] - decimal to base-unit conversion at 0-18 digits of precision
//! - [`uri`] - the identifier codec: encode and decode of transfer requests
//! - [`validate`] - pre-codec validation with aggregated errors and advisories
//! - [`networks`] - registry of known networks and token deployments
//! - [`error`] - the error taxonomy shared by all of the above
//!
//! # Example
//!
//! ```
//! use eip681_types::{to_base_units, uri};
//!
//! let units = to_base_units("1.5", 18).unwrap();
//! let request = uri::encode(
//!     "0xe7c3d8c9a439fede00d2600032d5db0be71c3c29",
//!     "0x1234567890123456789012345678901234567890",
//!     &units,
//!     137,
//! )
//! .unwrap();
//! let decoded = uri::decode(&request).unwrap();
//! assert_eq!(decoded.chain_id, 137);
//! assert_eq!(decoded.amount, "1500000000000000000");
//! ```

pub mod address;
pub mod error;
pub mod networks;
pub mod units;
pub mod uri;
pub mod validate;

pub use address::{ChecksummedAddress, is_checksum_valid, is_format_valid};
pub use error::{Error, Result};
pub use networks::{DEFAULT_NETWORK, KNOWN_NETWORKS, TokenDeployment, deployment_for};
pub use units::{DEFAULT_DECIMALS, MAX_DECIMALS, from_base_units, to_base_units};
pub use uri::{TransferRequest, decode, encode};
pub use validate::{Advisory, PaymentOptions, Validation, validate};

//! EIP-681 payment requests in Rust.
//!
//! This crate builds deterministic payment request identifiers - EIP-681
//! URIs invoking ERC-20 `transfer` - from high-level options, decodes them
//! back into their fields, and renders them as scannable QR codes. The codec
//! core (checksummed addresses, base-unit conversion, the URI codec, and
//! validation) lives in [`eip681_types`] and is re-exported here.
//!
//! # Modules
//!
//! - [`request`] - high-level [`PaymentRequest`] assembly from options
//! - [`qr`] - QR rendering of a completed identifier (PNG, SVG, text art)
//!
//! # Example
//!
//! ```
//! use eip681_rs::PaymentRequest;
//!
//! let request = PaymentRequest::builder("0x1234567890123456789012345678901234567890")
//!     .amount("1.5")
//!     .network("polygon")
//!     .build()
//!     .unwrap();
//! assert!(request.uri.starts_with("ethereum:"));
//! assert_eq!(request.chain_id, 137);
//! ```

pub mod qr;
pub mod request;

pub use eip681_types::{
    Advisory, ChecksummedAddress, DEFAULT_DECIMALS, DEFAULT_NETWORK, Error, KNOWN_NETWORKS,
    MAX_DECIMALS, PaymentOptions, Result, TokenDeployment, TransferRequest, Validation, address,
    decode, deployment_for, encode, error, from_base_units, is_checksum_valid, is_format_valid,
    networks, to_base_units, units, uri, validate,
};
pub use request::{PaymentRequest, PaymentRequestBuilder};

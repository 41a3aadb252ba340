//! EIP-55 checksummed address handling.
//!
//! An address is 20 bytes, written as `0x` plus 40 hex digits. The checksummed
//! rendering derives its letter casing from the Keccak-256 hash of the
//! lower-cased hex digits (EIP-55): digit `i` is upper-cased when hex digit
//! `i` of the hash is `8` or above. The casing is a pure function of the 40
//! hex digits, so any case-variant of the same address checksums identically.
//!
//! # Example
//!
//! ```
//! use eip681_types::address::ChecksummedAddress;
//!
//! let addr: ChecksummedAddress = "0xe7c3d8c9a439fede00d2600032d5db0be71c3c29".parse().unwrap();
//! assert_eq!(addr.to_string(), "0xE7C3D8C9a439feDe00D2600032D5dB0Be71C3c29");
//! ```

use alloy_primitives::Address;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

/// A 20-byte address that renders with EIP-55 checksum encoding.
///
/// Parsing accepts any letter casing; [`Display`] and [`Serialize`] always
/// produce the checksummed form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChecksummedAddress(pub Address);

impl ChecksummedAddress {
    /// Returns the underlying raw address.
    pub fn inner(&self) -> Address {
        self.0
    }
}

/// Returns `true` when `value` is `0x` followed by exactly 40 hex digits.
///
/// Purely syntactic; no hashing. Letter casing is irrelevant here.
pub fn is_format_valid(value: &str) -> bool {
    match value.strip_prefix("0x") {
        Some(digits) => digits.len() == 40 && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Returns `true` when `value` already carries its own EIP-55 casing.
///
/// Recomputes the checksummed rendering and compares byte-for-byte. Any
/// failure along the way, including a format failure, yields `false`.
pub fn is_checksum_valid(value: &str) -> bool {
    match value.parse::<ChecksummedAddress>() {
        Ok(parsed) => parsed.to_string() == value,
        Err(_) => false,
    }
}

impl FromStr for ChecksummedAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_format_valid(s) {
            return Err(Error::InvalidAddress {
                value: s.to_string(),
            });
        }
        // Format is already established, so a parse failure here is an
        // engine-internal fault rather than bad input.
        let address = Address::from_str(s).map_err(|e| Error::ChecksumFailed(e.to_string()))?;
        Ok(Self(address))
    }
}

impl Display for ChecksummedAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_checksum(None))
    }
}

impl Serialize for ChecksummedAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_checksum(None))
    }
}

impl<'de> Deserialize<'de> for ChecksummedAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl From<Address> for ChecksummedAddress {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl From<ChecksummedAddress> for Address {
    fn from(value: ChecksummedAddress) -> Self {
        value.0
    }
}

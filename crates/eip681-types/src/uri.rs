//! Encoding and decoding of ERC-20 transfer request URIs.
//!
//! The identifier is an EIP-681 payment request invoking `transfer` on a
//! token contract:
//!
//! ```text
//! ethereum:<token>@<chain_id>/transfer?address=<recipient>&uint256=<amount>
//! ```
//!
//! Encoding checksums both addresses and emits the string exactly, with no
//! whitespace and the amount passed through literally. Decoding is a pure
//! structural parse: it preserves whatever casing the source string used,
//! performs no checksum verification, and tolerates unknown query parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::address::ChecksummedAddress;
use crate::error::{Error, Result};

/// URI scheme of a payment request.
pub const SCHEME: &str = "ethereum";

/// Contract function a payment request invokes.
pub const TRANSFER_FUNCTION: &str = "transfer";

/// The six fields of a decoded payment request URI.
///
/// Addresses are kept exactly as written in the source string; callers that
/// intend to act on them re-validate via [`ChecksummedAddress`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// URI scheme token.
    pub scheme: String,
    /// Token contract address, source casing preserved.
    pub token: String,
    /// Numeric EIP-155 chain id.
    pub chain_id: u64,
    /// Contract function name.
    pub function: String,
    /// Recipient address, source casing preserved.
    pub recipient: String,
    /// Base-unit amount as a literal decimal-digit string.
    pub amount: String,
}

/// Encodes a payment request URI from its constituent fields.
///
/// Both addresses pass through the checksum engine; an
/// [`Error::InvalidAddress`] from either propagates with its kind intact.
/// The amount string is embedded literally.
pub fn encode(token: &str, recipient: &str, amount: &str, chain_id: u64) -> Result<String> {
    let token: ChecksummedAddress = token.parse()?;
    let recipient: ChecksummedAddress = recipient.parse()?;
    Ok(format!(
        "{SCHEME}:{token}@{chain_id}/{TRANSFER_FUNCTION}?address={recipient}&uint256={amount}"
    ))
}

fn malformed(input: &str, reason: impl Into<String>) -> Error {
    Error::EncodingFailed {
        input: input.to_string(),
        reason: reason.into(),
    }
}

/// Decodes a payment request URI into its six fields.
///
/// Every field is mandatory; a missing or empty one fails with
/// [`Error::EncodingFailed`] carrying the original string and the cause.
/// Unknown query parameters are ignored.
pub fn decode(input: &str) -> Result<TransferRequest> {
    let (scheme, rest) = input
        .split_once(':')
        .ok_or_else(|| malformed(input, "missing scheme separator"))?;
    if scheme.is_empty() {
        return Err(malformed(input, "missing scheme"));
    }

    let (token, rest) = rest
        .split_once('@')
        .ok_or_else(|| malformed(input, "missing target chain separator"))?;
    if token.is_empty() {
        return Err(malformed(input, "missing token address"));
    }

    let (chain, rest) = rest
        .split_once('/')
        .ok_or_else(|| malformed(input, "missing function path"))?;
    let chain_id = chain
        .parse::<u64>()
        .map_err(|_| malformed(input, format!("chain id is not a number: {chain:?}")))?;

    let (function, query) = rest
        .split_once('?')
        .ok_or_else(|| malformed(input, "missing query string"))?;
    if function.is_empty() {
        return Err(malformed(input, "missing function name"));
    }

    let mut recipient = None;
    let mut amount = None;
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "address" if !value.is_empty() => recipient = Some(value.to_string()),
            "uint256" if !value.is_empty() => amount = Some(value.to_string()),
            _ => {}
        }
    }
    let recipient = recipient.ok_or_else(|| malformed(input, "missing address parameter"))?;
    let amount = amount.ok_or_else(|| malformed(input, "missing uint256 parameter"))?;

    Ok(TransferRequest {
        scheme: scheme.to_string(),
        token: token.to_string(),
        chain_id,
        function: function.to_string(),
        recipient,
        amount,
    })
}

impl FromStr for TransferRequest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

impl fmt::Display for TransferRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}@{}/{}?address={}&uint256={}",
            self.scheme, self.token, self.chain_id, self.function, self.recipient, self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN: &str = "0xe7c3d8c9a439fede00d2600032d5db0be71c3c29";
    const TOKEN_CHECKSUMMED: &str = "0xE7C3D8C9a439feDe00D2600032D5dB0Be71C3c29";
    const RECIPIENT: &str = "0x1234567890123456789012345678901234567890";

    #[test]
    fn encodes_known_request_exactly() {
        let uri = encode(TOKEN, RECIPIENT, "1000000000000000000", 137).unwrap();
        assert_eq!(
            uri,
            "ethereum:0xE7C3D8C9a439feDe00D2600032D5dB0Be71C3c29@137/transfer\
             ?address=0x1234567890123456789012345678901234567890\
             &uint256=1000000000000000000"
        );
    }

    #[test]
    fn encode_checksums_both_addresses() {
        let uri = encode(&TOKEN.to_uppercase().replace("0X", "0x"), RECIPIENT, "1", 1).unwrap();
        assert!(uri.contains(TOKEN_CHECKSUMMED));
    }

    #[test]
    fn encode_propagates_address_errors_unwrapped() {
        let err = encode("0xnope", RECIPIENT, "1", 1).unwrap_err();
        assert!(matches!(err, Error::InvalidAddress { .. }));
        let err = encode(TOKEN, "garbage", "1", 1).unwrap_err();
        assert!(matches!(err, Error::InvalidAddress { .. }));
    }

    #[test]
    fn decode_recovers_every_field() {
        let uri = encode(TOKEN, RECIPIENT, "1000000000000000000", 137).unwrap();
        let decoded = decode(&uri).unwrap();
        assert_eq!(decoded.scheme, "ethereum");
        assert_eq!(decoded.token, TOKEN_CHECKSUMMED);
        assert_eq!(decoded.chain_id, 137);
        assert_eq!(decoded.function, "transfer");
        assert_eq!(decoded.recipient, RECIPIENT);
        assert_eq!(decoded.amount, "1000000000000000000");
    }

    #[test]
    fn decode_preserves_source_casing() {
        let uri = format!("ethereum:{TOKEN}@1/transfer?address={RECIPIENT}&uint256=5");
        let decoded = decode(&uri).unwrap();
        // No checksum is applied on the way out.
        assert_eq!(decoded.token, TOKEN);
    }

    #[test]
    fn decode_ignores_unknown_query_parameters() {
        let uri = format!(
            "ethereum:{TOKEN}@137/transfer?gas=21000&address={RECIPIENT}&label=shop&uint256=7"
        );
        let decoded = decode(&uri).unwrap();
        assert_eq!(decoded.recipient, RECIPIENT);
        assert_eq!(decoded.amount, "7");
    }

    #[test]
    fn decode_requires_every_field() {
        let cases = [
            ("", "no scheme separator"),
            ("ethereum", "no scheme separator"),
            (":0xabc@1/transfer?address=0x1&uint256=1", "empty scheme"),
            ("ethereum:@1/transfer?address=0x1&uint256=1", "empty token"),
            ("ethereum:0xabc/transfer?address=0x1&uint256=1", "no chain"),
            ("ethereum:0xabc@x/transfer?address=0x1&uint256=1", "bad chain"),
            ("ethereum:0xabc@1transfer?address=0x1&uint256=1", "no path"),
            ("ethereum:0xabc@1/?address=0x1&uint256=1", "empty function"),
            ("ethereum:0xabc@1/transfer", "no query"),
            ("ethereum:0xabc@1/transfer?uint256=1", "no address"),
            ("ethereum:0xabc@1/transfer?address=0x1", "no uint256"),
            ("ethereum:0xabc@1/transfer?address=&uint256=1", "empty address"),
            ("ethereum:0xabc@1/transfer?address=0x1&uint256=", "empty amount"),
        ];
        for (uri, what) in cases {
            let err = decode(uri).unwrap_err();
            assert!(
                matches!(err, Error::EncodingFailed { .. }),
                "expected EncodingFailed ({what}) for {uri:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn decode_error_carries_the_original_string() {
        let err = decode("ethereum:0xabc@1/transfer").unwrap_err();
        match err {
            Error::EncodingFailed { input, reason } => {
                assert_eq!(input, "ethereum:0xabc@1/transfer");
                assert!(!reason.is_empty());
            }
            other => panic!("expected EncodingFailed, got {other:?}"),
        }
    }

    #[test]
    fn transfer_request_from_str_and_display() {
        let uri = encode(TOKEN, RECIPIENT, "42", 1).unwrap();
        let decoded: TransferRequest = uri.parse().unwrap();
        assert_eq!(decoded.to_string(), uri);
    }
}

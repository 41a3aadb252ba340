//! Pre-flight validation of payment request options.
//!
//! Validation runs before any codec call and never inside one. A single pass
//! collects every blocking defect (the caller sees the complete set in one
//! round trip) together with non-blocking advisories that do not prevent
//! identifier generation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

use crate::address;
use crate::error::{Error, Result};
use crate::networks;
use crate::units::{DEFAULT_DECIMALS, MAX_DECIMALS};

mod bounds {
    use super::*;

    /// Highest human-unit amount a request may carry.
    pub const MAX_STR: &str = "1000000000000000";
    /// Above this the amount is flagged as unusually large.
    pub const LARGE_STR: &str = "1000000";

    pub static MAX: LazyLock<Decimal> =
        LazyLock::new(|| Decimal::from_str(MAX_STR).expect("valid decimal"));
    pub static LARGE: LazyLock<Decimal> =
        LazyLock::new(|| Decimal::from_str(LARGE_STR).expect("valid decimal"));
}

/// High-level inputs for building a payment request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentOptions {
    /// Recipient of the transfer.
    pub recipient: String,
    /// Human-unit amount, as entered.
    pub amount: String,
    /// Known network name; the default network applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Token contract overriding the network's canonical deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Token precision override; only meaningful with a custom token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
}

/// Non-blocking validation finding.
///
/// Advisories accompany a passing verdict; they flag requests that are legal
/// but unusual enough that a UI should surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Advisory {
    /// Amount is below one token unit.
    SmallAmount,
    /// Amount is above one million token units.
    LargeAmount,
    /// A custom token contract overrides the network deployment.
    CustomContract,
    /// Token precision differs from the canonical 18.
    CustomDecimals,
}

impl Advisory {
    /// Stable machine-readable code for this advisory.
    pub fn code(&self) -> &'static str {
        match self {
            Advisory::SmallAmount => "SMALL_AMOUNT",
            Advisory::LargeAmount => "LARGE_AMOUNT",
            Advisory::CustomContract => "CUSTOM_CONTRACT",
            Advisory::CustomDecimals => "CUSTOM_DECIMALS",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Advisory::SmallAmount => "amount is below one token unit",
            Advisory::LargeAmount => "amount is unusually large",
            Advisory::CustomContract => "custom token contract overrides the network deployment",
            Advisory::CustomDecimals => "token precision differs from the canonical 18",
        };
        write!(f, "{message}")
    }
}

/// Outcome of one validation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validation {
    /// Blocking messages, in the order they were found. Empty iff the
    /// verdict is a pass.
    pub errors: Vec<String>,
    /// Non-blocking advisories; may be non-empty even on a pass.
    pub advisories: Vec<Advisory>,
}

impl Validation {
    /// Whether the options passed with no blocking defect.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts the outcome into a `Result`, aggregating every blocking
    /// message into a single [`Error::ValidationFailed`].
    pub fn into_result(self) -> Result<Vec<Advisory>> {
        if self.errors.is_empty() {
            Ok(self.advisories)
        } else {
            Err(Error::ValidationFailed {
                errors: self.errors,
            })
        }
    }
}

/// Checks payment options ahead of encoding.
///
/// Does not stop at the first defect: every blocking error found in the pass
/// is reported. The amount thresholds are fixed human-unit bounds and are
/// never scaled by the token precision.
pub fn validate(options: &PaymentOptions) -> Validation {
    let mut outcome = Validation::default();

    let recipient = options.recipient.trim();
    if recipient.is_empty() {
        outcome.errors.push("recipient address is required".to_string());
    } else if !address::is_format_valid(recipient) {
        outcome
            .errors
            .push(format!("recipient is not a valid address: {recipient}"));
    }

    let amount = options.amount.trim();
    if amount.is_empty() {
        outcome.errors.push("amount is required".to_string());
    } else {
        match Decimal::from_str(amount) {
            Err(_) => outcome
                .errors
                .push(format!("amount is not a number: {amount}")),
            Ok(value) => {
                if value <= Decimal::ZERO {
                    outcome
                        .errors
                        .push(format!("amount must be positive: {amount}"));
                } else if value > *bounds::MAX {
                    outcome.errors.push(format!(
                        "amount exceeds the maximum of {}: {amount}",
                        bounds::MAX_STR
                    ));
                } else if value < Decimal::ONE {
                    outcome.advisories.push(Advisory::SmallAmount);
                } else if value > *bounds::LARGE {
                    outcome.advisories.push(Advisory::LargeAmount);
                }
            }
        }
    }

    if let Some(network) = options.network.as_deref() {
        if networks::deployment_for(network).is_none() {
            outcome.errors.push(format!("unknown network: {network}"));
        }
    }

    match options.token.as_deref() {
        Some(token) if !address::is_format_valid(token) => {
            outcome
                .errors
                .push(format!("token contract is not a valid address: {token}"));
        }
        Some(_) => outcome.advisories.push(Advisory::CustomContract),
        None => {}
    }

    if let Some(decimals) = options.decimals {
        if options.token.is_none() {
            // Reinterpreting the canonical token's fixed precision would
            // silently change the transferred value.
            outcome
                .errors
                .push("decimals override requires a custom token contract".to_string());
        } else if decimals > MAX_DECIMALS {
            outcome.errors.push(format!(
                "decimals out of range: {decimals} (maximum {MAX_DECIMALS})"
            ));
        } else if decimals != DEFAULT_DECIMALS {
            outcome.advisories.push(Advisory::CustomDecimals);
        }
    }

    if !outcome.is_ok() {
        debug!(
            errors = outcome.errors.len(),
            advisories = outcome.advisories.len(),
            "payment options rejected"
        );
    }
    outcome
}

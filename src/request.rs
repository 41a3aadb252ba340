//! High-level assembly of payment requests.
//!
//! The builder is a thin consumer of the codec core: it validates the
//! options, resolves the network and token deployment, converts the amount
//! to base units, and encodes the identifier. All heavy lifting lives in
//! [`eip681_types`].

use serde::Serialize;
use tracing::debug;

use eip681_types::{
    Advisory, ChecksummedAddress, Error, PaymentOptions, Result, networks, to_base_units, uri,
    validate,
};

/// A fully assembled payment request.
///
/// Constructed once from validated inputs and never mutated. The `uri` field
/// is the complete identifier; the remaining fields expose the resolved
/// values that went into it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequest {
    /// The payment request identifier.
    pub uri: String,
    /// Resolved network name.
    pub network: String,
    /// Numeric EIP-155 chain id of the resolved network.
    pub chain_id: u64,
    /// Token contract, checksummed.
    pub token: String,
    /// Recipient address, checksummed.
    pub recipient: String,
    /// Human-unit amount as given (trimmed).
    pub amount: String,
    /// Amount in token base units.
    pub amount_base_units: String,
    /// Token precision the conversion used.
    pub decimals: u8,
    /// Non-blocking findings from validation.
    pub advisories: Vec<Advisory>,
}

impl PaymentRequest {
    /// Validates `options` and assembles the payment request.
    ///
    /// Blocking validation defects come back as a single
    /// [`Error::ValidationFailed`] aggregating every message; advisories are
    /// attached to the successful result.
    pub fn build(options: &PaymentOptions) -> Result<Self> {
        let advisories = validate::validate(options).into_result()?;

        let network = options
            .network
            .as_deref()
            .unwrap_or(networks::DEFAULT_NETWORK);
        let deployment = networks::deployment_for(network)
            .ok_or_else(|| Error::InvalidNetwork(network.to_string()))?;

        let decimals = options.decimals.unwrap_or(deployment.decimals);
        let token = match options.token.as_deref() {
            Some(custom) => custom.parse::<ChecksummedAddress>()?,
            None => ChecksummedAddress::from(deployment.token),
        };
        let recipient: ChecksummedAddress = options.recipient.trim().parse()?;

        let amount = options.amount.trim();
        let amount_base_units = to_base_units(amount, decimals)?;
        let uri = uri::encode(
            &token.to_string(),
            &recipient.to_string(),
            &amount_base_units,
            deployment.chain_id,
        )?;

        debug!(
            %uri,
            network,
            chain_id = deployment.chain_id,
            decimals,
            advisories = advisories.len(),
            "payment request assembled"
        );

        Ok(Self {
            uri,
            network: network.to_string(),
            chain_id: deployment.chain_id,
            token: token.to_string(),
            recipient: recipient.to_string(),
            amount: amount.to_string(),
            amount_base_units,
            decimals,
            advisories,
        })
    }

    /// Starts a builder for a request to `recipient`.
    pub fn builder(recipient: impl Into<String>) -> PaymentRequestBuilder {
        PaymentRequestBuilder::new(recipient)
    }
}

/// Fluent construction of [`PaymentOptions`] plus the final build step.
#[derive(Debug, Clone, Default)]
pub struct PaymentRequestBuilder {
    options: PaymentOptions,
}

impl PaymentRequestBuilder {
    /// Creates a builder for a request to `recipient`.
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            options: PaymentOptions {
                recipient: recipient.into(),
                ..PaymentOptions::default()
            },
        }
    }

    /// Sets the human-unit amount. Accepts anything number-like: `"1.5"`,
    /// `1.5f64`, `100u64` - numbers are normalized through their decimal
    /// rendering.
    pub fn amount(mut self, amount: impl ToString) -> Self {
        self.options.amount = amount.to_string();
        self
    }

    /// Selects a known network by name. Defaults to
    /// [`networks::DEFAULT_NETWORK`] when never called.
    pub fn network(mut self, network: impl Into<String>) -> Self {
        self.options.network = Some(network.into());
        self
    }

    /// Overrides the token contract for the selected network.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.options.token = Some(token.into());
        self
    }

    /// Overrides the token precision. Only valid together with
    /// [`token`](Self::token).
    pub fn decimals(mut self, decimals: u8) -> Self {
        self.options.decimals = Some(decimals);
        self
    }

    /// Returns the accumulated options without building.
    pub fn into_options(self) -> PaymentOptions {
        self.options
    }

    /// Validates and assembles the payment request.
    pub fn build(self) -> Result<PaymentRequest> {
        PaymentRequest::build(&self.options)
    }
}

//! Registry of known networks and their canonical token deployment.
//!
//! Each entry pairs a human-readable network name with the numeric EIP-155
//! chain id and the DAI stablecoin contract deployed on that chain. DAI keeps
//! the canonical 18-decimal ERC-20 precision on every listed network, which is
//! why the registry's default precision and [`DEFAULT_DECIMALS`] agree.
//!
//! The registry is fixed at compile time and read-only; it is consumed by the
//! validator and the request builder, never by the codec itself.

use std::collections::HashMap;
use std::sync::LazyLock;

use alloy_primitives::{Address, address};

use crate::units::DEFAULT_DECIMALS;

/// A token contract deployment on a known network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDeployment {
    /// Human-readable network name (e.g. `"polygon"`).
    pub network: &'static str,
    /// Numeric EIP-155 chain id.
    pub chain_id: u64,
    /// The token contract address on this chain.
    pub token: Address,
    /// Token precision in fractional digits.
    pub decimals: u8,
}

/// Network used when the caller does not pick one.
pub const DEFAULT_NETWORK: &str = "polygon";

/// Every network this crate knows about.
pub static KNOWN_NETWORKS: &[TokenDeployment] = &[
    TokenDeployment {
        network: "ethereum",
        chain_id: 1,
        token: address!("0x6b175474e89094c44da98b954eedeac495271d0f"),
        decimals: DEFAULT_DECIMALS,
    },
    TokenDeployment {
        network: "polygon",
        chain_id: 137,
        token: address!("0x8f3cf7ad23cd3cadbd9735aff958023239c6a063"),
        decimals: DEFAULT_DECIMALS,
    },
    TokenDeployment {
        network: "avalanche",
        chain_id: 43114,
        token: address!("0xd586e7f844cea2f87f50152665bcbc2c279d8d70"),
        decimals: DEFAULT_DECIMALS,
    },
];

static NAME_TO_DEPLOYMENT: LazyLock<HashMap<&'static str, &'static TokenDeployment>> =
    LazyLock::new(|| KNOWN_NETWORKS.iter().map(|d| (d.network, d)).collect());

static CHAIN_ID_TO_NAME: LazyLock<HashMap<u64, &'static str>> =
    LazyLock::new(|| KNOWN_NETWORKS.iter().map(|d| (d.chain_id, d.network)).collect());

/// Looks up the deployment for a network name. Case-sensitive.
pub fn deployment_for(network: &str) -> Option<&'static TokenDeployment> {
    NAME_TO_DEPLOYMENT.get(network).copied()
}

/// Reverse lookup: the network name for a numeric chain id, if known.
pub fn network_for_chain(chain_id: u64) -> Option<&'static str> {
    CHAIN_ID_TO_NAME.get(&chain_id).copied()
}

/// Names of all known networks, in registry order.
pub fn known_network_names() -> impl Iterator<Item = &'static str> {
    KNOWN_NETWORKS.iter().map(|d| d.network)
}

//! Ethereum network constants.
//!
//! Contains chain IDs, the known public network table and default RPC endpoints.

// ============================================================================
// Chain IDs
// ============================================================================

/// Ethereum Mainnet chain ID.
pub const ETHEREUM_MAINNET_CHAIN_ID: u64 = 1;

/// Sepolia testnet chain ID.
pub const SEPOLIA_CHAIN_ID: u64 = 11155111;

/// Holesky testnet chain ID.
pub const HOLESKY_CHAIN_ID: u64 = 17000;

/// OP Mainnet chain ID.
pub const OPTIMISM_CHAIN_ID: u64 = 10;

/// Arbitrum One chain ID.
pub const ARBITRUM_CHAIN_ID: u64 = 42161;

/// Polygon PoS chain ID.
pub const POLYGON_CHAIN_ID: u64 = 137;

/// Base chain ID.
pub const BASE_CHAIN_ID: u64 = 8453;

/// Network used when neither `provider` nor `network` is given.
pub const DEFAULT_NETWORK: &str = "mainnet";

/// Name presented for chain ids missing from [`KNOWN_NETWORKS`].
pub const UNKNOWN_NETWORK_NAME: &str = "unknown";

// ============================================================================
// Known Networks
// ============================================================================

/// A public network the resolver can connect to by name or chain id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownNetwork {
    /// Chain ID.
    pub chain_id: u64,
    /// Canonical name.
    pub name: &'static str,
    /// Alternative names accepted on lookup.
    pub aliases: &'static [&'static str],
    /// Public JSON-RPC endpoint used for the default provider.
    pub default_rpc_url: &'static str,
}

/// Public networks recognized by name or chain id.
pub const KNOWN_NETWORKS: &[KnownNetwork] = &[
    KnownNetwork {
        chain_id: ETHEREUM_MAINNET_CHAIN_ID,
        name: "mainnet",
        aliases: &["homestead", "ethereum"],
        default_rpc_url: "https://ethereum-rpc.publicnode.com",
    },
    KnownNetwork {
        chain_id: SEPOLIA_CHAIN_ID,
        name: "sepolia",
        aliases: &[],
        default_rpc_url: "https://ethereum-sepolia-rpc.publicnode.com",
    },
    KnownNetwork {
        chain_id: HOLESKY_CHAIN_ID,
        name: "holesky",
        aliases: &[],
        default_rpc_url: "https://ethereum-holesky-rpc.publicnode.com",
    },
    KnownNetwork {
        chain_id: OPTIMISM_CHAIN_ID,
        name: "optimism",
        aliases: &["op"],
        default_rpc_url: "https://optimism-rpc.publicnode.com",
    },
    KnownNetwork {
        chain_id: ARBITRUM_CHAIN_ID,
        name: "arbitrum",
        aliases: &["arbitrum-one"],
        default_rpc_url: "https://arbitrum-one-rpc.publicnode.com",
    },
    KnownNetwork {
        chain_id: POLYGON_CHAIN_ID,
        name: "polygon",
        aliases: &["matic"],
        default_rpc_url: "https://polygon-bor-rpc.publicnode.com",
    },
    KnownNetwork {
        chain_id: BASE_CHAIN_ID,
        name: "base",
        aliases: &[],
        default_rpc_url: "https://base-rpc.publicnode.com",
    },
];

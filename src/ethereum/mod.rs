//! Ethereum interaction module.
//!
//! Contains network constants, provider resolution, wallet management and
//! ABI binding.

pub mod abi;
pub mod constants;
pub mod network;
pub mod provider;
pub mod wallet;

pub use abi::{bind_method, method_name, AbiSource, BoundMethod};
pub use constants::KnownNetwork;
pub use network::{lookup_network, network_by_chain_id};
pub use provider::{
    parse_rpc_url, resolve_provider, ProviderSelector, ProviderSource, ResolvedProvider, SignerKind,
};
pub use wallet::WalletManager;

//! Common utilities for integration tests.

#![allow(dead_code)]

use alloy::{
    network::Ethereum,
    providers::{DynProvider, Provider, ProviderBuilder},
    transports::mock::Asserter,
};
use eth_dispatch::{CallOptions, Config, ResolvedProvider};

/// Well-known Hardhat/Foundry development key. DO NOT use in production!
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Address of `TEST_PRIVATE_KEY`.
pub const TEST_ACCOUNT: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// USDC contract on mainnet.
pub const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

/// Provider answering from a queue of canned JSON-RPC responses.
pub fn mocked_provider() -> (DynProvider, Asserter) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::<_, _, Ethereum>::default()
        .connect_mocked_client(asserter.clone())
        .erased();
    (provider, asserter)
}

/// Options that reuse a mocked provider instead of resolving one.
pub fn mocked_options() -> (CallOptions, Asserter) {
    let (provider, asserter) = mocked_provider();
    let options =
        CallOptions::new().with_resolved_provider(ResolvedProvider::from_provider(provider));
    (options, asserter)
}

/// Live configuration, if `ETHEREUM_RPC_URL` is set.
pub fn live_config() -> Option<Config> {
    let config = Config::from_env().ok()?;
    config.rpc_url.as_ref()?;
    Some(config)
}

/// Skip test if no live RPC endpoint is configured.
#[macro_export]
macro_rules! skip_if_no_rpc {
    () => {
        match common::live_config() {
            Some(config) => config,
            None => {
                eprintln!("Skipping test: ETHEREUM_RPC_URL not set");
                return;
            }
        }
    };
}

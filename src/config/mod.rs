//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::env;

use zeroize::Zeroizing;

use alloy::transports::http::reqwest::Url;

use crate::{
    error::AppError,
    ethereum::{constants::DEFAULT_NETWORK, parse_rpc_url},
    types::CallOptions,
};

/// Environment-derived defaults for calls made by an application.
#[derive(Clone)]
pub struct Config {
    /// Named network used when no RPC URL is configured.
    pub network: String,
    /// Ethereum JSON-RPC endpoint URL. Takes precedence over `network`.
    pub rpc_url: Option<Url>,
    /// Private key for a local wallet (hex string, 0x prefix optional).
    pub private_key: Option<Zeroizing<String>>,
    /// Mnemonic phrase for a local wallet, used when no private key is set.
    pub mnemonic: Option<Zeroizing<String>>,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ETHEREUM_NETWORK`: Named network (default: mainnet)
    /// - `ETHEREUM_RPC_URL`: Ethereum JSON-RPC endpoint
    /// - `ETHEREUM_PRIVATE_KEY`: Private key for signing (hex)
    /// - `ETHEREUM_MNEMONIC`: Mnemonic phrase for signing
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let network = non_empty_var("ETHEREUM_NETWORK").unwrap_or_else(|| DEFAULT_NETWORK.into());
        let rpc_url = non_empty_var("ETHEREUM_RPC_URL").map(|url| parse_rpc_url(&url)).transpose()?;
        let private_key = non_empty_var("ETHEREUM_PRIVATE_KEY").map(Zeroizing::new);
        let mnemonic = non_empty_var("ETHEREUM_MNEMONIC").map(Zeroizing::new);
        let log_level = non_empty_var("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self { network, rpc_url, private_key, mnemonic, log_level })
    }

    /// Option bag carrying this configuration's provider and signer settings.
    pub fn call_options(&self) -> CallOptions {
        let mut options = CallOptions::new().with_network(self.network.clone());

        if let Some(url) = &self.rpc_url {
            options = options.with_provider(url.to_string());
        }
        options.private_key = self.private_key.clone();
        options.mnemonic = self.mnemonic.clone();

        options
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("network", &self.network)
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("mnemonic", &self.mnemonic.as_ref().map(|_| "<redacted>"))
            .field("log_level", &self.log_level)
            .finish()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ethereum::{resolve_provider, ProviderSource, SignerKind};

    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn config() -> Config {
        Config {
            network: "sepolia".to_string(),
            rpc_url: None,
            private_key: None,
            mnemonic: None,
            log_level: "warn".to_string(),
        }
    }

    #[test]
    fn test_call_options_use_network() {
        let options = config().call_options();
        let resolved = resolve_provider(&options).unwrap();
        assert!(matches!(resolved.source(), ProviderSource::Network(n) if n.name == "sepolia"));
    }

    #[test]
    fn test_call_options_rpc_url_wins() {
        let config =
            Config { rpc_url: Some(parse_rpc_url("http://localhost:8545").unwrap()), ..config() };
        let resolved = resolve_provider(&config.call_options()).unwrap();
        assert!(matches!(resolved.source(), ProviderSource::JsonRpc(_)));
    }

    #[test]
    fn test_call_options_carry_private_key() {
        let config =
            Config { private_key: Some(Zeroizing::new(TEST_PRIVATE_KEY.to_string())), ..config() };
        let resolved = resolve_provider(&config.call_options()).unwrap();
        assert!(matches!(resolved.signer(), SignerKind::PrivateKey(_)));
    }

    #[test]
    fn test_rpc_url_requires_http_scheme() {
        assert!(matches!(parse_rpc_url("ws://localhost:8546"), Err(AppError::Config(_))));
        assert!(matches!(parse_rpc_url("localhost:8545"), Err(AppError::Config(_))));
        assert_eq!(parse_rpc_url(" https://rpc.example.org ").unwrap().scheme(), "https");
    }

    #[test]
    fn test_config_debug_redacts_secrets() {
        let config =
            Config { private_key: Some(Zeroizing::new(TEST_PRIVATE_KEY.to_string())), ..config() };
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("<redacted>"));
        assert!(!debug_str.contains("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"));
    }
}

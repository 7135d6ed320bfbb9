//! Provider resolution.
//!
//! Turns a loose [`CallOptions`] bag into a concrete, optionally signing
//! provider. Resolution is synchronous and makes no network calls; HTTP
//! connections are established lazily on first use.

use alloy::{
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};

use super::{
    constants::{KnownNetwork, DEFAULT_NETWORK},
    network::{lookup_network, network_by_chain_id},
    wallet::WalletManager,
};
use crate::{
    error::{AppError, Result},
    types::CallOptions,
};

/// What the caller asked to connect to.
#[derive(Clone)]
pub enum ProviderSelector {
    /// Known network name or alias, decimal chain id, or JSON-RPC URL.
    Named(String),
    /// Known network chain id.
    ChainId(u64),
    /// Caller-built provider whose node manages the signing accounts.
    Injected(DynProvider),
}

impl std::fmt::Debug for ProviderSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderSelector::Named(name) => f.debug_tuple("Named").field(name).finish(),
            ProviderSelector::ChainId(id) => f.debug_tuple("ChainId").field(id).finish(),
            ProviderSelector::Injected(_) => f.write_str("Injected"),
        }
    }
}

impl From<&str> for ProviderSelector {
    fn from(name: &str) -> Self {
        ProviderSelector::Named(name.to_string())
    }
}

impl From<String> for ProviderSelector {
    fn from(name: String) -> Self {
        ProviderSelector::Named(name)
    }
}

impl From<u64> for ProviderSelector {
    fn from(chain_id: u64) -> Self {
        ProviderSelector::ChainId(chain_id)
    }
}

impl From<DynProvider> for ProviderSelector {
    fn from(provider: DynProvider) -> Self {
        ProviderSelector::Injected(provider)
    }
}

/// Where the underlying provider came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderSource {
    /// Default read-only provider for a known public network.
    Network(&'static KnownNetwork),
    /// Caller-supplied provider.
    Injected,
    /// Direct JSON-RPC endpoint.
    JsonRpc(Url),
}

/// How transactions sent through the provider get signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignerKind {
    /// Read-only.
    None,
    /// Signed by the node behind a caller-supplied provider.
    Injected,
    /// Local wallet from a private key.
    PrivateKey(Address),
    /// Local wallet derived from a mnemonic.
    Mnemonic(Address),
}

/// A provider ready for dispatch, plus how it was built.
///
/// Cloning is cheap; a clone shares the same underlying client.
#[derive(Clone)]
pub struct ResolvedProvider {
    provider: DynProvider,
    source: ProviderSource,
    signer: SignerKind,
}

impl ResolvedProvider {
    /// Wrap a caller-built provider without resolution.
    pub fn from_provider(provider: DynProvider) -> Self {
        Self { provider, source: ProviderSource::Injected, signer: SignerKind::Injected }
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Where the provider came from.
    pub fn source(&self) -> &ProviderSource {
        &self.source
    }

    /// How transactions get signed.
    pub fn signer(&self) -> SignerKind {
        self.signer
    }

    /// Whether transactions can be authorized through this provider.
    pub fn is_signer(&self) -> bool {
        self.signer != SignerKind::None
    }

    /// Address of the local wallet, if any.
    pub fn signer_address(&self) -> Option<Address> {
        match self.signer {
            SignerKind::PrivateKey(address) | SignerKind::Mnemonic(address) => Some(address),
            SignerKind::None | SignerKind::Injected => None,
        }
    }

    /// Configured JSON-RPC endpoint, when known.
    pub fn connection_url(&self) -> Option<Url> {
        match &self.source {
            ProviderSource::Network(network) => network.default_rpc_url.parse().ok(),
            ProviderSource::JsonRpc(url) => Some(url.clone()),
            ProviderSource::Injected => None,
        }
    }

    /// Sender used for transactions that carry no explicit `from`.
    ///
    /// Node-signed providers use the node's first account.
    pub async fn default_sender(&self) -> Result<Option<Address>> {
        match self.signer {
            SignerKind::PrivateKey(address) | SignerKind::Mnemonic(address) => Ok(Some(address)),
            SignerKind::None => Ok(None),
            SignerKind::Injected => {
                let accounts = self.provider.get_accounts().await?;
                accounts
                    .first()
                    .copied()
                    .map(Some)
                    .ok_or_else(|| AppError::Wallet("Provider exposes no accounts".into()))
            }
        }
    }
}

impl std::fmt::Debug for ResolvedProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedProvider")
            .field("source", &self.source)
            .field("signer", &self.signer)
            .finish()
    }
}

/// Resolve the options into a provider.
///
/// Selector precedence: `provider`, then `network`, then `"mainnet"`. A
/// known network always wins over URL interpretation. `private_key` wins
/// over `mnemonic` for the signing wrapper.
pub fn resolve_provider(options: &CallOptions) -> Result<ResolvedProvider> {
    let selector = match (&options.provider, &options.network) {
        (Some(selector), _) => selector.clone(),
        (None, Some(network)) => ProviderSelector::Named(network.clone()),
        (None, None) => ProviderSelector::Named(DEFAULT_NETWORK.to_string()),
    };

    let base = match selector {
        ProviderSelector::ChainId(chain_id) => {
            let network = network_by_chain_id(chain_id)
                .ok_or_else(|| AppError::Config(format!("Unknown chain id: {}", chain_id)))?;
            network_provider(network)?
        }
        ProviderSelector::Named(name) => match lookup_network(&name) {
            Some(network) => network_provider(network)?,
            None => json_rpc_provider(&name)?,
        },
        ProviderSelector::Injected(provider) => {
            tracing::debug!("Using caller-supplied provider with node signer");
            ResolvedProvider::from_provider(provider)
        }
    };

    if let Some(private_key) = &options.private_key {
        let wallet = WalletManager::from_private_key(private_key)?;
        return Ok(base.with_wallet(&wallet, SignerKind::PrivateKey(wallet.address())));
    }

    if let Some(mnemonic) = &options.mnemonic {
        let wallet = WalletManager::from_mnemonic(mnemonic, options.mnemonic_index.unwrap_or(0))?;
        return Ok(base.with_wallet(&wallet, SignerKind::Mnemonic(wallet.address())));
    }

    Ok(base)
}

impl ResolvedProvider {
    fn with_wallet(self, wallet: &WalletManager, signer: SignerKind) -> Self {
        let provider = ProviderBuilder::new()
            .wallet(wallet.ethereum_wallet())
            .connect_provider(self.provider)
            .erased();

        Self { provider, source: self.source, signer }
    }
}

fn network_provider(network: &'static KnownNetwork) -> Result<ResolvedProvider> {
    let url = parse_rpc_url(network.default_rpc_url)?;

    tracing::info!(
        network = network.name,
        chain_id = network.chain_id,
        "Default network provider created (lazy initialization)"
    );

    Ok(ResolvedProvider {
        provider: http_provider(url),
        source: ProviderSource::Network(network),
        signer: SignerKind::None,
    })
}

fn json_rpc_provider(rpc_url: &str) -> Result<ResolvedProvider> {
    let url = parse_rpc_url(rpc_url)?;

    tracing::info!(rpc_url = %url, "JSON-RPC provider created (lazy initialization)");

    Ok(ResolvedProvider {
        provider: http_provider(url.clone()),
        source: ProviderSource::JsonRpc(url),
        signer: SignerKind::None,
    })
}

fn http_provider(url: Url) -> DynProvider {
    ProviderBuilder::new().connect_http(url).root().clone().erased()
}

/// Parse a JSON-RPC endpoint, accepting only http(s) URLs.
pub fn parse_rpc_url(rpc_url: &str) -> Result<Url> {
    let url: Url = rpc_url
        .trim()
        .parse()
        .map_err(|_| AppError::Config(format!("Invalid RPC URL: {}", rpc_url)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(AppError::Config(format!(
            "Unsupported RPC URL scheme '{}': {}",
            scheme, rpc_url
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ethereum::constants::{ETHEREUM_MAINNET_CHAIN_ID, SEPOLIA_CHAIN_ID};

    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

    fn injected() -> DynProvider {
        let url: Url = "http://localhost:8545".parse().unwrap();
        http_provider(url)
    }

    #[test]
    fn test_default_is_mainnet() {
        let resolved = resolve_provider(&CallOptions::new()).unwrap();
        match resolved.source() {
            ProviderSource::Network(network) => {
                assert_eq!(network.chain_id, ETHEREUM_MAINNET_CHAIN_ID)
            }
            other => panic!("Expected network provider, got {:?}", other),
        }
        assert_eq!(resolved.signer(), SignerKind::None);
        assert!(!resolved.is_signer());
    }

    #[test]
    fn test_known_network_name_takes_network_path() {
        let resolved = resolve_provider(&CallOptions::new().with_provider("mainnet")).unwrap();
        assert!(matches!(resolved.source(), ProviderSource::Network(n) if n.name == "mainnet"));
    }

    #[test]
    fn test_network_option_used_without_provider() {
        let resolved = resolve_provider(&CallOptions::new().with_network("sepolia")).unwrap();
        assert!(
            matches!(resolved.source(), ProviderSource::Network(n) if n.chain_id == SEPOLIA_CHAIN_ID)
        );
    }

    #[test]
    fn test_provider_option_wins_over_network() {
        let options =
            CallOptions::new().with_network("sepolia").with_provider("http://localhost:8545");
        let resolved = resolve_provider(&options).unwrap();
        assert!(matches!(resolved.source(), ProviderSource::JsonRpc(_)));
    }

    #[test]
    fn test_chain_id_selector() {
        let resolved = resolve_provider(&CallOptions::new().with_provider(1u64)).unwrap();
        assert!(matches!(resolved.source(), ProviderSource::Network(n) if n.name == "mainnet"));

        let unknown = resolve_provider(&CallOptions::new().with_provider(424242u64));
        assert!(matches!(unknown, Err(AppError::Config(_))));
    }

    #[test]
    fn test_chain_id_string_is_known_network() {
        let resolved = resolve_provider(&CallOptions::new().with_provider("11155111")).unwrap();
        assert!(matches!(resolved.source(), ProviderSource::Network(n) if n.name == "sepolia"));
    }

    #[test]
    fn test_url_selector_builds_json_rpc_provider() {
        let resolved =
            resolve_provider(&CallOptions::new().with_provider("http://127.0.0.1:8545")).unwrap();
        let url = resolved.connection_url().unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8545/");
        assert!(matches!(resolved.source(), ProviderSource::JsonRpc(_)));
    }

    #[test]
    fn test_invalid_selector_is_config_error() {
        let result = resolve_provider(&CallOptions::new().with_provider("not a network"));
        assert!(matches!(result, Err(AppError::Config(_))));

        let result = resolve_provider(&CallOptions::new().with_provider("ftp://example.com"));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_injected_provider_becomes_signer() {
        let resolved = resolve_provider(&CallOptions::new().with_provider(injected())).unwrap();
        assert_eq!(resolved.source(), &ProviderSource::Injected);
        assert_eq!(resolved.signer(), SignerKind::Injected);
        assert!(resolved.is_signer());
        assert!(resolved.connection_url().is_none());
    }

    #[test]
    fn test_private_key_wraps_in_wallet() {
        let resolved =
            resolve_provider(&CallOptions::new().with_private_key(TEST_PRIVATE_KEY)).unwrap();
        let wallet = WalletManager::from_private_key(TEST_PRIVATE_KEY).unwrap();

        assert_eq!(resolved.signer(), SignerKind::PrivateKey(wallet.address()));
        assert_eq!(resolved.signer_address(), Some(wallet.address()));
        assert!(matches!(resolved.source(), ProviderSource::Network(_)));
    }

    #[test]
    fn test_mnemonic_wraps_in_wallet() {
        let resolved = resolve_provider(
            &CallOptions::new().with_mnemonic(TEST_MNEMONIC).with_mnemonic_index(1),
        )
        .unwrap();
        let wallet = WalletManager::from_mnemonic(TEST_MNEMONIC, 1).unwrap();
        assert_eq!(resolved.signer(), SignerKind::Mnemonic(wallet.address()));
    }

    #[test]
    fn test_private_key_takes_precedence_over_mnemonic() {
        let options = CallOptions::new()
            .with_mnemonic(TEST_MNEMONIC)
            .with_mnemonic_index(3)
            .with_private_key(TEST_PRIVATE_KEY);
        let resolved = resolve_provider(&options).unwrap();

        assert!(matches!(resolved.signer(), SignerKind::PrivateKey(_)));
    }

    #[test]
    fn test_bad_private_key_propagates() {
        let result = resolve_provider(&CallOptions::new().with_private_key("0x1234"));
        assert!(matches!(result, Err(AppError::Wallet(_))));
    }

    #[test]
    fn test_resolved_provider_debug_has_no_secrets() {
        let resolved =
            resolve_provider(&CallOptions::new().with_private_key(TEST_PRIVATE_KEY)).unwrap();
        let debug_str = format!("{:?}", resolved);
        assert!(debug_str.contains("PrivateKey"));
        assert!(!debug_str.contains("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"));
    }

    #[tokio::test]
    async fn test_default_sender_for_local_wallet() {
        let resolved =
            resolve_provider(&CallOptions::new().with_private_key(TEST_PRIVATE_KEY)).unwrap();
        let sender = resolved.default_sender().await.unwrap();
        assert_eq!(sender, resolved.signer_address());
    }

    #[tokio::test]
    async fn test_default_sender_for_read_only() {
        let resolved = resolve_provider(&CallOptions::new()).unwrap();
        assert_eq!(resolved.default_sender().await.unwrap(), None);
    }
}

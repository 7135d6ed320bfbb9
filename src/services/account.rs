//! Account and network queries.

use alloy::{primitives::Address, providers::Provider};

use crate::{
    error::Result,
    ethereum::{
        constants::{ETHEREUM_MAINNET_CHAIN_ID, UNKNOWN_NETWORK_NAME},
        network_by_chain_id, resolve_provider, ResolvedProvider,
    },
    types::{CallOptions, NetworkInfo},
};

/// Provider, or raw options to resolve one from, for a balance query.
#[derive(Debug, Clone)]
pub enum BalanceSource {
    /// Already-resolved provider.
    Provider(ResolvedProvider),
    /// Options handed to the resolver.
    Options(CallOptions),
}

impl From<ResolvedProvider> for BalanceSource {
    fn from(provider: ResolvedProvider) -> Self {
        BalanceSource::Provider(provider)
    }
}

impl From<&ResolvedProvider> for BalanceSource {
    fn from(provider: &ResolvedProvider) -> Self {
        BalanceSource::Provider(provider.clone())
    }
}

impl From<CallOptions> for BalanceSource {
    fn from(options: CallOptions) -> Self {
        BalanceSource::Options(options)
    }
}

/// Identify the network a provider is connected to.
///
/// Queries `net_version`; a non-numeric answer yields id `0`. Chain 1 is
/// always presented as `mainnet`.
pub async fn get_network_info(provider: &ResolvedProvider) -> Result<NetworkInfo> {
    let version: String = provider.provider().raw_request("net_version".into(), ()).await?;
    let id = parse_network_version(&version);

    let name = match id {
        ETHEREUM_MAINNET_CHAIN_ID => "mainnet",
        _ => network_by_chain_id(id).map(|network| network.name).unwrap_or(UNKNOWN_NETWORK_NAME),
    };

    tracing::debug!(id = id, name = name, "Resolved network info");

    Ok(NetworkInfo { id, name: name.to_string() })
}

/// Native balance of `address` at the latest block, as the raw hex quantity
/// returned by `eth_getBalance`.
pub async fn get_balance(address: Address, source: impl Into<BalanceSource>) -> Result<String> {
    let provider = match source.into() {
        BalanceSource::Provider(provider) => provider,
        BalanceSource::Options(options) => match options.resolved_provider {
            Some(provider) => provider,
            None => resolve_provider(&options)?,
        },
    };

    tracing::debug!(address = %address, "Querying ETH balance");

    let balance: String =
        provider.provider().raw_request("eth_getBalance".into(), balance_params(address)).await?;
    Ok(balance)
}

/// `eth_getBalance` params: the address at the latest block.
fn balance_params(address: Address) -> (Address, &'static str) {
    (address, "latest")
}

/// Decimal or `0x`-hex network version; anything else is `0`.
fn parse_network_version(version: &str) -> u64 {
    let version = version.trim();
    let parsed = match version.strip_prefix("0x").or_else(|| version.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => version.parse::<u64>(),
    };
    parsed.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_parse_network_version_decimal() {
        assert_eq!(parse_network_version("1"), 1);
        assert_eq!(parse_network_version(" 11155111 "), 11155111);
    }

    #[test]
    fn test_parse_network_version_hex() {
        assert_eq!(parse_network_version("0x1"), 1);
        assert_eq!(parse_network_version("0xaa36a7"), 11155111);
    }

    #[test]
    fn test_parse_network_version_non_numeric() {
        assert_eq!(parse_network_version("homestead"), 0);
        assert_eq!(parse_network_version(""), 0);
        assert_eq!(parse_network_version("0xzz"), 0);
    }

    #[test]
    fn test_balance_params_wire_format() {
        let account = address!("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
        let json = serde_json::to_value(balance_params(account)).unwrap();
        let params = json.as_array().unwrap();

        assert_eq!(params.len(), 2);
        assert_eq!(params[0].as_str().unwrap().parse::<Address>().unwrap(), account);
        assert_eq!(params[1], "latest");
    }

    #[test]
    fn test_balance_source_from_options() {
        let source = BalanceSource::from(CallOptions::new().with_network("mainnet"));
        assert!(matches!(source, BalanceSource::Options(_)));
    }
}

//! Option bag accepted by every dispatch and resolver call.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, U256},
    rpc::types::TransactionRequest,
};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::ethereum::{AbiSource, ProviderSelector, ResolvedProvider};

/// Loose configuration for a contract call or provider resolution.
///
/// Every field is optional. Secrets are zeroed on drop and never printed.
#[derive(Clone, Default)]
pub struct CallOptions {
    /// Explicit ABI. When absent the method descriptor is parsed as a signature.
    pub abi: Option<AbiSource>,
    /// Provider selector: network name, chain id, URL, or a caller-built provider.
    pub provider: Option<ProviderSelector>,
    /// Named network used when `provider` is absent.
    pub network: Option<String>,
    /// Sender override.
    pub from: Option<Address>,
    /// Gas limit override.
    pub gas_limit: Option<u64>,
    /// Gas price override (wei).
    pub gas_price: Option<u128>,
    /// Attached value (wei).
    pub value: Option<U256>,
    /// Chain id override.
    pub chain_id: Option<u64>,
    /// Nonce override.
    pub nonce: Option<u64>,
    /// Hex private key for a local signing wallet. Wins over `mnemonic`.
    pub private_key: Option<Zeroizing<String>>,
    /// BIP-39 phrase for a local signing wallet.
    pub mnemonic: Option<Zeroizing<String>>,
    /// Account index under `m/44'/60'/0'/0/` (default 0).
    pub mnemonic_index: Option<u32>,
    /// Already-resolved provider, reused as-is and bypassing resolution.
    pub resolved_provider: Option<ResolvedProvider>,
}

impl CallOptions {
    /// Create an empty option bag.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_abi(mut self, abi: impl Into<AbiSource>) -> Self {
        self.abi = Some(abi.into());
        self
    }

    pub fn with_provider(mut self, provider: impl Into<ProviderSelector>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    pub fn with_from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    pub fn with_gas_price(mut self, gas_price: u128) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(Zeroizing::new(private_key.into()));
        self
    }

    pub fn with_mnemonic(mut self, mnemonic: impl Into<String>) -> Self {
        self.mnemonic = Some(Zeroizing::new(mnemonic.into()));
        self
    }

    pub fn with_mnemonic_index(mut self, index: u32) -> Self {
        self.mnemonic_index = Some(index);
        self
    }

    /// Reuse a provider across calls instead of resolving one per call.
    pub fn with_resolved_provider(mut self, provider: ResolvedProvider) -> Self {
        self.resolved_provider = Some(provider);
        self
    }

    /// Transaction overrides carried by these options.
    pub fn overrides(&self) -> TxOverrides {
        TxOverrides::from_options(self)
    }
}

impl std::fmt::Debug for CallOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallOptions")
            .field("abi", &self.abi)
            .field("provider", &self.provider)
            .field("network", &self.network)
            .field("overrides", &self.overrides())
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("mnemonic", &self.mnemonic.as_ref().map(|_| "<redacted>"))
            .field("mnemonic_index", &self.mnemonic_index)
            .field("resolved_provider", &self.resolved_provider)
            .finish()
    }
}

/// Transaction overrides forwarded with every invocation.
///
/// Always carries the same six keys; absent ones serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxOverrides {
    pub gas_price: Option<u128>,
    pub nonce: Option<u64>,
    pub value: Option<U256>,
    pub chain_id: Option<u64>,
    pub from: Option<Address>,
    pub gas_limit: Option<u64>,
}

impl TxOverrides {
    /// Collect the overrides from an option bag.
    pub fn from_options(options: &CallOptions) -> Self {
        Self {
            gas_price: options.gas_price,
            nonce: options.nonce,
            value: options.value,
            chain_id: options.chain_id,
            from: options.from,
            gas_limit: options.gas_limit,
        }
    }

    /// Apply the present overrides to a transaction request.
    pub fn apply(&self, mut tx: TransactionRequest) -> TransactionRequest {
        if let Some(from) = self.from {
            tx = tx.with_from(from);
        }
        if let Some(gas_limit) = self.gas_limit {
            tx = tx.with_gas_limit(gas_limit);
        }
        if let Some(gas_price) = self.gas_price {
            tx = tx.with_gas_price(gas_price);
        }
        if let Some(value) = self.value {
            tx = tx.with_value(value);
        }
        if let Some(nonce) = self.nonce {
            tx = tx.with_nonce(nonce);
        }
        if let Some(chain_id) = self.chain_id {
            tx = tx.with_chain_id(chain_id);
        }
        tx
    }
}

//! Wallet management.

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner},
};

use crate::error::{AppError, Result};

/// Local signing wallet built from a private key or a mnemonic phrase.
#[derive(Clone)]
pub struct WalletManager {
    /// The local signer.
    signer: PrivateKeySigner,
    /// Wallet address.
    address: Address,
}

impl WalletManager {
    /// Create a wallet manager from a private key string.
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        // Remove 0x prefix if present
        let key = private_key.trim();
        let key = key.strip_prefix("0x").unwrap_or(key);

        let signer: PrivateKeySigner =
            key.parse().map_err(|e: alloy::signers::local::LocalSignerError| {
                AppError::Wallet(e.to_string())
            })?;

        Ok(Self::from_signer(signer))
    }

    /// Derive a wallet from a BIP-39 phrase at `m/44'/60'/0'/0/{index}`.
    pub fn from_mnemonic(phrase: &str, index: u32) -> Result<Self> {
        let signer = MnemonicBuilder::<English>::default()
            .phrase(phrase.trim())
            .index(index)?
            .build()?;

        Ok(Self::from_signer(signer))
    }

    fn from_signer(signer: PrivateKeySigner) -> Self {
        let address = signer.address();
        tracing::info!(address = %address, "Wallet initialized");
        Self { signer, address }
    }

    /// Get the wallet address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Get the signer for transaction signing.
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }

    /// Wallet usable as a provider filler.
    pub fn ethereum_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}

impl std::fmt::Debug for WalletManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletManager").field("address", &self.address).finish()
    }
}

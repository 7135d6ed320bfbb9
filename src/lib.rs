//! Ethereum contract dispatch library.
//!
//! A thin layer over `alloy` for calling smart contracts from a loose set of
//! options: contract address, method signature, arguments, and an option bag
//! selecting the network, signer and transaction overrides.
//!
//! # Features
//!
//! - **Provider Resolution**: Known network name, chain id, JSON-RPC URL or a
//!   caller-built provider, optionally wrapped in a private-key or mnemonic wallet
//! - **Contract Dispatch**: READ (`eth_call`) and WRITE (`eth_sendTransaction`)
//!   through one entry point, with enriched invocation errors
//! - **Account Helpers**: Network identification and raw balance lookup
//!
//! # Example
//!
//! ```rust,ignore
//! use eth_dispatch::{read, CallOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = CallOptions::new().with_network("mainnet");
//!     let supply = read(
//!         "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
//!         "function totalSupply() view returns (uint256)",
//!         Vec::<String>::new(),
//!         options,
//!     )
//!     .await?;
//!     println!("{:?}", supply);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod ethereum;
pub mod logging;
pub mod services;
pub mod types;

pub use config::Config;
pub use error::{AppError, InvocationError, Result};
pub use ethereum::{
    resolve_provider, AbiSource, ProviderSelector, ProviderSource, ResolvedProvider, SignerKind,
};
pub use services::{dispatch, get_balance, get_network_info, read, write, BalanceSource};
pub use types::{
    CallMode, CallOptions, CallParameters, DispatchOutput, InvocationRequest, NetworkInfo,
    TxOverrides,
};

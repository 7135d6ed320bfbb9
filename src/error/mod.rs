//! Error types and handling module.
//!
//! Defines all crate-level error types and conversions.

use thiserror::Error;

use crate::types::{CallMode, CallParameters, TxOverrides};

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors (unresolvable provider selector, bad URL, ...).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Ethereum RPC errors.
    #[error("Ethereum RPC error: {0}")]
    Rpc(String),

    /// Transport errors.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid Ethereum address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Wallet-related errors.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Malformed ABI or method descriptor.
    #[error("ABI error: {0}")]
    Abi(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A bound contract call failed.
    #[error(transparent)]
    Invocation(Box<InvocationError>),
}

/// Enriched failure of a READ or WRITE contract invocation.
///
/// Carries the resolved method name and the arguments that were sent. The
/// signing secret lives in `CallOptions` only, so it can never appear here.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct InvocationError {
    /// Fixed message naming the JSON-RPC primitive that failed.
    pub message: String,
    /// Underlying failure.
    #[source]
    pub error: AppError,
    /// Resolved method name.
    pub method: String,
    /// Positional call arguments as the caller supplied them.
    pub parameters: CallParameters,
    /// Transaction overrides applied to the call.
    pub overrides: TxOverrides,
}

impl InvocationError {
    /// Build the enriched error for a failed invocation in `mode`.
    pub fn new(
        mode: CallMode,
        error: AppError,
        method: impl Into<String>,
        parameters: CallParameters,
        overrides: TxOverrides,
    ) -> Self {
        Self {
            message: format!("Error occurred during [{}]. See {{error}}.", mode.rpc_method()),
            error,
            method: method.into(),
            parameters,
            overrides,
        }
    }
}

impl From<InvocationError> for AppError {
    fn from(err: InvocationError) -> Self {
        AppError::Invocation(Box::new(err))
    }
}

impl From<alloy::transports::TransportError> for AppError {
    fn from(err: alloy::transports::TransportError) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<alloy::signers::local::LocalSignerError> for AppError {
    fn from(err: alloy::signers::local::LocalSignerError) -> Self {
        AppError::Wallet(err.to_string())
    }
}

impl From<alloy::dyn_abi::Error> for AppError {
    fn from(err: alloy::dyn_abi::Error) -> Self {
        AppError::Abi(err.to_string())
    }
}

impl From<alloy::json_abi::parser::Error> for AppError {
    fn from(err: alloy::json_abi::parser::Error) -> Self {
        AppError::Abi(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::Parse(err.to_string())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{dyn_abi::DynSolValue, primitives::U256};

    #[test]
    fn test_app_error_config_display() {
        let err = AppError::Config("Missing RPC URL".to_string());
        assert_eq!(err.to_string(), "Configuration error: Missing RPC URL");
    }

    #[test]
    fn test_app_error_transport_display() {
        let err = AppError::Transport("Network unreachable".to_string());
        assert_eq!(err.to_string(), "Transport error: Network unreachable");
    }

    #[test]
    fn test_app_error_invalid_address_display() {
        let err = AppError::InvalidAddress("0xinvalid".to_string());
        assert_eq!(err.to_string(), "Invalid address: 0xinvalid");
    }

    #[test]
    fn test_app_error_wallet_display() {
        let err = AppError::Wallet("Invalid private key".to_string());
        assert_eq!(err.to_string(), "Wallet error: Invalid private key");
    }

    #[test]
    fn test_app_error_abi_display() {
        let err = AppError::Abi("unknown method".to_string());
        assert_eq!(err.to_string(), "ABI error: unknown method");
    }

    #[test]
    fn test_invocation_error_read_message() {
        let err = InvocationError::new(
            CallMode::Read,
            AppError::Rpc("execution reverted".to_string()),
            "balanceOf",
            CallParameters::default(),
            TxOverrides::default(),
        );
        assert_eq!(err.message, "Error occurred during [eth_call]. See {error}.");
        assert_eq!(err.method, "balanceOf");
    }

    #[test]
    fn test_invocation_error_write_message() {
        let err = InvocationError::new(
            CallMode::Write,
            AppError::Rpc("nonce too low".to_string()),
            "transfer",
            vec![DynSolValue::Uint(U256::from(1u64), 256)].into(),
            TxOverrides::default(),
        );
        assert_eq!(err.message, "Error occurred during [eth_sendTransaction]. See {error}.");
        assert_eq!(err.parameters.len(), 1);
    }

    #[test]
    fn test_invocation_error_is_transparent_in_app_error() {
        let err: AppError = InvocationError::new(
            CallMode::Read,
            AppError::Transport("timeout".to_string()),
            "name",
            CallParameters::default(),
            TxOverrides::default(),
        )
        .into();

        assert_eq!(err.to_string(), "Error occurred during [eth_call]. See {error}.");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Transport error: timeout"));
    }

    #[test]
    fn test_from_parse_int_error() {
        let parse_result: std::result::Result<i32, _> = "not_a_number".parse();
        let parse_err = parse_result.unwrap_err();
        let app_err: AppError = parse_err.into();

        match app_err {
            AppError::Parse(msg) => assert!(msg.contains("invalid")),
            _ => panic!("Expected Parse error"),
        }
    }

    #[test]
    fn test_app_error_debug_trait() {
        let err = AppError::Config("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Config"));
    }
}

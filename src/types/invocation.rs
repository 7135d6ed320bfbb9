//! Invocation-related types.

use alloy::{
    dyn_abi::{DynSolType, DynSolValue},
    primitives::{Address, TxHash},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, Result},
    types::CallOptions,
};

/// Which invocation path a dispatch takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallMode {
    /// Call-static invocation (`eth_call`), no state change.
    Read,
    /// Transaction-submitting invocation (`eth_sendTransaction`).
    Write,
}

impl CallMode {
    /// JSON-RPC method backing this mode.
    pub fn rpc_method(self) -> &'static str {
        match self {
            CallMode::Read => "eth_call",
            CallMode::Write => "eth_sendTransaction",
        }
    }
}

/// Positional call arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum CallParameters {
    /// Already-typed ABI values.
    Values(Vec<DynSolValue>),
    /// Textual arguments, coerced against the bound function's input types.
    Text(Vec<String>),
}

impl Default for CallParameters {
    fn default() -> Self {
        CallParameters::Values(Vec::new())
    }
}

impl CallParameters {
    /// Number of positional arguments.
    pub fn len(&self) -> usize {
        match self {
            CallParameters::Values(values) => values.len(),
            CallParameters::Text(args) => args.len(),
        }
    }

    /// Whether there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Turn the arguments into ABI values for the given input types.
    ///
    /// Typed values pass through untouched; the encoder validates them.
    pub fn coerce(&self, types: &[DynSolType]) -> Result<Vec<DynSolValue>> {
        match self {
            CallParameters::Values(values) => Ok(values.clone()),
            CallParameters::Text(args) => {
                if args.len() != types.len() {
                    return Err(AppError::Abi(format!(
                        "Argument count mismatch: expected {} arguments, got {}",
                        types.len(),
                        args.len()
                    )));
                }

                types
                    .iter()
                    .zip(args)
                    .enumerate()
                    .map(|(i, (ty, arg))| {
                        ty.coerce_str(arg).map_err(|e| {
                            AppError::Parse(format!(
                                "Failed to parse argument {} as {}: {}",
                                i + 1,
                                ty.sol_type_name(),
                                e
                            ))
                        })
                    })
                    .collect()
            }
        }
    }
}

impl From<Vec<DynSolValue>> for CallParameters {
    fn from(values: Vec<DynSolValue>) -> Self {
        CallParameters::Values(values)
    }
}

impl From<Vec<String>> for CallParameters {
    fn from(args: Vec<String>) -> Self {
        CallParameters::Text(args)
    }
}

impl From<&[&str]> for CallParameters {
    fn from(args: &[&str]) -> Self {
        CallParameters::Text(args.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CallParameters {
    fn from(args: [&str; N]) -> Self {
        CallParameters::Text(args.iter().map(|s| s.to_string()).collect())
    }
}

/// A single contract invocation.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    /// Read or write path.
    pub mode: CallMode,
    /// Contract address.
    pub address: Address,
    /// Full signature when no ABI is supplied, otherwise a name or signature.
    pub method: String,
    /// Positional arguments.
    pub parameters: CallParameters,
    /// Option bag.
    pub options: CallOptions,
}

impl InvocationRequest {
    /// Create a request with no arguments and default options.
    pub fn new(mode: CallMode, address: Address, method: impl Into<String>) -> Self {
        Self {
            mode,
            address,
            method: method.into(),
            parameters: CallParameters::default(),
            options: CallOptions::default(),
        }
    }

    /// Create a read request, parsing the contract address.
    pub fn read(address: &str, method: impl Into<String>) -> Result<Self> {
        Ok(Self::new(CallMode::Read, parse_address(address)?, method))
    }

    /// Create a write request, parsing the contract address.
    pub fn write(address: &str, method: impl Into<String>) -> Result<Self> {
        Ok(Self::new(CallMode::Write, parse_address(address)?, method))
    }

    /// Set the positional arguments.
    pub fn with_parameters(mut self, parameters: impl Into<CallParameters>) -> Self {
        self.parameters = parameters.into();
        self
    }

    /// Set the option bag.
    pub fn with_options(mut self, options: CallOptions) -> Self {
        self.options = options;
        self
    }
}

/// Successful dispatch result.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutput {
    /// Decoded return values of a read.
    Read(Vec<DynSolValue>),
    /// Hash of a submitted transaction.
    Submitted(TxHash),
}

impl DispatchOutput {
    /// Return values, if this was a read.
    pub fn into_values(self) -> Option<Vec<DynSolValue>> {
        match self {
            DispatchOutput::Read(values) => Some(values),
            DispatchOutput::Submitted(_) => None,
        }
    }

    /// Transaction hash, if this was a write.
    pub fn tx_hash(&self) -> Option<TxHash> {
        match self {
            DispatchOutput::Submitted(hash) => Some(*hash),
            DispatchOutput::Read(_) => None,
        }
    }
}

/// Parse and validate an Ethereum address from a string.
///
/// Validates:
/// - Address format (0x + 40 hex characters)
/// - Basic format checks
pub fn parse_address(s: &str) -> Result<Address> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(AppError::InvalidAddress("Address cannot be empty".into()));
    }

    if !trimmed.starts_with("0x") && !trimmed.starts_with("0X") {
        return Err(AppError::InvalidAddress(format!("Address must start with '0x': {}", s)));
    }

    // 0x + 40 hex chars
    if trimmed.len() != 42 {
        return Err(AppError::InvalidAddress(format!(
            "Address must be 42 characters (0x + 40 hex chars), got {}: {}",
            trimmed.len(),
            s
        )));
    }

    trimmed
        .parse::<Address>()
        .map_err(|e| AppError::InvalidAddress(format!("Invalid address format '{}': {}", s, e)))
}

//! ABI sources and method binding.
//!
//! A method is bound by resolving the caller's descriptor against either an
//! explicit ABI or a single-function ABI parsed from the descriptor itself.

use alloy::json_abi::{Function, JsonAbi};
use serde_json::Value;

use crate::error::{AppError, Result};

/// Human-readable item keywords understood by the ABI parser.
const ITEM_KEYWORDS: [&str; 7] =
    ["function", "event", "error", "constructor", "fallback", "receive", "struct"];

/// An explicit ABI supplied through `CallOptions::abi`.
#[derive(Debug, Clone, PartialEq)]
pub enum AbiSource {
    /// One human-readable signature.
    Signature(String),
    /// Several human-readable signatures.
    Signatures(Vec<String>),
    /// A JSON ABI.
    Json(JsonAbi),
}

impl AbiSource {
    /// Parse a JSON ABI: either an item array or a compiler artifact with an `abi` key.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let abi_value = match value {
            Value::Object(mut artifact) => artifact
                .remove("abi")
                .ok_or_else(|| AppError::Abi("Artifact has no 'abi' field".into()))?,
            other => other,
        };

        let abi: JsonAbi = serde_json::from_value(abi_value)?;
        Ok(AbiSource::Json(abi))
    }

    /// Build the ABI this source describes.
    pub fn to_json_abi(&self) -> Result<JsonAbi> {
        match self {
            AbiSource::Signature(signature) => parse_signatures(std::iter::once(signature)),
            AbiSource::Signatures(signatures) => parse_signatures(signatures.iter()),
            AbiSource::Json(abi) => Ok(abi.clone()),
        }
    }
}

impl From<&str> for AbiSource {
    fn from(signature: &str) -> Self {
        AbiSource::Signature(signature.to_string())
    }
}

impl From<String> for AbiSource {
    fn from(signature: String) -> Self {
        AbiSource::Signature(signature)
    }
}

impl From<Vec<String>> for AbiSource {
    fn from(signatures: Vec<String>) -> Self {
        AbiSource::Signatures(signatures)
    }
}

impl From<&[&str]> for AbiSource {
    fn from(signatures: &[&str]) -> Self {
        AbiSource::Signatures(signatures.iter().map(|s| s.to_string()).collect())
    }
}

impl From<JsonAbi> for AbiSource {
    fn from(abi: JsonAbi) -> Self {
        AbiSource::Json(abi)
    }
}

/// A function resolved from a method descriptor, plus the ABI it was bound with.
#[derive(Debug, Clone)]
pub struct BoundMethod {
    /// The ABI used for binding.
    pub abi: JsonAbi,
    /// The selected function.
    pub function: Function,
}

impl BoundMethod {
    /// Method name used in logs and errors.
    pub fn name(&self) -> &str {
        &self.function.name
    }
}

/// Bind `descriptor` against `abi`, or against the descriptor itself when no ABI is given.
///
/// `arg_count` disambiguates overloaded names.
pub fn bind_method(
    descriptor: &str,
    abi: Option<&AbiSource>,
    arg_count: usize,
) -> Result<BoundMethod> {
    match abi {
        None => {
            let function = parse_function(descriptor)?;
            let mut abi = JsonAbi::new();
            abi.functions.entry(function.name.clone()).or_default().push(function.clone());
            Ok(BoundMethod { abi, function })
        }
        Some(source) => {
            let abi = source.to_json_abi()?;
            let function = select_function(&abi, descriptor, arg_count)?;
            Ok(BoundMethod { abi, function })
        }
    }
}

/// Extract the method name from a signature such as `transfer(address,uint256)`.
pub fn method_name(signature: &str) -> Result<String> {
    parse_function(signature).map(|f| f.name)
}

/// Parse a function signature, with or without the `function` keyword and return types.
fn parse_function(signature: &str) -> Result<Function> {
    let trimmed = signature.trim();
    if !trimmed.contains('(') {
        return Err(AppError::Abi(format!(
            "Method descriptor '{}' is not a function signature; supply an ABI to call by name",
            signature
        )));
    }

    Ok(Function::parse(trimmed)?)
}

fn parse_signatures<'a>(signatures: impl Iterator<Item = &'a String>) -> Result<JsonAbi> {
    let items: Vec<String> = signatures
        .map(|s| {
            let s = s.trim();
            let first_word = s.split(|c: char| c.is_whitespace() || c == '(').next();
            if first_word.is_some_and(|word| ITEM_KEYWORDS.contains(&word)) {
                s.to_string()
            } else {
                format!("function {}", s)
            }
        })
        .collect();

    Ok(JsonAbi::parse(items.iter().map(String::as_str))?)
}

fn select_function(abi: &JsonAbi, descriptor: &str, arg_count: usize) -> Result<Function> {
    let descriptor = descriptor.trim();

    if descriptor.contains('(') {
        let wanted = parse_function(descriptor)?.signature();
        return abi
            .functions()
            .find(|f| f.signature() == wanted)
            .cloned()
            .ok_or_else(|| AppError::Abi(format!("Function '{}' not found in ABI", wanted)));
    }

    let overloads = abi
        .function(descriptor)
        .ok_or_else(|| AppError::Abi(format!("Function '{}' not found in ABI", descriptor)))?;

    if let [only] = overloads.as_slice() {
        return Ok(only.clone());
    }

    let mut by_arity = overloads.iter().filter(|f| f.inputs.len() == arg_count);
    match (by_arity.next(), by_arity.next()) {
        (Some(function), None) => Ok(function.clone()),
        _ => Err(AppError::Abi(format!(
            "Function '{}' is overloaded; use its full signature",
            descriptor
        ))),
    }
}

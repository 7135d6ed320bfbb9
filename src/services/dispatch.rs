//! Contract call dispatch.
//!
//! Unifies READ (`eth_call`) and WRITE (`eth_sendTransaction`) invocations:
//! resolve or reuse a provider, bind the method, encode the arguments, apply
//! the overrides and invoke. Failures of the invocation itself are enriched
//! into [`InvocationError`]; resolution and binding failures are returned as-is.

use alloy::{
    dyn_abi::{DynSolType, DynSolValue, FunctionExt, JsonAbiExt, Specifier},
    network::TransactionBuilder,
    primitives::{Address, TxHash},
    providers::Provider,
    rpc::types::TransactionRequest,
};

use crate::{
    error::{AppError, InvocationError, Result},
    ethereum::{bind_method, resolve_provider, BoundMethod, ResolvedProvider},
    types::{CallMode, CallOptions, CallParameters, DispatchOutput, InvocationRequest, TxOverrides},
};

/// Dispatch a single contract invocation.
///
/// The request's parameters are never modified; overrides travel separately
/// on the outgoing transaction request.
pub async fn dispatch(request: &InvocationRequest) -> Result<DispatchOutput> {
    let options = &request.options;

    let provider = match &options.resolved_provider {
        Some(provider) => provider.clone(),
        None => resolve_provider(options)?,
    };

    let overrides = TxOverrides::from_options(options);
    let bound = bind_method(&request.method, options.abi.as_ref(), request.parameters.len())?;

    tracing::debug!(
        mode = ?request.mode,
        address = %request.address,
        method = %bound.name(),
        args = request.parameters.len(),
        "Dispatching contract call"
    );

    match invoke(request.mode, &provider, request.address, &bound, &request.parameters, &overrides)
        .await
    {
        Ok(output) => Ok(output),
        Err(error) => {
            tracing::warn!(
                mode = ?request.mode,
                address = %request.address,
                method = %bound.name(),
                error = %error,
                "Contract call failed"
            );

            Err(InvocationError::new(
                request.mode,
                error,
                bound.name(),
                request.parameters.clone(),
                overrides,
            )
            .into())
        }
    }
}

/// Call a contract method without creating a transaction.
pub async fn read(
    address: &str,
    method: &str,
    parameters: impl Into<CallParameters>,
    options: CallOptions,
) -> Result<Vec<DynSolValue>> {
    let request =
        InvocationRequest::read(address, method)?.with_parameters(parameters).with_options(options);

    match dispatch(&request).await? {
        DispatchOutput::Read(values) => Ok(values),
        DispatchOutput::Submitted(hash) => {
            Err(AppError::Rpc(format!("Expected call result, got transaction {}", hash)))
        }
    }
}

/// Submit a state-changing transaction to a contract method.
pub async fn write(
    address: &str,
    method: &str,
    parameters: impl Into<CallParameters>,
    options: CallOptions,
) -> Result<TxHash> {
    let request =
        InvocationRequest::write(address, method)?.with_parameters(parameters).with_options(options);

    match dispatch(&request).await? {
        DispatchOutput::Submitted(hash) => Ok(hash),
        DispatchOutput::Read(_) => Err(AppError::Rpc("Expected transaction, got call result".into())),
    }
}

async fn invoke(
    mode: CallMode,
    provider: &ResolvedProvider,
    address: Address,
    bound: &BoundMethod,
    parameters: &CallParameters,
    overrides: &TxOverrides,
) -> Result<DispatchOutput> {
    let tx = build_request(address, bound, parameters, overrides)?;

    match mode {
        CallMode::Read => {
            let output = provider.provider().call(tx).await?;
            let values = bound.function.abi_decode_output(&output)?;
            Ok(DispatchOutput::Read(values))
        }
        CallMode::Write => {
            let tx = match tx.from {
                Some(_) => tx,
                None => match provider.default_sender().await? {
                    Some(sender) => tx.with_from(sender),
                    None => {
                        return Err(AppError::Wallet(
                            "Sending a transaction requires a signer or a `from` address".into(),
                        ))
                    }
                },
            };

            let pending = provider.provider().send_transaction(tx).await?;
            let tx_hash = *pending.tx_hash();

            tracing::info!(tx_hash = %tx_hash, method = %bound.name(), "Transaction submitted");

            Ok(DispatchOutput::Submitted(tx_hash))
        }
    }
}

/// Encode the call and apply the overrides.
fn build_request(
    address: Address,
    bound: &BoundMethod,
    parameters: &CallParameters,
    overrides: &TxOverrides,
) -> Result<TransactionRequest> {
    let types = bound
        .function
        .inputs
        .iter()
        .map(|param| param.resolve())
        .collect::<std::result::Result<Vec<DynSolType>, _>>()?;

    let args = parameters.coerce(&types)?;
    let calldata = bound.function.abi_encode_input(&args)?;

    let tx = TransactionRequest::default().with_to(address).with_input(calldata);
    Ok(overrides.apply(tx))
}

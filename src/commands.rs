//! Implementations of the deploy scripts

use std::sync::Arc;

use ethers::{
    contract::ContractFactory,
    providers::Middleware,
    types::{Address, TransactionReceipt},
};
use tracing::info;

use crate::{
    artifacts::resolve_artifact,
    constants::{NUM_DEPLOY_CONFIRMATIONS, TREASURY_CONTRACT_NAME},
    errors::ScriptError,
};

/// Deploy the treasury contract, awaiting confirmation of the deployment
/// transaction and printing the deployed address.
///
/// Performs exactly one deployment attempt: any failure is surfaced
/// immediately, with no retries at any stage.
pub async fn deploy_treasury(
    client: Arc<impl Middleware>,
    artifacts_path: &str,
) -> Result<(), ScriptError> {
    let artifact = resolve_artifact(artifacts_path, TREASURY_CONTRACT_NAME)?;
    let factory = ContractFactory::new(artifact.abi, artifact.bytecode, client.clone());

    // The treasury takes no constructor arguments
    let deployer = factory
        .deploy(())
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    let pending_tx = client
        .send_transaction(deployer.tx, None /* block */)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    info!("Deployment transaction {:#x} submitted", *pending_tx);

    let receipt = pending_tx
        .confirmations(NUM_DEPLOY_CONFIRMATIONS)
        .await
        .map_err(|e| ScriptError::DeploymentConfirmation(e.to_string()))?;
    let treasury_address = deployed_address(receipt)?;

    println!("{}", deployed_line(treasury_address));

    Ok(())
}

/// Extract the deployed contract address from the confirmation receipt.
///
/// A missing receipt means the transaction was dropped from the mempool;
/// a receipt without a contract address means the transaction did not
/// deploy a contract.
fn deployed_address(receipt: Option<TransactionReceipt>) -> Result<Address, ScriptError> {
    let receipt = receipt.ok_or_else(|| {
        ScriptError::DeploymentConfirmation("transaction dropped from the mempool".to_string())
    })?;

    receipt.contract_address.ok_or_else(|| {
        ScriptError::DeploymentConfirmation("no contract address in receipt".to_string())
    })
}

/// The stdout line reporting the deployed treasury address
fn deployed_line(address: Address) -> String {
    format!("{TREASURY_CONTRACT_NAME} contract deployed to: {address:#x}")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ethers::{
        providers::Provider,
        types::{Address, TransactionReceipt},
    };

    use super::{deploy_treasury, deployed_address, deployed_line};
    use crate::errors::ScriptError;

    /// The artifacts directory checked into the repo
    const ARTIFACTS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/artifacts");

    /// A node that rejects the deployment transaction surfaces as
    /// `ContractDeployment`, returning before the address line is printed
    #[tokio::test]
    async fn test_submission_failure() {
        // A mocked provider with no queued responses errors on every request
        let (provider, _mock) = Provider::mocked();
        let res = deploy_treasury(Arc::new(provider), ARTIFACTS_DIR).await;
        assert!(matches!(res, Err(ScriptError::ContractDeployment(_))));
    }

    /// A transaction dropped from the mempool (no receipt) surfaces as
    /// `DeploymentConfirmation`
    #[test]
    fn test_dropped_transaction() {
        let res = deployed_address(None);
        assert!(matches!(res, Err(ScriptError::DeploymentConfirmation(_))));
    }

    /// A receipt without a contract address surfaces as
    /// `DeploymentConfirmation`
    #[test]
    fn test_receipt_without_address() {
        let res = deployed_address(Some(TransactionReceipt::default()));
        assert!(matches!(res, Err(ScriptError::DeploymentConfirmation(_))));
    }

    /// A confirmed receipt yields its contract address
    #[test]
    fn test_receipt_with_address() {
        let address = Address::from_low_u64_be(0xc0ffee);
        let receipt = TransactionReceipt {
            contract_address: Some(address),
            ..Default::default()
        };
        assert_eq!(deployed_address(Some(receipt)).unwrap(), address);
    }

    /// The success line carries the fixed label followed by a
    /// 0x-prefixed, 40-hex-character address
    #[test]
    fn test_deployed_line_format() {
        let address = Address::from_low_u64_be(0xdeadbeef);
        let line = deployed_line(address);

        let suffix = line
            .strip_prefix("ChainSaverTreasury contract deployed to: ")
            .unwrap();
        let hex_part = suffix.strip_prefix("0x").unwrap();
        assert_eq!(hex_part.len(), 40);
        assert!(hex_part.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

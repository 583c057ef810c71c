//! Resolution of compiled contract artifacts into deployable ABI & bytecode

use std::{fs, path::Path};

use ethers::{abi::Contract, types::Bytes, utils::hex::FromHex};

use crate::{
    constants::{ABI_EXTENSION, BYTECODE_EXTENSION},
    errors::ScriptError,
};

/// The compiled artifact for a contract, sufficient to construct
/// a deployment transaction
pub struct ContractArtifact {
    /// The contract's ABI
    pub abi: Contract,
    /// The contract's creation bytecode
    pub bytecode: Bytes,
}

/// Resolve the compiled artifact for the given contract name from
/// the artifacts directory
pub fn resolve_artifact(
    artifacts_dir: &str,
    contract_name: &str,
) -> Result<ContractArtifact, ScriptError> {
    let abi_str = read_artifact_file(artifacts_dir, contract_name, ABI_EXTENSION)?;
    let abi: Contract =
        serde_json::from_str(&abi_str).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode_str = read_artifact_file(artifacts_dir, contract_name, BYTECODE_EXTENSION)?;
    // Tolerate both bare hex (solc) and 0x-prefixed hex (hardhat artifacts)
    let bytecode = Bytes::from_hex(bytecode_str.trim().trim_start_matches("0x"))
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    Ok(ContractArtifact { abi, bytecode })
}

/// Read a single artifact file, surfacing a missing file as `ArtifactNotFound`
fn read_artifact_file(
    artifacts_dir: &str,
    contract_name: &str,
    extension: &str,
) -> Result<String, ScriptError> {
    let path = Path::new(artifacts_dir).join(format!("{contract_name}.{extension}"));
    if !path.exists() {
        return Err(ScriptError::ArtifactNotFound(format!(
            "no .{extension} artifact for `{contract_name}` in {artifacts_dir}"
        )));
    }

    fs::read_to_string(&path).map_err(|e| ScriptError::ArtifactNotFound(e.to_string()))
}

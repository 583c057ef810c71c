//! Constants used in the deploy scripts

/// The name of the treasury contract, as emitted by the compiler
pub const TREASURY_CONTRACT_NAME: &str = "ChainSaverTreasury";

/// The file extension of a contract ABI artifact
pub const ABI_EXTENSION: &str = "abi";

/// The file extension of a contract creation-bytecode artifact
pub const BYTECODE_EXTENSION: &str = "bin";

/// The number of confirmations to wait for the deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: usize = 1;

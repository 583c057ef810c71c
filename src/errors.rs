//! Definitions of errors that can occur during execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// The named contract has no compiled artifact
    ArtifactNotFound(String),
    /// Error parsing a compiled contract artifact
    ArtifactParsing(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error submitting the deployment transaction
    ContractDeployment(String),
    /// Error awaiting confirmation of the deployment transaction
    DeploymentConfirmation(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ArtifactNotFound(s) => write!(f, "artifact not found: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::DeploymentConfirmation(s) => {
                write!(f, "error confirming deployment: {}", s)
            }
        }
    }
}

impl Error for ScriptError {}

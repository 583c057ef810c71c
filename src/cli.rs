//! Definitions of CLI arguments and commands for the deploy scripts

use std::sync::Arc;

use clap::{Parser, Subcommand};
use ethers::providers::Middleware;

use crate::{commands::deploy_treasury, errors::ScriptError};

/// The CLI for the ChainSaver deploy scripts
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long, env = "DEPLOYER_PRIV_KEY")]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: String,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = "artifacts")]
    pub artifacts_path: String,

    /// The deploy script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy scripts that can be run
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the ChainSaverTreasury contract
    DeployTreasury,
}

impl Command {
    /// Run the command with the given client
    pub async fn run(
        self,
        client: Arc<impl Middleware>,
        artifacts_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployTreasury => deploy_treasury(client, artifacts_path).await,
        }
    }
}

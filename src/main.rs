//! Entrypoint for the ChainSaver deploy scripts

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

use std::io;

use chainsaver_scripts::{cli::Cli, errors::ScriptError, utils::setup_client};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        artifacts_path,
        command,
    } = Cli::parse();

    // Log to stderr so that the deployed-address line is the only
    // stdout output of the script
    tracing_subscriber::fmt()
        .pretty()
        .with_writer(io::stderr)
        .init();

    let client = setup_client(&priv_key, &rpc_url).await?;

    command.run(client, &artifacts_path).await
}

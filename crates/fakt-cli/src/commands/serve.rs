//! Serve command - run the HTTP extraction service.

use clap::Args;

use fakt_core::{AwsCredentials, TextractGateway};

use super::config::load_config;
use crate::server;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides server.bind_addr)
    #[arg(short, long)]
    bind: Option<String>,
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;

    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }

    let gateway = TextractGateway::new(&config.textract, AwsCredentials::from_env());

    server::serve(&config.server, gateway).await
}

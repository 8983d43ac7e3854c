use clap::Parser;
use dotenvy::dotenv;
use tracing::error;

use openinvite_entitlements::{
    cli::{Cli, run, run_offline},
    infra::{
        config::AppConfig,
        setup::{init_app_state, init_tracing},
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    if let Some(output) = run_offline(&cli.command) {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let config = AppConfig::from_env();
    init_tracing(config.log_file.as_deref())?;
    let app_state = init_app_state(config)?;

    match run(&app_state, cli.command).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(err) => {
            error!(code = err.code().as_str(), error = %err, "command failed");
            Err(err.into())
        }
    }
}

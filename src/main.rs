// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_operation};
use commands::{
    handle_config_update_command, handle_list_config_command, handle_menu_command, validate_args,
};
use liga_futbol::config::Config;
use liga_futbol::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    validate_args(&args)?;

    // Configuration commands run before logging so a broken config can be repaired
    if args.list_config {
        return handle_list_config_command().await;
    }
    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    let config = Config::load().await?;

    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    handle_menu_command(&args, &config)?;
    Ok(())
}

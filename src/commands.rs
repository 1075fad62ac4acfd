use crate::cli::Args;
use crossterm::{execute, terminal::SetTitle};
use liga_futbol::config::Config;
use liga_futbol::error::AppError;
use liga_futbol::league::League;
use liga_futbol::menu::{MenuSummary, run_menu};
use std::fs::File;
use std::io::{BufReader, stdin, stdout};

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file simultaneously",
        ));
    }
    if let Some(title) = &args.new_title
        && title.trim().is_empty()
    {
        return Err(AppError::config_error("League title cannot be empty"));
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-title, --set-log-file, --clear-log-file).
///
/// Starts from the stored configuration, or defaults when none can be loaded.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_title) = &args.new_title {
        config.league_title = new_title.trim().to_string();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Runs the league menu against the keyboard or a script file.
///
/// The league starts empty and is dropped when the menu exits.
pub fn handle_menu_command(args: &Args, config: &Config) -> Result<MenuSummary, AppError> {
    let mut league = League::new();
    let mut out = stdout().lock();

    let summary = match &args.script {
        Some(script_path) => {
            tracing::info!("Reading menu input from {script_path}");
            let file = File::open(script_path)?;
            run_menu(&mut league, config, BufReader::new(file), &mut out)?
        }
        None => {
            execute!(out, SetTitle(&config.league_title))?;
            run_menu(&mut league, config, stdin().lock(), &mut out)?
        }
    };

    tracing::info!(
        "Session finished: {} teams added, {} matches recorded, {} rejected inputs",
        summary.teams_added,
        summary.matches_recorded,
        summary.rejected
    );

    Ok(summary)
}

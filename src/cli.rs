use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the run only touches configuration and never opens the menu.
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_title.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Football league standings
///
/// Register teams, record match results and show the standings table
/// from a numbered menu:
/// - 1 adds a team
/// - 2 records a match (home team, home goals, away team, away goals)
/// - 3 shows the standings ordered by points
/// - 0 exits
///
/// League data lives in memory only and is gone when the program exits.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Read menu input from a file instead of the keyboard.
    /// Each line answers one prompt, exactly as it would be typed.
    #[arg(short = 's', long = "script", value_name = "FILE")]
    pub script: Option<String>,

    /// Update the menu title in config.
    #[arg(long = "set-title", help_heading = "Configuration", value_name = "TITLE")]
    pub new_title: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_open_menu() {
        let args = Args::try_parse_from(["liga_futbol"]).unwrap();
        assert!(args.script.is_none());
        assert!(!is_config_operation(&args));
    }

    #[test]
    fn test_script_flag() {
        let args = Args::try_parse_from(["liga_futbol", "-s", "jornada.txt"]).unwrap();
        assert_eq!(args.script.as_deref(), Some("jornada.txt"));
    }

    #[test]
    fn test_config_flags_are_config_operations() {
        for argv in [
            vec!["liga_futbol", "--list-config"],
            vec!["liga_futbol", "--set-title", "Serie B"],
            vec!["liga_futbol", "--set-log-file", "/tmp/liga.log"],
            vec!["liga_futbol", "--clear-log-file"],
        ] {
            let args = Args::try_parse_from(&argv).unwrap();
            assert!(is_config_operation(&args), "{argv:?}");
        }
    }

    #[test]
    fn test_args_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}

//! Application-wide constants and configuration values

/// Points awarded for a win
pub const POINTS_PER_WIN: u32 = 3;

/// Points awarded for a draw
pub const POINTS_PER_DRAW: u32 = 1;

/// Default width of the team name column in the standings table
pub const DEFAULT_NAME_COLUMN_WIDTH: usize = 15;

/// Largest accepted team name column width
pub const MAX_NAME_COLUMN_WIDTH: usize = 64;

/// Default menu title
pub const DEFAULT_LEAGUE_TITLE: &str = "Sistema Liga Profesional de Fútbol - Ecuador";

/// Application directory name under the platform config directory
pub const APP_DIR_NAME: &str = "liga_futbol";

/// Default log file name
pub const LOG_FILE_NAME: &str = "liga_futbol.log";

/// Standings table layout
pub mod table {
    /// Width of each numeric statistics column
    pub const STAT_COLUMN_WIDTH: usize = 4;

    /// Column labels in display order
    pub const STAT_LABELS: [&str; 8] = ["PJ", "PG", "PE", "PP", "GF", "GC", "DG", "PTS"];

    /// Label of the team name column
    pub const NAME_LABEL: &str = "Equipo";
}

/// Environment variables that override config file values
pub mod env_vars {
    pub const LEAGUE_TITLE: &str = "LIGA_TITLE";
    pub const LOG_FILE: &str = "LIGA_LOG_FILE";
    pub const NAME_WIDTH: &str = "LIGA_NAME_WIDTH";
}

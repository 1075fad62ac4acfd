use thiserror::Error;

/// Failures that abort the current call.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid argument `{argument}`: {message}")]
    InvalidArgument {
        argument: &'static str,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create an invalid argument error for the named parameter
    pub fn invalid_argument(argument: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }
}

/// Recoverable rejections from league operations.
///
/// The `Display` text is the status message shown to the user. A rejected
/// operation leaves the league untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueError {
    #[error("El nombre del equipo no puede ser vacío.")]
    EmptyName,

    #[error("El equipo ya está registrado.")]
    DuplicateTeam { name: String },

    #[error("Los nombres de los equipos no pueden ser vacíos o nulos.")]
    EmptyMatchTeamName,

    #[error("Uno o ambos equipos no están registrados.")]
    TeamsNotRegistered,
}

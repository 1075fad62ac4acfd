//! Football League Standings Library
//!
//! This library keeps the standings of a small football league in memory:
//! teams are registered by name, match results update both teams, and the
//! standings table orders teams by points.
//!
//! # Examples
//!
//! ```rust
//! use liga_futbol::{League, LeagueError};
//!
//! let mut league = League::new();
//! league.add_team("Emelec").unwrap();
//! league.add_team("Barcelona SC").unwrap();
//! assert_eq!(
//!     league.add_team("emelec"),
//!     Err(LeagueError::DuplicateTeam { name: "emelec".to_string() })
//! );
//!
//! league.record_match("Emelec", 2, "Barcelona SC", 1).unwrap();
//!
//! let standings = league.standings();
//! assert_eq!(standings[0].name(), "Emelec");
//! assert_eq!(standings[0].points(), 3);
//! println!("{}", standings[0]);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod league;
pub mod menu;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{AppError, LeagueError};
pub use league::{League, Team, TeamId};
pub use menu::{MenuSummary, run_menu};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

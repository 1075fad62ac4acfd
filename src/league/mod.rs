//! League ledger: registered teams and the results applied to them.
//!
//! Teams live in an insertion-ordered arena and are addressed by [`TeamId`],
//! so a lookup followed by a mutation always touches the stored record.

pub mod standings;
pub mod team;

pub use team::Team;

use crate::error::LeagueError;
use tracing::{debug, info, warn};

/// Index of a team inside its [`League`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeamId(usize);

impl TeamId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns every registered team. Names are unique ignoring case.
#[derive(Debug, Default, Clone)]
pub struct League {
    teams: Vec<Team>,
}

impl League {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new team with zeroed statistics.
    ///
    /// Blank names are rejected before duplicates are checked.
    ///
    /// # Errors
    /// * `LeagueError::EmptyName` - `name` is empty or whitespace only
    /// * `LeagueError::DuplicateTeam` - a team with the same name (any case) exists
    pub fn add_team(&mut self, name: &str) -> Result<TeamId, LeagueError> {
        // Team::new owns the blank-name rule; its only failure is a blank name
        let team = Team::new(name).map_err(|e| {
            warn!("Rejected team registration: {e}");
            LeagueError::EmptyName
        })?;

        if self.find_team(name).is_some() {
            warn!("Rejected duplicate team registration: {name}");
            return Err(LeagueError::DuplicateTeam {
                name: name.to_string(),
            });
        }

        self.teams.push(team);
        info!("Team registered: {name} ({} teams total)", self.teams.len());
        Ok(TeamId(self.teams.len() - 1))
    }

    /// Case-insensitive lookup.
    pub fn find_team(&self, name: &str) -> Option<TeamId> {
        let found = self.teams.iter().position(|team| team.has_name(name));
        debug!("Lookup for team '{name}': {:?}", found);
        found.map(TeamId)
    }

    /// Case-insensitive lookup returning the stored team.
    pub fn find(&self, name: &str) -> Option<&Team> {
        self.find_team(name).and_then(|id| self.team(id))
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id.0)
    }

    /// Applies a result to both teams.
    ///
    /// Validation happens before any mutation, so on error neither team changes.
    ///
    /// # Errors
    /// * `LeagueError::EmptyMatchTeamName` - either name is empty or whitespace only
    /// * `LeagueError::TeamsNotRegistered` - either team is unknown
    pub fn record_match(
        &mut self,
        home_name: &str,
        home_goals: u32,
        away_name: &str,
        away_goals: u32,
    ) -> Result<(), LeagueError> {
        if home_name.trim().is_empty() || away_name.trim().is_empty() {
            warn!("Rejected match with an empty team name");
            return Err(LeagueError::EmptyMatchTeamName);
        }

        let (Some(home), Some(away)) = (self.find_team(home_name), self.find_team(away_name))
        else {
            warn!("Rejected match {home_name} - {away_name}: team not registered");
            return Err(LeagueError::TeamsNotRegistered);
        };

        self.teams[home.0].apply_match_outcome(home_goals, away_goals);
        self.teams[away.0].apply_match_outcome(away_goals, home_goals);
        info!(
            "Match recorded: {} {home_goals} - {away_goals} {}",
            self.teams[home.0].name(),
            self.teams[away.0].name()
        );
        Ok(())
    }

    /// Teams ordered by points, highest first.
    ///
    /// Only points are compared. The sort is stable, so teams level on
    /// points keep their registration order.
    pub fn standings(&self) -> Vec<&Team> {
        let mut ordered: Vec<&Team> = self.teams.iter().collect();
        ordered.sort_by(|a, b| b.points().cmp(&a.points()));
        ordered
    }

    /// Teams in stored order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

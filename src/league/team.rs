use super::standings::format_row;
use crate::constants::{DEFAULT_NAME_COLUMN_WIDTH, POINTS_PER_DRAW, POINTS_PER_WIN};
use crate::error::AppError;
use std::fmt;

/// A registered team and its accumulated statistics.
///
/// Statistics only change through [`Team::apply_match_outcome`], so
/// `played == won + drawn + lost` holds at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    name: String,
    played: u32,
    won: u32,
    drawn: u32,
    lost: u32,
    goals_for: u64,
    goals_against: u64,
    points: u32,
}

impl Team {
    /// Creates a team with zeroed statistics.
    ///
    /// # Errors
    /// * `AppError::InvalidArgument` - `name` is empty or whitespace only
    ///
    /// # Examples
    /// ```
    /// use liga_futbol::Team;
    ///
    /// let team = Team::new("Barcelona SC").unwrap();
    /// assert_eq!(team.points(), 0);
    /// assert!(Team::new("   ").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, AppError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::invalid_argument(
                "name",
                "El nombre del equipo no puede ser vacío o nulo",
            ));
        }

        Ok(Self {
            name,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        })
    }

    /// Applies one match from this team's point of view.
    ///
    /// Goal totals are `u64` and saturate, so no input can overflow them.
    pub fn apply_match_outcome(&mut self, goals_for: u32, goals_against: u32) {
        self.played += 1;
        self.goals_for = self.goals_for.saturating_add(u64::from(goals_for));
        self.goals_against = self.goals_against.saturating_add(u64::from(goals_against));

        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => {
                self.won += 1;
                self.points += POINTS_PER_WIN;
            }
            std::cmp::Ordering::Equal => {
                self.drawn += 1;
                self.points += POINTS_PER_DRAW;
            }
            std::cmp::Ordering::Less => self.lost += 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn played(&self) -> u32 {
        self.played
    }

    pub fn won(&self) -> u32 {
        self.won
    }

    pub fn drawn(&self) -> u32 {
        self.drawn
    }

    pub fn lost(&self) -> u32 {
        self.lost
    }

    pub fn goals_for(&self) -> u64 {
        self.goals_for
    }

    pub fn goals_against(&self) -> u64 {
        self.goals_against
    }

    /// Goals for minus goals against, computed on every read.
    /// Clamped to the `i64` range.
    pub fn goal_difference(&self) -> i64 {
        let difference = i128::from(self.goals_for) - i128::from(self.goals_against);
        difference.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Case-insensitive name comparison used for team identity.
    ///
    /// Both names are folded char by char with Unicode lowercase mapping,
    /// so `ẞ` matches `ß` and `Ñ` matches `ñ`.
    pub fn has_name(&self, name: &str) -> bool {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(name.chars().flat_map(char::to_lowercase))
    }

    /// Renders the standings row with the default name column width.
    pub fn render(&self) -> String {
        self.render_with_width(DEFAULT_NAME_COLUMN_WIDTH)
    }

    /// Renders the standings row: padded name, then PJ PG PE PP GF GC DG PTS.
    pub fn render_with_width(&self, name_width: usize) -> String {
        format_row(
            &self.name,
            [
                self.played.to_string(),
                self.won.to_string(),
                self.drawn.to_string(),
                self.lost.to_string(),
                self.goals_for.to_string(),
                self.goals_against.to_string(),
                self.goal_difference().to_string(),
                self.points.to_string(),
            ],
            name_width,
        )
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

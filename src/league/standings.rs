// src/league/standings.rs - Standings table layout shared by rows and header

use super::team::Team;
use crate::constants::table::{NAME_LABEL, STAT_COLUMN_WIDTH, STAT_LABELS};

/// Title line printed above the table
pub const STANDINGS_TITLE: &str = "Tabla de Posiciones:";

/// Shown instead of rows when no team is registered
pub const NO_TEAMS_MESSAGE: &str = "No hay equipos registrados.";

/// Lays out one table line: the first cell left-aligned to `name_width`,
/// every following cell right-aligned in a fixed-width column.
pub(crate) fn format_row<I, S>(first: &str, cells: I, name_width: usize) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = format!("{first:<name_width$}");
    for cell in cells {
        line.push_str(&format!(
            "{:>width$}",
            cell.as_ref(),
            width = STAT_COLUMN_WIDTH
        ));
    }
    line
}

/// Column header aligned with [`Team::render_with_width`].
pub fn header_line(name_width: usize) -> String {
    format_row(NAME_LABEL, STAT_LABELS, name_width)
}

/// Renders the full standings block for already ordered teams.
///
/// # Arguments
/// * `teams` - Teams in display order, usually from [`super::League::standings`]
/// * `name_width` - Width of the team name column
///
/// # Returns
/// * `Vec<String>` - Title, header, then one row per team or the no-teams message
pub fn render_table(teams: &[&Team], name_width: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(teams.len() + 2);
    lines.push(STANDINGS_TITLE.to_string());
    lines.push(header_line(name_width));

    if teams.is_empty() {
        lines.push(NO_TEAMS_MESSAGE.to_string());
    } else {
        lines.extend(teams.iter().map(|team| team.render_with_width(name_width)));
    }

    lines
}

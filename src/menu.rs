//! Text menu front end for the league ledger.
//!
//! The loop reads one line per prompt from any `BufRead` and writes prompts
//! and status messages to any `Write`, so the same code serves the terminal,
//! script files and tests.

use crate::config::Config;
use crate::error::AppError;
use crate::league::League;
use crate::league::standings::render_table;
use std::io::{BufRead, Write};

pub const PROMPT_OPTION: &str = "Seleccione una opción: ";
pub const PROMPT_TEAM_NAME: &str = "Nombre del equipo: ";
pub const PROMPT_HOME_NAME: &str = "Nombre del equipo local: ";
pub const PROMPT_HOME_GOALS: &str = "Goles del equipo local: ";
pub const PROMPT_AWAY_NAME: &str = "Nombre del equipo visitante: ";
pub const PROMPT_AWAY_GOALS: &str = "Goles del equipo visitante: ";

pub const MSG_EMPTY_TEAM_NAME: &str = "El nombre del equipo no puede estar vacío.";
pub const MSG_EMPTY_HOME_NAME: &str = "El nombre del equipo local no puede estar vacío.";
pub const MSG_EMPTY_AWAY_NAME: &str = "El nombre del equipo visitante no puede estar vacío.";
pub const MSG_INVALID_MATCH_DATA: &str = "Datos del partido inválidos. Intente de nuevo.";
pub const MSG_MATCH_RECORDED: &str = "Partido registrado correctamente.";
pub const MSG_INVALID_OPTION: &str = "Opción no válida. Intente de nuevo.";
pub const MSG_EXIT: &str = "Saliendo...";

/// Menu entries in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AddTeam,
    RecordMatch,
    ShowStandings,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 4] = [
        MenuOption::AddTeam,
        MenuOption::RecordMatch,
        MenuOption::ShowStandings,
        MenuOption::Exit,
    ];

    /// Parses a menu choice, ignoring surrounding whitespace.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuOption::AddTeam),
            "2" => Some(MenuOption::RecordMatch),
            "3" => Some(MenuOption::ShowStandings),
            "0" => Some(MenuOption::Exit),
            _ => None,
        }
    }

    pub fn key(self) -> char {
        match self {
            MenuOption::AddTeam => '1',
            MenuOption::RecordMatch => '2',
            MenuOption::ShowStandings => '3',
            MenuOption::Exit => '0',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::AddTeam => "Agregar Equipo",
            MenuOption::RecordMatch => "Registrar Partido",
            MenuOption::ShowStandings => "Mostrar Tabla de Posiciones",
            MenuOption::Exit => "Salir",
        }
    }
}

/// Counters for one menu session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuSummary {
    pub teams_added: usize,
    pub matches_recorded: usize,
    pub rejected: usize,
}

/// Parses a goal count typed by the user.
pub fn parse_goals(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok()
}

/// Runs the menu until the user exits or input ends.
///
/// # Errors
/// * `AppError::Io` - reading input or writing output failed
pub fn run_menu<R, W>(
    league: &mut League,
    config: &Config,
    input: R,
    output: &mut W,
) -> Result<MenuSummary, AppError>
where
    R: BufRead,
    W: Write,
{
    let mut session = MenuSession {
        league,
        config,
        input,
        output,
        summary: MenuSummary::default(),
    };
    session.run()?;
    Ok(session.summary)
}

struct MenuSession<'a, R, W> {
    league: &'a mut League,
    config: &'a Config,
    input: R,
    output: &'a mut W,
    summary: MenuSummary,
}

impl<R: BufRead, W: Write> MenuSession<'_, R, W> {
    fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.print_menu()?;

            // End of input behaves like choosing to exit
            let Some(choice) = self.prompt(PROMPT_OPTION)? else {
                writeln!(self.output)?;
                writeln!(self.output, "{MSG_EXIT}")?;
                return Ok(());
            };

            match MenuOption::from_input(&choice) {
                Some(MenuOption::AddTeam) => self.add_team()?,
                Some(MenuOption::RecordMatch) => self.record_match()?,
                Some(MenuOption::ShowStandings) => self.show_standings()?,
                Some(MenuOption::Exit) => {
                    writeln!(self.output, "{MSG_EXIT}")?;
                    return Ok(());
                }
                None => {
                    tracing::debug!("Invalid menu option: {choice:?}");
                    writeln!(self.output, "{MSG_INVALID_OPTION}")?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.config.league_title)?;
        for option in MenuOption::ALL {
            writeln!(self.output, "{}. {}", option.key(), option.label())?;
        }
        Ok(())
    }

    /// Writes `prompt` and reads one line without its line ending.
    /// Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompts for a team name; blank input and end of input both yield `None`.
    fn prompt_name(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .prompt(prompt)?
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty()))
    }

    fn reject(&mut self, message: &str) -> Result<(), AppError> {
        self.summary.rejected += 1;
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn add_team(&mut self) -> Result<(), AppError> {
        let Some(name) = self.prompt_name(PROMPT_TEAM_NAME)? else {
            return self.reject(MSG_EMPTY_TEAM_NAME);
        };

        match self.league.add_team(&name) {
            Ok(_) => {
                self.summary.teams_added += 1;
                writeln!(self.output, "Equipo '{name}' agregado.")?;
                Ok(())
            }
            Err(e) => self.reject(&e.to_string()),
        }
    }

    fn record_match(&mut self) -> Result<(), AppError> {
        let Some(home_name) = self.prompt_name(PROMPT_HOME_NAME)? else {
            return self.reject(MSG_EMPTY_HOME_NAME);
        };
        let home_goals = self.prompt(PROMPT_HOME_GOALS)?;

        let Some(away_name) = self.prompt_name(PROMPT_AWAY_NAME)? else {
            return self.reject(MSG_EMPTY_AWAY_NAME);
        };
        let away_goals = self.prompt(PROMPT_AWAY_GOALS)?;

        let goals = (
            home_goals.as_deref().and_then(parse_goals),
            away_goals.as_deref().and_then(parse_goals),
        );
        let (Some(home_goals), Some(away_goals)) = goals else {
            return self.reject(MSG_INVALID_MATCH_DATA);
        };

        match self
            .league
            .record_match(&home_name, home_goals, &away_name, away_goals)
        {
            Ok(()) => {
                self.summary.matches_recorded += 1;
                writeln!(self.output, "{MSG_MATCH_RECORDED}")?;
                Ok(())
            }
            Err(e) => self.reject(&e.to_string()),
        }
    }

    fn show_standings(&mut self) -> Result<(), AppError> {
        let standings = self.league.standings();
        writeln!(self.output)?;
        for line in render_table(&standings, self.config.name_column_width) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (League, MenuSummary, String) {
        let mut league = League::new();
        let mut output = Vec::new();
        let summary = run_menu(
            &mut league,
            &Config::default(),
            Cursor::new(script.to_string()),
            &mut output,
        )
        .unwrap();
        (league, summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_menu_option_parsing() {
        assert_eq!(MenuOption::from_input("1"), Some(MenuOption::AddTeam));
        assert_eq!(MenuOption::from_input(" 2 "), Some(MenuOption::RecordMatch));
        assert_eq!(MenuOption::from_input("3"), Some(MenuOption::ShowStandings));
        assert_eq!(MenuOption::from_input("0"), Some(MenuOption::Exit));
        assert_eq!(MenuOption::from_input("4"), None);
        assert_eq!(MenuOption::from_input(""), None);
        assert_eq!(MenuOption::from_input("uno"), None);
    }

    #[test]
    fn test_parse_goals() {
        assert_eq!(parse_goals("3"), Some(3));
        assert_eq!(parse_goals(" 0 "), Some(0));
        assert_eq!(parse_goals("-1"), None);
        assert_eq!(parse_goals("dos"), None);
        assert_eq!(parse_goals(""), None);
    }

    #[test]
    fn test_menu_prints_title_and_options() {
        let (_, _, output) = run_script("0\n");
        assert!(output.contains(crate::constants::DEFAULT_LEAGUE_TITLE));
        assert!(output.contains("1. Agregar Equipo"));
        assert!(output.contains("2. Registrar Partido"));
        assert!(output.contains("3. Mostrar Tabla de Posiciones"));
        assert!(output.contains("0. Salir"));
        assert!(output.trim_end().ends_with(MSG_EXIT));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (league, summary, output) = run_script("1\nEmelec\n");
        assert_eq!(league.len(), 1);
        assert_eq!(summary.teams_added, 1);
        assert!(output.trim_end().ends_with(MSG_EXIT));
    }

    #[test]
    fn test_add_team_messages() {
        let (league, summary, output) = run_script("1\nRiver\n1\nriver\n1\n   \n0\n");
        assert_eq!(league.len(), 1);
        assert!(output.contains("Equipo 'River' agregado."));
        assert!(output.contains("El equipo ya está registrado."));
        assert!(output.contains(MSG_EMPTY_TEAM_NAME));
        assert_eq!(summary.teams_added, 1);
        assert_eq!(summary.rejected, 2);
    }

    #[test]
    fn test_record_match_flow() {
        let (league, summary, output) = run_script("1\nA\n1\nB\n2\nA\n2\nB\n1\n0\n");
        assert!(output.contains(MSG_MATCH_RECORDED));
        assert_eq!(summary.matches_recorded, 1);
        assert_eq!(league.find("A").unwrap().points(), 3);
        assert_eq!(league.find("B").unwrap().lost(), 1);
    }

    #[test]
    fn test_record_match_invalid_goals_records_nothing() {
        let (league, summary, output) = run_script("1\nA\n1\nB\n2\nA\ndos\nB\n1\n0\n");
        assert!(output.contains(MSG_INVALID_MATCH_DATA));
        assert_eq!(summary.matches_recorded, 0);
        assert_eq!(league.find("A").unwrap().played(), 0);
    }

    #[test]
    fn test_record_match_empty_home_returns_to_menu() {
        let (_, summary, output) = run_script("2\n\n0\n");
        assert!(output.contains(MSG_EMPTY_HOME_NAME));
        assert!(!output.contains(PROMPT_HOME_GOALS));
        assert_eq!(summary.rejected, 1);
    }

    #[test]
    fn test_record_match_empty_away_returns_to_menu() {
        let (_, _, output) = run_script("2\nA\n1\n\n0\n");
        assert!(output.contains(MSG_EMPTY_AWAY_NAME));
        assert!(!output.contains(PROMPT_AWAY_GOALS));
    }

    #[test]
    fn test_record_match_unknown_team() {
        let (_, summary, output) = run_script("1\nA\n2\nA\n1\nZ\n0\n0\n");
        assert!(output.contains("Uno o ambos equipos no están registrados."));
        assert_eq!(summary.matches_recorded, 0);
    }

    #[test]
    fn test_show_standings_empty() {
        let (_, _, output) = run_script("3\n0\n");
        assert!(output.contains("Tabla de Posiciones:"));
        assert!(output.contains("No hay equipos registrados."));
    }

    #[test]
    fn test_show_standings_orders_rows() {
        let (_, _, output) = run_script("1\nLow\n1\nHigh\n2\nHigh\n3\nLow\n0\n3\n0\n");
        let high = output.find("High      ").unwrap();
        let low = output.rfind("Low       ").unwrap();
        assert!(high < low);
    }

    #[test]
    fn test_record_match_accepts_largest_score_twice() {
        let (league, summary, _) = run_script(
            "1\nA\n1\nB\n2\nA\n4294967295\nB\n0\n2\nA\n4294967295\nB\n0\n0\n",
        );
        assert_eq!(summary.matches_recorded, 2);
        let a = league.find("A").unwrap();
        assert_eq!(a.goals_for(), 2 * u64::from(u32::MAX));
        assert_eq!(a.points(), 6);
    }

    #[test]
    fn test_record_match_score_beyond_u32_is_invalid() {
        let (league, _, output) = run_script("1\nA\n1\nB\n2\nA\n4294967296\nB\n0\n0\n");
        assert!(output.contains(MSG_INVALID_MATCH_DATA));
        assert_eq!(league.find("A").unwrap().played(), 0);
    }

    #[test]
    fn test_invalid_option() {
        let (_, summary, output) = run_script("9\n0\n");
        assert!(output.contains(MSG_INVALID_OPTION));
        assert_eq!(summary, MenuSummary::default());
    }

    #[test]
    fn test_windows_line_endings() {
        let (league, _, _) = run_script("1\r\nEmelec\r\n0\r\n");
        assert!(league.find("Emelec").is_some());
    }
}

use std::path::Path;

use thiserror::Error;

use crate::core::types::{Field, Score};
use crate::registry::audit::{check_not_blank, check_present, InputError};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid script: {0}")]
    InvalidFormat(String),

    #[error("Line {line}: {source}")]
    Input { line: usize, source: InputError },
}

/// One scoreboard operation read from a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start {
        home_team: String,
        away_team: String,
    },
    Update {
        home_team: String,
        away_team: String,
        score: Score,
    },
    Finish {
        home_team: String,
        away_team: String,
    },
    Summary,
}

/// A command together with its 1-based line number in the script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub line: usize,
    pub command: Command,
}

/// Parse a replay script file.
///
/// Files ending in `.csv` are comma separated, anything else is tab separated.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_script_file(path: &Path) -> Result<Vec<ScriptStep>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_script_text(&content, delimiter_for(path))
}

/// Field delimiter implied by a script's extension
pub fn delimiter_for(path: &Path) -> char {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        ','
    } else {
        '\t'
    }
}

/// Parse replay script text with rows: action, home team, away team, [home score, away score]
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for unknown actions or bad scores, and
/// `ParseError::Input` for missing or blank team names.
pub fn parse_script_text(text: &str, delimiter: char) -> Result<Vec<ScriptStep>, ParseError> {
    let mut steps = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;
        let fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();
        let command = parse_command(&fields, line_num)?;
        steps.push(ScriptStep {
            line: line_num,
            command,
        });
    }

    Ok(steps)
}

fn parse_command(fields: &[&str], line_num: usize) -> Result<Command, ParseError> {
    let action = fields.first().copied().unwrap_or_default().to_lowercase();

    let command = match action.as_str() {
        "start" => {
            let (home_team, away_team) = parse_teams(fields, line_num)?;
            Command::Start {
                home_team,
                away_team,
            }
        }
        "update" => {
            let (home_team, away_team) = parse_teams(fields, line_num)?;
            let home = parse_score(fields, 3, Field::HomeScore, line_num)?;
            let away = parse_score(fields, 4, Field::AwayScore, line_num)?;
            Command::Update {
                home_team,
                away_team,
                score: Score::new(home, away),
            }
        }
        "finish" => {
            let (home_team, away_team) = parse_teams(fields, line_num)?;
            Command::Finish {
                home_team,
                away_team,
            }
        }
        "summary" => Command::Summary,
        other => {
            return Err(ParseError::InvalidFormat(format!(
                "Unknown action on line {line_num}: '{other}'"
            )))
        }
    };

    Ok(command)
}

fn parse_teams(fields: &[&str], line_num: usize) -> Result<(String, String), ParseError> {
    let to_parse_error = |source| ParseError::Input {
        line: line_num,
        source,
    };

    let home = check_present(Field::HomeTeam, fields.get(1).copied()).map_err(to_parse_error)?;
    let away = check_present(Field::AwayTeam, fields.get(2).copied()).map_err(to_parse_error)?;
    check_not_blank(Field::HomeTeam, home).map_err(to_parse_error)?;
    check_not_blank(Field::AwayTeam, away).map_err(to_parse_error)?;

    Ok((home.to_string(), away.to_string()))
}

fn parse_score(
    fields: &[&str],
    index: usize,
    field: Field,
    line_num: usize,
) -> Result<u32, ParseError> {
    let raw = fields.get(index).copied().ok_or_else(|| {
        ParseError::InvalidFormat(format!("Missing {field} on line {line_num}"))
    })?;
    raw.parse().map_err(|_| {
        ParseError::InvalidFormat(format!(
            "Invalid {field} on line {line_num}: '{raw}' (expected a non-negative integer)"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_script() {
        let script = r"# World Cup opening day
start,Mexico,Canada
update,Mexico,Canada,0,5

summary
finish,Mexico,Canada
";
        let steps = parse_script_text(script, ',').unwrap();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].line, 2);
        assert_eq!(
            steps[1].command,
            Command::Update {
                home_team: "Mexico".to_string(),
                away_team: "Canada".to_string(),
                score: Score::new(0, 5),
            }
        );
        assert_eq!(steps[2].command, Command::Summary);
        assert_eq!(steps[3].line, 6);
    }

    #[test]
    fn test_parse_tsv_script_with_spaces_in_names() {
        let script = "START\tSouth Korea\tCosta Rica\nUpdate\t South Korea \tCosta Rica\t1\t0\n";
        let steps = parse_script_text(script, '\t').unwrap();
        assert_eq!(
            steps[0].command,
            Command::Start {
                home_team: "South Korea".to_string(),
                away_team: "Costa Rica".to_string(),
            }
        );
        assert!(matches!(
            &steps[1].command,
            Command::Update { home_team, .. } if home_team == "South Korea"
        ));
    }

    #[test]
    fn test_missing_team_is_input_error() {
        let err = parse_script_text("start,Mexico\n", ',').unwrap_err();
        assert!(matches!(
            err,
            ParseError::Input {
                line: 1,
                source: InputError::Missing(Field::AwayTeam)
            }
        ));
    }

    #[test]
    fn test_blank_team_is_input_error() {
        let err = parse_script_text("finish, ,Canada\n", ',').unwrap_err();
        assert!(matches!(
            err,
            ParseError::Input {
                line: 1,
                source: InputError::Blank(Field::HomeTeam)
            }
        ));
    }

    #[test]
    fn test_negative_score_rejected() {
        let err = parse_script_text("update,Mexico,Canada,-1,0\n", ',').unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
        assert!(err.to_string().contains("Home Team Score"));
    }

    #[test]
    fn test_missing_score_rejected() {
        let err = parse_script_text("update,Mexico,Canada,1\n", ',').unwrap_err();
        assert!(err.to_string().contains("Missing Away Team Score on line 1"));
    }

    #[test]
    fn test_unknown_action_rejected() {
        let err = parse_script_text("\n\nkickoff,Mexico,Canada\n", ',').unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_delimiter_for() {
        assert_eq!(delimiter_for(Path::new("day1.csv")), ',');
        assert_eq!(delimiter_for(Path::new("day1.CSV")), ',');
        assert_eq!(delimiter_for(Path::new("day1.tsv")), '\t');
        assert_eq!(delimiter_for(Path::new("day1")), '\t');
    }
}

//! Parsing of the line-oriented input.

/// One line of user input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    /// Place a piece at lattice coordinates.
    Place(i32, i32, i32),
    /// List the legal moves of the side to move.
    Moves,
    /// Toggle legal-move markers on the board.
    Hints,
    /// Print the score.
    Score,
    /// Start a fresh game.
    Reset,
    /// Print the command list.
    Help,
    /// Leave.
    Quit,
}

/// Why a line could not be understood.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("unknown command {0:?}; type `help` for the list")]
    Unknown(String),
    #[error("expected three integers `x y z`, got {0:?}")]
    BadCoordinate(String),
}

pub const HELP: &str = "\
commands:
  x y z    place a piece (each axis 0..3, commas also accepted)
  moves    list legal moves for the side to move
  hints    toggle legal-move markers (*) on the board
  score    show the score
  reset    start a new game
  help     show this list
  quit     exit";

/// Parses one input line.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let trimmed = line.trim();
    let first = match trimmed.chars().next() {
        Some(ch) => ch,
        None => return Err(ParseError::Empty),
    };

    if first == '-' || first.is_ascii_digit() {
        return parse_coordinate(trimmed);
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "moves" | "m" => Ok(Command::Moves),
        "hints" | "h" => Ok(Command::Hints),
        "score" | "s" => Ok(Command::Score),
        "reset" | "new" => Ok(Command::Reset),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Err(ParseError::Unknown(trimmed.to_owned())),
    }
}

fn parse_coordinate(text: &str) -> Result<Command, ParseError> {
    let axes: Vec<i32> = match text
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse::<i32>)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(values) => values,
        Err(_) => return Err(ParseError::BadCoordinate(text.to_owned())),
    };

    match axes.as_slice() {
        &[x, y, z] => Ok(Command::Place(x, y, z)),
        _ => Err(ParseError::BadCoordinate(text.to_owned())),
    }
}

//! Protocol command parsing.

use std::time::Duration;

use tetrad_core::{Board, GridError, Piece};
use tetrad_engine::Algorithm;

use crate::error::ProtocolError;

/// Parameters for the `go` command.
///
/// All fields are optional; a bare `go` uses the session's configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Search with this algorithm instead of the configured one.
    pub algorithm: Option<Algorithm>,
    /// Search to this depth.
    pub depth: Option<u8>,
    /// Time budget for iterative deepening.
    pub movetime: Option<Duration>,
    /// Search for this side instead of the side to move.
    pub side: Option<Piece>,
}

/// An option settable with `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineOption {
    Algorithm(Algorithm),
    Depth(u8),
    /// `0` removes the limit.
    TimeLimit(Option<Duration>),
}

/// A parsed protocol command.
#[derive(Debug)]
pub enum Command {
    /// `hello` -- identify the engine and list its options.
    Hello,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `newgame` -- reset to the empty board.
    NewGame,
    /// `position` -- set up a board with optional moves applied.
    Position(Board),
    /// `play` -- drop a piece for the side to move.
    Play(usize),
    /// `validmoves` -- list the columns the side to move may search.
    ValidMoves,
    /// `go` -- search the current board.
    Go(GoParams),
    /// `setoption` -- change a default.
    SetOption(EngineOption),
    /// `selfplay` -- play the current board out, optionally naming both algorithms.
    SelfPlay(Option<[Algorithm; 2]>),
    /// `d` or `show` -- print the board.
    Show,
    /// `quit` -- exit.
    Quit,
    /// Unrecognized command, ignored.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "hello" => Ok(Command::Hello),
        "isready" => Ok(Command::IsReady),
        "newgame" => Ok(Command::NewGame),
        "validmoves" => Ok(Command::ValidMoves),
        "d" | "show" => Ok(Command::Show),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(&tokens[1..]),
        "play" => Ok(Command::Play(parse_column(tokens.get(1).copied(), "play")?)),
        "go" => parse_go(&tokens[1..]),
        "setoption" => parse_setoption(&tokens[1..]),
        "selfplay" => parse_selfplay(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position empty [moves 3 3 4 ...]`
/// - `position grid <grid> [moves 3 3 4 ...]`
///
/// Grids must have piece counts reachable by alternating play. Moves are
/// played for the side to move, alternating, and stop being accepted once
/// the game is decided.
fn parse_position(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let (mut board, rest) = match tokens {
        ["empty", rest @ ..] => (Board::new(), rest),
        ["grid", grid, rest @ ..] => {
            let invalid = |source: GridError| ProtocolError::InvalidGrid {
                grid: grid.to_string(),
                source,
            };
            let board: Board = grid.parse().map_err(invalid)?;
            board
                .validate_counts()
                .map_err(|e| invalid(e.into()))?;
            (board, rest)
        }
        ["grid"] => {
            return Err(ProtocolError::MissingValue {
                param: "grid".to_string(),
            });
        }
        _ => return Err(ProtocolError::MalformedPosition),
    };

    if let ["moves", moves @ ..] = rest {
        for token in moves {
            let col = parse_column(Some(*token), "moves")?;
            if board.is_terminal() {
                return Err(ProtocolError::GameOver);
            }
            board = board
                .make_move(col, board.side_to_move())
                .map_err(|source| ProtocolError::IllegalMove { col, source })?;
        }
    }

    Ok(Command::Position(board))
}

/// Parse the `go` command arguments.
///
/// Supports: algorithm, depth, movetime, side. Unknown tokens are skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "algorithm" => {
                params.algorithm = Some(parse_algorithm(tokens.get(i + 1), "algorithm")?);
                i += 2;
            }
            "depth" => {
                params.depth = Some(parse_int(tokens.get(i + 1), "depth")?);
                i += 2;
            }
            "movetime" => {
                params.movetime = Some(parse_millis(tokens.get(i + 1), "movetime")?);
                i += 2;
            }
            "side" => {
                params.side = Some(parse_side(tokens.get(i + 1))?);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    Ok(Command::Go(params))
}

/// Parse `setoption name <name> value <value>`.
fn parse_setoption(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let (name, value) = match tokens {
        ["name", name, "value", value] => (*name, value),
        ["name", name, ..] => {
            return Err(ProtocolError::MissingValue {
                param: name.to_string(),
            });
        }
        _ => {
            return Err(ProtocolError::MissingValue {
                param: "name".to_string(),
            });
        }
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "algorithm" => EngineOption::Algorithm(parse_algorithm(Some(value), name)?),
        "depth" => EngineOption::Depth(parse_int(Some(value), name)?),
        "timelimit" => {
            let limit = parse_millis(Some(value), name)?;
            EngineOption::TimeLimit((!limit.is_zero()).then_some(limit))
        }
        _ => {
            return Err(ProtocolError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::SetOption(option))
}

/// Parse `selfplay [<algo1> <algo2>]`.
fn parse_selfplay(tokens: &[&str]) -> Result<Command, ProtocolError> {
    match tokens {
        [] => Ok(Command::SelfPlay(None)),
        [first, second] => Ok(Command::SelfPlay(Some([
            parse_algorithm(Some(first), "selfplay")?,
            parse_algorithm(Some(second), "selfplay")?,
        ]))),
        _ => Err(ProtocolError::MissingValue {
            param: "selfplay".to_string(),
        }),
    }
}

fn parse_column(token: Option<&str>, param: &str) -> Result<usize, ProtocolError> {
    let value = token.ok_or_else(|| ProtocolError::MissingValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| ProtocolError::InvalidMove {
        value: value.to_string(),
    })
}

fn parse_algorithm(token: Option<&&str>, param: &str) -> Result<Algorithm, ProtocolError> {
    let value = token.ok_or_else(|| ProtocolError::MissingValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| ProtocolError::InvalidValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}

fn parse_side(token: Option<&&str>) -> Result<Piece, ProtocolError> {
    let value: u8 = parse_int(token, "side")?;
    Piece::from_value(value).ok_or_else(|| ProtocolError::InvalidValue {
        param: "side".to_string(),
        value: value.to_string(),
    })
}

/// Parse a millisecond value from a token.
fn parse_millis(token: Option<&&str>, param: &str) -> Result<Duration, ProtocolError> {
    let ms: u64 = parse_int(token, param)?;
    Ok(Duration::from_millis(ms))
}

/// Parse an integer value from a token.
fn parse_int<T: std::str::FromStr>(token: Option<&&str>, param: &str) -> Result<T, ProtocolError> {
    let value = token.ok_or_else(|| ProtocolError::MissingValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| ProtocolError::InvalidValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}

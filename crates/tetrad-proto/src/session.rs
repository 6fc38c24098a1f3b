//! Line-oriented protocol session.

use std::io::{BufRead, Write};
use std::time::Instant;

use tracing::{debug, info, warn};

use tetrad_core::Board;
use tetrad_engine::{
    Algorithm, EngineConfig, MAX_DEPTH, Outcome, SearchResult, compute_move_reporting, play_game,
    valid_moves,
};

use crate::command::{Command, EngineOption, GoParams, parse_command};
use crate::error::ProtocolError;

/// Largest `TimeLimit` advertised by `hello`, in milliseconds.
const MAX_TIME_LIMIT_MS: u64 = 600_000;

/// A protocol session: the current board, the engine defaults, and the
/// output the responses go to.
///
/// Commands are handled one at a time; `go` and `selfplay` block until the
/// engine is done.
pub struct Session<W: Write> {
    board: Board,
    config: EngineConfig,
    out: W,
}

impl<W: Write> Session<W> {
    /// Create a session on the empty board with default settings.
    pub fn new(out: W) -> Self {
        Self {
            board: Board::new(),
            config: EngineConfig::default(),
            out,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current engine defaults.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Give back the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Malformed or rejected commands are logged and skipped. Only I/O
    /// errors end the session early.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), ProtocolError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let cmd = match parse_command(trimmed) {
                Ok(cmd) => cmd,
                Err(e) => {
                    warn!(error = %e, "parse error");
                    continue;
                }
            };
            match self.dispatch(cmd) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e @ ProtocolError::Io { .. }) => return Err(e),
                Err(e) => warn!(error = %e, "command rejected"),
            }
            self.out.flush()?;
        }

        info!("tetrad shutting down");
        Ok(())
    }

    /// Handle one command. Returns `false` when the session should end.
    pub fn dispatch(&mut self, cmd: Command) -> Result<bool, ProtocolError> {
        match cmd {
            Command::Hello => self.handle_hello()?,
            Command::IsReady => writeln!(self.out, "readyok")?,
            Command::NewGame => self.board = Board::new(),
            Command::Position(board) => self.board = board,
            Command::Play(col) => self.handle_play(col)?,
            Command::ValidMoves => self.handle_validmoves()?,
            Command::Go(params) => self.handle_go(params)?,
            Command::SetOption(option) => self.handle_setoption(option)?,
            Command::SelfPlay(algorithms) => self.handle_selfplay(algorithms)?,
            Command::Show => self.handle_show()?,
            Command::Quit => return Ok(false),
            Command::Unknown(_) => {}
        }
        Ok(true)
    }

    fn handle_hello(&mut self) -> Result<(), ProtocolError> {
        let defaults = EngineConfig::default();
        let vars: Vec<String> = Algorithm::ALL.iter().map(|a| format!("var {a}")).collect();
        writeln!(self.out, "id name tetrad")?;
        writeln!(
            self.out,
            "option name Algorithm type combo default {} {}",
            defaults.algorithm,
            vars.join(" ")
        )?;
        writeln!(
            self.out,
            "option name Depth type spin default {} min 1 max {MAX_DEPTH}",
            defaults.depth
        )?;
        writeln!(
            self.out,
            "option name TimeLimit type spin default {} min 0 max {MAX_TIME_LIMIT_MS}",
            defaults.time_limit.map_or(0, |limit| limit.as_millis())
        )?;
        writeln!(self.out, "hellook")?;
        Ok(())
    }

    fn handle_play(&mut self, col: usize) -> Result<(), ProtocolError> {
        if self.board.is_terminal() {
            return Err(ProtocolError::GameOver);
        }
        let side = self.board.side_to_move();
        self.board = self
            .board
            .make_move(col, side)
            .map_err(|source| ProtocolError::IllegalMove { col, source })?;
        if let Some(outcome) = Outcome::of(&self.board) {
            writeln!(self.out, "gameover {outcome}")?;
        }
        Ok(())
    }

    fn handle_validmoves(&mut self) -> Result<(), ProtocolError> {
        let mut line = String::from("validmoves");
        if !self.board.is_terminal() {
            for col in &valid_moves(&self.board, self.board.side_to_move()) {
                line.push_str(&format!(" {col}"));
            }
        }
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    fn handle_go(&mut self, params: GoParams) -> Result<(), ProtocolError> {
        let config = EngineConfig {
            algorithm: params.algorithm.unwrap_or(self.config.algorithm),
            depth: params.depth.unwrap_or(self.config.depth),
            time_limit: params.movetime.or(self.config.time_limit),
        };
        config.validate()?;
        let side = params.side.unwrap_or_else(|| self.board.side_to_move());

        let start = Instant::now();
        let out = &mut self.out;
        let mut written = Ok(());
        let best = compute_move_reporting(&self.board, &config, side, |result: &SearchResult| {
            if written.is_ok() {
                written = write_info(out, result, start);
            }
        });
        written?;

        match best {
            Some(col) => writeln!(self.out, "bestmove {col}")?,
            None => writeln!(self.out, "bestmove none")?,
        }
        Ok(())
    }

    fn handle_setoption(&mut self, option: EngineOption) -> Result<(), ProtocolError> {
        let mut config = self.config;
        match option {
            EngineOption::Algorithm(algorithm) => config.algorithm = algorithm,
            EngineOption::Depth(depth) => config.depth = depth,
            EngineOption::TimeLimit(limit) => config.time_limit = limit,
        }
        config.validate()?;
        self.config = config;
        Ok(())
    }

    fn handle_selfplay(&mut self, algorithms: Option<[Algorithm; 2]>) -> Result<(), ProtocolError> {
        let configs = match algorithms {
            Some(pair) => pair.map(|algorithm| EngineConfig {
                algorithm,
                ..self.config
            }),
            None => [self.config; 2],
        };
        let record = play_game(self.board, configs)?;

        let moves: Vec<String> = record.moves.iter().map(ToString::to_string).collect();
        writeln!(self.out, "selfplay moves {}", moves.join(" "))?;
        writeln!(self.out, "selfplay {}", record.outcome)?;
        writeln!(self.out, "selfplay time {}", record.elapsed.as_millis())?;
        Ok(())
    }

    fn handle_show(&mut self) -> Result<(), ProtocolError> {
        writeln!(self.out, "{}", self.board.pretty())?;
        writeln!(self.out, "grid {}", self.board)?;
        Ok(())
    }
}

fn write_info<W: Write>(out: &mut W, result: &SearchResult, start: Instant) -> Result<(), ProtocolError> {
    let best = result
        .best_move
        .map_or_else(|| "none".to_string(), |col| col.to_string());
    writeln!(
        out,
        "info depth {} score {} nodes {} time {} move {}",
        result.depth,
        result.score,
        result.nodes,
        start.elapsed().as_millis(),
        best
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tetrad_core::Piece;

    use super::*;

    /// Run `script` through a fresh session and return its output lines.
    fn run_script(script: &str) -> Vec<String> {
        let mut session = Session::new(Vec::new());
        session.run(script.as_bytes()).unwrap();
        String::from_utf8(session.into_inner())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn hello_lists_options() {
        let out = run_script("hello\n");
        assert_eq!(out[0], "id name tetrad");
        assert_eq!(
            out[1],
            "option name Algorithm type combo default iterative var minimax var alphabeta var iterative"
        );
        assert_eq!(out[2], "option name Depth type spin default 4 min 1 max 42");
        assert_eq!(out[3], "option name TimeLimit type spin default 2500 min 0 max 600000");
        assert_eq!(out[4], "hellook");
    }

    #[test]
    fn isready_and_unknown() {
        assert_eq!(run_script("frobnicate\nisready\n"), vec!["readyok"]);
    }

    #[test]
    fn quit_stops_reading() {
        assert_eq!(run_script("isready\nquit\nisready\n"), vec!["readyok"]);
    }

    #[test]
    fn bad_commands_do_not_end_session() {
        let out = run_script("go depth abc\nplay 9\nsetoption name Depth value 0\nisready\n");
        assert_eq!(out, vec!["readyok"]);
    }

    #[test]
    fn go_alphabeta_reports_and_answers() {
        let out = run_script("go algorithm alphabeta depth 4\n");
        assert_eq!(out.len(), 2);
        assert!(out[0].starts_with("info depth 4 score 6 nodes 304 time "), "{}", out[0]);
        assert!(out[0].ends_with(" move 3"));
        assert_eq!(out[1], "bestmove 3");
    }

    #[test]
    fn go_iterative_reports_each_depth() {
        let out = run_script("setoption name TimeLimit value 0\ngo depth 3\n");
        let depths: Vec<&str> = out
            .iter()
            .filter(|line| line.starts_with("info"))
            .map(|line| line.split_whitespace().nth(2).unwrap())
            .collect();
        assert_eq!(depths, vec!["1", "2", "3"]);
        assert_eq!(out.last().unwrap(), "bestmove 3");
    }

    #[test]
    fn go_blocks_threat() {
        let out = run_script(
            "position grid 0000000/0000000/0000000/0000000/1000000/2220110\ngo side 1 algorithm minimax depth 2\n",
        );
        assert_eq!(out.last().unwrap(), "bestmove 3");
    }

    #[test]
    fn go_on_finished_game() {
        let out = run_script("position empty moves 0 6 1 6 2 6 3\ngo\n");
        assert_eq!(out, vec!["bestmove none"]);
    }

    #[test]
    fn play_reports_game_over() {
        let out = run_script("position empty moves 0 6 1 6 2 6\nplay 3\nplay 4\n");
        assert_eq!(out, vec!["gameover winner 1"]);
    }

    #[test]
    fn validmoves_lists_center_first() {
        let out = run_script("validmoves\nposition grid 0000000/0000000/0000000/0000000/1000000/2220110\nvalidmoves\n");
        assert_eq!(out, vec!["validmoves 3 2 4 1 5 0 6", "validmoves 3"]);
    }

    #[test]
    fn setoption_updates_config() {
        let mut session = Session::new(Vec::new());
        session
            .run("setoption name Algorithm value minimax\nsetoption name Depth value 6\nsetoption name TimeLimit value 100\n".as_bytes())
            .unwrap();
        assert_eq!(session.config().algorithm, Algorithm::Minimax);
        assert_eq!(session.config().depth, 6);
        assert_eq!(session.config().time_limit, Some(Duration::from_millis(100)));
    }

    #[test]
    fn rejected_option_keeps_config() {
        let mut session = Session::new(Vec::new());
        session.run("setoption name Depth value 99\n".as_bytes()).unwrap();
        assert_eq!(session.config().depth, 4);
    }

    #[test]
    fn position_and_newgame() {
        let mut session = Session::new(Vec::new());
        session.run("position empty moves 3 3\n".as_bytes()).unwrap();
        assert_eq!(session.board().side_to_move(), Piece::One);
        assert_eq!(session.board().occupied(), 2);
        session.run("newgame\n".as_bytes()).unwrap();
        assert_eq!(*session.board(), Board::new());
    }

    #[test]
    fn selfplay_finishes_from_winning_position() {
        let out = run_script("position empty moves 0 0 1 1 2 2\nsetoption name Depth value 2\nselfplay minimax alphabeta\n");
        assert_eq!(out[0], "selfplay moves 3");
        assert_eq!(out[1], "selfplay winner 1");
        assert!(out[2].starts_with("selfplay time "));
    }

    #[test]
    fn show_prints_board_and_grid() {
        let out = run_script("position empty moves 3\nd\n");
        assert_eq!(out.len(), 8);
        assert_eq!(out[5], ". . . X . . .");
        assert_eq!(out[6], "0 1 2 3 4 5 6");
        assert_eq!(out[7], "grid 0000000/0000000/0000000/0000000/0000000/0001000");
    }
}

//! Terminal game driver: input parsing, the interactive loop, replay and
//! random self-play.

use crate::config::CliConfig;
use crate::console::Console;
use chessboard_core::{Color, Coordinate, Move, Piece};
use chessboard_engine::{all_legal_moves, Board, BoardError, GameStatus};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// A line typed at the `play` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Move(Coordinate, Coordinate),
    Moves(Coordinate),
    Board,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("not a square: {0:?}")]
    BadSquare(String),
    #[error("unrecognized input: {0:?} (try e2e4, moves e2, board, quit)")]
    Unrecognized(String),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no piece on {0}")]
    EmptySquare(Coordinate),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn square(text: &str) -> Result<Coordinate, InputError> {
    Coordinate::from_algebraic(text).ok_or_else(|| InputError::BadSquare(text.to_string()))
}

/// Parses a coordinate move written as `e2e4` or `e2 e4`.
pub fn parse_move(text: &str) -> Result<(Coordinate, Coordinate), InputError> {
    let compact: String = text.split_whitespace().collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(InputError::Unrecognized(text.to_string()));
    }
    Ok((square(&compact[..2])?, square(&compact[2..])?))
}

/// Parses one line of interactive input.
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let line = line.trim();
    let mut words = line.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some("quit" | "exit"), None, None) => Ok(Input::Quit),
        (Some("board"), None, None) => Ok(Input::Board),
        (Some("moves"), Some(from), None) => Ok(Input::Moves(square(from)?)),
        _ => parse_move(line).map(|(from, to)| Input::Move(from, to)),
    }
}

/// Groups a history into numbered full moves: `1. e4 e5 2. Nf3`.
pub fn move_list(history: &[Move]) -> String {
    history
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let moves: Vec<String> = pair.iter().map(Move::description).collect();
            format!("{}. {}", i + 1, moves.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serialized outcome of a game for `--json` output.
#[derive(Serialize)]
pub struct GameSummary<'a> {
    pub moves: &'a [Move],
    pub status: GameStatus,
    pub next_turn: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Color>,
    pub white_score: u32,
    pub black_score: u32,
}

/// One game played from the terminal.
pub struct Session {
    board: Board<Console>,
    config: CliConfig,
}

impl Session {
    pub fn new(config: CliConfig) -> Self {
        Session {
            board: Board::with_delegate(Console::new()),
            config,
        }
    }

    /// Moves whatever stands on `from` to `to`.
    pub fn play_move(&mut self, from: Coordinate, to: Coordinate) -> Result<Move, SessionError> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or(SessionError::EmptySquare(from))?;
        Ok(self.board.move_piece(piece, from, to)?)
    }

    pub fn summary(&self) -> GameSummary<'_> {
        GameSummary {
            moves: self.board.history(),
            status: self.board.status(),
            next_turn: self.board.next_turn(),
            winner: self.board.status().winner(self.board.next_turn()),
            white_score: self.board.score(Color::White),
            black_score: self.board.score(Color::Black),
        }
    }

    /// Writes the diagram followed by the side to move and the status.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.board.position().diagram(self.config.unicode()))?;
        for color in Color::ALL {
            let taken: Vec<String> = self
                .board
                .delegate()
                .captured(color)
                .map(|p| self.glyph(p).to_string())
                .collect();
            if !taken.is_empty() {
                writeln!(out, "{color} lost: {}", taken.join(" "))?;
            }
        }
        self.write_status(out)
    }

    fn glyph(&self, piece: Piece) -> char {
        if self.config.unicode() {
            piece.symbol()
        } else {
            piece.to_char()
        }
    }

    fn write_status(&self, out: &mut impl Write) -> io::Result<()> {
        let turn = self.board.next_turn();
        match self.board.status() {
            GameStatus::Checkmate => writeln!(out, "Checkmate, {} wins", turn.opposite()),
            GameStatus::Stalemate => writeln!(out, "Stalemate"),
            GameStatus::Check => writeln!(out, "{turn} to move (check)"),
            GameStatus::Ongoing => writeln!(out, "{turn} to move"),
        }
    }

    /// Prints what the last move did, then the board.
    fn report(&mut self, out: &mut impl Write) -> io::Result<()> {
        for line in self.board.delegate_mut().drain() {
            writeln!(out, "{line}")?;
        }
        if self.config.show_moves {
            writeln!(out, "{}", move_list(self.board.history()))?;
        }
        self.render(out)
    }

    /// Runs the interactive loop until `quit`, end of input, or the game ends.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<(), SessionError> {
        self.render(out)?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_input(&line) {
                Ok(Input::Quit) => break,
                Ok(Input::Board) => self.render(out)?,
                Ok(Input::Moves(from)) => {
                    let targets: Vec<String> = self
                        .board
                        .valid_moves_from(from)
                        .into_iter()
                        .map(|c| c.to_algebraic())
                        .collect();
                    if targets.is_empty() {
                        writeln!(out, "no moves from {from}")?;
                    } else {
                        writeln!(out, "{from}: {}", targets.join(" "))?;
                    }
                }
                Ok(Input::Move(from, to)) => match self.play_move(from, to) {
                    Ok(_) => {
                        self.report(out)?;
                        if self.board.status().is_terminal() {
                            break;
                        }
                    }
                    Err(e) => writeln!(out, "{e}")?,
                },
                Err(e) => writeln!(out, "{e}")?,
            }
        }
        Ok(())
    }

    /// Applies coordinate moves in order, stopping at the first bad one.
    pub fn replay<S: AsRef<str>>(&mut self, moves: &[S]) -> Result<(), SessionError> {
        for text in moves {
            let (from, to) = parse_move(text.as_ref())?;
            self.play_move(from, to)?;
        }
        Ok(())
    }

    /// Plays uniformly random legal moves until the game ends or `max_plies`
    /// moves have been made.
    pub fn self_play(&mut self, rng: &mut impl Rng, max_plies: usize) -> Result<(), SessionError> {
        while !self.board.status().is_terminal() && self.board.history().len() < max_plies {
            let candidates = all_legal_moves(self.board.position(), self.board.next_turn());
            let Some(&(from, to)) = candidates.choose(rng) else {
                break;
            };
            self.play_move(from, to)?;
        }
        tracing::info!(
            plies = self.board.history().len(),
            status = %self.board.status(),
            "self-play finished"
        );
        Ok(())
    }

    /// Writes the move list and the final diagram.
    pub fn finish(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.board.delegate_mut().drain();
        writeln!(out, "{}", move_list(self.board.history()))?;
        self.render(out)
    }
}

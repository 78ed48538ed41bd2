//! Errors used throughout the cube chess core.
//!
//! `ChessErrors` is the single error type returned by fallible operations:
//! parsing square keys and notation, building states, applying moves and
//! stepping through a game record. Reaching a terminal position is not an
//! error (see `GameStatus`), and a step that has no neighbour is an `Option`,
//! not an error.
//!
//! Usage guidelines:
//! - Parsing variants (`InvalidSquareString`, `InvalidFaceName`,
//!   `InvalidFileOrRank`, `InvalidNotation`) are recoverable input errors and
//!   suitable for showing to a user.
//! - `NoPieceOnSquare` and `SquareOccupied` mean the caller handed in a move
//!   or layout that does not match the board; nothing was changed.
//! - `IllegalMove`, `NothingToUndo` and `NothingToRedo` come from
//!   `GameRecord` and describe a request that cannot be honoured right now.
//! - `InvalidState` signals an internal failure and is not expected in
//!   normal use.

use std::error::Error;
use std::fmt;

use crate::topology::square::Square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A square key was not of the form `face:u:v`, or a label did not parse.
    ///
    /// Payload: the offending text.
    InvalidSquareString(String),

    /// The face part of a square key is not one of the six face names.
    InvalidFaceName(String),

    /// File/rank outside `0..BOARD_SIZE`.
    ///
    /// Payload: (u, v).
    InvalidFileOrRank((u8, u8)),

    /// A move label could not be interpreted as a piece move or a cube move.
    InvalidNotation(String),

    /// A piece move was applied whose origin square is empty.
    NoPieceOnSquare(Square),

    /// Two pieces were supplied for the same square.
    SquareOccupied(Square),

    /// The move is not in the legal move list of the current position.
    ///
    /// Payload: the move's notation.
    IllegalMove(String),

    /// Undo was requested with an empty history.
    NothingToUndo,

    /// Redo was requested with nothing undone.
    NothingToRedo,

    /// Internal failure outside the caller's control (a perft worker died).
    InvalidState(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidSquareString(key) => write!(f, "invalid square: {key}"),
            ChessErrors::InvalidFaceName(face) => write!(f, "invalid face name: {face}"),
            ChessErrors::InvalidFileOrRank((u, v)) => {
                write!(f, "file/rank out of range: u={u} v={v}")
            }
            ChessErrors::InvalidNotation(text) => write!(f, "invalid move notation: {text}"),
            ChessErrors::NoPieceOnSquare(square) => write!(f, "no piece on {square}"),
            ChessErrors::SquareOccupied(square) => write!(f, "square {square} is already occupied"),
            ChessErrors::IllegalMove(notation) => write!(f, "illegal move: {notation}"),
            ChessErrors::NothingToUndo => write!(f, "nothing to undo"),
            ChessErrors::NothingToRedo => write!(f, "nothing to redo"),
            ChessErrors::InvalidState(msg) => write!(f, "invalid state: {msg}"),
        }
    }
}

impl Error for ChessErrors {}

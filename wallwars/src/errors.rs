use crate::{BoardDims, Position};

/// Why a notation token could not be decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotationErrorReason {
    /// Tokens are two characters for a square, three for a wall slot.
    WrongLength { len: usize },
    InvalidColumn(char),
    InvalidRow(char),
    /// Only `v`/`V` and `>` are accepted after the square.
    InvalidSuffix(char),
}

/// The error type for decoding a single notation token such as `"e5v"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidNotation {
    pub token: String,
    pub reason: NotationErrorReason,
}

impl std::error::Error for InvalidNotation {}

impl std::fmt::Display for InvalidNotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            NotationErrorReason::WrongLength { len } => write!(
                f,
                "Notation '{}' has {} characters, expected 2 or 3",
                self.token, len
            ),
            NotationErrorReason::InvalidColumn(c) => write!(
                f,
                "Notation '{}' starts with '{}', which is not a column letter",
                self.token, c
            ),
            NotationErrorReason::InvalidRow(c) => write!(
                f,
                "Notation '{}' has '{}' as its row, expected a digit 1-9 or 'x' for 10",
                self.token, c
            ),
            NotationErrorReason::InvalidSuffix(c) => write!(
                f,
                "Notation '{}' ends with '{}', expected 'v' or '>'",
                self.token, c
            ),
        }
    }
}

/// The error type for [`Position::to_notation()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnnotatablePosition {
    /// Pillars have no notation.
    Pillar(Position),
    /// The column is past `z` or the row is past `x` (10).
    OutOfRange(Position),
}

impl std::error::Error for UnnotatablePosition {}

impl std::fmt::Display for UnnotatablePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnnotatablePosition::Pillar(pos) => {
                write!(f, "Position {} is a pillar and has no notation", pos)
            }
            UnnotatablePosition::OutOfRange(pos) => {
                write!(f, "Position {} is outside the range covered by the notation", pos)
            }
        }
    }
}

/// The error type for parsing a move string such as `"e5v e5>"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidMove {
    Empty,
    TooManyActions { count: usize },
    InvalidAction {
        action_idx: usize,
        err: InvalidNotation,
    },
}

impl std::error::Error for InvalidMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidMove::InvalidAction { err, .. } => Some(err),
            _ => None,
        }
    }
}

fn ordinal_number(num: usize) -> &'static str {
    match num {
        0 => "first",
        1 => "second",
        _ => "extra",
    }
}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::Empty => write!(f, "The move contains no actions"),
            InvalidMove::TooManyActions { count } => write!(
                f,
                "The move contains {} actions, but at most two are allowed per turn",
                count
            ),
            InvalidMove::InvalidAction { action_idx, err } => write!(
                f,
                "The {} action of the move is invalid: {}",
                ordinal_number(*action_idx),
                err
            ),
        }
    }
}

/// The error type for parsing a puzzle move list such as `"e5,e5v;d4>"`.
///
/// Both indices are 0-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidMoveList {
    pub slot: usize,
    pub alternative: usize,
    pub err: InvalidMove,
}

impl std::error::Error for InvalidMoveList {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.err)
    }
}

impl std::fmt::Display for InvalidMoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Alternative {} of the move for turn {} is invalid",
            self.alternative + 1,
            self.slot + 1
        )
    }
}

/// Moves have one or two actions; comparing anything else is an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveLengthError {
    pub len: usize,
}

impl std::error::Error for MoveLengthError {}

impl std::fmt::Display for MoveLengthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cannot compare a move with {} actions, moves have one or two",
            self.len
        )
    }
}

/// The error type for converting puzzle board settings into internal coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidBoardSettings {
    EmptyBoard,
    /// The doubled grid of these dimensions doesn't fit in memory.
    TooLarge { dims: BoardDims },
    InvalidNotation {
        field: &'static str,
        err: InvalidNotation,
    },
    NotGround {
        field: &'static str,
        pos: Position,
    },
    OutOfBounds {
        field: &'static str,
        pos: Position,
    },
}

impl std::error::Error for InvalidBoardSettings {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidBoardSettings::InvalidNotation { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for InvalidBoardSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidBoardSettings::EmptyBoard => write!(f, "The board has no squares"),
            InvalidBoardSettings::TooLarge { dims } => write!(
                f,
                "A board of {} x {} squares is too large",
                dims.rows, dims.cols
            ),
            InvalidBoardSettings::InvalidNotation { field, .. } => {
                write!(f, "Could not decode {}", field)
            }
            InvalidBoardSettings::NotGround { field, pos } => {
                write!(f, "{} at {} is not a square", field, pos)
            }
            InvalidBoardSettings::OutOfBounds { field, pos } => {
                write!(f, "{} at {} lies outside the board", field, pos)
            }
        }
    }
}

/// The error type for grading a played move against a puzzle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PuzzleError {
    InvalidMoveList(InvalidMoveList),
    /// The game has more turns than the puzzle has moves.
    NoSlotForTurn { turn: usize },
    /// The history reports a turn it holds no move for.
    MissingHistoryEntry { turn: usize },
    MoveLength { turn: usize, err: MoveLengthError },
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PuzzleError::InvalidMoveList(err) => Some(err),
            PuzzleError::MoveLength { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PuzzleError::InvalidMoveList(_) => write!(f, "The puzzle's move list is invalid"),
            PuzzleError::NoSlotForTurn { turn } => {
                write!(f, "The puzzle has no move for turn {}", turn)
            }
            PuzzleError::MissingHistoryEntry { turn } => {
                write!(f, "The game history has no move for turn {}", turn)
            }
            PuzzleError::MoveLength { turn, .. } => {
                write!(f, "The move of turn {} cannot be compared", turn)
            }
        }
    }
}

impl From<InvalidMoveList> for PuzzleError {
    fn from(err: InvalidMoveList) -> Self {
        PuzzleError::InvalidMoveList(err)
    }
}

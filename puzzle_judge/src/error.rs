use wallwars::{InvalidBoardSettings, InvalidMove, InvalidMoveList, Position, PuzzleError};

#[derive(Debug)]
/// Error type for grading one puzzle.
pub enum JudgeError {
    InvalidBoardSettings {
        puzzle_id: String,
        err: InvalidBoardSettings,
    },
    InvalidMoveList {
        puzzle_id: String,
        err: InvalidMoveList,
    },
    InvalidPlayedMove {
        turn: usize,
        err: InvalidMove,
    },
    PlayedOffBoard {
        turn: usize,
        pos: Position,
    },
    Grading {
        turn: usize,
        err: PuzzleError,
    },
}

impl std::error::Error for JudgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JudgeError::InvalidBoardSettings { err, .. } => Some(err),
            JudgeError::InvalidMoveList { err, .. } => Some(err),
            JudgeError::InvalidPlayedMove { err, .. } => Some(err),
            JudgeError::Grading { err, .. } => Some(err),
            JudgeError::PlayedOffBoard { .. } => None,
        }
    }
}

impl std::fmt::Display for JudgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JudgeError::InvalidBoardSettings { puzzle_id, .. } => {
                write!(f, "Puzzle '{}' has invalid board settings", puzzle_id)
            }
            JudgeError::InvalidMoveList { puzzle_id, .. } => {
                write!(f, "Puzzle '{}' has an invalid move list", puzzle_id)
            }
            JudgeError::InvalidPlayedMove { turn, .. } => {
                write!(f, "The move played in turn {} could not be parsed", turn)
            }
            JudgeError::PlayedOffBoard { turn, pos } => write!(
                f,
                "The move played in turn {} touches {}, which is off the board",
                turn, pos
            ),
            JudgeError::Grading { turn, .. } => {
                write!(f, "Turn {} could not be graded", turn)
            }
        }
    }
}

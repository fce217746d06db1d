use tracing::debug;

use crate::{same_move, GameHistory, ParsedPuzzle, Puzzle, PuzzleError, PuzzleMoveList};

/// How far a game has come in solving a puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleProgress {
    /// No graded turn has been played yet.
    NotStarted,
    /// Every graded turn so far was correct, but the solution isn't complete.
    InProgress,
    /// The first graded turn whose move matched no alternative.
    Failed { turn: usize },
    /// Every turn of the solution was played correctly.
    Solved,
}

/// Whether the most recently played move of `state` is accepted by `puzzle`.
///
/// Moves before the puzzle's start index, and an empty game, are always
/// correct without looking at the move list. Otherwise the move list is
/// parsed on every call, use
/// [`ParsedPuzzle::is_last_move_correct()`] to check repeatedly.
pub fn is_last_move_correct(
    state: &impl GameHistory,
    puzzle: &Puzzle,
) -> Result<bool, PuzzleError> {
    let turn_count = state.turn_count();
    if turn_count == 0 || turn_count < puzzle.start_index {
        return Ok(true);
    }
    let moves = puzzle.move_list()?;
    last_move_matches(state, puzzle.start_index, &moves)
}

impl ParsedPuzzle {
    /// Same as [`is_last_move_correct()`], without reparsing the move list.
    pub fn is_last_move_correct(&self, state: &impl GameHistory) -> Result<bool, PuzzleError> {
        last_move_matches(state, self.puzzle.start_index, &self.moves)
    }

    /// Grades every turn from the start index up to the current one.
    ///
    /// Turns past the end of the solution are not graded. A start index past
    /// the end of the solution leaves no turn to grade, which is an error.
    pub fn progress(&self, state: &impl GameHistory) -> Result<PuzzleProgress, PuzzleError> {
        let turn_count = state.turn_count();
        if turn_count == 0 || turn_count < self.puzzle.start_index {
            return Ok(PuzzleProgress::NotStarted);
        }
        let first_graded = self.puzzle.start_index.max(1);
        if first_graded > self.moves.len() {
            return Err(PuzzleError::NoSlotForTurn { turn: first_graded });
        }
        let last_graded = turn_count.min(self.moves.len());
        for turn in first_graded..=last_graded {
            if !turn_matches(state, &self.moves, turn)? {
                return Ok(PuzzleProgress::Failed { turn });
            }
        }
        if turn_count >= self.moves.len() {
            Ok(PuzzleProgress::Solved)
        } else {
            Ok(PuzzleProgress::InProgress)
        }
    }
}

fn last_move_matches(
    state: &impl GameHistory,
    start_index: usize,
    moves: &PuzzleMoveList,
) -> Result<bool, PuzzleError> {
    let turn_count = state.turn_count();
    if turn_count == 0 || turn_count < start_index {
        return Ok(true);
    }
    turn_matches(state, moves, turn_count)
}

fn turn_matches(
    state: &impl GameHistory,
    moves: &PuzzleMoveList,
    turn: usize,
) -> Result<bool, PuzzleError> {
    let alternatives = moves.slot(turn).ok_or(PuzzleError::NoSlotForTurn { turn })?;
    let played = state
        .move_at(turn)
        .ok_or(PuzzleError::MissingHistoryEntry { turn })?;
    for (idx, alternative) in alternatives.iter().enumerate() {
        if same_move(alternative, played).map_err(|err| PuzzleError::MoveLength { turn, err })? {
            debug!(turn, alternative = idx, played = %played, "Move accepted");
            return Ok(true);
        }
    }
    debug!(turn, played = %played, "Move matches no alternative");
    Ok(false)
}

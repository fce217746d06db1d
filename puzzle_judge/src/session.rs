use tracing::{debug, trace};
use wallwars::{
    BoardSettings, GameHistory, GameState, Move, ParsedPuzzle, Puzzle, PuzzleProgress,
};

use crate::error::JudgeError;

/// How a single played turn was judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Played before the puzzle's start index.
    Setup,
    Correct,
    Incorrect,
    /// Played after the end of the solution.
    Ungraded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradedTurn {
    pub turn: usize,
    pub played: Move,
    /// Whether the solver, rather than the opponent, made this move.
    pub by_solver: bool,
    pub verdict: Verdict,
}

/// A puzzle being played through, one move at a time.
pub struct PuzzleSession {
    puzzle: ParsedPuzzle,
    board: BoardSettings,
    state: GameState,
}

impl PuzzleSession {
    pub fn new(puzzle: Puzzle) -> Result<Self, JudgeError> {
        let board = puzzle
            .board_settings()
            .map_err(|err| JudgeError::InvalidBoardSettings {
                puzzle_id: puzzle.id.clone(),
                err,
            })?;
        let puzzle_id = puzzle.id.clone();
        let puzzle = puzzle
            .parse()
            .map_err(|err| JudgeError::InvalidMoveList { puzzle_id, err })?;
        Ok(Self {
            puzzle,
            board,
            state: GameState::new(),
        })
    }

    /// Records the next move and judges it.
    pub fn play(&mut self, played: Move) -> Result<GradedTurn, JudgeError> {
        let turn = self.state.turn_count() + 1;
        if let Some(&pos) = played
            .actions()
            .iter()
            .find(|&&pos| !self.board.dims.contains(pos))
        {
            return Err(JudgeError::PlayedOffBoard { turn, pos });
        }
        trace!(turn, played = %played, "Playing move");
        self.state.play(played.clone());

        let verdict = if turn < self.puzzle.puzzle.start_index {
            Verdict::Setup
        } else if turn > self.puzzle.moves.len() {
            Verdict::Ungraded
        } else {
            match self.puzzle.is_last_move_correct(&self.state) {
                Ok(true) => Verdict::Correct,
                Ok(false) => Verdict::Incorrect,
                Err(err) => return Err(JudgeError::Grading { turn, err }),
            }
        };
        debug!(turn, ?verdict);
        Ok(GradedTurn {
            turn,
            played,
            by_solver: self.puzzle.puzzle.solver_plays_turn(turn),
            verdict,
        })
    }

    pub fn progress(&self) -> Result<PuzzleProgress, JudgeError> {
        self.puzzle
            .progress(&self.state)
            .map_err(|err| JudgeError::Grading {
                turn: self.state.turn_count(),
                err,
            })
    }
}

/// Parses the played moves: one move string per turn, separated by `;`.
pub fn parse_played_moves(s: &str) -> Result<Vec<Move>, JudgeError> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(';')
        .enumerate()
        .map(|(idx, move_str)| {
            move_str
                .parse::<Move>()
                .map_err(|err| JudgeError::InvalidPlayedMove { turn: idx + 1, err })
        })
        .collect()
}

/// The outcome of playing a sequence of moves through one puzzle.
#[derive(Clone, Debug)]
pub struct GradeReport {
    pub puzzle_id: String,
    pub turns: Vec<GradedTurn>,
    pub progress: PuzzleProgress,
}

/// Plays `moves` through `puzzle` from the start and judges every turn.
pub fn grade(
    puzzle: Puzzle,
    moves: &[Move],
    stop_on_incorrect_move: bool,
) -> Result<GradeReport, JudgeError> {
    let puzzle_id = puzzle.id.clone();
    let mut session = PuzzleSession::new(puzzle)?;
    let mut turns = Vec::with_capacity(moves.len());
    for m in moves {
        let graded = session.play(m.clone())?;
        let incorrect = graded.verdict == Verdict::Incorrect;
        turns.push(graded);
        if incorrect && stop_on_incorrect_move {
            break;
        }
    }
    Ok(GradeReport {
        puzzle_id,
        turns,
        progress: session.progress()?,
    })
}

#[cfg(test)]
mod tests {
    use wallwars::{BoardDims, BoardSettingsStandardNotation, Position};

    use super::*;

    fn puzzle(moves: &str, start_index: usize) -> Puzzle {
        Puzzle {
            id: String::from("test"),
            author: String::from("someone"),
            difficulty: 1,
            board_settings: BoardSettingsStandardNotation {
                dims: BoardDims::new(5, 5),
                start_pos: [String::from("c1"), String::from("c5")],
                goal_pos: [String::from("c5"), String::from("c1")],
            },
            creator_starts: true,
            play_as_creator: true,
            moves: String::from(moves),
            start_index,
        }
    }

    #[test]
    fn grades_every_turn() {
        let moves = parse_played_moves("c2;c4;b2v b2>").unwrap();
        let report = grade(puzzle("c2;c4,d5;b2> b2v", 2), &moves, false).unwrap();
        let verdicts: Vec<Verdict> = report.turns.iter().map(|t| t.verdict).collect();
        assert_eq!(verdicts, [Verdict::Setup, Verdict::Correct, Verdict::Correct]);
        assert_eq!(report.progress, PuzzleProgress::Solved);
        assert!(report.turns[0].by_solver);
        assert!(!report.turns[1].by_solver);
    }

    #[test]
    fn stops_on_first_miss() {
        let moves = parse_played_moves("c2;a1;b2v b2>").unwrap();
        let report = grade(puzzle("c2;c4;b2> b2v", 1), &moves, true).unwrap();
        assert_eq!(report.turns.len(), 2);
        assert_eq!(report.turns[1].verdict, Verdict::Incorrect);
        assert_eq!(report.progress, PuzzleProgress::Failed { turn: 2 });
    }

    #[test]
    fn moves_after_the_solution_are_ungraded() {
        let moves = parse_played_moves("c2;c4").unwrap();
        let report = grade(puzzle("c2", 1), &moves, false).unwrap();
        assert_eq!(report.turns[1].verdict, Verdict::Ungraded);
        assert_eq!(report.progress, PuzzleProgress::Solved);
    }

    #[test]
    fn rejects_moves_off_the_board() {
        let moves = parse_played_moves("e5;f6").unwrap();
        let err = grade(puzzle("e5;e4", 1), &moves, false).unwrap_err();
        assert!(matches!(
            err,
            JudgeError::PlayedOffBoard {
                turn: 2,
                pos: Position { row: 10, col: 10 }
            }
        ));
    }

    #[test]
    fn reports_broken_puzzles_and_moves() {
        assert!(matches!(
            PuzzleSession::new(puzzle("c2;;c3", 1)),
            Err(JudgeError::InvalidMoveList { .. })
        ));
        let mut broken = puzzle("c2", 1);
        broken.board_settings.start_pos[0] = String::from("c1v");
        assert!(matches!(
            PuzzleSession::new(broken),
            Err(JudgeError::InvalidBoardSettings { .. })
        ));
        assert!(matches!(
            parse_played_moves("c2;c2x"),
            Err(JudgeError::InvalidPlayedMove { turn: 2, .. })
        ));
        assert_eq!(parse_played_moves("  ").unwrap(), Vec::<Move>::new());
    }
}

use serde::{Deserialize, Serialize};

use crate::{
    decode_action, BoardDims, CellKind, InvalidBoardSettings, InvalidMoveList, Move, Position,
};

/// Board settings as puzzles store them: dimensions in squares and
/// start/goal squares in notation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSettingsStandardNotation {
    pub dims: BoardDims,
    pub start_pos: [String; 2],
    pub goal_pos: [String; 2],
}

/// Board settings in doubled-grid coordinates, as the rules engine uses them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSettings {
    pub dims: BoardDims,
    pub start_pos: [Position; 2],
    pub goal_pos: [Position; 2],
}

impl BoardSettingsStandardNotation {
    /// Decodes the start and goal squares and doubles the dimensions.
    ///
    /// Every start and goal must be a square on the board.
    pub fn to_internal(&self) -> Result<BoardSettings, InvalidBoardSettings> {
        if self.dims.rows == 0 || self.dims.cols == 0 {
            return Err(InvalidBoardSettings::EmptyBoard);
        }
        let dims = self
            .dims
            .to_internal()
            .ok_or(InvalidBoardSettings::TooLarge { dims: self.dims })?;
        let square = |field: &'static str, token: &str| -> Result<Position, InvalidBoardSettings> {
            let pos = decode_action(token)
                .map_err(|err| InvalidBoardSettings::InvalidNotation { field, err })?;
            if pos.cell_kind() != CellKind::Ground {
                return Err(InvalidBoardSettings::NotGround { field, pos });
            }
            if !dims.contains(pos) {
                return Err(InvalidBoardSettings::OutOfBounds { field, pos });
            }
            Ok(pos)
        };
        Ok(BoardSettings {
            dims,
            start_pos: [
                square("startPos[0]", &self.start_pos[0])?,
                square("startPos[1]", &self.start_pos[1])?,
            ],
            goal_pos: [
                square("goalPos[0]", &self.goal_pos[0])?,
                square("goalPos[1]", &self.goal_pos[1])?,
            ],
        })
    }
}

/// A puzzle as it is stored and transmitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub id: String,
    pub author: String,
    pub difficulty: u32,
    pub board_settings: BoardSettingsStandardNotation,
    /// Whether the puzzle's creator made the first move of the game.
    pub creator_starts: bool,
    /// Whether the solver plays the creator's side.
    pub play_as_creator: bool,
    /// The solution, see [`PuzzleMoveList::parse()`].
    pub moves: String,
    /// The first turn (1-based) that is graded. Earlier turns set up the position.
    pub start_index: usize,
}

impl Puzzle {
    pub fn move_list(&self) -> Result<PuzzleMoveList, InvalidMoveList> {
        PuzzleMoveList::parse(&self.moves)
    }

    pub fn board_settings(&self) -> Result<BoardSettings, InvalidBoardSettings> {
        self.board_settings.to_internal()
    }

    /// Whether the solver, rather than the opponent, makes the given 1-based turn.
    pub fn solver_plays_turn(&self, turn: usize) -> bool {
        let creator_moves = (turn % 2 == 1) == self.creator_starts;
        creator_moves == self.play_as_creator
    }

    /// Parses the move list once so it can be reused for every check.
    pub fn parse(self) -> Result<ParsedPuzzle, InvalidMoveList> {
        let moves = self.move_list()?;
        Ok(ParsedPuzzle {
            puzzle: self,
            moves,
        })
    }
}

/// The accepted moves of a puzzle, turn by turn.
///
/// Slot `i` holds the alternatives for turn `i + 1`. Every alternative in a
/// slot is equally correct; their order carries no meaning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleMoveList(pub Vec<Vec<Move>>);

impl PuzzleMoveList {
    /// Parses a move list such as `"e5,e5v;d4> c3,c3v"`.
    ///
    /// Turns are separated by `;`, alternatives within a turn by `,`, and each
    /// alternative is a move string. Empty turns or alternatives are errors.
    pub fn parse(s: &str) -> Result<Self, InvalidMoveList> {
        s.split(';')
            .enumerate()
            .map(|(slot, slot_str)| {
                slot_str
                    .split(',')
                    .enumerate()
                    .map(|(alternative, move_str)| {
                        move_str.parse::<Move>().map_err(|err| InvalidMoveList {
                            slot,
                            alternative,
                            err,
                        })
                    })
                    .collect::<Result<Vec<Move>, InvalidMoveList>>()
            })
            .collect::<Result<Vec<Vec<Move>>, InvalidMoveList>>()
            .map(PuzzleMoveList)
    }

    /// The alternatives for a 1-based turn.
    pub fn slot(&self, turn: usize) -> Option<&[Move]> {
        turn.checked_sub(1)
            .and_then(|idx| self.0.get(idx))
            .map(Vec::as_slice)
    }

    /// Number of turns covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A [`Puzzle`] together with its parsed move list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedPuzzle {
    pub puzzle: Puzzle,
    pub moves: PuzzleMoveList,
}

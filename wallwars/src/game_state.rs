use serde::{Deserialize, Serialize};

use crate::Move;

/// Read access to the moves of a game, as the puzzle validator needs it.
pub trait GameHistory {
    /// How many moves have been played so far.
    fn turn_count(&self) -> usize;

    /// The move played in the given turn, counting from 1.
    fn move_at(&self, turn: usize) -> Option<&Move>;
}

/// One entry of the move history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Empty for the initial entry, which stands for the starting position.
    pub actions: Move,
}

/// The move history of a game.
///
/// Entry `0` is the starting position and entry `n` holds the move of turn
/// `n`, so the history is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    move_history: Vec<HistoryEntry>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            move_history: vec![HistoryEntry {
                actions: Move(Vec::new()),
            }],
        }
    }

    pub fn from_moves(moves: impl IntoIterator<Item = Move>) -> Self {
        let mut state = Self::new();
        for m in moves {
            state.play(m);
        }
        state
    }

    /// Appends the move of the next turn. Legality is the rules engine's concern.
    pub fn play(&mut self, m: Move) {
        self.move_history.push(HistoryEntry { actions: m });
    }

    pub fn move_history(&self) -> &[HistoryEntry] {
        &self.move_history
    }
}

impl GameHistory for GameState {
    fn turn_count(&self) -> usize {
        self.move_history.len() - 1
    }

    fn move_at(&self, turn: usize) -> Option<&Move> {
        if turn == 0 {
            return None;
        }
        self.move_history.get(turn).map(|entry| &entry.actions)
    }
}

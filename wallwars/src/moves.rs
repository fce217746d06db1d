use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{decode_action, InvalidMove, MoveLengthError, Position};

/// Maximum number of actions a player takes in one turn.
pub const MAX_ACTIONS_PER_MOVE: usize = 2;

/// The actions a player takes in one turn, in the order they were taken.
///
/// A well-formed move has one or two actions: a token step or wall
/// placement, or two of them in any combination. Whether a move is legal
/// on a given board is not checked here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move(pub Vec<Position>);

impl Move {
    pub fn single(action: Position) -> Self {
        Self(vec![action])
    }

    pub fn double(first: Position, second: Position) -> Self {
        Self(vec![first, second])
    }

    pub fn actions(&self) -> &[Position] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Position>> for Move {
    fn from(actions: Vec<Position>) -> Self {
        Self(actions)
    }
}

/// Parses a move string: one or two action tokens separated by a single space.
///
/// Leading and trailing whitespace is ignored.
impl FromStr for Move {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InvalidMove::Empty);
        }
        let tokens: Vec<&str> = s.split(' ').collect();
        if tokens.len() > MAX_ACTIONS_PER_MOVE {
            return Err(InvalidMove::TooManyActions {
                count: tokens.len(),
            });
        }
        tokens
            .into_iter()
            .enumerate()
            .map(|(action_idx, token)| {
                decode_action(token).map_err(|err| InvalidMove::InvalidAction { action_idx, err })
            })
            .collect::<Result<Vec<Position>, InvalidMove>>()
            .map(Move)
    }
}

/// Writes the move in notation, falling back to raw coordinates for
/// positions the notation can't express.
impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for action in &self.0 {
            if !first {
                write!(f, " ")?;
            } else {
                first = false;
            }
            match action.to_notation() {
                Ok(token) => write!(f, "{}", token)?,
                Err(_) => write!(f, "{}", action)?,
            }
        }
        Ok(())
    }
}

fn check_len(m: &Move) -> Result<(), MoveLengthError> {
    match m.len() {
        1..=MAX_ACTIONS_PER_MOVE => Ok(()),
        len => Err(MoveLengthError { len }),
    }
}

/// Whether two moves are the same, treating the two actions of a move as unordered.
///
/// Both moves must have one or two actions. Moves of different lengths are
/// never the same.
pub fn same_move(m1: &Move, m2: &Move) -> Result<bool, MoveLengthError> {
    check_len(m1)?;
    check_len(m2)?;
    Ok(match (m1.actions(), m2.actions()) {
        ([a], [b]) => a == b,
        ([a1, a2], [b1, b2]) => (a1 == b1 && a2 == b2) || (a1 == b2 && a2 == b1),
        _ => false,
    })
}

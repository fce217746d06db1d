use serde::{Deserialize, Serialize};

/// A coordinate in the doubled grid.
///
/// Squares sit at even/even coordinates, wall slots between two squares at
/// even/odd or odd/even coordinates, and the intersections of wall slots at
/// odd/odd coordinates. A board of `H x W` squares therefore spans
/// `2H - 1` rows and `2W - 1` columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// What occupies a [`Position`], derived from the parity of its coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// A square that a player token may stand on.
    Ground,
    /// A slot between two squares where a wall segment may be built.
    Wall,
    /// The intersection of wall slots. Never occupied, built on or clicked.
    Pillar,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn cell_kind(&self) -> CellKind {
        cell_kind(*self)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

pub fn cell_kind(pos: Position) -> CellKind {
    match (pos.row % 2 == 1, pos.col % 2 == 1) {
        (false, false) => CellKind::Ground,
        (true, true) => CellKind::Pillar,
        _ => CellKind::Wall,
    }
}

/// Structural equality, the contract the board renderer relies on.
pub fn positions_equal(a: Position, b: Position) -> bool {
    a == b
}

/// Board dimensions, either in squares or in doubled-grid cells depending on
/// where they come from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct BoardDims {
    pub rows: usize,
    pub cols: usize,
}

impl BoardDims {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Converts dimensions counted in squares into the extent of the doubled grid.
    ///
    /// Each dimension `n` becomes `2n - 1`. Zero stays zero. Returns `None`
    /// if the doubled grid doesn't fit in a `usize`.
    pub fn to_internal(&self) -> Option<BoardDims> {
        Some(BoardDims {
            rows: self.rows.checked_mul(2)?.saturating_sub(1),
            cols: self.cols.checked_mul(2)?.saturating_sub(1),
        })
    }

    /// Whether `pos` lies on a doubled grid of these dimensions.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }
}

impl From<(usize, usize)> for BoardDims {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

impl From<BoardDims> for (usize, usize) {
    fn from(dims: BoardDims) -> Self {
        (dims.rows, dims.cols)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn classification_follows_parity(row: usize, col: usize) -> bool {
            let row = row % 1000;
            let col = col % 1000;
            let expected = match (row % 2, col % 2) {
                (0, 0) => CellKind::Ground,
                (1, 1) => CellKind::Pillar,
                _ => CellKind::Wall,
            };
            cell_kind(Position::new(row, col)) == expected
        }
    }

    #[test]
    fn cell_kinds_around_a_square() {
        assert_eq!(cell_kind(Position::new(8, 8)), CellKind::Ground);
        assert_eq!(cell_kind(Position::new(9, 8)), CellKind::Wall);
        assert_eq!(cell_kind(Position::new(8, 9)), CellKind::Wall);
        assert_eq!(cell_kind(Position::new(9, 9)), CellKind::Pillar);
        assert_eq!(Position::new(0, 0).cell_kind(), CellKind::Ground);
    }

    #[test]
    fn positions_equal_is_structural() {
        assert!(positions_equal(Position::new(2, 3), Position::from((2, 3))));
        assert!(!positions_equal(Position::new(2, 3), Position::new(3, 2)));
    }

    #[test]
    fn dims_are_doubled_minus_one() {
        assert_eq!(BoardDims::new(9, 9).to_internal(), Some(BoardDims::new(17, 17)));
        assert_eq!(BoardDims::new(10, 12).to_internal(), Some(BoardDims::new(19, 23)));
        assert_eq!(BoardDims::new(1, 1).to_internal(), Some(BoardDims::new(1, 1)));
        assert_eq!(BoardDims::new(0, 3).to_internal(), Some(BoardDims::new(0, 5)));
    }

    #[test]
    fn doubling_huge_dims_fails() {
        assert_eq!(BoardDims::new(usize::MAX / 2 + 1, 9).to_internal(), None);
        assert_eq!(BoardDims::new(9, usize::MAX).to_internal(), None);
        assert_eq!(
            BoardDims::new(usize::MAX / 2, 1).to_internal(),
            Some(BoardDims::new(usize::MAX - 2, 1))
        );
    }

    #[test]
    fn contains_respects_bounds() {
        let dims = BoardDims::new(3, 5).to_internal().unwrap();
        assert!(dims.contains(Position::new(4, 8)));
        assert!(!dims.contains(Position::new(5, 0)));
        assert!(!dims.contains(Position::new(0, 9)));
    }

    #[test]
    fn dims_serialize_as_pair() {
        let dims: BoardDims = serde_json::from_str("[9, 8]").unwrap();
        assert_eq!(dims, BoardDims::new(9, 8));
        assert_eq!(serde_json::to_string(&dims).unwrap(), "[9,8]");
    }
}

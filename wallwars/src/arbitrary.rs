use quickcheck::{Arbitrary, Gen};

use crate::Position;

/// A ground or wall position that the notation can express.
#[derive(Clone, Copy, Debug)]
pub struct NotatablePosition(pub Position);

impl Arbitrary for NotatablePosition {
    fn arbitrary(g: &mut Gen) -> Self {
        let row = 2 * (u8::arbitrary(g) % 10) as usize;
        let col = 2 * (u8::arbitrary(g) % 26) as usize;
        let pos = match u8::arbitrary(g) % 3 {
            0 => Position { row, col },
            1 => Position { row: row + 1, col },
            _ => Position { row, col: col + 1 },
        };
        NotatablePosition(pos)
    }
}

impl Arbitrary for Position {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            row: (u8::arbitrary(g) % 24) as usize,
            col: (u8::arbitrary(g) % 24) as usize,
        }
    }
}
